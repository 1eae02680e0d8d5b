//! 表单状态管理模块
//!
//! 把 `FormWizard` 放进 `RwSignal`，负责：
//! - 字段读写与标签页切换 (全部委托给向导)
//! - 常用输入控件的渲染与绑定
//! - 提交结果的日志输出

use leptos::prelude::*;
use zpire_shared::wizard::{EntryId, FormDraft, FormSpec, FormWizard, SubmitOutcome};
use zpire_shared::{FormSnapshot, log_info, log_warn};

/// 分段记录的输入定义：(字段, 标签, 输入类型)
pub type FieldDef = (&'static str, &'static str, &'static str);

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
pub struct FormState<F: FormSpec + Send + Sync + 'static>
where
    F::Tab: Send + Sync,
{
    wizard: RwSignal<FormWizard<F>>,
}

impl<F> Clone for FormState<F>
where
    F: FormSpec + Send + Sync + 'static,
    F::Tab: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FormState<F>
where
    F: FormSpec + Send + Sync + 'static,
    F::Tab: Send + Sync,
{
}

impl<F> FormState<F>
where
    F: FormSpec + Send + Sync + 'static,
    F::Tab: Send + Sync,
{
    pub fn new() -> Self {
        Self::from_wizard(FormWizard::new())
    }

    pub fn from_wizard(wizard: FormWizard<F>) -> Self {
        Self {
            wizard: RwSignal::new(wizard),
        }
    }

    // --- 读取 (响应式) ---

    pub fn text(&self, name: &'static str) -> String {
        self.wizard.with(|w| w.draft().text(name).to_string())
    }

    pub fn flag(&self, name: &'static str) -> bool {
        self.wizard.with(|w| w.draft().flag(name))
    }

    pub fn contains(&self, name: &'static str, item: &str) -> bool {
        self.wizard
            .with(|w| w.draft().list(name).iter().any(|v| v == item))
    }

    pub fn with_draft<R>(&self, f: impl FnOnce(&FormDraft) -> R) -> R {
        self.wizard.with(|w| f(w.draft()))
    }

    pub fn active_tab(&self) -> F::Tab {
        self.wizard.with(|w| w.active_tab())
    }

    pub fn can_enter(&self, tab: F::Tab) -> bool {
        self.wizard.with(|w| w.can_enter(tab))
    }

    pub fn error_message(&self) -> Option<String> {
        self.wizard.with(|w| w.error().map(|e| e.message.clone()))
    }

    /// 分段内所有条目的标识
    pub fn entry_ids(&self, section: &'static str) -> Vec<EntryId> {
        self.wizard
            .with(|w| w.draft().section(section).iter().map(|e| e.id).collect())
    }

    pub fn entry_field(&self, section: &'static str, id: EntryId, field: &'static str) -> String {
        self.wizard.with(|w| {
            w.draft()
                .section(section)
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.get(field).to_string())
                .unwrap_or_default()
        })
    }

    // --- 修改 ---

    pub fn set_text(&self, name: &'static str, value: String) {
        self.wizard.update(|w| w.set_field(name, value));
    }

    pub fn set_flag(&self, name: &'static str, value: bool) {
        self.wizard.update(|w| w.set_field(name, value));
    }

    pub fn toggle(&self, name: &'static str, item: &str) {
        self.wizard.update(|w| w.toggle_item(name, item));
    }

    /// 切换标签页；被锁定的标签页保持不变
    pub fn select_tab(&self, tab: F::Tab) {
        let result = self.wizard.try_update(|w| w.set_active_tab(tab));
        if let Some(Err(e)) = result {
            log_warn!("[Form] {}: {}", F::NAME, e);
        }
    }

    pub fn add_entry(&self, section: &'static str) {
        self.wizard.update(|w| {
            w.add_repeatable_entry(section);
        });
    }

    pub fn remove_entry(&self, section: &'static str, id: EntryId) {
        self.wizard.update(|w| {
            w.remove_repeatable_entry(section, id);
        });
    }

    pub fn set_entry_field(&self, section: &'static str, id: EntryId, field: &'static str, value: String) {
        self.wizard.update(|w| {
            w.set_entry_field(section, id, field, &value);
        });
    }

    /// 直接操作向导 (用于表单特有的规则)
    pub fn update(&self, f: impl FnOnce(&mut FormWizard<F>)) {
        self.wizard.update(f);
    }

    /// 提交当前标签页
    ///
    /// 保存回调只在校验通过且该标签页需要保存时调用。
    pub fn submit(&self, on_save: impl FnOnce(FormSnapshot<F::Tab>)) -> Option<SubmitOutcome<F::Tab>> {
        self.wizard.try_update(|w| w.submit(on_save))
    }

    // --- 控件 ---

    pub fn text_input(self, name: &'static str, label: &'static str, kind: &'static str) -> impl IntoView {
        view! {
            <div class="form-control">
                <label for=name class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=name
                    type=kind
                    on:input=move |ev| self.set_text(name, event_target_value(&ev))
                    prop:value=move || self.text(name)
                    class="input input-bordered w-full"
                />
            </div>
        }
    }

    pub fn textarea(self, name: &'static str, label: &'static str) -> impl IntoView {
        view! {
            <div class="form-control">
                <label for=name class="label">
                    <span class="label-text">{label}</span>
                </label>
                <textarea
                    id=name
                    rows="3"
                    on:input=move |ev| self.set_text(name, event_target_value(&ev))
                    prop:value=move || self.text(name)
                    class="textarea textarea-bordered w-full"
                ></textarea>
            </div>
        }
    }

    /// 下拉选择，`options` 为 (value, label)
    pub fn select(
        self,
        name: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> impl IntoView {
        view! {
            <div class="form-control">
                <label for=name class="label">
                    <span class="label-text">{label}</span>
                </label>
                <select
                    id=name
                    class="select select-bordered w-full"
                    on:change=move |ev| self.set_text(name, event_target_value(&ev))
                    prop:value=move || self.text(name)
                >
                    {options
                        .iter()
                        .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    }

    /// 下拉选择，选项值即显示文本；首项为空白占位
    pub fn select_list(
        self,
        name: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> impl IntoView {
        view! {
            <div class="form-control">
                <label for=name class="label">
                    <span class="label-text">{label}</span>
                </label>
                <select
                    id=name
                    class="select select-bordered w-full"
                    on:change=move |ev| self.set_text(name, event_target_value(&ev))
                    prop:value=move || self.text(name)
                >
                    <option value="">"Select..."</option>
                    {values
                        .iter()
                        .map(|value| view! { <option value=*value>{*value}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    }

    pub fn toggle_switch(self, name: &'static str, label: &'static str) -> impl IntoView {
        view! {
            <label class="label cursor-pointer justify-start gap-4">
                <input
                    type="checkbox"
                    class="toggle toggle-primary"
                    prop:checked=move || self.flag(name)
                    on:change=move |ev| self.set_flag(name, event_target_checked(&ev))
                />
                <span class="label-text">{label}</span>
            </label>
        }
    }

    /// 多选框列表
    pub fn checkbox_group(
        self,
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> impl IntoView {
        view! {
            <div class="form-control">
                <span class="label-text mb-2">{label}</span>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-2">
                    {options
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <label class="label cursor-pointer justify-start gap-2">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-primary"
                                        prop:checked=move || self.contains(name, option)
                                        on:change=move |_| self.toggle(name, option)
                                    />
                                    <span class="label-text">{option}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    }

    /// 可重复分段：每条记录一张卡片，只剩一条时删除按钮禁用
    pub fn repeatable_section(
        self,
        section: &'static str,
        title: &'static str,
        add_label: &'static str,
        inputs: &'static [FieldDef],
    ) -> impl IntoView {
        let only_one = move || self.entry_ids(section).len() <= 1;

        view! {
            <div class="space-y-4">
                <h3 class="text-xl font-semibold">{title}</h3>
                <For
                    each=move || self.entry_ids(section)
                    key=|id| *id
                    children=move |id| {
                        view! {
                            <div class="card bg-base-200 p-4">
                                <div class="flex justify-end">
                                    <button
                                        type="button"
                                        class="btn btn-ghost btn-sm text-error"
                                        disabled=only_one
                                        on:click=move |_| self.remove_entry(section, id)
                                    >
                                        "Remove"
                                    </button>
                                </div>
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                    {inputs
                                        .iter()
                                        .map(|(field, label, kind)| {
                                            let field = *field;
                                            view! {
                                                <div class="form-control">
                                                    <label class="label">
                                                        <span class="label-text">{*label}</span>
                                                    </label>
                                                    <input
                                                        type=*kind
                                                        class="input input-bordered w-full"
                                                        prop:value=move || self.entry_field(section, id, field)
                                                        on:input=move |ev| {
                                                            self.set_entry_field(section, id, field, event_target_value(&ev))
                                                        }
                                                    />
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    }
                />
                <button
                    type="button"
                    class="btn btn-outline btn-primary btn-sm"
                    on:click=move |_| self.add_entry(section)
                >
                    "+ "
                    {add_label}
                </button>
            </div>
        }
    }

    /// 标签页导航条，锁定的标签页显示为禁用
    pub fn tab_bar(self) -> impl IntoView {
        view! {
            <div role="tablist" class="tabs tabs-boxed mb-6">
                {F::tabs()
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || {
                                    if self.active_tab() == tab { "tab tab-active" } else { "tab" }
                                }
                                disabled=move || !self.can_enter(tab)
                                on:click=move |_| self.select_tab(tab)
                            >
                                {F::tab_label(tab)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    }

    /// 校验错误提示
    pub fn error_alert(self) -> impl IntoView {
        view! {
            <Show when=move || self.error_message().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{move || self.error_message().unwrap_or_default()}</span>
                </div>
            </Show>
        }
    }
}

impl<F> Default for FormState<F>
where
    F: FormSpec + Send + Sync + 'static,
    F::Tab: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

/// 默认保存回调：把快照以 JSON 写入控制台
pub fn log_snapshot<T: serde::Serialize>(snapshot: FormSnapshot<T>) {
    match serde_json_wasm::to_string(&snapshot) {
        Ok(json) => log_info!("[Form] {} snapshot: {}", snapshot.form, json),
        Err(e) => log_warn!("[Form] {} snapshot not serializable: {}", snapshot.form, e),
    }
}

/// 保存成功提示，3 秒后自动消失
#[derive(Clone, Copy)]
pub struct SavedNotice {
    visible: RwSignal<bool>,
}

impl SavedNotice {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        let visible = self.visible;
        visible.set(true);
        set_timeout(move || visible.set(false), std::time::Duration::from_secs(3));
    }

    pub fn toast(self, message: &'static str) -> impl IntoView {
        view! {
            <Show when=move || self.visible.get()>
                <div class="toast toast-top toast-end z-50">
                    <div class="alert alert-success shadow-lg">
                        <span>{message}</span>
                    </div>
                </div>
            </Show>
        }
    }
}

impl Default for SavedNotice {
    fn default() -> Self {
        Self::new()
    }
}
