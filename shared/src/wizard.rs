//! 多标签页表单向导
//!
//! 把表单拆成两部分：
//! - `FormDraft`: 字段名到值的映射 + 可重复的子记录分段，只能通过字段级 setter 修改
//! - `FormSpec`: 每个具体表单的标签页、默认值、校验规则和提交后行为
//!
//! 校验失败只在向导内部记录错误，草稿保持不变，不会向外抛出。

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};
use crate::{log_info, log_warn};

// =========================================================
// 草稿数据
// =========================================================

/// 字段值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Flag(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::List(v)
    }
}

/// 可重复分段中条目的标识，在同一个向导会话内唯一
pub type EntryId = u64;

/// 可重复分段中的一条子记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub fields: BTreeMap<String, String>,
}

impl Entry {
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionTemplate {
    fields: &'static [&'static str],
}

/// 表单草稿
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    fields: BTreeMap<String, FieldValue>,
    sections: BTreeMap<String, Vec<Entry>>,
    #[serde(skip)]
    templates: BTreeMap<String, SectionTemplate>,
    #[serde(skip)]
    next_entry_id: EntryId,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_list(self, name: &str) -> Self {
        self.with(name, Vec::<String>::new())
    }

    /// 声明一个可重复分段，初始带一条空记录
    pub fn with_section(mut self, name: &str, fields: &'static [&'static str]) -> Self {
        self.templates
            .insert(name.to_string(), SectionTemplate { fields });
        self.sections.insert(name.to_string(), Vec::new());
        self.push_entry(name, &[]);
        self
    }

    /// 声明一个可重复分段，并用给定记录初始化
    pub fn with_section_entries(
        mut self,
        name: &str,
        fields: &'static [&'static str],
        rows: &[&[(&str, &str)]],
    ) -> Self {
        self.templates
            .insert(name.to_string(), SectionTemplate { fields });
        self.sections.insert(name.to_string(), Vec::new());
        for row in rows {
            self.push_entry(name, row);
        }
        if self.section(name).is_empty() {
            self.push_entry(name, &[]);
        }
        self
    }

    // --- Readers ---

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// 文本字段，缺失或类型不符时返回空串
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(v)) => v,
            _ => "",
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn list(&self, name: &str) -> &[String] {
        match self.fields.get(name) {
            Some(FieldValue::List(v)) => v,
            _ => &[],
        }
    }

    pub fn section(&self, name: &str) -> &[Entry] {
        self.sections.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    // --- Field-level setters ---

    fn set(&mut self, name: &str, value: FieldValue) {
        self.fields.insert(name.to_string(), value);
    }

    fn toggle_list_item(&mut self, name: &str, item: &str) {
        let mut list = self.list(name).to_vec();
        if let Some(pos) = list.iter().position(|v| v == item) {
            list.remove(pos);
        } else {
            list.push(item.to_string());
        }
        self.set(name, FieldValue::List(list));
    }

    fn push_entry(&mut self, section: &str, values: &[(&str, &str)]) -> Option<EntryId> {
        let template = self.templates.get(section)?.clone();
        self.next_entry_id += 1;
        let id = self.next_entry_id;

        let mut fields: BTreeMap<String, String> = template
            .fields
            .iter()
            .map(|f| (f.to_string(), String::new()))
            .collect();
        for (k, v) in values {
            fields.insert(k.to_string(), v.to_string());
        }

        self.sections
            .entry(section.to_string())
            .or_default()
            .push(Entry { id, fields });
        Some(id)
    }

    fn remove_entry(&mut self, section: &str, id: EntryId) -> bool {
        let Some(entries) = self.sections.get_mut(section) else {
            return false;
        };
        // 至少保留一条记录
        if entries.len() <= 1 {
            return false;
        }
        let before = entries.len();
        entries.retain(|e| e.id != id);
        entries.len() != before
    }

    fn set_entry_field(&mut self, section: &str, id: EntryId, field: &str, value: &str) -> bool {
        let allowed = self
            .templates
            .get(section)
            .is_some_and(|t| t.fields.contains(&field));
        if !allowed {
            return false;
        }
        match self
            .sections
            .get_mut(section)
            .and_then(|entries| entries.iter_mut().find(|e| e.id == id))
        {
            Some(entry) => {
                entry.fields.insert(field.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }
}

// =========================================================
// 表单定义
// =========================================================

/// 提交成功后的行为
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction<T> {
    /// 不保存，切换到下一个标签页
    Advance(T),
    /// 保存快照，停留在当前标签页
    SaveAndStay,
    /// 保存快照，并把向导重置为初始状态
    SaveAndReset,
}

/// 具体表单的定义
pub trait FormSpec {
    type Tab: Copy + Eq + Debug + Serialize + 'static;

    /// 表单名称 (用于日志和快照)
    const NAME: &'static str;

    fn tabs() -> &'static [Self::Tab];

    fn tab_label(tab: Self::Tab) -> &'static str;

    fn initial_tab() -> Self::Tab {
        Self::tabs()[0]
    }

    fn initial_draft() -> FormDraft;

    /// 提交当前标签页前的校验
    fn validate(_tab: Self::Tab, _draft: &FormDraft) -> FormResult<()> {
        Ok(())
    }

    /// 切换到某个标签页前的检查 (用于需要前置步骤的向导)
    fn can_enter(_tab: Self::Tab, _draft: &FormDraft) -> FormResult<()> {
        Ok(())
    }

    fn on_submit(_tab: Self::Tab) -> SubmitAction<Self::Tab> {
        SubmitAction::SaveAndStay
    }
}

/// 交给保存回调的不可变快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot<T> {
    pub form: &'static str,
    pub tab: T,
    pub draft: FormDraft,
}

/// 提交结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Saved,
    Advanced(T),
    Rejected(FormError),
}

// =========================================================
// 向导
// =========================================================

/// 多标签页表单向导
///
/// 草稿由向导独占，跨标签页切换时保留；提交或离开页面后丢弃。
#[derive(Debug, Clone)]
pub struct FormWizard<F: FormSpec> {
    active_tab: F::Tab,
    draft: FormDraft,
    error: Option<FormError>,
    _spec: PhantomData<F>,
}

impl<F: FormSpec> FormWizard<F> {
    pub fn new() -> Self {
        Self::with_draft(F::initial_draft())
    }

    pub fn with_draft(draft: FormDraft) -> Self {
        Self {
            active_tab: F::initial_tab(),
            draft,
            error: None,
            _spec: PhantomData,
        }
    }

    pub fn active_tab(&self) -> F::Tab {
        self.active_tab
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// 替换一个字段的值；若当前错误指向该字段则一并清除
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.draft.set(name, value.into());
        self.clear_error_for(name);
    }

    /// 勾选框列表：存在则移除，不存在则追加
    pub fn toggle_item(&mut self, name: &str, item: &str) {
        self.draft.toggle_list_item(name, item);
        self.clear_error_for(name);
    }

    /// 切换标签页，不修改草稿
    pub fn set_active_tab(&mut self, tab: F::Tab) -> FormResult<()> {
        F::can_enter(tab, &self.draft)?;
        self.active_tab = tab;
        Ok(())
    }

    pub fn can_enter(&self, tab: F::Tab) -> bool {
        F::can_enter(tab, &self.draft).is_ok()
    }

    /// 追加一条空记录，返回新记录的标识；分段不存在时返回 None
    pub fn add_repeatable_entry(&mut self, section: &str) -> Option<EntryId> {
        self.draft.push_entry(section, &[])
    }

    /// 删除一条记录；只剩一条时为空操作
    pub fn remove_repeatable_entry(&mut self, section: &str, id: EntryId) -> bool {
        self.draft.remove_entry(section, id)
    }

    pub fn set_entry_field(&mut self, section: &str, id: EntryId, field: &str, value: &str) -> bool {
        self.draft.set_entry_field(section, id, field, value)
    }

    /// 提交当前标签页
    ///
    /// 校验通过时根据 `FormSpec::on_submit` 保存快照 / 切换标签页 / 重置；
    /// 校验失败时记录错误并保留草稿。
    pub fn submit(&mut self, on_save: impl FnOnce(FormSnapshot<F::Tab>)) -> SubmitOutcome<F::Tab> {
        if let Err(e) = F::validate(self.active_tab, &self.draft) {
            log_warn!("[Form] {} rejected: {}", F::NAME, e);
            self.error = Some(e.clone());
            return SubmitOutcome::Rejected(e);
        }
        self.error = None;

        match F::on_submit(self.active_tab) {
            SubmitAction::Advance(next) => {
                self.active_tab = next;
                SubmitOutcome::Advanced(next)
            }
            action => {
                on_save(FormSnapshot {
                    form: F::NAME,
                    tab: self.active_tab,
                    draft: self.draft.clone(),
                });
                log_info!("[Form] {} saved.", F::NAME);
                if action == SubmitAction::SaveAndReset {
                    self.reset();
                }
                SubmitOutcome::Saved
            }
        }
    }

    /// 丢弃草稿和错误，回到初始标签页
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn clear_error_for(&mut self, name: &str) {
        if self.error.as_ref().is_some_and(|e| e.is_for(name)) {
            self.error = None;
        }
    }
}

impl<F: FormSpec> Default for FormWizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// 必填字段校验辅助函数
pub fn require_text(draft: &FormDraft, field: &str, label: &str) -> FormResult<()> {
    if draft.text(field).trim().is_empty() {
        Err(FormError::missing_field(field, label))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests;
