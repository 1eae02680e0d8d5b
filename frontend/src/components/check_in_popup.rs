//! 每日健康打卡弹窗

use leptos::prelude::*;
use zpire_shared::SubmitOutcome;
use zpire_shared::forms::CheckInForm;
use zpire_shared::forms::check_in::{
    APPETITE, APPETITE_OPTIONS, FEELING, FEELING_OPTIONS, SYMPTOM_OPTIONS, SYMPTOMS, is_complete,
    toggle_symptom,
};

use crate::components::form_state::{FormState, log_snapshot};
use crate::components::icons::Close;

/// 打卡弹窗
///
/// 关闭按钮和成功提交都会调用 `on_close`。
#[component]
pub fn CheckInPopup(on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    let form = FormState::<CheckInForm>::new();

    let complete = move || form.with_draft(is_complete);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(SubmitOutcome::Saved) = form.submit(log_snapshot) {
            on_close();
        }
    };

    let choice_class = |selected: bool| {
        if selected {
            "btn btn-primary btn-outline btn-active h-auto py-3 flex-col"
        } else {
            "btn btn-outline h-auto py-3 flex-col"
        }
    };

    view! {
        <div class="modal modal-open">
            <div class="modal-box max-w-2xl">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold">"How are you feeling today?"</h2>
                    <button type="button" class="btn btn-ghost btn-circle" on:click=move |_| on_close()>
                        <Close class="h-6 w-6" />
                    </button>
                </div>

                <form class="space-y-6" on:submit=on_submit>
                    {form.error_alert()}

                    <div>
                        <h3 class="text-xl font-semibold mb-4">"Overall, how are you feeling?"</h3>
                        <div class="grid grid-cols-5 gap-2">
                            {FEELING_OPTIONS
                                .iter()
                                .map(|(value, label, emoji)| {
                                    let value = *value;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || choice_class(form.text(FEELING) == value)
                                            on:click=move |_| form.set_text(FEELING, value.to_string())
                                        >
                                            <span class="text-3xl">{*emoji}</span>
                                            <span class="text-lg">{*label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-xl font-semibold mb-4">"Are you experiencing any symptoms?"</h3>
                        <div class="grid grid-cols-2 gap-2">
                            {SYMPTOM_OPTIONS
                                .iter()
                                .map(|symptom| {
                                    let symptom = *symptom;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || choice_class(form.contains(SYMPTOMS, symptom))
                                            on:click=move |_| form.update(|w| toggle_symptom(w, symptom))
                                        >
                                            {symptom}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-xl font-semibold mb-4">"How is your appetite today?"</h3>
                        <div class="grid grid-cols-4 gap-2">
                            {APPETITE_OPTIONS
                                .iter()
                                .map(|(value, label)| {
                                    let value = *value;
                                    view! {
                                        <button
                                            type="button"
                                            class=move || choice_class(form.text(APPETITE) == value)
                                            on:click=move |_| form.set_text(APPETITE, value.to_string())
                                        >
                                            {*label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <button type="submit" class="btn btn-primary btn-lg w-full" disabled=move || !complete()>
                        "Submit"
                    </button>
                </form>
            </div>
        </div>
    }
}
