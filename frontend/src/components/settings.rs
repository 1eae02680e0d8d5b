use leptos::prelude::*;
use zpire_shared::SubmitOutcome;
use zpire_shared::forms::settings::FONT_SIZES;
use zpire_shared::forms::{SettingsForm, SettingsTab};

use super::form_state::{FormState, SavedNotice, log_snapshot};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let form = FormState::<SettingsForm>::new();
    let notice = SavedNotice::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(SubmitOutcome::Saved) = form.submit(log_snapshot) {
            notice.show();
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            {notice.toast("Settings saved")}
            <h1 class="text-4xl font-bold mb-8">"Settings"</h1>
            {form.tab_bar()}

            <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body space-y-4">
                    {move || match form.active_tab() {
                        SettingsTab::Account => view! {
                            <div class="space-y-4">
                                {form.text_input("name", "Full Name", "text")}
                                {form.text_input("email", "Email", "email")}
                                {form.text_input("phone", "Phone", "tel")}
                            </div>
                        }
                        .into_any(),
                        SettingsTab::Notifications => view! {
                            <div class="space-y-2">
                                {form.toggle_switch("emailNotifications", "Email notifications")}
                                {form.toggle_switch("mealReminders", "Meal reminders")}
                                {form.toggle_switch("healthCheckInReminders", "Daily health check-in reminders")}
                            </div>
                        }
                        .into_any(),
                        SettingsTab::Privacy => view! {
                            <div class="space-y-2">
                                {form.toggle_switch("shareHealthData", "Share health data with my care provider")}
                                {form.toggle_switch("shareActivityData", "Share activity data")}
                            </div>
                        }
                        .into_any(),
                        SettingsTab::Accessibility => view! {
                            <div class="space-y-2">
                                {form.select("fontSize", "Font Size", FONT_SIZES)}
                                {form.toggle_switch("highContrast", "High contrast mode")}
                                {form.toggle_switch("reducedMotion", "Reduce motion")}
                            </div>
                        }
                        .into_any(),
                    }}
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary">"Save Settings"</button>
                    </div>
                </div>
            </form>
        </div>
    }
}
