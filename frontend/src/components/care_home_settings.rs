use leptos::prelude::*;
use zpire_shared::SubmitOutcome;
use zpire_shared::forms::care_home_settings::{RETENTION_PERIODS, STAFF};
use zpire_shared::forms::{CareHomeSettingsForm, CareHomeSettingsTab};

use super::form_state::{FieldDef, FormState, SavedNotice, log_snapshot};

const STAFF_INPUTS: &[FieldDef] = &[
    ("name", "Name", "text"),
    ("role", "Role", "text"),
    ("email", "Email", "email"),
];

#[component]
pub fn CareHomeSettingsPage() -> impl IntoView {
    let form = FormState::<CareHomeSettingsForm>::new();
    let notice = SavedNotice::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(SubmitOutcome::Saved) = form.submit(log_snapshot) {
            notice.show();
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-5xl">
            {notice.toast("Facility settings saved")}
            <h1 class="text-4xl font-bold mb-8">"Care Home Settings"</h1>
            {form.tab_bar()}

            <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body space-y-4">
                    {move || match form.active_tab() {
                        CareHomeSettingsTab::Facility => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {form.text_input("facilityName", "Facility Name", "text")}
                                {form.text_input("phone", "Phone", "tel")}
                                {form.text_input("address", "Address", "text")}
                                {form.text_input("email", "Email", "email")}
                            </div>
                        }
                        .into_any(),
                        CareHomeSettingsTab::Meals => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {form.text_input("breakfastTime", "Breakfast", "time")}
                                {form.text_input("lunchTime", "Lunch", "time")}
                                {form.text_input("dinnerTime", "Dinner", "time")}
                                {form.text_input("snackTime", "Afternoon Snack", "time")}
                            </div>
                        }
                        .into_any(),
                        CareHomeSettingsTab::Notifications => view! {
                            <div class="space-y-2">
                                {form.toggle_switch("alertEmails", "Email alerts for nutrition concerns")}
                                {form.toggle_switch("dailyReports", "Daily summary reports")}
                                {form.toggle_switch("nutritionAlerts", "Resident nutrition alerts")}
                                {form.toggle_switch("staffNotifications", "Staff notifications")}
                            </div>
                        }
                        .into_any(),
                        CareHomeSettingsTab::Data => view! {
                            <div class="space-y-2">
                                {form.select("dataRetentionPeriod", "Data Retention Period", RETENTION_PERIODS)}
                                {form.toggle_switch("automaticBackups", "Automatic backups")}
                                {form.toggle_switch("anonymizeData", "Anonymize data in reports")}
                            </div>
                        }
                        .into_any(),
                        CareHomeSettingsTab::Staff => {
                            form.repeatable_section(STAFF, "Staff Members", "Add Staff Member", STAFF_INPUTS)
                                .into_any()
                        }
                    }}
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary">"Save Settings"</button>
                    </div>
                </div>
            </form>
        </div>
    }
}
