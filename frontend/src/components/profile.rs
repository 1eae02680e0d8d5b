use leptos::prelude::*;
use zpire_shared::SubmitOutcome;
use zpire_shared::forms::profile::BASIC_FIELDS;
use zpire_shared::forms::{ProfileForm, ProfileTab};

use super::form_state::{FormState, SavedNotice, log_snapshot};
use super::medical_records_form::MedicalRecordsForm;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let form = FormState::<ProfileForm>::new();
    let notice = SavedNotice::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(SubmitOutcome::Saved) = form.submit(log_snapshot) {
            notice.show();
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            {notice.toast("Profile saved")}
            <h1 class="text-4xl font-bold mb-8">"My Profile"</h1>
            {form.tab_bar()}

            <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body space-y-4">
                    {form.error_alert()}
                    {move || match form.active_tab() {
                        ProfileTab::Basic => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {BASIC_FIELDS
                                    .iter()
                                    .map(|(name, label)| {
                                        let kind = if *name == "birthday" { "date" } else { "text" };
                                        form.text_input(*name, *label, kind)
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                        ProfileTab::Medical => view! { <MedicalRecordsForm form=form /> }.into_any(),
                    }}
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary">"Save Profile"</button>
                    </div>
                </div>
            </form>
        </div>
    }
}
