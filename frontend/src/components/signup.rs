use leptos::prelude::*;
use zpire_shared::SubmitOutcome;
use zpire_shared::forms::signup::{
    ALLERGY_OPTIONS, CONFIRM_PASSWORD, DATE_OF_BIRTH, DIETARY_OPTIONS, DIETARY_RESTRICTIONS, EMAIL,
    FIRST_NAME, FOOD_ALLERGIES, GENDER, HEIGHT, LAST_NAME, MOBILITY_LEVEL, MOBILITY_LEVELS,
    PASSWORD, USER_TYPE, USER_TYPE_CARETAKER, USER_TYPE_ELDERLY, WEIGHT,
};
use zpire_shared::forms::{SignUpForm, SignUpTab};

use super::form_state::{FormState, log_snapshot};
use super::medical_records_form::MedicalRecordsForm;
use crate::web::router::{Link, use_navigate};

const USER_TYPES: &[(&str, &str)] = &[
    (USER_TYPE_ELDERLY, "I am an elderly individual"),
    (USER_TYPE_CARETAKER, "I am a caretaker"),
];

const GENDERS: &[(&str, &str)] = &[
    ("", "Select..."),
    ("female", "Female"),
    ("male", "Male"),
    ("other", "Other"),
    ("preferNotToSay", "Prefer not to say"),
];

/// 注册向导：基础信息校验通过后才能进入病历标签页
#[component]
pub fn SignUpPage() -> impl IntoView {
    let form = FormState::<SignUpForm>::new();
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // 第一步只切换标签页，最终提交后回到落地页
        if let Some(SubmitOutcome::Saved) = form.submit(log_snapshot) {
            navigate("/");
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            <Link to="/" class="link link-primary">"← Back to Home"</Link>
            <h1 class="text-4xl font-bold my-6">"Create Your Account"</h1>
            {form.tab_bar()}

            <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body space-y-4">
                    {form.error_alert()}
                    {move || match form.active_tab() {
                        SignUpTab::Basic => view! {
                            <div class="space-y-4">
                                {form.select(USER_TYPE, "Account Type", USER_TYPES)}
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                    {form.text_input(FIRST_NAME, "First Name *", "text")}
                                    {form.text_input(LAST_NAME, "Last Name", "text")}
                                    {form.text_input(EMAIL, "Email *", "email")}
                                    {form.text_input(DATE_OF_BIRTH, "Date of Birth", "date")}
                                    {form.text_input(PASSWORD, "Password *", "password")}
                                    {form.text_input(CONFIRM_PASSWORD, "Confirm Password *", "password")}
                                    {form.select(GENDER, "Gender", GENDERS)}
                                    {form.select_list(MOBILITY_LEVEL, "Mobility Level", MOBILITY_LEVELS)}
                                    {form.text_input(HEIGHT, "Height (cm)", "number")}
                                    {form.text_input(WEIGHT, "Weight (kg)", "number")}
                                </div>
                                {form.checkbox_group(DIETARY_RESTRICTIONS, "Dietary Restrictions", DIETARY_OPTIONS)}
                                {form.checkbox_group(FOOD_ALLERGIES, "Food Allergies", ALLERGY_OPTIONS)}
                            </div>
                        }
                        .into_any(),
                        SignUpTab::Medical => view! { <MedicalRecordsForm form=form /> }.into_any(),
                    }}
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary">
                            {move || match form.active_tab() {
                                SignUpTab::Basic => "Continue to Medical Records",
                                SignUpTab::Medical => "Create Account",
                            }}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
