//! 病历表单组件
//!
//! 嵌入个人资料和注册向导的「Medical」标签页。
//! 可重复分段 (病症、用药、过敏) 至少保留一条记录，删除按钮在只剩一条时禁用。

use leptos::prelude::*;
use zpire_shared::forms::medical::{
    ADDITIONAL_NOTES, ALLERGIES, BLOOD_TYPE, BLOOD_TYPES, CONDITIONS, MEDICATIONS, PRIMARY_PHYSICIAN,
    RECENT_HOSPITALIZATIONS,
};
use zpire_shared::wizard::FormSpec;

use super::form_state::{FieldDef, FormState};

const CONDITION_INPUTS: &[FieldDef] = &[
    ("condition", "Condition", "text"),
    ("diagnosisDate", "Diagnosis Date", "date"),
    ("medications", "Related Medications", "text"),
    ("dietaryImplications", "Dietary Implications", "text"),
    ("notes", "Notes", "text"),
];

const MEDICATION_INPUTS: &[FieldDef] = &[
    ("name", "Medication Name", "text"),
    ("dosage", "Dosage", "text"),
    ("frequency", "Frequency", "text"),
    ("startDate", "Start Date", "date"),
    ("purpose", "Purpose", "text"),
    ("foodInteractions", "Food Interactions", "text"),
];

const ALLERGY_INPUTS: &[FieldDef] = &[("value", "Allergy", "text")];

#[component]
pub fn MedicalRecordsForm<F>(form: FormState<F>) -> impl IntoView
where
    F: FormSpec + Send + Sync + 'static,
    F::Tab: Send + Sync,
{
    view! {
        <div class="space-y-8">
            <h2 class="text-2xl font-semibold">"Medical Records"</h2>

            {form.repeatable_section(CONDITIONS, "Medical Conditions", "Add Condition", CONDITION_INPUTS)}
            {form.repeatable_section(MEDICATIONS, "Medications", "Add Medication", MEDICATION_INPUTS)}
            {form.repeatable_section(ALLERGIES, "Allergies", "Add Allergy", ALLERGY_INPUTS)}

            <div class="space-y-4">
                <h3 class="text-xl font-semibold">"Additional Medical Information"</h3>
                {form.textarea(RECENT_HOSPITALIZATIONS, "Recent Hospitalizations")}
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {form.text_input(PRIMARY_PHYSICIAN, "Primary Physician", "text")}
                    {form.select_list(BLOOD_TYPE, "Blood Type", BLOOD_TYPES)}
                </div>
                {form.textarea(ADDITIONAL_NOTES, "Additional Notes")}
            </div>
        </div>
    }
}
