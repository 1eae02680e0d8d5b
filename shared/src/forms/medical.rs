//! 病历表单字段
//!
//! 病历不是独立页面，而是嵌入在个人资料和注册向导的「Medical」标签页中，
//! 因此这里只提供字段定义和向草稿中追加病历字段的辅助函数。

use crate::wizard::FormDraft;

pub const CONDITIONS: &str = "conditions";
pub const MEDICATIONS: &str = "medications";
pub const ALLERGIES: &str = "allergies";

pub const CONDITION_FIELDS: &[&str] = &[
    "condition",
    "diagnosisDate",
    "medications",
    "dietaryImplications",
    "notes",
];

pub const MEDICATION_FIELDS: &[&str] = &[
    "name",
    "dosage",
    "frequency",
    "purpose",
    "foodInteractions",
    "startDate",
];

pub const ALLERGY_FIELDS: &[&str] = &["value"];

pub const RECENT_HOSPITALIZATIONS: &str = "recentHospitalizations";
pub const PRIMARY_PHYSICIAN: &str = "primaryPhysician";
pub const BLOOD_TYPE: &str = "bloodType";
pub const ADDITIONAL_NOTES: &str = "additionalNotes";

pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-", "Unknown"];

/// 向草稿追加病历分段和字段，每个分段初始带一条空记录
pub fn with_medical_records(draft: FormDraft) -> FormDraft {
    draft
        .with_section(CONDITIONS, CONDITION_FIELDS)
        .with_section(MEDICATIONS, MEDICATION_FIELDS)
        .with_section(ALLERGIES, ALLERGY_FIELDS)
        .with(RECENT_HOSPITALIZATIONS, "")
        .with(PRIMARY_PHYSICIAN, "")
        .with(BLOOD_TYPE, "")
        .with(ADDITIONAL_NOTES, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_section_starts_with_one_empty_entry() {
        let draft = with_medical_records(FormDraft::new());
        for section in [CONDITIONS, MEDICATIONS, ALLERGIES] {
            let entries = draft.section(section);
            assert_eq!(entries.len(), 1, "section {}", section);
            assert!(entries[0].fields.values().all(String::is_empty));
        }
    }

    #[test]
    fn test_entry_ids_unique_across_sections() {
        let draft = with_medical_records(FormDraft::new());
        let mut ids: Vec<_> = [CONDITIONS, MEDICATIONS, ALLERGIES]
            .iter()
            .map(|s| draft.section(s)[0].id)
            .collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
