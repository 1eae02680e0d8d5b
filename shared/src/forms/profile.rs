//! 个人资料向导：基础信息 + 病历

use serde::Serialize;

use super::medical::with_medical_records;
use crate::wizard::{FormDraft, FormSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileTab {
    Basic,
    Medical,
}

pub const BASIC_FIELDS: &[(&str, &str)] = &[
    ("name", "Full Name"),
    ("age", "Age"),
    ("birthplace", "Birthplace"),
    ("foodPreferences", "Food Preferences"),
    ("birthday", "Birthday"),
    ("genetics", "Genetic Factors"),
    ("lifestyle", "Lifestyle"),
    ("height", "Height (cm)"),
    ("weight", "Weight (kg)"),
    ("mobilityLevel", "Mobility Level"),
    ("dietaryRestrictions", "Dietary Restrictions"),
];

#[derive(Debug, Clone)]
pub struct ProfileForm;

impl FormSpec for ProfileForm {
    type Tab = ProfileTab;
    const NAME: &'static str = "profile";

    fn tabs() -> &'static [ProfileTab] {
        &[ProfileTab::Basic, ProfileTab::Medical]
    }

    fn tab_label(tab: ProfileTab) -> &'static str {
        match tab {
            ProfileTab::Basic => "Basic Information",
            ProfileTab::Medical => "Medical Records",
        }
    }

    fn initial_draft() -> FormDraft {
        let draft = BASIC_FIELDS
            .iter()
            .fold(FormDraft::new(), |draft, (name, _)| draft.with(name, ""));
        with_medical_records(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::medical::CONDITIONS;
    use crate::wizard::{FormWizard, SubmitOutcome};

    #[test]
    fn test_profile_saves_from_either_tab_and_stays() {
        let mut w = FormWizard::<ProfileForm>::new();
        w.set_field("name", "Eleanor Johnson");

        let mut saved = Vec::new();
        assert_eq!(w.submit(|s| saved.push(s)), SubmitOutcome::Saved);
        assert_eq!(w.active_tab(), ProfileTab::Basic);

        w.set_active_tab(ProfileTab::Medical).unwrap();
        assert_eq!(w.submit(|s| saved.push(s)), SubmitOutcome::Saved);
        assert_eq!(w.active_tab(), ProfileTab::Medical);

        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].draft.text("name"), "Eleanor Johnson");
        assert_eq!(saved[1].draft.section(CONDITIONS).len(), 1);
    }
}
