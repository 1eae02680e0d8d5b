//! 养老院设置

use serde::Serialize;

use crate::wizard::{FormDraft, FormSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CareHomeSettingsTab {
    Facility,
    Meals,
    Notifications,
    Data,
    Staff,
}

pub const STAFF: &str = "staffMembers";
pub const STAFF_FIELDS: &[&str] = &["name", "role", "email"];

pub const RETENTION_PERIODS: &[(&str, &str)] = &[
    ("1year", "1 Year"),
    ("2years", "2 Years"),
    ("5years", "5 Years"),
    ("indefinite", "Indefinite"),
];

#[derive(Debug, Clone)]
pub struct CareHomeSettingsForm;

impl FormSpec for CareHomeSettingsForm {
    type Tab = CareHomeSettingsTab;
    const NAME: &'static str = "care_home_settings";

    fn tabs() -> &'static [CareHomeSettingsTab] {
        &[
            CareHomeSettingsTab::Facility,
            CareHomeSettingsTab::Meals,
            CareHomeSettingsTab::Notifications,
            CareHomeSettingsTab::Data,
            CareHomeSettingsTab::Staff,
        ]
    }

    fn tab_label(tab: CareHomeSettingsTab) -> &'static str {
        match tab {
            CareHomeSettingsTab::Facility => "Facility",
            CareHomeSettingsTab::Meals => "Meal Times",
            CareHomeSettingsTab::Notifications => "Notifications",
            CareHomeSettingsTab::Data => "Data Management",
            CareHomeSettingsTab::Staff => "Staff",
        }
    }

    fn initial_draft() -> FormDraft {
        FormDraft::new()
            .with("facilityName", "Sunshine Care Home")
            .with("address", "123 Health Avenue, Wellness City")
            .with("phone", "(555) 123-4567")
            .with("email", "admin@sunshinecare.com")
            .with("breakfastTime", "07:30")
            .with("lunchTime", "12:00")
            .with("dinnerTime", "17:30")
            .with("snackTime", "15:00")
            .with("alertEmails", true)
            .with("dailyReports", true)
            .with("nutritionAlerts", true)
            .with("staffNotifications", true)
            .with("dataRetentionPeriod", "2years")
            .with("automaticBackups", true)
            .with("anonymizeData", true)
            .with_section_entries(
                STAFF,
                STAFF_FIELDS,
                &[
                    &[
                        ("name", "Sarah Johnson"),
                        ("role", "Administrator"),
                        ("email", "sarah@sunshinecare.com"),
                    ],
                    &[
                        ("name", "Michael Chen"),
                        ("role", "Nutritionist"),
                        ("email", "michael@sunshinecare.com"),
                    ],
                    &[
                        ("name", "Emily Rodriguez"),
                        ("role", "Kitchen Manager"),
                        ("email", "emily@sunshinecare.com"),
                    ],
                    &[
                        ("name", "David Wilson"),
                        ("role", "Care Staff"),
                        ("email", "david@sunshinecare.com"),
                    ],
                ],
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{FormWizard, SubmitOutcome};

    #[test]
    fn test_staff_defaults_and_removal() {
        let mut w = FormWizard::<CareHomeSettingsForm>::new();
        let staff = w.draft().section(STAFF).to_vec();
        assert_eq!(staff.len(), 4);
        assert_eq!(staff[1].get("role"), "Nutritionist");

        for entry in &staff {
            w.remove_repeatable_entry(STAFF, entry.id);
        }
        // 最后一名员工无法删除
        assert_eq!(w.draft().section(STAFF).len(), 1);
        assert_eq!(w.draft().section(STAFF)[0].get("name"), "David Wilson");
    }

    #[test]
    fn test_settings_save_and_stay_on_tab() {
        let mut w = FormWizard::<CareHomeSettingsForm>::new();
        w.set_active_tab(CareHomeSettingsTab::Meals).unwrap();
        w.set_field("lunchTime", "12:30");

        let mut lunch = String::new();
        let outcome = w.submit(|s| lunch = s.draft.text("lunchTime").to_string());

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(lunch, "12:30");
        assert_eq!(w.active_tab(), CareHomeSettingsTab::Meals);
        assert_eq!(w.draft().text("lunchTime"), "12:30");
    }
}
