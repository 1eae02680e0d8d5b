//! 个人用户设置

use serde::Serialize;

use crate::wizard::{FormDraft, FormSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTab {
    Account,
    Notifications,
    Privacy,
    Accessibility,
}

/// 字体大小选项 (值, 标签)
pub const FONT_SIZES: &[(&str, &str)] = &[
    ("small", "Small"),
    ("medium", "Medium"),
    ("large", "Large"),
    ("x-large", "Extra Large"),
];

#[derive(Debug, Clone)]
pub struct SettingsForm;

impl FormSpec for SettingsForm {
    type Tab = SettingsTab;
    const NAME: &'static str = "settings";

    fn tabs() -> &'static [SettingsTab] {
        &[
            SettingsTab::Account,
            SettingsTab::Notifications,
            SettingsTab::Privacy,
            SettingsTab::Accessibility,
        ]
    }

    fn tab_label(tab: SettingsTab) -> &'static str {
        match tab {
            SettingsTab::Account => "Account",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Privacy => "Privacy",
            SettingsTab::Accessibility => "Accessibility",
        }
    }

    fn initial_draft() -> FormDraft {
        FormDraft::new()
            // Account
            .with("email", "eleanor.johnson@example.com")
            .with("name", "Eleanor Johnson")
            .with("phone", "(555) 123-4567")
            // Notifications
            .with("emailNotifications", true)
            .with("mealReminders", true)
            .with("healthCheckInReminders", true)
            // Privacy
            .with("shareHealthData", false)
            .with("shareActivityData", false)
            // Accessibility
            .with("fontSize", "medium")
            .with("highContrast", false)
            .with("reducedMotion", true)
    }
}
