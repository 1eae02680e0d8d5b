//! 注册向导
//!
//! 「Basic」标签页校验通过后才能进入「Medical」标签页；最终提交保存并重置。

use serde::Serialize;

use super::medical::with_medical_records;
use crate::error::{FormError, FormResult};
use crate::wizard::{FormDraft, FormSpec, SubmitAction, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignUpTab {
    Basic,
    Medical,
}

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const DATE_OF_BIRTH: &str = "dateOfBirth";
pub const GENDER: &str = "gender";
pub const HEIGHT: &str = "height";
pub const WEIGHT: &str = "weight";
pub const MOBILITY_LEVEL: &str = "mobilityLevel";
pub const DIETARY_RESTRICTIONS: &str = "dietaryRestrictions";
pub const FOOD_ALLERGIES: &str = "foodAllergies";
pub const USER_TYPE: &str = "userType";

pub const USER_TYPE_ELDERLY: &str = "elderly";
pub const USER_TYPE_CARETAKER: &str = "caretaker";

pub const MOBILITY_LEVELS: &[&str] = &[
    "Full mobility",
    "Limited mobility",
    "Uses walking aid",
    "Wheelchair user",
    "Bed-bound",
];

pub const DIETARY_OPTIONS: &[&str] = &[
    "Diabetic",
    "Low Sodium",
    "Low Fat",
    "Gluten Free",
    "Vegetarian",
    "Soft Diet",
];

pub const ALLERGY_OPTIONS: &[&str] = &["Nuts", "Dairy", "Eggs", "Shellfish", "Soy", "Wheat"];

#[derive(Debug, Clone)]
pub struct SignUpForm;

impl SignUpForm {
    fn validate_basic(draft: &FormDraft) -> FormResult<()> {
        require_text(draft, FIRST_NAME, "First name")?;
        require_text(draft, EMAIL, "Email")?;
        require_text(draft, PASSWORD, "Password")?;
        if draft.text(PASSWORD) != draft.text(CONFIRM_PASSWORD) {
            return Err(FormError::password_mismatch(CONFIRM_PASSWORD));
        }
        Ok(())
    }
}

impl FormSpec for SignUpForm {
    type Tab = SignUpTab;
    const NAME: &'static str = "signup";

    fn tabs() -> &'static [SignUpTab] {
        &[SignUpTab::Basic, SignUpTab::Medical]
    }

    fn tab_label(tab: SignUpTab) -> &'static str {
        match tab {
            SignUpTab::Basic => "Basic Information",
            SignUpTab::Medical => "Medical Records",
        }
    }

    fn initial_draft() -> FormDraft {
        let draft = FormDraft::new()
            .with(FIRST_NAME, "")
            .with(LAST_NAME, "")
            .with(EMAIL, "")
            .with(PASSWORD, "")
            .with(CONFIRM_PASSWORD, "")
            .with(DATE_OF_BIRTH, "")
            .with(GENDER, "")
            .with(HEIGHT, "")
            .with(WEIGHT, "")
            .with(MOBILITY_LEVEL, MOBILITY_LEVELS[0])
            .with_list(DIETARY_RESTRICTIONS)
            .with_list(FOOD_ALLERGIES)
            .with(USER_TYPE, USER_TYPE_ELDERLY);
        with_medical_records(draft)
    }

    fn validate(tab: SignUpTab, draft: &FormDraft) -> FormResult<()> {
        match tab {
            SignUpTab::Basic => Self::validate_basic(draft),
            SignUpTab::Medical => Self::can_enter(SignUpTab::Medical, draft),
        }
    }

    fn can_enter(tab: SignUpTab, draft: &FormDraft) -> FormResult<()> {
        match tab {
            SignUpTab::Basic => Ok(()),
            SignUpTab::Medical => Self::validate_basic(draft)
                .map_err(|_| FormError::tab_locked("Complete your basic information first")),
        }
    }

    fn on_submit(tab: SignUpTab) -> SubmitAction<SignUpTab> {
        match tab {
            SignUpTab::Basic => SubmitAction::Advance(SignUpTab::Medical),
            SignUpTab::Medical => SubmitAction::SaveAndReset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormErrorKind;
    use crate::wizard::{FormWizard, SubmitOutcome};

    fn filled() -> FormWizard<SignUpForm> {
        let mut w = FormWizard::<SignUpForm>::new();
        w.set_field(FIRST_NAME, "Eleanor");
        w.set_field(EMAIL, "eleanor@example.com");
        w.set_field(PASSWORD, "s3cret");
        w.set_field(CONFIRM_PASSWORD, "s3cret");
        w
    }

    #[test]
    fn test_defaults() {
        let w = FormWizard::<SignUpForm>::new();
        assert_eq!(w.draft().text(USER_TYPE), USER_TYPE_ELDERLY);
        assert_eq!(w.draft().text(MOBILITY_LEVEL), "Full mobility");
        assert!(w.draft().list(DIETARY_RESTRICTIONS).is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let mut w = filled();
        w.set_field(EMAIL, "  ");

        let outcome = w.submit(|_| panic!("must not save"));
        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.is_for(EMAIL)));
        assert_eq!(w.active_tab(), SignUpTab::Basic);
    }

    #[test]
    fn test_password_mismatch_keeps_draft() {
        let mut w = filled();
        w.set_field(CONFIRM_PASSWORD, "typo");

        let outcome = w.submit(|_| panic!("must not save"));
        let SubmitOutcome::Rejected(err) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(err.kind, FormErrorKind::PasswordMismatch);
        assert_eq!(w.draft().text(FIRST_NAME), "Eleanor");
        assert_eq!(w.draft().text(CONFIRM_PASSWORD), "typo");
    }

    #[test]
    fn test_medical_tab_locked_until_basic_valid() {
        let mut w = FormWizard::<SignUpForm>::new();
        assert!(w.set_active_tab(SignUpTab::Medical).is_err());

        let mut w = filled();
        assert!(w.set_active_tab(SignUpTab::Medical).is_ok());
    }

    #[test]
    fn test_basic_submit_advances_then_final_submit_saves_and_resets() {
        let mut w = filled();
        w.toggle_item(DIETARY_RESTRICTIONS, "Low Sodium");

        assert_eq!(
            w.submit(|_| panic!("basic step must not save")),
            SubmitOutcome::Advanced(SignUpTab::Medical)
        );

        let mut saved = None;
        assert_eq!(w.submit(|s| saved = Some(s)), SubmitOutcome::Saved);

        let snapshot = saved.unwrap();
        assert_eq!(snapshot.form, "signup");
        assert_eq!(snapshot.draft.list(DIETARY_RESTRICTIONS), &["Low Sodium".to_string()]);
        assert_eq!(w.active_tab(), SignUpTab::Basic);
        assert_eq!(w.draft().text(FIRST_NAME), "");
    }
}
