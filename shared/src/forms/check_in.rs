//! 每日健康打卡表单 (弹窗内容)

use super::SingleTab;
use crate::error::{FormError, FormResult};
use crate::wizard::{FormDraft, FormSpec, FormWizard, SubmitAction, require_text};

pub const FEELING: &str = "feeling";
pub const SYMPTOMS: &str = "symptoms";
pub const APPETITE: &str = "appetite";

/// 互斥选项：选择它会清空其他症状
pub const NO_SYMPTOMS: &str = "None";

/// (value, label, emoji)
pub const FEELING_OPTIONS: &[(&str, &str, &str)] = &[
    ("great", "Great", "😀"),
    ("good", "Good", "🙂"),
    ("okay", "Okay", "😐"),
    ("notWell", "Not Well", "😕"),
    ("poor", "Poor", "😞"),
];

pub const SYMPTOM_OPTIONS: &[&str] = &[
    "Fatigue",
    "Headache",
    "Joint Pain",
    "Stomach Discomfort",
    "Poor Sleep",
    "Dizziness",
    "Loss of Appetite",
    NO_SYMPTOMS,
];

pub const APPETITE_OPTIONS: &[(&str, &str)] = &[
    ("excellent", "Excellent"),
    ("good", "Good"),
    ("fair", "Fair"),
    ("poor", "Poor"),
];

#[derive(Debug, Clone)]
pub struct CheckInForm;

impl FormSpec for CheckInForm {
    type Tab = SingleTab;
    const NAME: &'static str = "health_check_in";

    fn tabs() -> &'static [SingleTab] {
        &[SingleTab::Main]
    }

    fn tab_label(_tab: SingleTab) -> &'static str {
        "How are you feeling today?"
    }

    fn initial_draft() -> FormDraft {
        FormDraft::new()
            .with(FEELING, "")
            .with_list(SYMPTOMS)
            .with(APPETITE, "")
    }

    fn validate(_tab: SingleTab, draft: &FormDraft) -> FormResult<()> {
        require_text(draft, FEELING, "Feeling")?;
        if draft.list(SYMPTOMS).is_empty() {
            return Err(FormError::missing_field(SYMPTOMS, "Symptoms"));
        }
        require_text(draft, APPETITE, "Appetite")
    }

    fn on_submit(_tab: SingleTab) -> SubmitAction<SingleTab> {
        SubmitAction::SaveAndReset
    }
}

/// 切换症状选择
///
/// - 选择 `None` 时，选择集变为 `[None]`
/// - 已选 `None` 时选择其他症状，选择集变为该症状
/// - 其他情况正常增删
pub fn toggle_symptom(wizard: &mut FormWizard<CheckInForm>, symptom: &str) {
    let none_selected = wizard.draft().list(SYMPTOMS).iter().any(|s| s == NO_SYMPTOMS);

    if symptom == NO_SYMPTOMS {
        wizard.set_field(SYMPTOMS, vec![NO_SYMPTOMS.to_string()]);
    } else if none_selected {
        wizard.set_field(SYMPTOMS, vec![symptom.to_string()]);
    } else {
        wizard.toggle_item(SYMPTOMS, symptom);
    }
}

/// 提交按钮是否可用
pub fn is_complete(draft: &FormDraft) -> bool {
    CheckInForm::validate(SingleTab::Main, draft).is_ok()
}
