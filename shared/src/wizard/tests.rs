use super::*;
use crate::error::FormErrorKind;
use pretty_assertions::assert_eq;
use serde::Serialize;

// =========================================================
// 测试用表单
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum Tab {
    First,
    Second,
}

#[derive(Debug, Clone)]
struct TwoStepForm;

const ITEM_FIELDS: &[&str] = &["name", "note"];

impl FormSpec for TwoStepForm {
    type Tab = Tab;
    const NAME: &'static str = "two_step";

    fn tabs() -> &'static [Tab] {
        &[Tab::First, Tab::Second]
    }

    fn tab_label(tab: Tab) -> &'static str {
        match tab {
            Tab::First => "First",
            Tab::Second => "Second",
        }
    }

    fn initial_draft() -> FormDraft {
        FormDraft::new()
            .with("title", "")
            .with("subscribed", false)
            .with_list("tags")
            .with_section("items", ITEM_FIELDS)
    }

    fn validate(tab: Tab, draft: &FormDraft) -> FormResult<()> {
        match tab {
            Tab::First => require_text(draft, "title", "Title"),
            Tab::Second => Ok(()),
        }
    }

    fn can_enter(tab: Tab, draft: &FormDraft) -> FormResult<()> {
        match tab {
            Tab::Second if draft.text("title").is_empty() => {
                Err(FormError::tab_locked("Title first"))
            }
            _ => Ok(()),
        }
    }

    fn on_submit(tab: Tab) -> SubmitAction<Tab> {
        match tab {
            Tab::First => SubmitAction::Advance(Tab::Second),
            Tab::Second => SubmitAction::SaveAndReset,
        }
    }
}

fn wizard() -> FormWizard<TwoStepForm> {
    FormWizard::new()
}

// =========================================================
// 字段与标签页
// =========================================================

#[test]
fn test_initial_state() {
    let w = wizard();
    assert_eq!(w.active_tab(), Tab::First);
    assert_eq!(w.draft().text("title"), "");
    assert!(!w.draft().flag("subscribed"));
    assert!(w.draft().list("tags").is_empty());
    assert_eq!(w.draft().section("items").len(), 1);
    assert!(w.error().is_none());
}

#[test]
fn test_set_field_replaces_single_entry() {
    let mut w = wizard();
    w.set_field("title", "Breakfast");
    w.set_field("subscribed", true);

    assert_eq!(w.draft().text("title"), "Breakfast");
    assert!(w.draft().flag("subscribed"));
    assert_eq!(w.draft().get("title"), Some(&FieldValue::from("Breakfast")));
}

#[test]
fn test_toggle_item() {
    let mut w = wizard();
    w.toggle_item("tags", "a");
    w.toggle_item("tags", "b");
    w.toggle_item("tags", "a");
    assert_eq!(w.draft().list("tags"), &["b".to_string()]);
}

#[test]
fn test_tab_switch_keeps_draft() {
    let mut w = wizard();
    w.set_field("title", "Kept");
    w.set_active_tab(Tab::Second).unwrap();
    w.set_active_tab(Tab::First).unwrap();

    assert_eq!(w.draft().text("title"), "Kept");
}

#[test]
fn test_locked_tab_is_not_entered() {
    let mut w = wizard();
    let err = w.set_active_tab(Tab::Second).unwrap_err();

    assert_eq!(err.kind, FormErrorKind::TabLocked);
    assert_eq!(w.active_tab(), Tab::First);
    assert!(!w.can_enter(Tab::Second));
    // 切换失败不会改写向导的错误状态
    assert!(w.error().is_none());
}

// =========================================================
// 可重复分段
// =========================================================

#[test]
fn test_add_entry_generates_unique_ids() {
    let mut w = wizard();
    let a = w.add_repeatable_entry("items").unwrap();
    let b = w.add_repeatable_entry("items").unwrap();

    let ids: Vec<_> = w.draft().section("items").iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 3);
    assert_ne!(a, b);
    assert!(!ids[..1].contains(&a));
}

#[test]
fn test_add_entry_to_unknown_section() {
    let mut w = wizard();
    assert_eq!(w.add_repeatable_entry("nope"), None);
}

#[test]
fn test_new_entry_has_template_fields() {
    let mut w = wizard();
    let id = w.add_repeatable_entry("items").unwrap();
    let entry = w
        .draft()
        .section("items")
        .iter()
        .find(|e| e.id == id)
        .unwrap();
    assert_eq!(entry.get("name"), "");
    assert_eq!(entry.get("note"), "");
}

#[test]
fn test_remove_last_entry_is_noop() {
    let mut w = wizard();
    let only = w.draft().section("items")[0].id;

    assert!(!w.remove_repeatable_entry("items", only));
    assert_eq!(w.draft().section("items").len(), 1);
}

#[test]
fn test_remove_entry() {
    let mut w = wizard();
    let first = w.draft().section("items")[0].id;
    let second = w.add_repeatable_entry("items").unwrap();

    assert!(w.remove_repeatable_entry("items", first));
    let ids: Vec<_> = w.draft().section("items").iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second]);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut w = wizard();
    w.add_repeatable_entry("items");
    assert!(!w.remove_repeatable_entry("items", 999));
    assert_eq!(w.draft().section("items").len(), 2);
}

#[test]
fn test_section_never_reaches_zero_entries() {
    let mut w = wizard();
    // 交替执行增删，任何时刻分段都不为空
    for round in 0..20u64 {
        if round % 3 == 0 {
            w.add_repeatable_entry("items");
        }
        let ids: Vec<_> = w.draft().section("items").iter().map(|e| e.id).collect();
        for id in ids {
            w.remove_repeatable_entry("items", id);
            assert!(!w.draft().section("items").is_empty());
        }
    }
    assert_eq!(w.draft().section("items").len(), 1);
}

#[test]
fn test_ids_are_not_reused_after_removal() {
    let mut w = wizard();
    let a = w.add_repeatable_entry("items").unwrap();
    w.remove_repeatable_entry("items", a);
    let b = w.add_repeatable_entry("items").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_set_entry_field() {
    let mut w = wizard();
    let id = w.draft().section("items")[0].id;

    assert!(w.set_entry_field("items", id, "name", "Metformin"));
    assert!(!w.set_entry_field("items", id, "unknown", "x"));
    assert!(!w.set_entry_field("items", 999, "name", "x"));
    assert_eq!(w.draft().section("items")[0].get("name"), "Metformin");
}

// =========================================================
// 提交
// =========================================================

#[test]
fn test_rejected_submit_keeps_draft() {
    let mut w = wizard();
    w.set_field("subscribed", true);

    let mut saved = false;
    let outcome = w.submit(|_| saved = true);

    assert!(!saved);
    assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.is_for("title")));
    assert!(w.error().is_some());
    assert!(w.draft().flag("subscribed"));
    assert_eq!(w.active_tab(), Tab::First);
}

#[test]
fn test_editing_field_clears_its_error() {
    let mut w = wizard();
    w.submit(|_| {});
    assert!(w.error().is_some());

    w.set_field("subscribed", true);
    assert!(w.error().is_some());

    w.set_field("title", "Now filled");
    assert!(w.error().is_none());
}

#[test]
fn test_advance_does_not_save() {
    let mut w = wizard();
    w.set_field("title", "Step one");

    let mut saved = false;
    let outcome = w.submit(|_| saved = true);

    assert!(!saved);
    assert_eq!(outcome, SubmitOutcome::Advanced(Tab::Second));
    assert_eq!(w.active_tab(), Tab::Second);
}

#[test]
fn test_final_submit_saves_snapshot_and_resets() {
    let mut w = wizard();
    w.set_field("title", "Done");
    w.submit(|_| {});

    let mut snapshot = None;
    let outcome = w.submit(|s| snapshot = Some(s));

    assert_eq!(outcome, SubmitOutcome::Saved);
    let snapshot = snapshot.unwrap();
    assert_eq!(snapshot.form, "two_step");
    assert_eq!(snapshot.tab, Tab::Second);
    assert_eq!(snapshot.draft.text("title"), "Done");

    // 向导已重置
    assert_eq!(w.active_tab(), Tab::First);
    assert_eq!(w.draft().text("title"), "");
}

#[test]
fn test_snapshot_serializes_fields_and_sections() {
    let mut w = wizard();
    let id = w.draft().section("items")[0].id;
    w.set_entry_field("items", id, "name", "Toast");
    w.set_field("title", "Menu");
    w.set_active_tab(Tab::Second).unwrap();

    let mut json = String::new();
    w.submit(|s| json = serde_json::to_string(&s.draft).unwrap());

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["fields"]["title"], "Menu");
    assert_eq!(value["fields"]["subscribed"], false);
    assert_eq!(value["sections"]["items"][0]["fields"]["name"], "Toast");
}

#[test]
fn test_default_initial_tab_is_first_listed() {
    assert_eq!(TwoStepForm::initial_tab(), TwoStepForm::tabs()[0]);
    assert_eq!(TwoStepForm::initial_tab(), Tab::First);
}

#[test]
fn test_reset_discards_draft_and_error() {
    let mut w = wizard();
    w.submit(|_| {});
    assert!(w.error().is_some());

    w.set_field("subscribed", true);
    w.toggle_item("tags", "news");
    w.add_repeatable_entry("items");
    w.reset();

    assert_eq!(w.active_tab(), Tab::First);
    assert!(w.error().is_none());
    assert!(!w.draft().flag("subscribed"));
    assert!(w.draft().list("tags").is_empty());
    assert_eq!(w.draft().section("items").len(), 1);
}
