//! 端到端场景：路径 -> 会话 -> 菜单 -> 打卡门控

use std::time::Duration;

use zpire_shared::chrono::NaiveDate;
use zpire_shared::date::{FixedClock, format_date_string};
use zpire_shared::gate::{ManualScheduler, MemoryStore};
use zpire_shared::{AppConfig, CheckInGate, GateState, Role, RouteTables, SessionView, build_menu};

const KEY: &str = "lastHealthCheckIn";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
}

fn gate(store: MemoryStore) -> CheckInGate<MemoryStore, ManualScheduler, FixedClock> {
    CheckInGate::new(store, ManualScheduler::new(), FixedClock(today()), &AppConfig::default())
}

/// 模拟导航：根据路径重新计算会话并通知门控
fn navigate(
    gate: &mut CheckInGate<MemoryStore, ManualScheduler, FixedClock>,
    path: &str,
) -> SessionView {
    let view = SessionView::from_path(path, RouteTables::standard());
    gate.on_session_change(view);
    view
}

fn run_timers(gate: &mut CheckInGate<MemoryStore, ManualScheduler, FixedClock>, by: Duration) -> bool {
    let due = gate.scheduler_mut().advance(by);
    let mut popup_visible = false;
    for handle in due {
        popup_visible |= gate.on_timer_fired(handle);
    }
    popup_visible
}

#[test]
fn test_care_home_settings_never_arms_the_gate() {
    let mut gate = gate(MemoryStore::new());

    let view = navigate(&mut gate, "/care-home/settings");

    assert_eq!(view.role, Role::CareHome);
    assert!(view.is_logged_in);
    assert_eq!(build_menu(view.role), build_menu(Role::CareHome));
    assert_eq!(gate.state(), GateState::Idle);
    assert!(!run_timers(&mut gate, Duration::from_secs(60)));
}

#[test]
fn test_profile_without_history_shows_popup_then_persists_on_close() {
    let mut gate = gate(MemoryStore::new());

    let view = navigate(&mut gate, "/profile");
    assert_eq!(view.role, Role::Individual);
    assert!(gate.is_scheduled());

    assert!(!run_timers(&mut gate, Duration::from_millis(2000)));
    assert!(run_timers(&mut gate, Duration::from_millis(1000)));

    gate.close();
    assert_eq!(gate.store().peek(KEY), Some(format_date_string(today())));
    assert_eq!(gate.store().peek(KEY).as_deref(), Some("Mon Nov 10 2025"));
}

#[test]
fn test_navigating_away_before_delay_prevents_popup() {
    let mut gate = gate(MemoryStore::new());

    navigate(&mut gate, "/profile");
    run_timers(&mut gate, Duration::from_millis(1500));
    // 注销 -> 落地页
    navigate(&mut gate, "/");

    assert!(!run_timers(&mut gate, Duration::from_secs(10)));
    assert_eq!(gate.store().peek(KEY), None);
}

#[test]
fn test_moving_between_individual_pages_keeps_single_trigger() {
    let mut gate = gate(MemoryStore::new());

    navigate(&mut gate, "/profile");
    navigate(&mut gate, "/food-analysis");
    navigate(&mut gate, "/recommendations/");

    assert_eq!(gate.scheduler().pending_count(), 1);
    assert!(run_timers(&mut gate, Duration::from_millis(3000)));
}

#[test]
fn test_already_checked_in_today_shows_nothing() {
    let store = MemoryStore::new().with_entry(KEY, "Mon Nov 10 2025");
    let mut gate = gate(store);

    navigate(&mut gate, "/settings");
    assert_eq!(gate.state(), GateState::Idle);
    assert!(!run_timers(&mut gate, Duration::from_secs(10)));
}

#[test]
fn test_logout_does_not_clear_persisted_date() {
    let store = MemoryStore::new().with_entry(KEY, "2025-11-09");
    let mut gate = gate(store);

    navigate(&mut gate, "/profile");
    navigate(&mut gate, "/");

    assert_eq!(gate.store().peek(KEY).as_deref(), Some("2025-11-09"));
}
