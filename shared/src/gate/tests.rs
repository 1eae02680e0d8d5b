use super::*;
use crate::date::FixedClock;
use crate::error::StoreError;
use crate::route::Role;
use std::cell::RefCell;

// =========================================================
// 辅助函数
// =========================================================

const KEY: &str = "lastHealthCheckIn";
const DELAY: Duration = Duration::from_millis(3000);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2025, 11, 11)
}

fn create_gate(store: MemoryStore) -> CheckInGate<MemoryStore, ManualScheduler, FixedClock> {
    CheckInGate::new(
        store,
        ManualScheduler::new(),
        FixedClock(today()),
        &AppConfig::default(),
    )
}

fn individual() -> SessionView {
    SessionView::new(Role::Individual)
}

fn care_home() -> SessionView {
    SessionView::new(Role::CareHome)
}

fn anonymous() -> SessionView {
    SessionView::anonymous()
}

// =========================================================
// 安排触发
// =========================================================

#[test]
fn test_entering_individual_without_history_schedules() {
    let mut gate = create_gate(MemoryStore::new());

    assert!(gate.on_session_change(individual()));
    assert!(gate.is_scheduled());
    assert_eq!(gate.scheduler.pending_count(), 1);
}

#[test]
fn test_previous_day_schedules() {
    let store = MemoryStore::new().with_entry(KEY, "2025-11-10");
    let mut gate = create_gate(store);

    assert!(gate.on_session_change(individual()));
    assert!(gate.is_scheduled());
}

#[test]
fn test_already_shown_today_does_not_schedule() {
    let store = MemoryStore::new().with_entry(KEY, &format_date_string(today()));
    let mut gate = create_gate(store);

    assert!(!gate.on_session_change(individual()));
    assert_eq!(gate.state(), GateState::Idle);
    assert_eq!(gate.scheduler.pending_count(), 0);
}

#[test]
fn test_iso_value_for_today_does_not_schedule() {
    let store = MemoryStore::new().with_entry(KEY, "2025-11-11");
    let mut gate = create_gate(store);

    assert!(!gate.on_session_change(individual()));
}

#[test]
fn test_non_individual_roles_never_schedule() {
    let mut gate = create_gate(MemoryStore::new());

    assert!(!gate.on_session_change(anonymous()));
    assert!(!gate.on_session_change(care_home()));
    assert!(!gate.maybe_schedule());
    assert_eq!(gate.scheduler.pending_count(), 0);
}

#[test]
fn test_staying_individual_is_not_a_transition() {
    let mut gate = create_gate(MemoryStore::new());

    assert!(gate.on_session_change(individual()));
    // 在个人用户页面间导航不会再次安排
    assert!(!gate.on_session_change(individual()));
    assert_eq!(gate.scheduler.pending_count(), 1);
}

#[test]
fn test_maybe_schedule_is_idempotent() {
    let mut gate = create_gate(MemoryStore::new());

    gate.on_session_change(individual());
    assert!(!gate.maybe_schedule());
    assert!(!gate.maybe_schedule());
    assert_eq!(gate.scheduler.pending_count(), 1);
}

#[test]
fn test_scheduler_failure_leaves_gate_idle_and_retries() {
    let mut gate = create_gate(MemoryStore::new());
    gate.scheduler.set_failing(true);

    assert!(!gate.on_session_change(individual()));
    assert_eq!(gate.state(), GateState::Idle);
    assert_eq!(gate.scheduler.pending_count(), 0);

    // 同一天内再次进入时重新尝试
    gate.scheduler.set_failing(false);
    gate.on_session_change(anonymous());
    assert!(gate.on_session_change(individual()));
    assert!(gate.is_scheduled());
}

// =========================================================
// 触发与取消
// =========================================================

#[test]
fn test_timer_fires_after_delay() {
    let mut gate = create_gate(MemoryStore::new());
    gate.on_session_change(individual());

    assert!(gate.scheduler.advance(Duration::from_millis(2999)).is_empty());
    let due = gate.scheduler.advance(Duration::from_millis(1));
    assert_eq!(due.len(), 1);

    assert!(gate.on_timer_fired(due[0]));
    assert_eq!(gate.state(), GateState::Idle);
}

#[test]
fn test_leaving_individual_cancels_pending() {
    let mut gate = create_gate(MemoryStore::new());
    gate.on_session_change(individual());
    let GateState::Scheduled(handle) = gate.state() else {
        panic!("expected scheduled state");
    };

    gate.on_session_change(anonymous());

    assert_eq!(gate.state(), GateState::Idle);
    assert_eq!(gate.scheduler.cancelled(), &[handle]);
    assert!(gate.scheduler.advance(DELAY).is_empty());
}

#[test]
fn test_stale_handle_is_ignored() {
    let mut gate = create_gate(MemoryStore::new());
    gate.on_session_change(individual());
    let GateState::Scheduled(handle) = gate.state() else {
        panic!("expected scheduled state");
    };

    gate.on_session_change(care_home());
    // 取消之后到达的触发不能显示弹窗
    assert!(!gate.on_timer_fired(handle));
    assert!(!gate.on_timer_fired(TaskHandle::new(999)));
}

#[test]
fn test_leaving_after_fire_has_no_effect() {
    let mut gate = create_gate(MemoryStore::new());
    gate.on_session_change(individual());
    let due = gate.scheduler.advance(DELAY);
    assert!(gate.on_timer_fired(due[0]));

    gate.on_session_change(anonymous());
    assert!(gate.scheduler.cancelled().is_empty());
    assert_eq!(gate.store.peek(KEY), None);
}

#[test]
fn test_role_flicker_does_not_rearm_same_day() {
    let mut gate = create_gate(MemoryStore::new());

    assert!(gate.on_session_change(individual()));
    gate.on_session_change(anonymous());
    assert!(!gate.on_session_change(individual()));

    assert_eq!(gate.state(), GateState::Idle);
    assert_eq!(gate.scheduler.pending_count(), 0);
}

#[test]
fn test_rearms_after_day_rolls_over() {
    let mut gate = create_gate(MemoryStore::new());
    assert!(gate.on_session_change(individual()));
    gate.on_session_change(anonymous());

    gate.clock = FixedClock(date(2025, 11, 12));
    assert!(gate.on_session_change(individual()));
}

// =========================================================
// 关闭与持久化
// =========================================================

#[test]
fn test_close_persists_today() {
    let mut gate = create_gate(MemoryStore::new());
    gate.on_session_change(individual());
    let due = gate.scheduler.advance(DELAY);
    gate.on_timer_fired(due[0]);

    gate.close();

    assert_eq!(gate.store.peek(KEY).as_deref(), Some("Tue Nov 11 2025"));
    assert_eq!(gate.last_shown(), Some(today()));
}

#[test]
fn test_close_write_failure_is_not_fatal() {
    let store = MemoryStore::new();
    store.fail_writes(true);
    let mut gate = create_gate(store);

    gate.close();
    assert_eq!(gate.store.peek(KEY), None);
    assert_eq!(gate.state(), GateState::Idle);
}

#[test]
fn test_read_failure_fails_open() {
    let store = MemoryStore::new().with_entry(KEY, "2025-11-11");
    store.fail_reads(true);
    let mut gate = create_gate(store);

    assert_eq!(gate.last_shown(), None);
    assert!(gate.on_session_change(individual()));
}

#[test]
fn test_corrupt_value_fails_open() {
    let store = MemoryStore::new().with_entry(KEY, "not a date");
    let mut gate = create_gate(store);

    assert!(gate.on_session_change(individual()));
}

#[test]
fn test_custom_key_and_delay() {
    let mut config = AppConfig::default().with_check_in_delay(Duration::from_millis(10));
    config.check_in_key = "checkIn".to_string();

    let mut gate = CheckInGate::new(
        MemoryStore::new().with_entry(KEY, "2025-11-11"),
        ManualScheduler::new(),
        FixedClock(today()),
        &config,
    );

    // 默认键上的值不影响自定义键
    assert!(gate.on_session_change(individual()));
    assert_eq!(gate.scheduler.advance(Duration::from_millis(10)).len(), 1);
}

// =========================================================
// 失败的存储实现
// =========================================================

struct BrokenStore {
    writes: RefCell<Vec<String>>,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Unavailable)
    }

    fn set(&self, _key: &str, value: &str) -> StoreResult<()> {
        self.writes.borrow_mut().push(value.to_string());
        Err(StoreError::Unavailable)
    }
}

#[test]
fn test_unavailable_storage_still_shows_once_per_session_day() {
    let store = BrokenStore {
        writes: RefCell::new(Vec::new()),
    };
    let mut gate = CheckInGate::new(
        store,
        ManualScheduler::new(),
        FixedClock(today()),
        &AppConfig::default(),
    );

    assert!(gate.on_session_change(individual()));
    let due = gate.scheduler.advance(DELAY);
    assert!(gate.on_timer_fired(due[0]));
    gate.close();
    assert_eq!(gate.store.writes.borrow().len(), 1);

    // 内存中的「今天已安排」仍然阻止重复弹出
    gate.on_session_change(anonymous());
    assert!(!gate.on_session_change(individual()));
}
