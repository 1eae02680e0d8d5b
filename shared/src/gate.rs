//! 每日健康打卡门控
//!
//! 两状态的状态机 (`Idle` / `Scheduled`)：
//! - 会话「进入」已登录个人用户时，若今天尚未弹出过打卡窗口，则安排一次延迟触发
//! - 会话在触发前离开个人用户角色时，取消已安排的触发
//! - 弹窗被用户关闭时，把今天的日期写入持久化存储
//!
//! 门控是唯一会写持久化存储的组件。

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::date::{Clock, format_date_string, parse_date_string};
use crate::error::StoreResult;
use crate::route::SessionView;
use crate::{log_error, log_info, log_warn};

mod memory;

pub use memory::{ManualScheduler, MemoryStore};

// =========================================================
// 抽象接口定义
// =========================================================

/// 抽象键值存储接口：进程级的持久化存储 (浏览器中即 localStorage)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// 已安排任务的句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// 抽象调度接口：可取消的一次性延迟任务
///
/// 任务到期时，实现方需要把对应句柄交回 [`CheckInGate::on_timer_fired`]。
pub trait TaskScheduler {
    /// 安排一次延迟任务；无法创建定时器时返回 None
    fn schedule(&mut self, delay: Duration) -> Option<TaskHandle>;
    /// 取消任务；对已触发或未知的句柄调用应为空操作
    fn cancel(&mut self, handle: TaskHandle);
}

// =========================================================
// 门控状态机
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    Scheduled(TaskHandle),
}

/// 每日打卡门控
///
/// K: KeyValueStore
/// S: TaskScheduler
/// C: Clock
pub struct CheckInGate<K, S, C> {
    store: K,
    scheduler: S,
    clock: C,
    key: String,
    delay: Duration,
    state: GateState,
    /// 最近一次观察到的会话是否为已登录个人用户
    individual_active: bool,
    /// 最近一次安排触发的日期，同一天内不再重复安排
    armed_on: Option<NaiveDate>,
}

impl<K, S, C> CheckInGate<K, S, C>
where
    K: KeyValueStore,
    S: TaskScheduler,
    C: Clock,
{
    pub fn new(store: K, scheduler: S, clock: C, config: &AppConfig) -> Self {
        Self {
            store,
            scheduler,
            clock,
            key: config.check_in_key.clone(),
            delay: config.check_in_delay,
            state: GateState::Idle,
            individual_active: false,
            armed_on: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self.state, GateState::Scheduled(_))
    }

    /// 处理会话变化
    ///
    /// 只在「进入」个人用户角色的那一刻尝试安排；离开时取消尚未触发的任务。
    /// 返回本次调用是否新安排了触发。
    pub fn on_session_change(&mut self, view: SessionView) -> bool {
        let now_individual = view.is_individual();

        match (self.individual_active, now_individual) {
            (false, true) => {
                self.individual_active = true;
                self.maybe_schedule()
            }
            (true, false) => {
                self.individual_active = false;
                self.cancel_pending();
                false
            }
            _ => false,
        }
    }

    /// 若条件满足则安排一次延迟触发
    ///
    /// 同一时间最多只有一个待触发任务；同一日历日内最多安排一次。
    pub fn maybe_schedule(&mut self) -> bool {
        if !self.individual_active || self.is_scheduled() {
            return false;
        }

        let today = self.clock.today();
        if self.armed_on == Some(today) {
            return false;
        }
        if self.last_shown() == Some(today) {
            return false;
        }

        let Some(handle) = self.scheduler.schedule(self.delay) else {
            // 保持 Idle 且不记录 armed_on，下次进入个人用户页面时重试
            log_warn!("[Gate] Check-in could not be scheduled.");
            return false;
        };
        self.state = GateState::Scheduled(handle);
        self.armed_on = Some(today);
        log_info!(
            "[Gate] Check-in scheduled (task {}, delay {}ms).",
            handle.id(),
            self.delay.as_millis()
        );
        true
    }

    /// 定时任务到期
    ///
    /// 返回 true 表示调用方应显示弹窗。已被取消或过期的句柄返回 false。
    pub fn on_timer_fired(&mut self, handle: TaskHandle) -> bool {
        if self.state != GateState::Scheduled(handle) {
            log_info!("[Gate] Ignoring stale task {}.", handle.id());
            return false;
        }

        self.state = GateState::Idle;
        // 释放调度器中已到期任务占用的资源
        self.scheduler.cancel(handle);
        log_info!("[Gate] Check-in popup triggered (task {}).", handle.id());
        true
    }

    /// 用户显式关闭弹窗：记录今天已展示
    pub fn close(&mut self) {
        self.cancel_pending();

        let today = format_date_string(self.clock.today());
        if let Err(e) = self.store.set(&self.key, &today) {
            // 写入失败最坏只会导致同一天再弹一次
            log_error!("[Gate] Failed to persist check-in date: {}", e);
        }
    }

    /// 读取上次展示日期；缺失、损坏或读取失败都视为「从未展示」
    pub fn last_shown(&self) -> Option<NaiveDate> {
        match self.store.get(&self.key) {
            Ok(Some(value)) => {
                let parsed = parse_date_string(&value);
                if parsed.is_none() {
                    log_warn!("[Gate] Unreadable check-in date {:?}, treating as never shown.", value);
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                log_warn!("[Gate] {}; treating check-in as never shown.", e);
                None
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let GateState::Scheduled(handle) = self.state {
            self.scheduler.cancel(handle);
            self.state = GateState::Idle;
            log_info!("[Gate] Pending check-in cancelled (task {}).", handle.id());
        }
    }
}

#[cfg(test)]
mod tests;
