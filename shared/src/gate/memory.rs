//! 内存实现的存储与调度器
//!
//! 用于非浏览器环境和确定性测试：时间只在调用 `advance` 时前进。

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use super::{KeyValueStore, TaskHandle, TaskScheduler};
use crate::error::{StoreError, StoreResult};

/// 内存键值存储
///
/// 可以模拟读写失败，用来验证「读失败即视为未展示」的降级路径。
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// 直接查看存储内容 (绕过失败模拟)
    pub fn peek(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(StoreError::read(key, "simulated read failure"));
        }
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::write(key, "simulated write failure"));
        }
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 手动推进时间的调度器
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    now: Duration,
    /// handle -> 到期时间
    pending: BTreeMap<TaskHandle, Duration>,
    cancelled: Vec<TaskHandle>,
    failing: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 推进时间，返回所有到期的任务 (按到期时间排序)
    pub fn advance(&mut self, by: Duration) -> Vec<TaskHandle> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, TaskHandle)> = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(handle, at)| (*at, *handle))
            .collect();
        due.sort();

        for (_, handle) in &due {
            self.pending.remove(handle);
        }
        due.into_iter().map(|(_, handle)| handle).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// 模拟定时器创建失败
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// 被显式取消的任务 (不含到期后释放的任务)
    pub fn cancelled(&self) -> &[TaskHandle] {
        &self.cancelled
    }
}

impl TaskScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> Option<TaskHandle> {
        if self.failing {
            return None;
        }
        self.next_id += 1;
        let handle = TaskHandle::new(self.next_id);
        self.pending.insert(handle, self.now + delay);
        Some(handle)
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if self.pending.remove(&handle).is_some() {
            self.cancelled.push(handle);
        }
    }
}
