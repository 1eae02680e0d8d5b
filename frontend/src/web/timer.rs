//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生定时器 API 替代 `gloo-timers`，
//! 并在其上实现门控所需的 [`TaskScheduler`]。

use std::collections::HashMap;
use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use zpire_shared::gate::{TaskHandle, TaskScheduler};
use zpire_shared::log_error;

/// 一次性定时器
///
/// 封装 `setTimeout` API。当 `Timeout` 被 drop 时，自动清除定时器。
pub struct Timeout {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Timeout {
    /// 创建新的一次性定时器
    ///
    /// # 参数
    /// - `millis`: 延迟时间（毫秒）
    /// - `callback`: 到期时的回调函数
    pub fn new<F>(millis: u32, callback: F) -> Result<Self, JsValue>
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;

        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis.min(i32::MAX as u32) as i32,
        )?;

        Ok(Self { handle, closure })
    }

    /// 取消定时器
    ///
    /// 通常不需要手动调用，因为 drop 时会自动清除。
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// 基于 `setTimeout` 的调度器
///
/// 任务到期时把句柄写入 `fired` 信号，由订阅方交回门控处理。
pub struct BrowserScheduler {
    next_id: u64,
    timers: HashMap<TaskHandle, Timeout>,
    fired: WriteSignal<Option<TaskHandle>>,
}

impl BrowserScheduler {
    pub fn new(fired: WriteSignal<Option<TaskHandle>>) -> Self {
        Self {
            next_id: 0,
            timers: HashMap::new(),
            fired,
        }
    }
}

impl TaskScheduler for BrowserScheduler {
    fn schedule(&mut self, delay: Duration) -> Option<TaskHandle> {
        self.next_id += 1;
        let handle = TaskHandle::new(self.next_id);

        let fired = self.fired;
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        match Timeout::new(millis, move || fired.set(Some(handle))) {
            Ok(timer) => {
                self.timers.insert(handle, timer);
                Some(handle)
            }
            Err(e) => {
                log_error!("[Timer] setTimeout failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: TaskHandle) {
        // drop 即 clearTimeout
        self.timers.remove(&handle);
    }
}
