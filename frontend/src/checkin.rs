//! 打卡门控桥接模块
//!
//! 把纯逻辑的 `CheckInGate` 接入响应式系统：
//! - 会话视图变化 -> `on_session_change`
//! - `setTimeout` 到期 -> `on_timer_fired`，决定弹窗是否可见
//! - 用户关闭弹窗 -> `close`，写入今天的日期
//!
//! 弹窗可见状态归本模块所有，门控本身只管安排与持久化。

use leptos::prelude::*;
use zpire_shared::{AppConfig, CheckInGate, TaskHandle};

use crate::components::check_in_popup::CheckInPopup;
use crate::session::use_session;
use crate::web::{BrowserClock, BrowserScheduler, BrowserStorage};

type BrowserGate = CheckInGate<BrowserStorage, BrowserScheduler, BrowserClock>;

/// 门控与弹窗状态
#[derive(Clone, Copy)]
pub struct CheckInBridge {
    gate: StoredValue<BrowserGate, LocalStorage>,
    popup_visible: ReadSignal<bool>,
    set_popup_visible: WriteSignal<bool>,
}

impl CheckInBridge {
    pub fn new(session_view: Memo<zpire_shared::SessionView>, config: &AppConfig) -> Self {
        let (fired, set_fired) = signal(Option::<TaskHandle>::None);
        let (popup_visible, set_popup_visible) = signal(false);

        let gate = StoredValue::new_local(CheckInGate::new(
            BrowserStorage,
            BrowserScheduler::new(set_fired),
            BrowserClock,
            config,
        ));

        // 会话变化：进入个人用户时安排，离开时取消
        Effect::new(move |_| {
            let view = session_view.get();
            gate.update_value(|g| {
                g.on_session_change(view);
            });
        });

        // 定时器到期：过期句柄会被门控忽略
        Effect::new(move |_| {
            let Some(handle) = fired.get() else {
                return;
            };
            let show = gate
                .try_update_value(|g| g.on_timer_fired(handle))
                .unwrap_or(false);
            if show {
                set_popup_visible.set(true);
            }
        });

        Self {
            gate,
            popup_visible,
            set_popup_visible,
        }
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible.get()
    }

    /// 用户关闭弹窗
    pub fn close(&self) {
        self.gate.update_value(|g| g.close());
        self.set_popup_visible.set(false);
    }
}

/// 打卡弹窗宿主组件
///
/// 挂在应用根部，离开个人用户页面后弹窗仍保持到用户主动关闭。
#[component]
pub fn CheckInHost(config: AppConfig) -> impl IntoView {
    let session = use_session();
    let bridge = CheckInBridge::new(session.view, &config);

    move || {
        bridge
            .popup_visible()
            .then(|| view! { <CheckInPopup on_close=move || bridge.close() /> })
    }
}
