//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 当前地址以 Signal 形式暴露，会话状态和页面都从它派生。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use zpire_shared::log_info;

use super::route::AppRoute;

/// 获取当前浏览器地址 (pathname + search)
fn current_location() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前地址（只读信号），包含查询串
    location: ReadSignal<String>,
    /// 设置当前地址（写入信号）
    set_location: WriteSignal<String>,
}

impl RouterService {
    fn new() -> Self {
        let (location, set_location) = signal(current_location());
        Self {
            location,
            set_location,
        }
    }

    /// 当前地址信号
    pub fn location(&self) -> ReadSignal<String> {
        self.location
    }

    /// 当前路由
    pub fn current_route(&self) -> AppRoute {
        AppRoute::from_path(&self.location.get())
    }

    /// 当前查询串 (不含 `?`，非响应式读取)
    pub fn query(&self) -> String {
        self.location.with_untracked(|loc| {
            loc.split_once('?')
                .map(|(_, q)| q.split('#').next().unwrap_or_default().to_string())
                .unwrap_or_default()
        })
    }

    /// 导航到指定地址：推入 History 并更新信号
    pub fn navigate(&self, url: &str) {
        if self.location.get_untracked() == url {
            return;
        }
        push_history_state(url);
        self.set_location.set(url.to_string());
        log_info!("[Router] Navigated to {}.", url);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_location = self.set_location;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_location.set(current_location());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone + Copy {
    let router = use_router();
    move |to: &str| router.navigate(to)
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let route = Memo::new(move |_| router.current_route());

    move || matcher(route.get())
}

/// 站内链接：拦截点击，改走 History API
#[component]
pub fn Link(
    /// 目标地址
    #[prop(into)]
    to: String,
    /// 链接样式
    #[prop(into)]
    class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let navigate = use_navigate();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
