//! 会话模块
//!
//! 会话视图完全由当前地址派生，不读写任何持久化存储。
//! 路由变化时同步重算，消费者 (菜单、问候语、打卡门控) 通过 Context 获取。

use leptos::prelude::*;
use zpire_shared::{AppConfig, Role, SessionView, log_info};

use crate::web::router::RouterService;

/// 会话上下文
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 当前会话视图（派生信号）
    pub view: Memo<SessionView>,
    router: RouterService,
    landing_path: &'static str,
}

impl SessionContext {
    /// 从路由地址信号派生会话视图
    pub fn new(router: RouterService, config: &AppConfig) -> Self {
        let tables = config.route_tables;
        let location = router.location();
        let view = Memo::new(move |_| location.with(|loc| SessionView::from_path(loc, tables)));

        Self {
            view,
            router,
            landing_path: config.landing_path,
        }
    }

    pub fn role(&self) -> Role {
        self.view.get().role
    }

    pub fn is_logged_in(&self) -> bool {
        self.view.get().is_logged_in
    }

    /// 页眉问候语
    pub fn greeting(&self) -> Option<&'static str> {
        self.view.get().greeting()
    }

    /// 注销：回到落地页，会话随地址变为匿名
    ///
    /// 不清除打卡日期。
    pub fn logout(&self) {
        log_info!("[Session] Logging out.");
        self.router.navigate(self.landing_path);
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// 创建并提供会话上下文
pub fn provide_session(router: RouterService, config: &AppConfig) -> SessionContext {
    let ctx = SessionContext::new(router, config);
    provide_context(ctx);
    ctx
}
