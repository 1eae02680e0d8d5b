//! ZPIRE Nutrition 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 由地址派生的会话状态
//! - `checkin`: 每日打卡门控与弹窗
//! - `components`: UI 组件层

mod checkin;
mod components {
    pub mod care_home;
    pub mod care_home_settings;
    pub mod check_in_popup;
    mod form_state;
    pub mod header;
    pub mod home;
    mod icons;
    pub mod info_page;
    pub mod login;
    pub mod meal_planning;
    mod medical_records_form;
    pub mod profile;
    pub mod recommendations;
    pub mod settings;
    pub mod signup;
}
mod session;

use crate::checkin::CheckInHost;
use crate::components::care_home::CareHomePage;
use crate::components::care_home_settings::CareHomeSettingsPage;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::info_page::InfoPage;
use crate::components::login::LoginPage;
use crate::components::meal_planning::CareHomeMealPlanningPage;
use crate::components::profile::ProfilePage;
use crate::components::recommendations::RecommendationsPage;
use crate::components::settings::SettingsPage;
use crate::components::signup::SignUpPage;
use crate::session::provide_session;

use leptos::prelude::*;
use zpire_shared::AppConfig;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod clock;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use clock::BrowserClock;
    pub use storage::BrowserStorage;
    pub use timer::BrowserScheduler;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::SignUp => view! { <SignUpPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::FoodAnalysis => view! {
            <InfoPage
                title="Food Analysis"
                description="Take a photo of your meal to see its nutrition facts and how it fits your health needs."
            />
        }
        .into_any(),
        AppRoute::Recommendations => view! { <RecommendationsPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::CareHomeDashboard => view! { <CareHomePage /> }.into_any(),
        AppRoute::CareHomeMealPlanning => view! { <CareHomeMealPlanningPage /> }.into_any(),
        AppRoute::CareHomeFoodAnalysis => view! {
            <InfoPage
                title="Care Home Food Analysis"
                description="Analyze a meal and check its compatibility with each resident's dietary needs."
            />
        }
        .into_any(),
        AppRoute::CareHomeAnalytics => view! {
            <InfoPage
                title="Nutrition Analytics"
                description="Track nutrition compliance, deficiencies and trends across the facility."
            />
        }
        .into_any(),
        AppRoute::CareHomeSettings => view! { <CareHomeSettingsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// 路由上下文内的应用外壳
#[component]
fn Shell() -> impl IntoView {
    let config = AppConfig::from_build_env();

    // 会话状态完全由当前地址派生
    provide_session(use_router(), &config);

    view! {
        <div class="min-h-screen bg-base-200 flex flex-col">
            <Header />
            <main class="grow">
                <RouterOutlet matcher=route_matcher />
            </main>
            <footer class="footer footer-center p-4 bg-base-100 text-base-content/60">
                <p>"© ZPIRE Nutrition"</p>
            </footer>
            <CheckInHost config=config />
        </div>
    }
}
