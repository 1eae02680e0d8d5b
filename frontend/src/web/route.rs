//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有页面路由；角色判定由 `zpire_shared::route` 负责。

use std::fmt::Display;

use zpire_shared::route::normalize_path;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 落地页 (默认路由)
    #[default]
    Home,
    Login,
    SignUp,
    Profile,
    FoodAnalysis,
    Recommendations,
    Settings,
    CareHomeDashboard,
    CareHomeMealPlanning,
    CareHomeFoodAnalysis,
    CareHomeAnalytics,
    CareHomeSettings,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举 (忽略查询串和末尾斜杠)
    pub fn from_path(path: &str) -> Self {
        match normalize_path(path) {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/signup" => Self::SignUp,
            "/profile" => Self::Profile,
            "/food-analysis" => Self::FoodAnalysis,
            "/recommendations" => Self::Recommendations,
            "/settings" => Self::Settings,
            "/care-home" => Self::CareHomeDashboard,
            "/care-home/meal-planning" => Self::CareHomeMealPlanning,
            "/care-home/food-analysis" => Self::CareHomeFoodAnalysis,
            "/care-home/analytics" => Self::CareHomeAnalytics,
            "/care-home/settings" => Self::CareHomeSettings,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::SignUp => "/signup",
            Self::Profile => "/profile",
            Self::FoodAnalysis => "/food-analysis",
            Self::Recommendations => "/recommendations",
            Self::Settings => "/settings",
            Self::CareHomeDashboard => "/care-home",
            Self::CareHomeMealPlanning => "/care-home/meal-planning",
            Self::CareHomeFoodAnalysis => "/care-home/food-analysis",
            Self::CareHomeAnalytics => "/care-home/analytics",
            Self::CareHomeSettings => "/care-home/settings",
            Self::NotFound => "/404",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
