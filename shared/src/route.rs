//! 路径分类模块 - 领域模型
//!
//! 纯函数层，不依赖 DOM 或 web_sys。
//! 根据当前 URL path 推断访客角色 (匿名 / 个人用户 / 养老院)。

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 访客角色
///
/// 从不作为权威状态存储，每次导航时都从当前路径重新推导。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Anonymous,
    Individual,
    CareHome,
}

impl Role {
    pub fn is_logged_in(&self) -> bool {
        !matches!(self, Role::Anonymous)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Anonymous => "anonymous",
            Role::Individual => "individual",
            Role::CareHome => "care_home",
        };
        write!(f, "{}", name)
    }
}

/// 角色推断使用的两组路径前缀
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTables {
    pub individual_prefixes: &'static [&'static str],
    pub care_home_prefixes: &'static [&'static str],
}

static STANDARD_TABLES: RouteTables = RouteTables {
    individual_prefixes: &["/profile", "/food-analysis", "/recommendations", "/settings"],
    care_home_prefixes: &["/care-home"],
};

impl RouteTables {
    /// 应用内置的路由前缀表
    pub fn standard() -> &'static RouteTables {
        &STANDARD_TABLES
    }

    /// **核心分类逻辑**
    ///
    /// 养老院前缀优先：`/care-home/settings` 即使同时命中个人前缀，也归为 `CareHome`。
    pub fn classify(&self, path: &str) -> Role {
        let path = normalize_path(path);

        if self
            .care_home_prefixes
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
        {
            return Role::CareHome;
        }

        if self
            .individual_prefixes
            .iter()
            .chain(self.care_home_prefixes.iter())
            .any(|prefix| matches_prefix(path, prefix))
        {
            return Role::Individual;
        }

        Role::Anonymous
    }
}

/// 会话视图
///
/// 由顶层导航控制器持有，每次路径变化时重建，从不持久化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionView {
    pub role: Role,
    pub is_logged_in: bool,
}

impl SessionView {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            is_logged_in: role.is_logged_in(),
        }
    }

    /// 注销后的会话状态
    pub fn anonymous() -> Self {
        Self::new(Role::Anonymous)
    }

    /// 从路径同步重新计算会话视图
    pub fn from_path(path: &str, tables: &RouteTables) -> Self {
        Self::new(tables.classify(path))
    }

    /// 是否为已登录的个人用户 (每日打卡只对这种会话生效)
    pub fn is_individual(&self) -> bool {
        self.is_logged_in && self.role == Role::Individual
    }

    /// 页头问候语
    pub fn greeting(&self) -> Option<&'static str> {
        match self.role {
            Role::Anonymous => None,
            Role::Individual => Some("Welcome back"),
            Role::CareHome => Some("Care Home Staff"),
        }
    }
}

/// 规范化路径：去掉查询串和片段，去掉末尾的 `/`，空串视为根路径
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// 前缀匹配：`path == prefix`，或 `path` 以 `prefix` 开头且紧跟路径分隔符
///
/// 根前缀 `/` 只匹配根路径本身。
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    let path = normalize_path(path);
    let prefix = normalize_path(prefix);

    if path == prefix {
        return true;
    }
    if prefix == "/" {
        return false;
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static RouteTables {
        RouteTables::standard()
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/profile/"), "/profile");
        assert_eq!(normalize_path("/login?userType=carehome"), "/login");
        assert_eq!(normalize_path("/care-home/#top"), "/care-home");
    }

    #[test]
    fn test_prefix_requires_separator() {
        assert!(matches_prefix("/profile", "/profile"));
        assert!(matches_prefix("/profile/edit", "/profile"));
        assert!(!matches_prefix("/profiles", "/profile"));
        assert!(!matches_prefix("/care-homes", "/care-home"));
    }

    #[test]
    fn test_root_prefix_matches_only_root() {
        assert!(matches_prefix("/", "/"));
        assert!(matches_prefix("", "/"));
        assert!(!matches_prefix("/profile", "/"));
    }

    #[test]
    fn test_individual_routes() {
        for path in ["/profile", "/food-analysis", "/recommendations", "/settings"] {
            assert_eq!(tables().classify(path), Role::Individual, "path {}", path);
        }
        assert_eq!(tables().classify("/settings/"), Role::Individual);
    }

    #[test]
    fn test_care_home_routes() {
        for path in [
            "/care-home",
            "/care-home/meal-planning",
            "/care-home/food-analysis",
            "/care-home/analytics",
            "/care-home/settings",
        ] {
            assert_eq!(tables().classify(path), Role::CareHome, "path {}", path);
        }
    }

    #[test]
    fn test_anonymous_routes() {
        for path in ["", "/", "/login", "/signup", "/unknown", "/profiles"] {
            assert_eq!(tables().classify(path), Role::Anonymous, "path {}", path);
        }
    }

    #[test]
    fn test_care_home_precedence_over_individual() {
        // 同一路径同时命中两组前缀时，养老院优先，与列表顺序无关
        let tables = RouteTables {
            individual_prefixes: &["/care-home/settings", "/settings"],
            care_home_prefixes: &["/care-home"],
        };
        assert_eq!(tables.classify("/care-home/settings"), Role::CareHome);
        assert_eq!(tables.classify("/settings"), Role::Individual);
    }

    #[test]
    fn test_session_view_from_path() {
        let view = SessionView::from_path("/profile", tables());
        assert_eq!(view.role, Role::Individual);
        assert!(view.is_logged_in);
        assert!(view.is_individual());

        let view = SessionView::from_path("/care-home/settings", tables());
        assert_eq!(view, SessionView::new(Role::CareHome));
        assert!(!view.is_individual());

        assert_eq!(SessionView::from_path("/", tables()), SessionView::anonymous());
        assert!(!SessionView::anonymous().is_logged_in);
    }

    #[test]
    fn test_greeting_per_role() {
        assert_eq!(SessionView::anonymous().greeting(), None);
        assert_eq!(
            SessionView::new(Role::Individual).greeting(),
            Some("Welcome back")
        );
        assert_eq!(
            SessionView::new(Role::CareHome).greeting(),
            Some("Care Home Staff")
        );
    }
}
