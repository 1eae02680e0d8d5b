//! 导航菜单构建模块
//!
//! 按角色选择三张固定菜单表之一，并为每一项计算「当前路径高亮」状态。

use serde::{Deserialize, Serialize};

use crate::route::{Role, matches_prefix};

/// 菜单图标标签，由 UI 层映射到具体图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTag {
    Home,
    LogIn,
    UserPlus,
    User,
    Camera,
    Utensils,
    Settings,
    Building,
    Calendar,
    BarChart,
}

/// 菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub target: &'static str,
    pub icon: IconTag,
}

impl MenuItem {
    const fn new(label: &'static str, target: &'static str, icon: IconTag) -> Self {
        Self {
            label,
            target,
            icon,
        }
    }

    /// 当前路径等于目标，或 (非根目标) 当前路径以目标为前缀时，该项处于激活状态
    pub fn is_active(&self, current_path: &str) -> bool {
        // 根前缀只匹配根路径本身
        matches_prefix(current_path, self.target)
    }
}

const ANONYMOUS_MENU: &[MenuItem] = &[
    MenuItem::new("Home", "/", IconTag::Home),
    MenuItem::new("Log In", "/login", IconTag::LogIn),
    MenuItem::new("Sign Up", "/signup", IconTag::UserPlus),
];

const INDIVIDUAL_MENU: &[MenuItem] = &[
    MenuItem::new("Home", "/", IconTag::Home),
    MenuItem::new("Profile", "/profile", IconTag::User),
    MenuItem::new("Food Analysis", "/food-analysis", IconTag::Camera),
    MenuItem::new("Recommendations", "/recommendations", IconTag::Utensils),
    MenuItem::new("Settings", "/settings", IconTag::Settings),
];

const CARE_HOME_MENU: &[MenuItem] = &[
    MenuItem::new("Dashboard", "/care-home", IconTag::Building),
    MenuItem::new("Meal Planning", "/care-home/meal-planning", IconTag::Calendar),
    MenuItem::new("Food Analysis", "/care-home/food-analysis", IconTag::Camera),
    MenuItem::new("Analytics", "/care-home/analytics", IconTag::BarChart),
    MenuItem::new("Settings", "/care-home/settings", IconTag::Settings),
];

/// 按角色返回固定菜单表
pub fn build_menu(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Anonymous => ANONYMOUS_MENU,
        Role::Individual => INDIVIDUAL_MENU,
        Role::CareHome => CARE_HOME_MENU,
    }
}

/// 带高亮状态的菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub item: MenuItem,
    pub active: bool,
}

/// 构建导航条：菜单表 + 每项的激活状态
pub fn build_nav(role: Role, current_path: &str) -> Vec<NavEntry> {
    build_menu(role)
        .iter()
        .map(|item| NavEntry {
            item: *item,
            active: item.is_active(current_path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROLES: [Role; 3] = [Role::Anonymous, Role::Individual, Role::CareHome];

    #[test]
    fn test_every_role_has_a_menu() {
        for role in ROLES {
            assert!(!build_menu(role).is_empty(), "role {}", role);
        }
    }

    #[test]
    fn test_menu_is_deterministic() {
        for role in ROLES {
            assert_eq!(build_menu(role), build_menu(role));
            assert_eq!(build_nav(role, "/"), build_nav(role, "/"));
        }
    }

    #[test]
    fn test_anonymous_menu_targets() {
        let targets: Vec<_> = build_menu(Role::Anonymous).iter().map(|i| i.target).collect();
        assert_eq!(targets, vec!["/", "/login", "/signup"]);
    }

    #[test]
    fn test_care_home_menu_targets() {
        let targets: Vec<_> = build_menu(Role::CareHome).iter().map(|i| i.target).collect();
        assert_eq!(
            targets,
            vec![
                "/care-home",
                "/care-home/meal-planning",
                "/care-home/food-analysis",
                "/care-home/analytics",
                "/care-home/settings",
            ]
        );
    }

    #[test]
    fn test_root_item_only_active_on_root() {
        let home = build_menu(Role::Individual)[0];
        assert!(home.is_active("/"));
        assert!(home.is_active(""));
        assert!(!home.is_active("/profile"));
    }

    #[test]
    fn test_nested_path_highlights_parent() {
        let nav = build_nav(Role::CareHome, "/care-home/settings");
        let active: Vec<_> = nav
            .iter()
            .filter(|e| e.active)
            .map(|e| e.item.label)
            .collect();
        assert_eq!(active, vec!["Dashboard", "Settings"]);
    }

    #[test]
    fn test_exact_match_with_trailing_slash() {
        let nav = build_nav(Role::Individual, "/recommendations/");
        let active: Vec<_> = nav
            .iter()
            .filter(|e| e.active)
            .map(|e| e.item.target)
            .collect();
        assert_eq!(active, vec!["/recommendations"]);
    }
}
