//! 运行时配置
//!
//! 所有值都有默认常量，可在构建时通过环境变量覆盖。

use std::time::Duration;

use crate::route::RouteTables;

/// 这些是默认值，如果构建时未设置对应的环境变量，则使用这些值
pub const DEFAULT_CHECK_IN_DELAY_MS: u64 = 3000;
pub const DEFAULT_CHECK_IN_KEY: &str = "lastHealthCheckIn";
pub const DEFAULT_LANDING_PATH: &str = "/";

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 每日健康打卡弹窗的延迟
    pub check_in_delay: Duration,
    /// 记录上次弹窗日期的存储键
    pub check_in_key: String,
    /// 注销后跳转的落地页
    pub landing_path: &'static str,
    /// 角色推断使用的路由前缀表
    pub route_tables: &'static RouteTables,
}

impl AppConfig {
    /// 读取构建时变量 `ZPIRE_CHECK_IN_DELAY_MS` / `ZPIRE_CHECK_IN_KEY`，读不到就用默认值
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("ZPIRE_CHECK_IN_DELAY_MS"),
            option_env!("ZPIRE_CHECK_IN_KEY"),
        )
    }

    fn from_vars(delay_ms: Option<&str>, key: Option<&str>) -> Self {
        let delay_ms = delay_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_CHECK_IN_DELAY_MS);

        Self {
            check_in_delay: Duration::from_millis(delay_ms),
            check_in_key: key
                .filter(|k| !k.trim().is_empty())
                .unwrap_or(DEFAULT_CHECK_IN_KEY)
                .to_string(),
            landing_path: DEFAULT_LANDING_PATH,
            route_tables: RouteTables::standard(),
        }
    }

    pub fn with_check_in_delay(mut self, delay: Duration) -> Self {
        self.check_in_delay = delay;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
