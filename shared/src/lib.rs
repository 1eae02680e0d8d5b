//! ZPIRE Nutrition 领域逻辑
//!
//! 不依赖 DOM 的纯逻辑层，前端通过适配器 trait 注入浏览器能力：
//! - `route`: 路径分类与会话视图
//! - `menu`: 按角色构建导航菜单
//! - `gate`: 每日健康打卡门控
//! - `wizard` / `forms`: 多标签页表单向导及具体表单
//! - `fixtures`: 共享的静态示例数据

pub mod log;

pub mod config;
pub mod date;
pub mod error;
pub mod fixtures;
pub mod forms;
pub mod gate;
pub mod menu;
pub mod route;
pub mod wizard;

pub use chrono;

pub use config::AppConfig;
pub use date::Clock;
pub use error::{FormError, FormErrorKind, FormResult, StoreError, StoreResult};
pub use gate::{CheckInGate, GateState, KeyValueStore, TaskHandle, TaskScheduler};
pub use menu::{IconTag, MenuItem, NavEntry, build_menu, build_nav};
pub use route::{Role, RouteTables, SessionView};
pub use wizard::{FieldValue, FormDraft, FormSnapshot, FormSpec, FormWizard, SubmitOutcome};
