//! 具体表单定义
//!
//! 每个表单都是一个 [`FormSpec`](crate::wizard::FormSpec)，由 [`FormWizard`](crate::wizard::FormWizard) 驱动。

pub mod care_home_settings;
pub mod check_in;
pub mod login;
pub mod medical;
pub mod profile;
pub mod settings;
pub mod signup;

pub use care_home_settings::{CareHomeSettingsForm, CareHomeSettingsTab};
pub use check_in::CheckInForm;
pub use login::{LoginForm, UserType};
pub use profile::{ProfileForm, ProfileTab};
pub use settings::{SettingsForm, SettingsTab};
pub use signup::{SignUpForm, SignUpTab};

/// 单标签页表单使用的标签类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SingleTab {
    Main,
}
