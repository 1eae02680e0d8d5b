use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 表单校验错误
// =========================================================

/// 表单错误类型
/// 校验失败是本地且可恢复的：错误只用于在当前标签页上显示提示，草稿保持不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormErrorKind {
    /// 必填字段为空
    MissingField,
    /// 两次输入的密码不一致
    PasswordMismatch,
    /// 目标标签页尚不可用 (前置标签页未通过校验)
    TabLocked,
}

impl FormErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            FormErrorKind::MissingField => "MISSING_FIELD",
            FormErrorKind::PasswordMismatch => "PASSWORD_MISMATCH",
            FormErrorKind::TabLocked => "TAB_LOCKED",
        }
    }
}

/// 表单级或字段级的校验错误
///
/// `field` 为 `None` 时表示整个表单级别的错误。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormError {
    pub kind: FormErrorKind,
    pub field: Option<String>,
    pub message: String,
}

impl FormError {
    pub fn new(kind: FormErrorKind, field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.map(str::to_string),
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn missing_field(field: &str, label: &str) -> Self {
        Self::new(
            FormErrorKind::MissingField,
            Some(field),
            format!("{} is required", label),
        )
    }

    pub fn password_mismatch(field: &str) -> Self {
        Self::new(
            FormErrorKind::PasswordMismatch,
            Some(field),
            "Passwords don't match!",
        )
    }

    pub fn tab_locked(message: impl Into<String>) -> Self {
        Self::new(FormErrorKind::TabLocked, None, message)
    }

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    /// 该错误是否属于指定字段
    pub fn is_for(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}: {}", self.error_code(), field, self.message),
            None => write!(f, "[{}] {}", self.error_code(), self.message),
        }
    }
}

impl std::error::Error for FormError {}

pub type FormResult<T> = Result<T, FormError>;

// =========================================================
// 持久化存储错误
// =========================================================

/// 键值存储错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 存储不可用 (例如隐私模式下 localStorage 被禁用)
    Unavailable,
    /// 读取失败
    Read { key: String, reason: String },
    /// 写入失败 (例如超出配额)
    Write { key: String, reason: String },
}

impl StoreError {
    pub fn read(key: &str, reason: impl Into<String>) -> Self {
        StoreError::Read {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub fn write(key: &str, reason: impl Into<String>) -> Self {
        StoreError::Write {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "storage unavailable"),
            StoreError::Read { key, reason } => write!(f, "storage.get({}) failed: {}", key, reason),
            StoreError::Write { key, reason } => {
                write!(f, "storage.set({}) failed: {}", key, reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;
