//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现 [`KeyValueStore`]，供打卡门控持久化日期。
//! 隐私模式等环境下 localStorage 可能不可用，此时返回 `StoreError::Unavailable`。

use zpire_shared::error::{StoreError, StoreResult};
use zpire_shared::gate::KeyValueStore;

/// 浏览器 localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::read(key, format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::write(key, format!("{:?}", e)))
    }
}
