//! localStorage版キー・バリューストア

use somm_directory_common::{Error, KeyValueStore, Result};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = local_storage()
            .ok_or_else(|| Error::Storage("localStorageが利用できません".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("localStorage書き込み失敗: {:?}", e)))
    }
}
