use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DATA_ENV: &str = "SOMM_DATA";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// レコードJSONファイル
    pub data_path: Option<PathBuf>,
    /// レビュー状態の保存先
    pub store_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DirectoryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("somm-directory"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// データファイル: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_data_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(DATA_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        self.data_path.clone().ok_or(DirectoryError::MissingDataPath)
    }

    /// 保存先: 引数 > 設定ファイル > ~/.config/somm-directory/store.json
    pub fn resolve_store_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("store.json")),
        }
    }

    pub fn set_data_path(&mut self, path: PathBuf) -> Result<()> {
        self.data_path = Some(path);
        self.save()
    }

    pub fn set_store_path(&mut self, path: PathBuf) -> Result<()> {
        self.store_path = Some(path);
        self.save()
    }
}
