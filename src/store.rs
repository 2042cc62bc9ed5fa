//! ファイル版キー・バリューストア
//!
//! JSONオブジェクト（キー → 文字列）を1ファイルに保存する。
//! 書き込みは毎回ファイル全体を一時ファイル経由で置き換える。

use somm_directory_common::{KeyValueStore, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    slots: BTreeMap<String, String>,
}

impl FileStore {
    /// ストアファイルを開く（存在しない・壊れている場合は空）
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            slots: Self::read_slots(path),
        }
    }

    fn read_slots(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            return BTreeMap::new();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "store file unreadable");
                return BTreeMap::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(slots) => slots,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "store file malformed, starting empty");
                BTreeMap::new()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_name = self.path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, &self.slots)?;
            writer.flush()?;
        }
        std::fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), "store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        self.write_all()
    }
}
