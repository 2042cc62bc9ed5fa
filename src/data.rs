//! レコードファイルの読み込み

use crate::error::{DirectoryError, Result};
use somm_directory_common::{Record, RecordSet};
use std::path::Path;

/// JSON配列のレコードファイルを読み込み、id重複を検査する
pub fn load_records(path: &Path) -> Result<RecordSet> {
    if !path.exists() {
        return Err(DirectoryError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&content)?;
    let set = RecordSet::new(records)?;
    tracing::debug!(path = %path.display(), records = set.len(), "loaded record set");
    Ok(set)
}
