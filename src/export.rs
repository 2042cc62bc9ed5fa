//! Excel出力（CLI版）

use crate::error::{DirectoryError, Result};
use somm_directory_common::export::excel_core::generate_excel_buffer;
use somm_directory_common::{DirectoryController, KeyValueStore};
use std::path::{Path, PathBuf};

/// ディレクトリまたは拡張子なしなら "<title>.xlsx" を付ける
pub fn output_path_for(output: &Path, title: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", file_stem(title)))
    } else {
        output.to_path_buf()
    }
}

/// タイトルをファイル名に使える形へ（区切り文字・予約文字は "_"）
fn file_stem(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        "export".to_string()
    } else {
        trimmed.to_string()
    }
}

/// 絞り込み・ソート済みの全件（ページ分割なし）を出力
pub fn export_excel<S: KeyValueStore>(
    controller: &DirectoryController<S>,
    output: &Path,
    title: &str,
) -> Result<PathBuf> {
    let matches = controller.all_matches();
    let buffer = generate_excel_buffer(&matches, controller.review_state(), title)
        .map_err(|e| DirectoryError::ExcelGeneration(e.to_string()))?;

    let output_path = output_path_for(output, title);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output_path, buffer)?;
    tracing::debug!(path = %output_path.display(), rows = matches.len(), "excel written");
    Ok(output_path)
}
