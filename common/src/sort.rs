//! ソート
//!
//! 選択フィールドを小文字化し、collate の順序で安定ソートする。

use crate::collate::collation_key;
use crate::types::{Record, SortDirection, SortField};
use std::cmp::Reverse;

/// 安定ソート（同値は元の順序を保つ）
///
/// キーはレコードごとに1回だけ生成する。
pub fn sort_records(records: &mut [&Record], field: SortField, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => {
            records.sort_by_cached_key(|r| collation_key(&r.field(field).to_lowercase()))
        }
        SortDirection::Descending => {
            records.sort_by_cached_key(|r| Reverse(collation_key(&r.field(field).to_lowercase())))
        }
    }
}
