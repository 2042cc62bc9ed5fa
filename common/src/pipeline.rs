//! 表示の導出パイプライン
//!
//! (レコード, 表示状態, レビュー状態) → 現在ページの行と集計値。
//! 副作用なし。状態が変わるたびに呼び直す。

use crate::award::{award_style, AwardStyle};
use crate::filter::filter_records;
use crate::review::ReviewState;
use crate::sort::sort_records;
use crate::stats::Stats;
use crate::types::Record;
use crate::view::{clamp_page, ViewState};
use serde::Serialize;

/// 1ページの件数
pub const PAGE_SIZE: usize = 25;

/// 空欄の表示
pub const PLACEHOLDER: &str = "-";

/// 表示用の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryRow {
    pub record: Record,
    pub award_style: AwardStyle,
    pub reviewed: bool,
}

impl DirectoryRow {
    pub fn new(record: &Record, review: &ReviewState) -> Self {
        Self {
            record: record.clone(),
            award_style: award_style(&record.award),
            reviewed: review.contains(&record.id),
        }
    }

    pub fn location(&self) -> String {
        self.record.location()
    }
}

/// 空欄ならプレースホルダ
pub fn display_or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// 導出結果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedView {
    pub rows: Vec<DirectoryRow>,
    pub filtered_count: usize,
    /// 範囲内に丸めたページ番号
    pub page: usize,
    pub page_count: usize,
    pub stats: Stats,
}

impl DerivedView {
    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.page_count
    }
}

/// ceil(件数 / PAGE_SIZE)
pub fn page_count(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE)
}

/// 絞り込み＋ソート済みの全件（ページ分割前）
pub fn sorted_matches<'a>(
    records: &'a [Record],
    view: &ViewState,
    review: &ReviewState,
) -> Vec<&'a Record> {
    let mut matched = filter_records(records, view, review);
    sort_records(&mut matched, view.sort_field, view.sort_direction);
    matched
}

/// ページ番号（1始まり）に対応する窓
pub fn page_window<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// 表示を導出
pub fn derive_view(records: &[Record], view: &ViewState, review: &ReviewState) -> DerivedView {
    let sorted = sorted_matches(records, view, review);
    let filtered_count = sorted.len();
    let page_count = page_count(filtered_count);
    let page = clamp_page(view.page, page_count);

    let rows = page_window(&sorted, page)
        .iter()
        .map(|r| DirectoryRow::new(r, review))
        .collect();

    DerivedView {
        rows,
        filtered_count,
        page,
        page_count,
        stats: Stats::compute(records.len(), review.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SortDirection, SortField, StatusFilter};

    fn numbered(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record {
                id: format!("r{}", i),
                restaurant: format!("Restaurant {:03}", i),
                ..Default::default()
            })
            .collect()
    }

    fn row_ids(view: &DerivedView) -> Vec<String> {
        view.rows.iter().map(|r| r.record.id.clone()).collect()
    }

    #[test]
    fn test_thirty_records_two_pages() {
        let records = numbered(30);
        let review = ReviewState::default();
        let mut view = ViewState::default();

        let first = derive_view(&records, &view, &review);
        assert_eq!(first.page_count, 2);
        assert_eq!(first.filtered_count, 30);
        assert_eq!(first.rows.len(), 25);
        assert_eq!(first.rows[0].record.id, "r1");
        assert_eq!(first.rows[24].record.id, "r25");
        assert!(first.is_first_page());

        view.page = 2;
        let second = derive_view(&records, &view, &review);
        assert_eq!(row_ids(&second), vec!["r26", "r27", "r28", "r29", "r30"]);
        assert!(second.is_last_page());
    }

    #[test]
    fn test_empty_record_set() {
        let derived = derive_view(&[], &ViewState::default(), &ReviewState::default());
        assert_eq!(derived.page_count, 0);
        assert!(derived.rows.is_empty());
        assert_eq!(derived.stats.total, 0);
        assert_eq!(derived.stats.progress, 0);
        assert_eq!(derived.page, 1);
    }

    #[test]
    fn test_page_count_formula() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(25), 1);
        assert_eq!(page_count(26), 2);
        assert_eq!(page_count(50), 2);
        assert_eq!(page_count(51), 3);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let records = numbered(30);
        let view = ViewState { page: 9, ..Default::default() };
        let derived = derive_view(&records, &view, &ReviewState::default());
        assert_eq!(derived.page, 2);
        assert_eq!(derived.rows.len(), 5);
    }

    #[test]
    fn test_page_window_bounds() {
        let items: Vec<usize> = (0..30).collect();
        assert_eq!(page_window(&items, 1).len(), 25);
        assert_eq!(page_window(&items, 2), &[25, 26, 27, 28, 29]);
        assert!(page_window(&items, 3).is_empty());
        assert_eq!(page_window(&items, 0).len(), 25);
    }

    #[test]
    fn test_sort_applies_before_pagination() {
        let records = numbered(30);
        let view = ViewState {
            sort_direction: SortDirection::Descending,
            ..Default::default()
        };
        let derived = derive_view(&records, &view, &ReviewState::default());
        assert_eq!(derived.rows[0].record.id, "r30");
        assert_eq!(derived.rows[24].record.id, "r6");
    }

    #[test]
    fn test_rows_carry_review_flag_and_style() {
        let mut records = numbered(3);
        records[1].award = "Grand Award".into();
        let mut review = ReviewState::default();
        review.toggle("r2");

        let derived = derive_view(&records, &ViewState::default(), &review);
        let row = &derived.rows[1];
        assert!(row.reviewed);
        assert_eq!(row.award_style, award_style("Grand Award"));
        assert!(!derived.rows[0].reviewed);
        assert_eq!(derived.stats.reviewed, 1);
        assert_eq!(derived.stats.progress, 33);
    }

    #[test]
    fn test_status_filter_uses_review_state() {
        let records = numbered(30);
        let mut review = ReviewState::default();
        for id in ["r3", "r10", "r29"] {
            review.toggle(id);
        }
        let view = ViewState {
            status: StatusFilter::Seen,
            sort_field: SortField::Restaurant,
            ..Default::default()
        };
        let derived = derive_view(&records, &view, &review);
        assert_eq!(row_ids(&derived), vec!["r3", "r10", "r29"]);
        assert_eq!(derived.page_count, 1);
    }

    #[test]
    fn test_display_or_placeholder() {
        assert_eq!(display_or_placeholder(""), "-");
        assert_eq!(display_or_placeholder("Rajat Parr"), "Rajat Parr");
    }
}
