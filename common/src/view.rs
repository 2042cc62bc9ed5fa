//! 表示状態（セッション中のみ保持）
//!
//! 絞り込み条件を変更するとページは1に戻る。
//! ソート変更ではページを維持する。

use crate::types::{SortDirection, SortField, StatusFilter};
use serde::{Deserialize, Serialize};

/// 検索・絞り込み・ソート・ページ番号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub search: String,
    pub country: String,
    pub award: String,
    pub status: StatusFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1始まり
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            country: String::new(),
            award: String::new(),
            status: StatusFilter::All,
            sort_field: SortField::Restaurant,
            sort_direction: SortDirection::Ascending,
            page: 1,
        }
    }
}

impl ViewState {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
        self.page = 1;
    }

    pub fn set_award(&mut self, award: impl Into<String>) {
        self.award = award.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    /// 絞り込み条件のみ初期化（ソートは維持）
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.country.clear();
        self.award.clear();
        self.status = StatusFilter::All;
        self.page = 1;
    }

    /// 見出しクリック: 同じフィールドなら方向反転、別フィールドなら昇順
    pub fn select_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.country.is_empty()
            || !self.award.is_empty()
            || self.status != StatusFilter::All
    }

    pub fn first_page(&mut self) {
        self.page = 1;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, page_count: usize) {
        self.page = clamp_page(self.page + 1, page_count);
    }

    pub fn last_page(&mut self, page_count: usize) {
        self.page = clamp_page(page_count, page_count);
    }

    pub fn go_to_page(&mut self, page: usize, page_count: usize) {
        self.page = clamp_page(page, page_count);
    }
}

/// min(page, max(1, page_count)) かつ 1 以上
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.max(1)).max(1)
}
