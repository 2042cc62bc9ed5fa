//! ディレクトリ表示コントローラ
//!
//! 不変のレコード列・表示状態・レビュー状態・ストアを保持し、
//! 状態遷移のたびに表示を導出し直す。

use crate::pipeline::{derive_view, sorted_matches, DerivedView};
use crate::review::ReviewState;
use crate::stats::Stats;
use crate::store::KeyValueStore;
use crate::types::{Record, RecordSet, SortField, StatusFilter};
use crate::view::ViewState;

pub struct DirectoryController<S: KeyValueStore> {
    records: RecordSet,
    countries: Vec<String>,
    view: ViewState,
    review: ReviewState,
    store: S,
    current: DerivedView,
}

impl<S: KeyValueStore> DirectoryController<S> {
    /// 起動時: ストアからレビュー状態を読み込み、初回の導出を行う
    pub fn new(records: RecordSet, store: S) -> Self {
        let review = ReviewState::load(&store);
        Self::with_view(records, store, review, ViewState::default())
    }

    /// 表示状態を指定して作成（CLIの引数など）
    pub fn with_view(records: RecordSet, store: S, review: ReviewState, view: ViewState) -> Self {
        let countries = records.countries();
        let mut controller = Self {
            records,
            countries,
            view,
            review,
            store,
            current: DerivedView::default(),
        };
        controller.rederive();
        controller
    }

    /// 表示を導出し直し、ページ番号を範囲内に戻す
    fn rederive(&mut self) {
        self.current = derive_view(self.records.records(), &self.view, &self.review);
        self.view.page = self.current.page;
    }

    /// 直近の導出結果
    pub fn current(&self) -> &DerivedView {
        &self.current
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn review_state(&self) -> &ReviewState {
        &self.review
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn stats(&self) -> Stats {
        self.current.stats
    }

    pub fn is_reviewed(&self, id: &str) -> bool {
        self.review.contains(id)
    }

    /// 絞り込み・ソート済みの全件（ページ分割なし）
    pub fn all_matches(&self) -> Vec<&Record> {
        sorted_matches(self.records.records(), &self.view, &self.review)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
        self.rederive();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.view.set_country(country);
        self.rederive();
    }

    pub fn set_award(&mut self, award: impl Into<String>) {
        self.view.set_award(award);
        self.rederive();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.view.set_status(status);
        self.rederive();
    }

    pub fn reset_filters(&mut self) {
        self.view.reset_filters();
        self.rederive();
    }

    pub fn select_sort(&mut self, field: SortField) {
        self.view.select_sort(field);
        self.rederive();
    }

    pub fn first_page(&mut self) {
        self.view.first_page();
        self.rederive();
    }

    pub fn previous_page(&mut self) {
        self.view.previous_page();
        self.rederive();
    }

    pub fn next_page(&mut self) {
        self.view.next_page(self.current.page_count);
        self.rederive();
    }

    pub fn last_page(&mut self) {
        self.view.last_page(self.current.page_count);
        self.rederive();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.view.go_to_page(page, self.current.page_count);
        self.rederive();
    }

    /// レビュー状態を反転し、全体をストアへ書き込む
    ///
    /// 書き込み失敗はログのみ（メモリ上の状態は変更する）。
    /// 戻り値は変更後のレビュー済みフラグ。
    pub fn toggle_review(&mut self, id: &str) -> bool {
        let reviewed = self.review.toggle(id);
        if let Err(e) = self.review.persist(&mut self.store) {
            tracing::warn!(error = %e, id, "failed to persist review state");
        }
        self.rederive();
        reviewed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::review::SEEN_ITEMS_KEY;
    use crate::store::MemoryStore;
    use crate::types::SortDirection;

    fn records(n: usize) -> RecordSet {
        let countries = ["Italy", "France", "USA"];
        let awards = ["Grand Award", "Best of Award of Excellence", "Award of Excellence"];
        let list = (1..=n)
            .map(|i| Record {
                id: format!("r{}", i),
                restaurant: format!("Restaurant {:03}", i),
                country: countries[i % 3].to_string(),
                award: awards[(i / 3) % 3].to_string(),
                ..Default::default()
            })
            .collect();
        RecordSet::new(list).unwrap()
    }

    #[test]
    fn test_startup_loads_review_state() {
        let store = MemoryStore::with_slot(SEEN_ITEMS_KEY, r#"["r1","r2"]"#);
        let controller = DirectoryController::new(records(10), store);
        assert!(controller.is_reviewed("r1"));
        assert_eq!(controller.stats().reviewed, 2);
        assert_eq!(controller.stats().progress, 20);
    }

    #[test]
    fn test_startup_with_malformed_payload() {
        let store = MemoryStore::with_slot(SEEN_ITEMS_KEY, "{oops");
        let controller = DirectoryController::new(records(10), store);
        assert!(controller.review_state().is_empty());
        assert_eq!(controller.current().rows.len(), 10);
    }

    #[test]
    fn test_toggle_persists_whole_set() {
        let mut controller = DirectoryController::new(records(10), MemoryStore::new());
        assert!(controller.toggle_review("r7"));
        assert_eq!(controller.store().get(SEEN_ITEMS_KEY).as_deref(), Some(r#"["r7"]"#));
        assert!(controller.toggle_review("r3"));
        assert_eq!(controller.store().get(SEEN_ITEMS_KEY).as_deref(), Some(r#"["r7","r3"]"#));
        assert!(!controller.toggle_review("r7"));
        assert_eq!(controller.store().get(SEEN_ITEMS_KEY).as_deref(), Some(r#"["r3"]"#));
    }

    #[test]
    fn test_filter_change_resets_page_from_five() {
        let mut controller = DirectoryController::new(records(200), MemoryStore::new());
        controller.go_to_page(5);
        assert_eq!(controller.current().page, 5);

        controller.set_country("Italy");
        assert_eq!(controller.view_state().page, 1);
        assert_eq!(controller.current().page, 1);
    }

    #[test]
    fn test_sort_and_toggle_keep_page() {
        let mut controller = DirectoryController::new(records(200), MemoryStore::new());
        controller.go_to_page(4);
        controller.select_sort(SortField::Country);
        assert_eq!(controller.current().page, 4);
        controller.toggle_review("r1");
        assert_eq!(controller.current().page, 4);
    }

    #[test]
    fn test_toggle_under_status_filter_clamps_page() {
        let mut controller = DirectoryController::new(records(26), MemoryStore::new());
        controller.set_status(StatusFilter::Unseen);
        controller.last_page();
        assert_eq!(controller.current().page, 2);

        // 2ページ目の唯一の行をレビュー済みにすると1ページに減る
        let id = controller.current().rows[0].record.id.clone();
        controller.toggle_review(&id);
        assert_eq!(controller.current().page_count, 1);
        assert_eq!(controller.current().page, 1);
        assert_eq!(controller.view_state().page, 1);
    }

    #[test]
    fn test_navigation() {
        let mut controller = DirectoryController::new(records(60), MemoryStore::new());
        assert_eq!(controller.current().page_count, 3);
        controller.next_page();
        controller.next_page();
        controller.next_page();
        assert_eq!(controller.current().page, 3);
        controller.previous_page();
        assert_eq!(controller.current().page, 2);
        controller.first_page();
        assert_eq!(controller.current().page, 1);
        controller.last_page();
        assert_eq!(controller.current().rows.len(), 10);
    }

    #[test]
    fn test_select_sort_twice_toggles() {
        let mut controller = DirectoryController::new(records(5), MemoryStore::new());
        controller.select_sort(SortField::Restaurant);
        assert_eq!(controller.view_state().sort_direction, SortDirection::Descending);
        assert_eq!(controller.current().rows[0].record.id, "r5");
    }

    #[test]
    fn test_countries_and_all_matches() {
        let mut controller = DirectoryController::new(records(60), MemoryStore::new());
        assert_eq!(controller.countries(), &["France", "Italy", "USA"]);
        controller.set_country("France");
        controller.set_award("Grand Award");
        let all = controller.all_matches();
        assert!(all.iter().all(|r| r.country == "France" && r.award == "Grand Award"));
        assert_eq!(all.len(), controller.current().filtered_count);
    }

    #[test]
    fn test_reset_filters() {
        let mut controller = DirectoryController::new(records(60), MemoryStore::new());
        controller.set_search("restaurant 01");
        assert_eq!(controller.current().filtered_count, 10);
        controller.reset_filters();
        assert_eq!(controller.current().filtered_count, 60);
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_write_failure_still_toggles() {
        let mut controller = DirectoryController::new(records(3), FailingStore);
        assert!(controller.toggle_review("r2"));
        assert!(controller.is_reviewed("r2"));
    }
}
