//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::browser_store::BrowserStore;
use crate::components::{
    header::Header,
    stats_panel::StatsPanel,
    filter_bar::FilterBar,
    directory_table::DirectoryTable,
    pagination::{PageNav, Pagination},
};
use somm_directory_common::{DirectoryController, RecordSet, SortField, StatusFilter};

/// 同梱レコード
const RESTAURANTS_JSON: &str = include_str!("../../data/restaurants.json");

fn load_records() -> RecordSet {
    match RecordSet::from_json(RESTAURANTS_JSON) {
        Ok(records) => records,
        Err(e) => {
            gloo::console::error!(format!("レコード読み込み失敗: {}", e));
            RecordSet::default()
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 起動時にlocalStorageからレビュー状態を読み込む
    let controller = RwSignal::new(DirectoryController::new(load_records(), BrowserStore));

    // 導出結果
    let derived = Memo::new(move |_| controller.with(|c| c.current().clone()));
    let view_state = Memo::new(move |_| controller.with(|c| c.view_state().clone()));
    let rows = Memo::new(move |_| derived.with(|d| d.rows.clone()));
    let stats = Memo::new(move |_| derived.with(|d| d.stats));
    let total = Memo::new(move |_| stats.get().total);
    let filtered_count = Memo::new(move |_| derived.with(|d| d.filtered_count));
    let countries = controller.with_untracked(|c| c.countries().to_vec());

    // 絞り込みハンドラ（いずれもページを1に戻す）
    let on_search = move |value: String| controller.update(|c| c.set_search(value));
    let on_country = move |value: String| controller.update(|c| c.set_country(value));
    let on_award = move |value: String| controller.update(|c| c.set_award(value));
    let on_status = move |status: StatusFilter| controller.update(|c| c.set_status(status));
    let on_reset = move |_: ()| controller.update(|c| c.reset_filters());

    // ソートハンドラ
    let on_sort = move |field: SortField| controller.update(|c| c.select_sort(field));

    // レビュー切替ハンドラ（localStorageへ即時保存）
    let on_toggle = move |id: String| {
        controller.update(|c| {
            c.toggle_review(&id);
        })
    };

    // ページ送りハンドラ
    let on_navigate = move |nav: PageNav| {
        controller.update(|c| match nav {
            PageNav::First => c.first_page(),
            PageNav::Prev => c.previous_page(),
            PageNav::Next => c.next_page(),
            PageNav::Last => c.last_page(),
        })
    };

    view! {
        <div class="app">
            <Header total=total />

            <div class="container">
                <StatsPanel stats=stats />

                <FilterBar
                    view_state=view_state
                    countries=countries
                    filtered_count=filtered_count
                    on_search=on_search
                    on_country=on_country
                    on_award=on_award
                    on_status=on_status
                    on_reset=on_reset
                />

                <div class="table-card">
                    <DirectoryTable
                        rows=rows
                        view_state=view_state
                        on_sort=on_sort
                        on_toggle=on_toggle
                    />
                    <Pagination derived=derived on_navigate=on_navigate />
                </div>
            </div>
        </div>
    }
}
