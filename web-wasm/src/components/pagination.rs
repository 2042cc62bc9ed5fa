//! ページ送りボタン

use leptos::prelude::*;
use somm_directory_common::DerivedView;

/// ページ移動の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

#[component]
pub fn Pagination<FN>(derived: Memo<DerivedView>, on_navigate: FN) -> impl IntoView
where
    FN: Fn(PageNav) + 'static + Clone + Send + Sync,
{
    let at_first = move || derived.with(|d| d.is_first_page());
    let at_last = move || derived.with(|d| d.is_last_page());

    view! {
        <div class="pagination">
            <button
                class="btn btn-page"
                disabled=at_first
                on:click={
                    let on_navigate = on_navigate.clone();
                    move |_| on_navigate(PageNav::First)
                }
            >
                "First"
            </button>
            <button
                class="btn btn-page"
                disabled=at_first
                on:click={
                    let on_navigate = on_navigate.clone();
                    move |_| on_navigate(PageNav::Prev)
                }
            >
                "Prev"
            </button>
            <span class="page-indicator">
                {move || derived.with(|d| format!("Page {} of {}", d.page, d.page_count))}
            </span>
            <button
                class="btn btn-page"
                disabled=at_last
                on:click={
                    let on_navigate = on_navigate.clone();
                    move |_| on_navigate(PageNav::Next)
                }
            >
                "Next"
            </button>
            <button
                class="btn btn-page"
                disabled=at_last
                on:click={
                    let on_navigate = on_navigate.clone();
                    move |_| on_navigate(PageNav::Last)
                }
            >
                "Last"
            </button>
        </div>
    }
}
