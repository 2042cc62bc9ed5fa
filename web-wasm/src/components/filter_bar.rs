//! 検索・絞り込みバー

use leptos::prelude::*;
use somm_directory_common::{StatusFilter, ViewState, AWARD_OPTIONS};

#[component]
pub fn FilterBar<FS, FC, FA, FT, FR>(
    view_state: Memo<ViewState>,
    countries: Vec<String>,
    filtered_count: Memo<usize>,
    on_search: FS,
    on_country: FC,
    on_award: FA,
    on_status: FT,
    on_reset: FR,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(String) + 'static + Clone + Send + Sync,
    FA: Fn(String) + 'static + Clone + Send + Sync,
    FT: Fn(StatusFilter) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let country_options = countries
        .into_iter()
        .map(|country| {
            let value = country.clone();
            let option_value = country.clone();
            view! {
                <option
                    value=option_value
                    selected=move || view_state.get().country == value
                >
                    {country}
                </option>
            }
        })
        .collect_view();

    let award_options = AWARD_OPTIONS
        .into_iter()
        .map(|(value, label)| {
            view! {
                <option value=value selected=move || view_state.get().award == value>
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="filter-bar">
            <div class="form-group wide">
                <label for="search">"Search"</label>
                <input
                    type="text"
                    id="search"
                    placeholder="Restaurant, person, city..."
                    prop:value=move || view_state.get().search
                    on:input=move |ev| on_search(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="country">"Country"</label>
                <select id="country" on:change=move |ev| on_country(event_target_value(&ev))>
                    <option value="" selected=move || view_state.get().country.is_empty()>
                        "All Countries"
                    </option>
                    {country_options}
                </select>
            </div>

            <div class="form-group">
                <label for="award">"Award"</label>
                <select id="award" on:change=move |ev| on_award(event_target_value(&ev))>
                    <option value="" selected=move || view_state.get().award.is_empty()>
                        "All Awards"
                    </option>
                    {award_options}
                </select>
            </div>

            <div class="form-group">
                <label for="status">"Status"</label>
                <select
                    id="status"
                    on:change=move |ev| {
                        let status = event_target_value(&ev).parse().unwrap_or_default();
                        on_status(status);
                    }
                >
                    <option value="" selected=move || view_state.get().status == StatusFilter::All>
                        "All"
                    </option>
                    <option value="seen" selected=move || view_state.get().status == StatusFilter::Seen>
                        "Reviewed"
                    </option>
                    <option value="unseen" selected=move || view_state.get().status == StatusFilter::Unseen>
                        "Not Reviewed"
                    </option>
                </select>
            </div>

            <button class="btn btn-secondary" on:click=move |_| on_reset(())>
                "Reset"
            </button>
            <span class="result-count">{move || format!("{} results", filtered_count.get())}</span>
        </div>
    }
}
