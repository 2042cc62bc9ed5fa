//! レストラン一覧テーブル

use leptos::prelude::*;
use somm_directory_common::pipeline::display_or_placeholder;
use somm_directory_common::{DirectoryRow, SortField, ViewState};

/// 並べ替え可能な列
const COLUMNS: [SortField; 6] = [
    SortField::Restaurant,
    SortField::City,
    SortField::Award,
    SortField::WineDirector,
    SortField::Sommelier,
    SortField::GeneralManager,
];

#[component]
pub fn DirectoryTable<FS, FT>(
    rows: Memo<Vec<DirectoryRow>>,
    view_state: Memo<ViewState>,
    on_sort: FS,
    on_toggle: FT,
) -> impl IntoView
where
    FS: Fn(SortField) + 'static + Clone + Send + Sync,
    FT: Fn(String) + 'static + Clone + Send + Sync,
{
    let headers = COLUMNS
        .into_iter()
        .map(|field| {
            let on_sort = on_sort.clone();
            let arrow = move || {
                let state = view_state.get();
                if state.sort_field == field {
                    state.sort_direction.arrow()
                } else {
                    ""
                }
            };
            view! {
                <th class="sortable" on:click=move |_| on_sort(field)>
                    {field.label()}" "{arrow}
                </th>
            }
        })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <table class="directory-table">
                <thead>
                    <tr>
                        <th class="check-col">"✓"</th>
                        {headers}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.record.id.clone(), row.reviewed)
                        children=move |row| {
                            let on_toggle = on_toggle.clone();
                            view! { <DirectoryRowView row=row on_toggle=on_toggle /> }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn DirectoryRowView<FT>(row: DirectoryRow, on_toggle: FT) -> impl IntoView
where
    FT: Fn(String) + 'static + Clone + Send + Sync,
{
    let id = row.record.id.clone();
    let location = row.location();
    let style = row.award_style.css();

    let person_cell = |value: &str| {
        let text = display_or_placeholder(value).to_string();
        view! { <td class="person" class:placeholder=value.is_empty()>{text}</td> }
    };

    view! {
        <tr class:reviewed=row.reviewed>
            <td class="check-col">
                <input
                    type="checkbox"
                    prop:checked=row.reviewed
                    on:change=move |_| on_toggle(id.clone())
                />
            </td>
            <td class="restaurant">{row.record.restaurant.clone()}</td>
            <td class="location">{location}</td>
            <td>
                <span class="award-badge" style=style>{row.record.award.clone()}</span>
            </td>
            {person_cell(&row.record.wine_director)}
            {person_cell(&row.record.sommelier)}
            {person_cell(&row.record.general_manager)}
        </tr>
    }
}
