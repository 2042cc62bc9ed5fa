//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(total: Memo<usize>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🍷 Somm Directory " <span class="accent">"Social Tracker"</span></h1>
            <div class="subtitle">
                {move || format!("Wine Spectator Restaurant Awards - {} Restaurants", total.get())}
            </div>
        </header>
    }
}
