//! 集計カード・プログレスバー

use leptos::prelude::*;
use somm_directory_common::Stats;

#[component]
pub fn StatsPanel(stats: Memo<Stats>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <div class="stat-label">"Total Restaurants"</div>
                <div class="stat-value">{move || stats.get().total}</div>
            </div>
            <div class="stat-card highlight">
                <div class="stat-label">"Reviewed"</div>
                <div class="stat-value">{move || stats.get().reviewed}</div>
                <div class="stat-sub">{move || format!("{}%", stats.get().progress)}</div>
            </div>
            <div class="stat-card">
                <div class="stat-label">"Progress"</div>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {}%", stats.get().progress)
                    />
                </div>
            </div>
        </div>
    }
}
