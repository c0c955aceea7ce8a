//! クイック統計タイル（固定値）

use hygiene_common::QUICK_STATS;
use leptos::prelude::*;

#[component]
pub fn QuickStats() -> impl IntoView {
    view! {
        <div class="quick-stats">
            {QUICK_STATS
                .into_iter()
                .map(|stat| {
                    view! {
                        <div class="stat-tile">
                            <p class="stat-label">{stat.label}</p>
                            <p class="stat-value mono">{stat.value}</p>
                            <p class="stat-trend">{stat.trend}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
