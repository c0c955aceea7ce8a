//! ヘッダーコンポーネント

use crate::components::summary_dialog::SummaryDialog;
use hygiene_common::layout::{BRAND_SUBTITLE, BRAND_TITLE, SYSTEM_STATUS};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let dialog_open = RwSignal::new(false);

    view! {
        <header class="header">
            <div class="brand">
                <h1>{BRAND_TITLE}</h1>
                <p class="text-muted">{BRAND_SUBTITLE}</p>
            </div>
            <div class="header-actions">
                <span class="system-status">
                    <span class="status-dot" />
                    {SYSTEM_STATUS}
                </span>
                <button class="btn btn-primary" on:click=move |_| dialog_open.set(true)>
                    "Generate Summary"
                </button>
            </div>
            <SummaryDialog open=dialog_open />
        </header>
    }
}
