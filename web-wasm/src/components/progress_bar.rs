//! プログレスバーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-header">
                <span class="text-muted">"Uploading..."</span>
                <span class="progress-text">{move || format!("{}%", progress.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get())
                />
            </div>
        </div>
    }
}
