//! メインアプリケーションコンポーネント

use crate::api::build_client;
use crate::components::{
    header::Header,
    quick_stats::QuickStats,
    toaster::{ToastHost, Toaster},
    video_monitor::VideoMonitor,
    video_upload::VideoUpload,
};
use hygiene_common::layout::FOOTER_CAPTION;
use leptos::prelude::*;

/// ページ全体の構成（状態は各パネルが持つ）
#[component]
pub fn App() -> impl IntoView {
    provide_context(build_client());
    provide_context(Toaster::new());

    view! {
        <div class="container">
            <Header />

            <main class="dashboard">
                <div class="column-main">
                    <VideoMonitor />
                </div>
                <div class="column-side">
                    <VideoUpload />
                    <QuickStats />
                </div>
            </main>

            <footer class="footer text-muted">{FOOTER_CAPTION}</footer>

            <ToastHost />
        </div>
    }
}
