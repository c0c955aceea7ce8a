//! ライブモニターコンポーネント
//!
//! ストリーム未接続のため固定表示のみ。

use hygiene_common::MonitorSnapshot;
use leptos::prelude::*;

#[component]
pub fn VideoMonitor() -> impl IntoView {
    let snapshot = MonitorSnapshot::placeholder();

    view! {
        <section class="card monitor">
            <div class="card-header monitor-header">
                <h2 class="card-title">"Live Monitoring"</h2>
                <span class=if snapshot.is_live { "badge badge-live" } else { "badge badge-offline" }>
                    {snapshot.badge()}
                </span>
            </div>
            <div class="card-content">
                <div class="video-frame">
                    <div class="video-placeholder">
                        <p class="mono">"Waiting for stream..."</p>
                        <p class="text-muted">"YOLO detection output will appear here"</p>
                    </div>
                    <div class="video-overlay mono">
                        <div>
                            <span class="dim">"FPS: "</span>
                            <strong>{snapshot.fps}</strong>
                        </div>
                        <div>
                            <span class="dim">"Detections: "</span>
                            <strong>{snapshot.detections}</strong>
                        </div>
                    </div>
                </div>
                <div class="monitor-counters">
                    {snapshot
                        .counters()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="counter">
                                    <p class="text-muted">{label}</p>
                                    <p class="counter-value mono">{value}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
