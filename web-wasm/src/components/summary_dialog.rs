//! サマリーレポートダイアログ

use crate::api::ApiClient;
use crate::components::toaster::use_toaster;
use gloo::console;
use hygiene_common::summary::{
    BREAKDOWN_HEADING, DIALOG_DESCRIPTION, DIALOG_TITLE, FILTERS_HEADING, PERIOD_LABEL, RESULTS_HEADING,
    ZONE_LABEL, ZONE_PLACEHOLDER,
};
use hygiene_common::{FilterField, Metric, SummaryDialogState, Zone};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const HEADLINE_METRICS: [Metric; 3] = [Metric::AvgCleaningTime, Metric::HygieneScore, Metric::Violations];
const BREAKDOWN_METRICS: [Metric; 3] = [Metric::TotalTables, Metric::OnTimeCleaning, Metric::DelayedCleaning];

#[component]
pub fn SummaryDialog(open: RwSignal<bool>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toaster = use_toaster();
    let state = RwSignal::new(SummaryDialogState::new());

    let is_loading = move || state.with(|s| s.is_loading());
    let filter_value = move |field: FilterField| state.with(|s| s.filters().value_of(field));
    let on_filter = move |field: FilterField| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            state.update(|s| s.set_filter(field, &value));
        }
    };

    let on_generate = move |_: MouseEvent| {
        let Some(filters) = state.try_update(|s| s.begin()).flatten() else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            let result = client.get_summary(&filters).await;
            if let Err(e) = &result {
                console::error!(format!("Summary error: {}", e));
            }
            if let Some(notice) = state.try_update(|s| s.finish(result)) {
                toaster.push(notice);
            }
        });
    };

    let metric_value = move |metric: Metric| {
        state.with(|s| s.report().map(|r| r.display(metric)).unwrap_or_default())
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <div>
                            <h2>{DIALOG_TITLE}</h2>
                            <p class="text-muted">{DIALOG_DESCRIPTION}</p>
                        </div>
                        <button class="btn btn-ghost" on:click=move |_| open.set(false)>"×"</button>
                    </div>

                    <section class="filters-section">
                        <h3 class="section-heading">{FILTERS_HEADING}</h3>
                        <div class="filters">
                            <label>
                                {ZONE_LABEL}
                                <select
                                    prop:value=move || filter_value(FilterField::Zone)
                                    on:change=on_filter(FilterField::Zone)
                                >
                                    <option value="">{ZONE_PLACEHOLDER}</option>
                                    {Zone::ALL
                                        .into_iter()
                                        .map(|zone| view! { <option value=zone.as_str()>{zone.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label>
                                "Start Date"
                                <input
                                    type="date"
                                    prop:value=move || filter_value(FilterField::StartDate)
                                    on:change=on_filter(FilterField::StartDate)
                                />
                            </label>
                            <label>
                                "End Date"
                                <input
                                    type="date"
                                    prop:value=move || filter_value(FilterField::EndDate)
                                    on:change=on_filter(FilterField::EndDate)
                                />
                            </label>
                        </div>

                        <button
                            class="btn btn-primary btn-block"
                            disabled=is_loading
                            on:click=on_generate.clone()
                        >
                            {move || if is_loading() { "Generating..." } else { "Apply Filters & Generate" }}
                        </button>
                    </section>

                    <Show when=move || state.with(|s| s.report().is_some())>
                        <div class="report">
                            <h3 class="section-heading">{RESULTS_HEADING}</h3>
                            <div class="metric-cards">
                                {HEADLINE_METRICS
                                    .into_iter()
                                    .map(|metric| {
                                        let defaults = metric.defaults();
                                        view! {
                                            <div class="metric-card">
                                                <p class="text-muted">{defaults.label}</p>
                                                <p class="metric-value mono">
                                                    {move || metric_value(metric)}
                                                    <span class="unit">{defaults.unit.unwrap_or_default()}</span>
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="breakdown">
                                <h4>{BREAKDOWN_HEADING}</h4>
                                {BREAKDOWN_METRICS
                                    .into_iter()
                                    .map(|metric| {
                                        view! {
                                            <div class="breakdown-row">
                                                <span>{metric.defaults().label}</span>
                                                <strong class="mono">{move || metric_value(metric)}</strong>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                <p class="text-muted period">
                                    {PERIOD_LABEL}
                                    " "
                                    {move || state.with(|s| s.filters().reporting_period())}
                                </p>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
