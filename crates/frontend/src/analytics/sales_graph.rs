use super::api;
use crate::shared::charts::line::LineChart;
use crate::shared::components::date_input::DateInput;
use crate::shared::config::TERMINALS;
use contracts::analytics::sales_graph::{Aggregation, SalesPoint};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Aggregated gross-sales line chart with aggregation, terminal and
/// date-range filters. Any filter change refetches the series.
#[component]
pub fn SalesGraph() -> impl IntoView {
    let points = RwSignal::new(Vec::<SalesPoint>::new());
    let aggregation = RwSignal::new(Aggregation::Monthly);
    let terminal = RwSignal::new("All".to_string());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Filter changes can overlap in flight; only the newest lands
    let generation = StoredValue::new(0_u64);

    let load_graph = move |aggregation: Aggregation, terminal: String, start: String, end: String| {
        generation.update_value(|g| *g += 1);
        let my_generation = generation.get_value();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api::fetch_sales_graph(aggregation, &terminal, &start, &end).await {
                Ok(data) => {
                    if generation.get_value() == my_generation {
                        points.set(data);
                    }
                }
                Err(e) => {
                    log::error!("Failed to fetch sales graph: {e}");
                    if generation.get_value() == my_generation {
                        error.set(Some(e.to_string()));
                    }
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        let agg = aggregation.get();
        let term = terminal.get();
        let start = start_date.get();
        let end = end_date.get();
        load_graph(agg, term, start, end);
    });

    let select_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;";

    view! {
        <section style="background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px; margin-bottom: 24px;">
            <h2 style="margin: 0 0 12px 0;">"Sales Graph"</h2>

            <div style="display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap; margin-bottom: 16px;">
                <div>
                    <label style="display: block; font-size: 0.8rem; color: #495057; margin-bottom: 4px;">"Start Date"</label>
                    <DateInput
                        value=start_date
                        on_change=move |val| start_date.set(val)
                    />
                </div>
                <div>
                    <label style="display: block; font-size: 0.8rem; color: #495057; margin-bottom: 4px;">"End Date"</label>
                    <DateInput
                        value=end_date
                        on_change=move |val| end_date.set(val)
                    />
                </div>
                <div>
                    <label style="display: block; font-size: 0.8rem; color: #495057; margin-bottom: 4px;">"Aggregation"</label>
                    <select
                        prop:value=move || aggregation.get().as_str().to_string()
                        on:change=move |ev| {
                            if let Some(agg) = Aggregation::parse(&event_target_value(&ev)) {
                                aggregation.set(agg);
                            }
                        }
                        style=select_style
                    >
                        {Aggregation::ALL
                            .into_iter()
                            .map(|agg| view! { <option value=agg.as_str()>{agg.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label style="display: block; font-size: 0.8rem; color: #495057; margin-bottom: 4px;">"Terminal"</label>
                    <select
                        prop:value=terminal
                        on:change=move |ev| terminal.set(event_target_value(&ev))
                        style=select_style
                    >
                        <option value="All">"All Terminals"</option>
                        {TERMINALS
                            .into_iter()
                            .map(|t| view! { <option value=t>{t}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            {move || error.get().map(|err| view! {
                <div style="background: #fdecea; color: #b71c1c; border: 1px solid #f5c6cb; border-radius: 6px; padding: 8px 12px; margin-bottom: 12px;">
                    {format!("Sales graph failed: {err}")}
                </div>
            })}

            {move || {
                let data = points.get();
                if loading.get() && data.is_empty() {
                    return view! { <div style="padding: 16px; color: #6c757d;">"Loading sales graph..."</div> }.into_any();
                }
                if data.is_empty() {
                    return view! { <div style="padding: 16px; color: #6c757d;">"No data for the selected filters"</div> }.into_any();
                }
                let chart_points: Vec<(String, f64)> = data
                    .iter()
                    .map(|p| (p.date.clone(), p.gross_sales))
                    .collect();
                view! { <LineChart points=chart_points /> }.into_any()
            }}
        </section>
    }
}
