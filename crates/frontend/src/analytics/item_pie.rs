use super::api;
use crate::shared::charts::pie::{PieChart, PieSlice};
use crate::shared::config::CONFIG;
use contracts::analytics::item_movement::{FsnSummary, ItemSalesSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn joined_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

/// Item sales distribution pie with the FSN movement summary.
#[component]
pub fn ItemPieChart() -> impl IntoView {
    let items = RwSignal::new(Vec::<ItemSalesSummary>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_item_sales_summary().await {
                Ok(data) => items.set(data),
                Err(e) => {
                    log::error!("Failed to fetch item sales summary: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <section style="background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px; margin-bottom: 24px;">
            <h2 style="margin: 0 0 12px 0;">"Item Sales Distribution"</h2>

            {move || error.get().map(|err| view! {
                <div style="background: #fdecea; color: #b71c1c; border: 1px solid #f5c6cb; border-radius: 6px; padding: 8px 12px; margin-bottom: 12px;">
                    {format!("Item summary failed: {err}")}
                </div>
            })}

            {move || {
                if loading.get() {
                    return view! { <div style="padding: 16px; color: #6c757d;">"Loading item summary..."</div> }.into_any();
                }
                let data = items.get();
                let slices: Vec<PieSlice> = data
                    .iter()
                    .map(|item| PieSlice {
                        label: item.item_name.clone(),
                        value: item.sale_count,
                    })
                    .collect();
                let summary = FsnSummary::build(&data, &CONFIG.thresholds);
                let trending = summary
                    .trending
                    .iter()
                    .map(|name| view! { <li>{name.clone()}</li> })
                    .collect_view();

                view! {
                    <div style="display: flex; gap: 40px; flex-wrap: wrap;">
                        <PieChart slices=slices />
                        <div style="flex: 1; min-width: 260px;">
                            <h3 style="margin: 0 0 8px 0;">"FSN Summary"</h3>
                            <ul style="margin: 0 0 16px 0; padding-left: 20px;">
                                <li><strong>"Fast Moving: "</strong>{joined_or_none(&summary.fast)}</li>
                                <li><strong>"Slow Moving: "</strong>{joined_or_none(&summary.slow)}</li>
                                <li><strong>"Non Moving: "</strong>{joined_or_none(&summary.non)}</li>
                            </ul>
                            <h3 style="margin: 0 0 8px 0;">"Trending Items"</h3>
                            <ul style="margin: 0; padding-left: 20px;">
                                {if summary.trending.is_empty() {
                                    view! { <li>"No trending items"</li> }.into_any()
                                } else {
                                    trending.into_any()
                                }}
                            </ul>
                        </div>
                    </div>
                }.into_any()
            }}
        </section>
    }
}
