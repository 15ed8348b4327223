use super::api;
use super::state::TransactionsPage;
use crate::reports::daily_terminal::api::fetch_transaction_items;
use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::{format_amount, format_timestamp};
use contracts::reports::daily_terminal::LineItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

/// Paged transaction list with a swap-in line-item detail view.
#[component]
pub fn TransactionsBrowser() -> impl IntoView {
    let page_state = RwSignal::new(TransactionsPage::default());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let selected_txn = RwSignal::new(None::<String>);
    let items_by_txn = RwSignal::new(HashMap::<String, Vec<LineItem>>::new());
    let detail_loading = RwSignal::new(false);
    let detail_error = RwSignal::new(None::<String>);

    // Invalidates in-flight page responses once a newer one is issued
    let generation = StoredValue::new(0_u64);

    let load_page = move |page: usize| {
        generation.update_value(|g| *g += 1);
        let my_generation = generation.get_value();
        let start = start_date.get_untracked();
        let end = end_date.get_untracked();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api::fetch_transactions(page, &start, &end).await {
                Ok(rows) => {
                    if generation.get_value() == my_generation {
                        page_state.set(TransactionsPage { page, rows });
                    }
                }
                Err(e) => {
                    log::error!("Failed to fetch transactions page {page}: {e}");
                    if generation.get_value() == my_generation {
                        error.set(Some(e.to_string()));
                    }
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_page(1);
    });

    let apply_filter = move |_: ()| {
        // a new range is a new result set: drop the detail cache too
        items_by_txn.set(HashMap::new());
        selected_txn.set(None);
        detail_error.set(None);
        load_page(1);
    };

    let open_details = move |trans_id: String| {
        selected_txn.set(Some(trans_id.clone()));
        detail_error.set(None);
        let cached = items_by_txn.with_untracked(|c| c.contains_key(&trans_id));
        if cached {
            return;
        }
        detail_loading.set(true);
        spawn_local(async move {
            match fetch_transaction_items(&trans_id).await {
                Ok(items) => {
                    items_by_txn.update(|c| {
                        c.insert(trans_id, items);
                    });
                }
                Err(e) => {
                    log::error!("Failed to fetch details for {trans_id}: {e}");
                    detail_error.set(Some(e.to_string()));
                }
            }
            detail_loading.set(false);
        });
    };

    view! {
        <section style="background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px; margin-bottom: 24px;">
            {move || {
                if let Some(trans_id) = selected_txn.get() {
                    transaction_details(
                        trans_id,
                        items_by_txn,
                        detail_loading,
                        detail_error,
                        selected_txn,
                    )
                    .into_any()
                } else {
                    view! {
                        <h2 style="margin: 0 0 12px 0;">"Sales Transactions"</h2>
                        <DateRangeFilter
                            start_date=start_date
                            end_date=end_date
                            on_apply=Callback::new(apply_filter)
                        />

                        {move || error.get().map(|err| view! {
                            <div style="background: #fdecea; color: #b71c1c; border: 1px solid #f5c6cb; border-radius: 6px; padding: 8px 12px; margin-bottom: 12px;">
                                {format!("Transactions failed: {err}")}
                            </div>
                        })}

                        {move || {
                            let state = page_state.get();
                            if loading.get() && state.rows.is_empty() {
                                return view! { <div style="padding: 16px; color: #6c757d;">"Loading transactions..."</div> }.into_any();
                            }
                            let body = state.rows.iter().map(|txn| {
                                let trans_id = txn.trans_id.clone();
                                view! {
                                    <tr
                                        style="cursor: pointer; border-top: 1px solid #e9ecef;"
                                        on:click=move |_| open_details(trans_id.clone())
                                    >
                                        <td style="padding: 6px 10px;">{txn.trans_id.clone()}</td>
                                        <td style="padding: 6px 10px;">{txn.terminal_id.clone()}</td>
                                        <td style="padding: 6px 10px;">{txn.pos_no.clone()}</td>
                                        <td style="padding: 6px 10px; white-space: nowrap;">{format_timestamp(&txn.date_pos)}</td>
                                        <td style="padding: 6px 10px; text-align: right;">{format_amount(txn.net_purchase)}</td>
                                        <td style="padding: 6px 10px; text-align: right;">{format_amount(txn.gross_sales)}</td>
                                        <td style="padding: 6px 10px;">{txn.who_created.clone()}</td>
                                        <td style="padding: 6px 10px; text-align: right;">{format_amount(txn.discount_regular)}</td>
                                        <td style="padding: 6px 10px; text-align: right;">{format_amount(txn.discount_special)}</td>
                                        <td style="padding: 6px 10px;">{txn.payment_type.clone()}</td>
                                    </tr>
                                }
                            }).collect_view();

                            view! {
                                <div style="overflow-x: auto;">
                                    <table style="width: 100%; border-collapse: collapse; font-size: 0.85rem;">
                                        <thead style="background: #e9ecef;">
                                            <tr>
                                                {["TransID", "TerminalID", "POS No", "Date", "Net Purchase", "Gross Sales", "Cashier", "Discount Regular", "Discount Special", "Payment Type"]
                                                    .into_iter()
                                                    .map(|h| view! { <th style="padding: 6px 10px; text-align: left; white-space: nowrap;">{h}</th> })
                                                    .collect_view()}
                                            </tr>
                                        </thead>
                                        <tbody>{body}</tbody>
                                    </table>
                                </div>
                            }.into_any()
                        }}

                        <PaginationControls
                            current_page=Signal::derive(move || page_state.get().page)
                            has_next=Signal::derive(move || page_state.get().has_next())
                            on_page_change=Callback::new(move |page| load_page(page))
                        />
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

fn transaction_details(
    trans_id: String,
    items_by_txn: RwSignal<HashMap<String, Vec<LineItem>>>,
    detail_loading: RwSignal<bool>,
    detail_error: RwSignal<Option<String>>,
    selected_txn: RwSignal<Option<String>>,
) -> impl IntoView {
    let heading_id = trans_id.clone();
    view! {
        <button
            on:click=move |_| selected_txn.set(None)
            style="margin-bottom: 12px; padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;"
        >
            "Back"
        </button>
        <h2 style="margin: 0 0 12px 0;">
            "Transaction Details for " <span style="color: #2563eb;">{heading_id}</span>
        </h2>

        {move || detail_error.get().map(|err| view! {
            <div style="background: #fdecea; color: #b71c1c; border: 1px solid #f5c6cb; border-radius: 6px; padding: 8px 12px; margin-bottom: 12px;">
                {format!("Details failed: {err}")}
            </div>
        })}

        {
            let trans_id = trans_id.clone();
            move || {
                let items = items_by_txn.with(|c| c.get(&trans_id).cloned());
                match items {
                    Some(items) => {
                        let body = items.iter().map(|item| {
                            view! {
                                <tr style="border-top: 1px solid #e9ecef;">
                                    <td style="padding: 6px 10px;">{item.record_id.clone()}</td>
                                    <td style="padding: 6px 10px;">{item.item_code.clone()}</td>
                                    <td style="padding: 6px 10px;">{item.item_name.clone()}</td>
                                    <td style="padding: 6px 10px; text-align: right;">{format_amount(item.unit_price)}</td>
                                    <td style="padding: 6px 10px;">{item.qty.to_string()}</td>
                                    <td style="padding: 6px 10px;">{item.uom.clone()}</td>
                                    <td style="padding: 6px 10px; text-align: right;">{format_amount(item.gross_price)}</td>
                                    <td style="padding: 6px 10px; text-align: right;">{format_amount(item.net_price)}</td>
                                    <td style="padding: 6px 10px; text-align: right;">{format_amount(item.discount_special)}</td>
                                    <td style="padding: 6px 10px; white-space: nowrap;">{format_timestamp(&item.date_created)}</td>
                                    <td style="padding: 6px 10px; text-align: right;">{format_amount(item.scpwd_discount)}</td>
                                    <td style="padding: 6px 10px; text-align: right;">{format_amount(item.vat_discount)}</td>
                                </tr>
                            }
                        }).collect_view();

                        view! {
                            <div style="overflow-x: auto;">
                                <table style="width: 100%; border-collapse: collapse; font-size: 0.85rem;">
                                    <thead style="background: #e9ecef;">
                                        <tr>
                                            {["RecordID", "Item Code", "Item Name", "Unit Price", "QTY", "UOM", "Gross Price", "Net Price", "Discount Special", "Date Created", "SC PWD Discount", "VAT Discount"]
                                                .into_iter()
                                                .map(|h| view! { <th style="padding: 6px 10px; text-align: left; white-space: nowrap;">{h}</th> })
                                                .collect_view()}
                                        </tr>
                                    </thead>
                                    <tbody>{body}</tbody>
                                </table>
                            </div>
                        }.into_any()
                    }
                    None if detail_loading.get() => {
                        view! { <div style="padding: 16px; color: #6c757d;">"Loading details..."</div> }.into_any()
                    }
                    None => view! { <></> }.into_any(),
                }
            }
        }
    }
}
