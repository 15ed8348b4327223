use super::api;
use super::state::{create_state, Toggle};
use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::config::TERMINALS;
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::format::{format_amount, format_timestamp};
use contracts::reports::daily_terminal::{DayAggregate, LineItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

const TXN_HEADERS: [&str; 10] = [
    "TransID",
    "TerminalID",
    "SI No",
    "Date",
    "Net Purchase",
    "Gross Sale",
    "Cashier",
    "Discount Regular",
    "Discount Special",
    "Payment Type",
];

const ITEM_HEADERS: [&str; 11] = [
    "Item Code",
    "Item Name",
    "Unit Price",
    "QTY",
    "UOM",
    "Gross Price",
    "Net Price",
    "Discount Special",
    "Date Created",
    "SC PWD",
    "VAT",
];

impl CsvExportable for DayAggregate {
    fn headers() -> Vec<&'static str> {
        let mut headers = vec!["Date"];
        headers.extend(TERMINALS);
        headers.extend([
            "Gross Sales",
            "Gross Discount",
            "Net Sales",
            "VAT",
            "Net w/o VAT",
        ]);
        headers
    }

    fn to_csv_row(&self) -> Vec<String> {
        let mut row = vec![self.report_date.clone()];
        row.extend(TERMINALS.map(|t| format_amount(self.terminal_amount(t))));
        row.extend([
            format_amount(self.gross_sales),
            format_amount(self.gross_discount),
            format_amount(self.net_sales),
            format_amount(self.vat),
            format_amount(self.net_sales_without_vat),
        ]);
        row
    }
}

fn th(label: &'static str) -> impl IntoView {
    view! {
        <th style="padding: 6px 10px; text-align: center; font-weight: 600; white-space: nowrap;">{label}</th>
    }
}

fn money_cell(value: Option<f64>) -> impl IntoView {
    view! {
        <td style="padding: 6px 10px; text-align: right; white-space: nowrap;">{format_amount(value)}</td>
    }
}

fn text_cell(value: String) -> impl IntoView {
    view! {
        <td style="padding: 6px 10px; white-space: nowrap;">{value}</td>
    }
}

fn items_table(items: &[LineItem]) -> impl IntoView {
    let body = items
        .iter()
        .map(|item| {
            view! {
                <tr style="background: #fff;">
                    {text_cell(item.item_code.clone())}
                    {text_cell(item.item_name.clone())}
                    {money_cell(item.unit_price)}
                    {text_cell(item.qty.to_string())}
                    {text_cell(item.uom.clone())}
                    {money_cell(item.gross_price)}
                    {money_cell(item.net_price)}
                    {money_cell(item.discount_special)}
                    {text_cell(format_timestamp(&item.date_created))}
                    {money_cell(item.scpwd_discount)}
                    {money_cell(item.vat_discount)}
                </tr>
            }
        })
        .collect_view();

    view! {
        <table style="width: 100%; border-collapse: collapse; font-size: 0.8rem;">
            <thead style="background: #e9ecef;">
                <tr>{ITEM_HEADERS.into_iter().map(th).collect_view()}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

/// Daily per-terminal sales report with day → transaction → line-item
/// drill-down.
#[component]
pub fn DailyTerminalReport() -> impl IntoView {
    let state = create_state();
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let report_loading = RwSignal::new(false);
    let report_error = RwSignal::new(None::<String>);
    let detail_error = RwSignal::new(None::<String>);
    let export_notice = RwSignal::new(None::<String>);

    let load_report = move || {
        let start = start_date.get_untracked();
        let end = end_date.get_untracked();
        let Some(generation) = state.try_update(|s| s.begin_report_fetch()) else {
            return;
        };
        report_loading.set(true);
        report_error.set(None);
        detail_error.set(None);

        spawn_local(async move {
            match api::fetch_daily_report(&start, &end).await {
                Ok(rows) => {
                    state.update(|s| {
                        s.apply_report(generation, rows);
                    });
                }
                Err(e) => {
                    log::error!("Failed to fetch daily terminal report: {e}");
                    report_error.set(Some(e.to_string()));
                }
            }
            report_loading.set(false);
        });
    };

    // Initial load
    Effect::new(move |_| {
        load_report();
    });

    let on_day_click = move |raw_date: String| {
        let Some(action) = state.try_update(|s| s.toggle_day(&raw_date)) else {
            return;
        };
        if let Toggle::Fetch(generation) = action {
            detail_error.set(None);
            spawn_local(async move {
                match api::fetch_day_details(&raw_date).await {
                    Ok(transactions) => {
                        state.update(|s| {
                            s.day_loaded(generation, &raw_date, transactions);
                        });
                    }
                    Err(e) => {
                        log::error!("Failed to fetch transactions for {raw_date}: {e}");
                        state.update(|s| s.day_failed(generation, &raw_date));
                        detail_error.set(Some(format!("Transactions for {raw_date}: {e}")));
                    }
                }
            });
        }
    };

    let on_txn_click = move |trans_id: String| {
        let Some(action) = state.try_update(|s| s.toggle_txn(&trans_id)) else {
            return;
        };
        if let Toggle::Fetch(generation) = action {
            detail_error.set(None);
            spawn_local(async move {
                match api::fetch_transaction_items(&trans_id).await {
                    Ok(items) => {
                        state.update(|s| {
                            s.txn_loaded(generation, &trans_id, items);
                        });
                    }
                    Err(e) => {
                        log::error!("Failed to fetch items for {trans_id}: {e}");
                        state.update(|s| s.txn_failed(generation, &trans_id));
                        detail_error.set(Some(format!("Items for {trans_id}: {e}")));
                    }
                }
            });
        }
    };

    let on_export = move |_| {
        let rows = state.with_untracked(|s| s.rows.clone());
        let filename = format!(
            "daily_terminal_report_{}.csv",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        let notice = match export_csv(&rows, &filename) {
            Ok(()) => "Report exported".to_string(),
            Err(e) => {
                log::error!("Failed to export report: {e}");
                format!("Export failed: {e}")
            }
        };
        export_notice.set(Some(notice));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            export_notice.set(None);
        });
    };

    let colspan = format!("{}", 2 + TERMINALS.len() + 5);

    view! {
        <section style="background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px; margin-bottom: 24px;">
            <div style="display: flex; align-items: center; justify-content: space-between;">
                <h2 style="margin: 0 0 12px 0;">"Daily Sales Report Per Terminal"</h2>
                {move || export_notice.get().map(|msg| view! {
                    <span style="font-size: 0.8rem; color: #217346;">{msg}</span>
                })}
            </div>

            <div style="display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap;">
                <DateRangeFilter
                    start_date=start_date
                    end_date=end_date
                    on_apply=Callback::new(move |_| load_report())
                />
                <button
                    on:click=on_export
                    style="padding: 8px 16px; background: #217346; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 0.875rem; margin-bottom: 16px;"
                >
                    "Export CSV"
                </button>
            </div>

            {move || report_error.get().map(|err| view! {
                <div style="background: #fdecea; color: #b71c1c; border: 1px solid #f5c6cb; border-radius: 6px; padding: 8px 12px; margin-bottom: 12px;">
                    {format!("Report failed: {err}")}
                </div>
            })}
            {move || detail_error.get().map(|err| view! {
                <div style="background: #fff3cd; color: #856404; border: 1px solid #ffeeba; border-radius: 6px; padding: 8px 12px; margin-bottom: 12px;">
                    {err}
                </div>
            })}

            {move || {
                let s = state.get();
                if report_loading.get() && s.rows.is_empty() {
                    return view! { <div style="padding: 16px; color: #6c757d;">"Loading report..."</div> }.into_any();
                }

                let colspan = colspan.clone();
                let day_rows = s.rows.iter().map(|row| {
                    let raw_date = row.raw_date.clone();
                    let is_expanded = s.expanded_date.as_deref() == Some(raw_date.as_str());
                    let is_loading = s.loading_dates.contains(&raw_date);
                    let marker = if is_loading { "…" } else if is_expanded { "▼" } else { "▶" };

                    let detail = if is_expanded {
                        s.details_by_date.get(&raw_date).map(|transactions| {
                            let txn_rows = transactions.iter().map(|txn| {
                                let trans_id = txn.trans_id.clone();
                                let txn_expanded = s.expanded_txn.as_deref() == Some(trans_id.as_str());
                                let txn_loading = s.loading_txns.contains(&trans_id);
                                let txn_marker = if txn_loading { "…" } else if txn_expanded { "▼" } else { "▶" };

                                let items = if txn_expanded {
                                    s.items_by_txn.get(&trans_id).map(|items| {
                                        view! {
                                            <tr>
                                                <td colspan=format!("{}", TXN_HEADERS.len() + 1) style="padding: 0 0 0 32px;">
                                                    {items_table(items)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                } else {
                                    None
                                };

                                let click_id = trans_id.clone();
                                view! {
                                    <tr
                                        style="background: #f8f9fa; cursor: pointer;"
                                        on:click=move |_| on_txn_click(click_id.clone())
                                    >
                                        <td style="padding: 6px 10px; text-align: center;">{txn_marker}</td>
                                        {text_cell(txn.trans_id.clone())}
                                        {text_cell(txn.terminal_id.clone())}
                                        {text_cell(txn.pos_no.clone())}
                                        {text_cell(format_timestamp(&txn.date_pos))}
                                        {money_cell(txn.net_purchase)}
                                        {money_cell(txn.gross_sales)}
                                        {text_cell(txn.who_created.clone())}
                                        {money_cell(txn.discount_regular)}
                                        {money_cell(txn.discount_special)}
                                        {text_cell(txn.payment_type.clone())}
                                    </tr>
                                    {items}
                                }
                            }).collect_view();

                            view! {
                                <table style="width: 100%; border-collapse: collapse; font-size: 0.8rem;">
                                    <thead style="background: #dee2e6;">
                                        <tr>
                                            <th style="padding: 6px 10px; width: 28px;"></th>
                                            {TXN_HEADERS.into_iter().map(th).collect_view()}
                                        </tr>
                                    </thead>
                                    <tbody>{txn_rows}</tbody>
                                </table>
                            }
                        })
                    } else {
                        None
                    };

                    let click_date = raw_date.clone();
                    view! {
                        <tr
                            style="cursor: pointer; border-top: 1px solid #e9ecef;"
                            on:click=move |_| on_day_click(click_date.clone())
                        >
                            <td style="padding: 6px 10px; text-align: center;">{marker}</td>
                            <td style="padding: 6px 10px; text-align: center; white-space: nowrap;">{row.report_date.clone()}</td>
                            {TERMINALS.into_iter().map(|t| money_cell(row.terminal_amount(t))).collect_view()}
                            {money_cell(row.gross_sales)}
                            {money_cell(row.gross_discount)}
                            {money_cell(row.net_sales)}
                            {money_cell(row.vat)}
                            {money_cell(row.net_sales_without_vat)}
                        </tr>
                        {detail.map(|table| view! {
                            <tr>
                                <td colspan=colspan.clone() style="padding: 0 0 0 24px;">
                                    {table}
                                </td>
                            </tr>
                        })}
                    }
                }).collect_view();

                view! {
                    <div style="overflow-x: auto;">
                        <table style="width: 100%; border-collapse: collapse; font-size: 0.85rem;">
                            <thead style="background: #dbeafe;">
                                <tr>
                                    <th style="padding: 6px 10px; width: 28px;"></th>
                                    {th("Date")}
                                    {TERMINALS.into_iter().map(th).collect_view()}
                                    {th("Gross Sales")}
                                    {th("Gross Discount")}
                                    {th("Net Sales")}
                                    {th("VAT")}
                                    {th("Net w/o VAT")}
                                </tr>
                            </thead>
                            <tbody>{day_rows}</tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </section>
    }
}
