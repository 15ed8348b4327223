use crate::analytics::item_pie::ItemPieChart;
use crate::analytics::sales_graph::SalesGraph;
use crate::reports::daily_terminal::ui::DailyTerminalReport;
use crate::sales::ui::TransactionsBrowser;
use leptos::prelude::*;

/// Single-page dashboard: daily per-terminal report on top, item
/// distribution and sales graph below, then the paged transaction browser.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app" style="max-width: 1400px; margin: 0 auto; padding: 16px; font-family: sans-serif;">
            <DailyTerminalReport />
            <ItemPieChart />
            <SalesGraph />
            <TransactionsBrowser />
        </div>
    }
}
