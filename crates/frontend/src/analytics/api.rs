use crate::shared::api::{fetch_json, ApiError};
use crate::shared::config::api_url;
use contracts::analytics::item_movement::ItemSalesSummary;
use contracts::analytics::sales_graph::{Aggregation, SalesPoint};

/// Fetch per-item sale counts for the distribution chart.
pub async fn fetch_item_sales_summary() -> Result<Vec<ItemSalesSummary>, ApiError> {
    fetch_json(&api_url("/api/item-sales-summary")).await
}

/// Fetch the aggregated sales series. `terminal` is a terminal display
/// name or "All"; the date range is only forwarded when both ends are
/// set.
pub async fn fetch_sales_graph(
    aggregation: Aggregation,
    terminal: &str,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<SalesPoint>, ApiError> {
    let mut url = format!(
        "{}?aggregation={}&terminal={}",
        api_url("/api/sales-graph"),
        aggregation.as_str(),
        urlencoding::encode(terminal)
    );
    if !start_date.is_empty() && !end_date.is_empty() {
        url.push_str(&format!(
            "&startDate={}&endDate={}",
            urlencoding::encode(start_date),
            urlencoding::encode(end_date)
        ));
    }
    fetch_json(&url).await
}
