use crate::shared::api::{fetch_json, ApiError};
use crate::shared::config::api_url;
use contracts::reports::daily_terminal::{DayAggregate, LineItem, Transaction};

/// Fetch the per-day aggregate rows, optionally bounded by an inclusive
/// date range. Empty strings mean "no bound".
pub async fn fetch_daily_report(
    start_date: &str,
    end_date: &str,
) -> Result<Vec<DayAggregate>, ApiError> {
    let mut url = api_url("/api/daily-terminal-report");
    let mut params = Vec::new();
    if !start_date.is_empty() {
        params.push(format!("startDate={}", urlencoding::encode(start_date)));
    }
    if !end_date.is_empty() {
        params.push(format!("endDate={}", urlencoding::encode(end_date)));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    fetch_json(&url).await
}

/// Fetch the transactions of one report day.
pub async fn fetch_day_details(raw_date: &str) -> Result<Vec<Transaction>, ApiError> {
    let url = format!(
        "{}?date={}",
        api_url("/api/daily-terminal-report/details"),
        urlencoding::encode(raw_date)
    );
    fetch_json(&url).await
}

/// Fetch the line items of one transaction.
pub async fn fetch_transaction_items(trans_id: &str) -> Result<Vec<LineItem>, ApiError> {
    let url = api_url(&format!(
        "/api/transactions/{}/details",
        urlencoding::encode(trans_id)
    ));
    fetch_json(&url).await
}
