use crate::shared::api::{fetch_json, ApiError};
use crate::shared::config::api_url;
use contracts::reports::daily_terminal::Transaction;

/// Fetch one page of transactions. The date range is only forwarded
/// when both ends are set, matching the endpoint's filter contract.
pub async fn fetch_transactions(
    page: usize,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<Transaction>, ApiError> {
    let mut url = format!("{}?page={}", api_url("/api/transactions"), page);
    if !start_date.is_empty() && !end_date.is_empty() {
        url.push_str(&format!(
            "&startDate={}&endDate={}",
            urlencoding::encode(start_date),
            urlencoding::encode(end_date)
        ));
    }
    fetch_json(&url).await
}
