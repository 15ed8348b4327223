//! Application configuration.
//!
//! Everything the original build hard-coded into view code lives here:
//! the API base URL, the movement-classification thresholds and the
//! fixed terminal column list.

use contracts::analytics::item_movement::MovementThresholds;
use once_cell::sync::Lazy;

/// Terminal display names, in report column order. These double as the
/// per-terminal field names on the daily report wire format.
pub const TERMINALS: [&str; 14] = [
    "Kai Inan",
    "Ramen Ki",
    "Ihaw Ihaw",
    "Stacks",
    "QuickSilog",
    "Cozy Taco",
    "Kanpai",
    "Stomping",
    "D&D",
    "MamaBear",
    "Wanna Wok",
    "Kai World",
    "Kai Bar",
    "Grab & Go",
];

pub struct AppConfig {
    /// Base URL prepended to every `/api/...` path. Empty means
    /// same-origin relative requests.
    pub api_base: String,
    pub thresholds: MovementThresholds,
}

pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| AppConfig {
    api_base: option_env!("SALES_API_BASE").unwrap_or("").to_string(),
    thresholds: MovementThresholds::default(),
});

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", CONFIG.api_base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_path() {
        // With no override configured the path stays same-origin relative.
        assert!(api_url("/api/transactions").ends_with("/api/transactions"));
    }

    #[test]
    fn default_thresholds_match_classification_contract() {
        assert_eq!(CONFIG.thresholds.fast_over, 100.0);
        assert_eq!(CONFIG.thresholds.slow_over, 20.0);
    }
}
