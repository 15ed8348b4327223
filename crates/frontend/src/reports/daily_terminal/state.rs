//! View state for the daily terminal report.
//!
//! One value of [`DailyReportState`] owns everything the drill-down
//! hierarchy knows: the day rows, both lazy caches, both expansion
//! pointers and the fetch generation. The UI mutates it only through
//! the transition methods below, which keep the invariants:
//!
//! - at most one day and one transaction expanded at a time;
//! - caches are additive and only cleared wholesale by a report swap;
//! - a response from a superseded report fetch is discarded.

use contracts::reports::daily_terminal::{DayAggregate, LineItem, Transaction};
use leptos::prelude::RwSignal;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct DailyReportState {
    pub rows: Vec<DayAggregate>,

    /// The single expanded day, if any
    pub expanded_date: Option<String>,
    /// Day keys with a fetch in flight
    pub loading_dates: HashSet<String>,
    /// Transactions per day key, kept until the report is replaced
    pub details_by_date: HashMap<String, Vec<Transaction>>,

    /// The single expanded transaction, if any
    pub expanded_txn: Option<String>,
    /// Transaction keys with a fetch in flight
    pub loading_txns: HashSet<String>,
    /// Line items per transaction key, kept until the report is replaced
    pub items_by_txn: HashMap<String, Vec<LineItem>>,

    /// Identifies the report fetch the caches belong to. Completion
    /// handlers carry the generation they were started under; a
    /// mismatch means the response is stale.
    pub generation: u64,
}

/// Outcome of a row click, telling the UI whether to issue a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The row was expanded and is now collapsed
    Collapsed,
    /// The row expanded from cache, no request needed
    Expanded,
    /// The key needs fetching under this generation
    Fetch(u64),
    /// A fetch for this key is already in flight
    Ignored,
}

impl DailyReportState {
    /// Start a report fetch. Invalidates every response still in flight
    /// for the previous generation.
    pub fn begin_report_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Install a fetched report, clearing both caches and both
    /// expansion pointers together. Returns false for a stale response,
    /// which leaves the current state untouched.
    pub fn apply_report(&mut self, generation: u64, rows: Vec<DayAggregate>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.rows = rows;
        self.expanded_date = None;
        self.loading_dates.clear();
        self.details_by_date.clear();
        self.expanded_txn = None;
        self.loading_txns.clear();
        self.items_by_txn.clear();
        true
    }

    pub fn toggle_day(&mut self, raw_date: &str) -> Toggle {
        if self.loading_dates.contains(raw_date) {
            return Toggle::Ignored;
        }
        if self.expanded_date.as_deref() == Some(raw_date) {
            self.expanded_date = None;
            return Toggle::Collapsed;
        }
        if self.details_by_date.contains_key(raw_date) {
            self.expanded_date = Some(raw_date.to_string());
            self.expanded_txn = None;
            return Toggle::Expanded;
        }
        self.loading_dates.insert(raw_date.to_string());
        Toggle::Fetch(self.generation)
    }

    /// Store a day's transactions and expand it. A stale generation is
    /// dropped; the report it belonged to is gone.
    pub fn day_loaded(
        &mut self,
        generation: u64,
        raw_date: &str,
        transactions: Vec<Transaction>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading_dates.remove(raw_date);
        self.details_by_date
            .insert(raw_date.to_string(), transactions);
        self.expanded_date = Some(raw_date.to_string());
        self.expanded_txn = None;
        true
    }

    pub fn day_failed(&mut self, generation: u64, raw_date: &str) {
        if generation == self.generation {
            self.loading_dates.remove(raw_date);
        }
    }

    pub fn toggle_txn(&mut self, trans_id: &str) -> Toggle {
        if self.loading_txns.contains(trans_id) {
            return Toggle::Ignored;
        }
        if self.expanded_txn.as_deref() == Some(trans_id) {
            self.expanded_txn = None;
            return Toggle::Collapsed;
        }
        if self.items_by_txn.contains_key(trans_id) {
            self.expanded_txn = Some(trans_id.to_string());
            return Toggle::Expanded;
        }
        self.loading_txns.insert(trans_id.to_string());
        Toggle::Fetch(self.generation)
    }

    pub fn txn_loaded(&mut self, generation: u64, trans_id: &str, items: Vec<LineItem>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading_txns.remove(trans_id);
        self.items_by_txn.insert(trans_id.to_string(), items);
        self.expanded_txn = Some(trans_id.to_string());
        true
    }

    pub fn txn_failed(&mut self, generation: u64, trans_id: &str) {
        if generation == self.generation {
            self.loading_txns.remove(trans_id);
        }
    }
}

pub fn create_state() -> RwSignal<DailyReportState> {
    RwSignal::new(DailyReportState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw_date: &str) -> DayAggregate {
        serde_json::from_str(&format!(
            r#"{{"RawDate": "{raw_date}", "ReportDate": "{raw_date}",
                "GrossSales": 1.0, "GrossDiscount": 0.0, "NetSales": 1.0,
                "VAT": 0.0, "NetSalesWithoutVAT": 1.0}}"#
        ))
        .unwrap()
    }

    fn txn(trans_id: &str) -> Transaction {
        serde_json::from_str(&format!(
            r#"{{"TransID": "{trans_id}", "TerminalID": "1", "POS_No": "1",
                "DatePOS": "2024-03-15T10:00:00", "NetPurchase": 1.0,
                "GrossSales": 1.0, "WhoCreated": "c", "DiscountRegular": 0.0,
                "DiscountSpecial": 0.0, "PaymentType": "CASH"}}"#
        ))
        .unwrap()
    }

    fn loaded_state() -> DailyReportState {
        let mut state = DailyReportState::default();
        let generation = state.begin_report_fetch();
        assert!(state.apply_report(generation, vec![day("2024-03-15"), day("2024-03-16")]));
        state
    }

    #[test]
    fn second_expansion_hits_the_cache() {
        let mut state = loaded_state();

        let Toggle::Fetch(generation) = state.toggle_day("2024-03-15") else {
            panic!("first expansion must fetch");
        };
        assert!(state.day_loaded(generation, "2024-03-15", vec![txn("T-1")]));
        assert_eq!(state.expanded_date.as_deref(), Some("2024-03-15"));

        assert_eq!(state.toggle_day("2024-03-15"), Toggle::Collapsed);
        // no intervening refetch: the second expansion must not fetch
        assert_eq!(state.toggle_day("2024-03-15"), Toggle::Expanded);
    }

    #[test]
    fn second_txn_expansion_hits_the_cache() {
        let mut state = loaded_state();
        let Toggle::Fetch(generation) = state.toggle_txn("T-1") else {
            panic!("first expansion must fetch");
        };
        assert!(state.txn_loaded(generation, "T-1", vec![]));
        assert_eq!(state.toggle_txn("T-1"), Toggle::Collapsed);
        assert_eq!(state.toggle_txn("T-1"), Toggle::Expanded);
    }

    #[test]
    fn at_most_one_day_expanded() {
        let mut state = loaded_state();
        let Toggle::Fetch(generation) = state.toggle_day("2024-03-15") else {
            panic!()
        };
        state.day_loaded(generation, "2024-03-15", vec![]);

        let Toggle::Fetch(generation) = state.toggle_day("2024-03-16") else {
            panic!()
        };
        state.day_loaded(generation, "2024-03-16", vec![]);

        assert_eq!(state.expanded_date.as_deref(), Some("2024-03-16"));
        // the older day's cache stays resident
        assert!(state.details_by_date.contains_key("2024-03-15"));
    }

    #[test]
    fn expanding_a_day_collapses_the_open_transaction() {
        let mut state = loaded_state();
        let Toggle::Fetch(generation) = state.toggle_day("2024-03-15") else {
            panic!()
        };
        state.day_loaded(generation, "2024-03-15", vec![txn("T-1")]);
        let Toggle::Fetch(generation) = state.toggle_txn("T-1") else {
            panic!()
        };
        state.txn_loaded(generation, "T-1", vec![]);
        assert_eq!(state.expanded_txn.as_deref(), Some("T-1"));

        let Toggle::Fetch(generation) = state.toggle_day("2024-03-16") else {
            panic!()
        };
        state.day_loaded(generation, "2024-03-16", vec![]);
        assert_eq!(state.expanded_txn, None);
        // the item cache survives the toggle
        assert!(state.items_by_txn.contains_key("T-1"));
    }

    #[test]
    fn report_swap_clears_everything_atomically() {
        let mut state = loaded_state();
        let Toggle::Fetch(generation) = state.toggle_day("2024-03-15") else {
            panic!()
        };
        state.day_loaded(generation, "2024-03-15", vec![txn("T-1")]);
        let Toggle::Fetch(generation) = state.toggle_txn("T-1") else {
            panic!()
        };
        state.txn_loaded(generation, "T-1", vec![]);

        let generation = state.begin_report_fetch();
        assert!(state.apply_report(generation, vec![day("2024-04-01")]));

        assert_eq!(state.expanded_date, None);
        assert_eq!(state.expanded_txn, None);
        assert!(state.details_by_date.is_empty());
        assert!(state.items_by_txn.is_empty());
        assert!(state.loading_dates.is_empty());
        assert!(state.loading_txns.is_empty());
    }

    #[test]
    fn stale_report_response_is_discarded() {
        let mut state = DailyReportState::default();
        let first = state.begin_report_fetch();
        let second = state.begin_report_fetch();
        assert!(!state.apply_report(first, vec![day("2024-03-15")]));
        assert!(state.rows.is_empty());
        assert!(state.apply_report(second, vec![day("2024-03-16")]));
        assert_eq!(state.rows.len(), 1);
    }

    #[test]
    fn stale_day_response_is_discarded_after_refetch() {
        let mut state = loaded_state();
        let Toggle::Fetch(old_generation) = state.toggle_day("2024-03-15") else {
            panic!()
        };

        // filter applied while the day fetch is in flight
        let generation = state.begin_report_fetch();
        state.apply_report(generation, vec![day("2024-04-01")]);

        assert!(!state.day_loaded(old_generation, "2024-03-15", vec![txn("T-1")]));
        assert!(state.details_by_date.is_empty());
        assert_eq!(state.expanded_date, None);
    }

    #[test]
    fn stale_txn_response_is_discarded_after_refetch() {
        let mut state = loaded_state();
        let Toggle::Fetch(old_generation) = state.toggle_txn("T-1") else {
            panic!()
        };
        let generation = state.begin_report_fetch();
        state.apply_report(generation, vec![]);

        assert!(!state.txn_loaded(old_generation, "T-1", vec![]));
        assert!(state.items_by_txn.is_empty());
        assert_eq!(state.expanded_txn, None);
    }

    #[test]
    fn duplicate_click_while_loading_is_ignored() {
        let mut state = loaded_state();
        assert!(matches!(state.toggle_day("2024-03-15"), Toggle::Fetch(_)));
        assert_eq!(state.toggle_day("2024-03-15"), Toggle::Ignored);

        assert!(matches!(state.toggle_txn("T-1"), Toggle::Fetch(_)));
        assert_eq!(state.toggle_txn("T-1"), Toggle::Ignored);
    }

    #[test]
    fn failed_day_fetch_unlocks_the_row() {
        let mut state = loaded_state();
        let Toggle::Fetch(generation) = state.toggle_day("2024-03-15") else {
            panic!()
        };
        state.day_failed(generation, "2024-03-15");
        // the row is clickable again and fetches again
        assert!(matches!(state.toggle_day("2024-03-15"), Toggle::Fetch(_)));
    }
}
