//! Paging state for the transactions browser.

use contracts::reports::daily_terminal::Transaction;

/// Server page size for `/api/transactions`. The endpoint reports no
/// total count; a full page is the only signal that more rows exist.
pub const PAGE_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct TransactionsPage {
    /// 1-indexed page number
    pub page: usize,
    pub rows: Vec<Transaction>,
}

impl Default for TransactionsPage {
    fn default() -> Self {
        Self {
            page: 1,
            rows: Vec::new(),
        }
    }
}

impl TransactionsPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// A short page means the server ran out of rows.
    pub fn has_next(&self) -> bool {
        self.rows.len() == PAGE_SIZE
    }
}
