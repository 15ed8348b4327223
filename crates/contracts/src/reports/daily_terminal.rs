use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One calendar day of the daily terminal report.
///
/// Besides the fixed columns, the endpoint emits one numeric field per
/// terminal, keyed by the terminal display name. Those land in the
/// flattened `terminals` map. Money fields may arrive as JSON `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAggregate {
    /// ISO date string, the cache/expansion key for the day
    #[serde(rename = "RawDate")]
    pub raw_date: String,
    /// Human-readable date shown in the report column
    #[serde(rename = "ReportDate")]
    pub report_date: String,
    #[serde(rename = "GrossSales")]
    pub gross_sales: Option<f64>,
    #[serde(rename = "GrossDiscount")]
    pub gross_discount: Option<f64>,
    #[serde(rename = "NetSales")]
    pub net_sales: Option<f64>,
    #[serde(rename = "VAT")]
    pub vat: Option<f64>,
    #[serde(rename = "NetSalesWithoutVAT")]
    pub net_sales_without_vat: Option<f64>,
    /// Per-terminal sales, keyed by terminal display name
    #[serde(flatten)]
    pub terminals: HashMap<String, Option<f64>>,
}

impl DayAggregate {
    /// Sales amount for a terminal column, `None` when the endpoint sent
    /// no value (or `null`) for that terminal on this day.
    pub fn terminal_amount(&self, terminal: &str) -> Option<f64> {
        self.terminals.get(terminal).copied().flatten()
    }
}

/// One POS transaction within a day, keyed by `TransID`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "TransID")]
    pub trans_id: String,
    #[serde(rename = "TerminalID")]
    pub terminal_id: String,
    #[serde(rename = "POS_No")]
    pub pos_no: String,
    /// Source timestamp, already in display-local time
    #[serde(rename = "DatePOS")]
    pub date_pos: String,
    #[serde(rename = "NetPurchase")]
    pub net_purchase: Option<f64>,
    #[serde(rename = "GrossSales")]
    pub gross_sales: Option<f64>,
    #[serde(rename = "WhoCreated")]
    pub who_created: String,
    #[serde(rename = "DiscountRegular")]
    pub discount_regular: Option<f64>,
    #[serde(rename = "DiscountSpecial")]
    pub discount_special: Option<f64>,
    #[serde(rename = "PaymentType")]
    pub payment_type: String,
}

/// One line item of a transaction, keyed by `RecordID`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "RecordID")]
    pub record_id: String,
    #[serde(rename = "ItemCode")]
    pub item_code: String,
    #[serde(rename = "ItemName")]
    pub item_name: String,
    #[serde(rename = "UnitPrice")]
    pub unit_price: Option<f64>,
    #[serde(rename = "QTY")]
    pub qty: f64,
    #[serde(rename = "UOM")]
    pub uom: String,
    #[serde(rename = "GrossPrice")]
    pub gross_price: Option<f64>,
    #[serde(rename = "NetPrice")]
    pub net_price: Option<f64>,
    #[serde(rename = "DiscountSpecial")]
    pub discount_special: Option<f64>,
    #[serde(rename = "DateCreated")]
    pub date_created: String,
    #[serde(rename = "SCPWDDiscount")]
    pub scpwd_discount: Option<f64>,
    #[serde(rename = "VATDiscount")]
    pub vat_discount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_aggregate_collects_terminal_columns() {
        let json = r#"{
            "RawDate": "2024-03-15",
            "ReportDate": "March 15, 2024",
            "GrossSales": 45210.5,
            "GrossDiscount": null,
            "NetSales": 44100.0,
            "VAT": 4725.0,
            "NetSalesWithoutVAT": 39375.0,
            "Kai Inan": 1200.0,
            "Ramen Ki": null
        }"#;
        let row: DayAggregate = serde_json::from_str(json).unwrap();
        assert_eq!(row.raw_date, "2024-03-15");
        assert_eq!(row.gross_discount, None);
        assert_eq!(row.terminal_amount("Kai Inan"), Some(1200.0));
        assert_eq!(row.terminal_amount("Ramen Ki"), None);
        assert_eq!(row.terminal_amount("Stacks"), None);
    }

    #[test]
    fn transaction_uses_wire_field_names() {
        let json = r#"{
            "TransID": "T-1001",
            "TerminalID": "7",
            "POS_No": "2",
            "DatePOS": "2024-03-15T13:45:00",
            "NetPurchase": 350.0,
            "GrossSales": 392.0,
            "WhoCreated": "cashier01",
            "DiscountRegular": 0.0,
            "DiscountSpecial": null,
            "PaymentType": "CASH"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.trans_id, "T-1001");
        assert_eq!(txn.discount_special, None);

        let back = serde_json::to_value(&txn).unwrap();
        assert_eq!(back["TransID"], "T-1001");
        assert_eq!(back["POS_No"], "2");
    }

    #[test]
    fn line_item_round_trips() {
        let json = r#"{
            "RecordID": "R-9",
            "ItemCode": "RMN-01",
            "ItemName": "Shoyu Ramen",
            "UnitPrice": 280.0,
            "QTY": 2.0,
            "UOM": "pc",
            "GrossPrice": 560.0,
            "NetPrice": 500.0,
            "DiscountSpecial": null,
            "DateCreated": "2024-03-15T13:45:12",
            "SCPWDDiscount": 0.0,
            "VATDiscount": 60.0
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.record_id, "R-9");
        assert_eq!(item.qty, 2.0);
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["SCPWDDiscount"], 0.0);
    }
}
