use serde::{Deserialize, Serialize};

/// Bucket size for the sales graph endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Aggregation {
    pub const ALL: [Aggregation; 4] = [
        Aggregation::Daily,
        Aggregation::Weekly,
        Aggregation::Monthly,
        Aggregation::Yearly,
    ];

    /// Query-parameter value expected by `/api/sales-graph`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Daily => "daily",
            Aggregation::Weekly => "weekly",
            Aggregation::Monthly => "monthly",
            Aggregation::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Aggregation::Daily => "Daily",
            Aggregation::Weekly => "Weekly",
            Aggregation::Monthly => "Monthly",
            Aggregation::Yearly => "Yearly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == value)
    }
}

/// One point of the aggregated sales series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Bucket label produced by the endpoint (day, week, month or year)
    pub date: String,
    #[serde(rename = "grossSales")]
    pub gross_sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregation_round_trips_query_values() {
        for agg in Aggregation::ALL {
            assert_eq!(Aggregation::parse(agg.as_str()), Some(agg));
        }
        assert_eq!(Aggregation::parse("hourly"), None);
    }

    #[test]
    fn sales_point_uses_camel_case_amount() {
        let json = r#"{"date": "2024-03", "grossSales": 91250.75}"#;
        let point: SalesPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, "2024-03");
        assert_eq!(point.gross_sales, 91250.75);
    }
}
