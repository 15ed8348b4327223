use serde::{Deserialize, Serialize};

/// Per-item sale count from `/api/item-sales-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSalesSummary {
    #[serde(rename = "ItemName")]
    pub item_name: String,
    #[serde(rename = "saleCount")]
    pub sale_count: f64,
}

/// Bucketing thresholds for item movement.
///
/// Both comparisons are strict: a count equal to `fast_over` is still
/// slow moving, a count equal to `slow_over` is non moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementThresholds {
    pub fast_over: f64,
    pub slow_over: f64,
}

impl Default for MovementThresholds {
    fn default() -> Self {
        Self {
            fast_over: 100.0,
            slow_over: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementClass {
    Fast,
    Slow,
    Non,
}

impl MovementClass {
    pub fn classify(sale_count: f64, thresholds: &MovementThresholds) -> Self {
        if sale_count > thresholds.fast_over {
            MovementClass::Fast
        } else if sale_count > thresholds.slow_over {
            MovementClass::Slow
        } else {
            MovementClass::Non
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementClass::Fast => "Fast Moving",
            MovementClass::Slow => "Slow Moving",
            MovementClass::Non => "Non Moving",
        }
    }
}

/// FSN breakdown of an item summary list. Fast movers also count as
/// trending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FsnSummary {
    pub fast: Vec<String>,
    pub slow: Vec<String>,
    pub non: Vec<String>,
    pub trending: Vec<String>,
}

impl FsnSummary {
    pub fn build(items: &[ItemSalesSummary], thresholds: &MovementThresholds) -> Self {
        let mut summary = FsnSummary::default();
        for item in items {
            match MovementClass::classify(item.sale_count, thresholds) {
                MovementClass::Fast => {
                    summary.fast.push(item.item_name.clone());
                    summary.trending.push(item.item_name.clone());
                }
                MovementClass::Slow => summary.slow.push(item.item_name.clone()),
                MovementClass::Non => summary.non.push(item.item_name.clone()),
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, count: f64) -> ItemSalesSummary {
        ItemSalesSummary {
            item_name: name.to_string(),
            sale_count: count,
        }
    }

    #[test]
    fn classify_uses_strict_thresholds() {
        let t = MovementThresholds::default();
        assert_eq!(MovementClass::classify(150.0, &t), MovementClass::Fast);
        assert_eq!(MovementClass::classify(100.0, &t), MovementClass::Slow);
        assert_eq!(MovementClass::classify(50.0, &t), MovementClass::Slow);
        assert_eq!(MovementClass::classify(21.0, &t), MovementClass::Slow);
        assert_eq!(MovementClass::classify(20.0, &t), MovementClass::Non);
        assert_eq!(MovementClass::classify(5.0, &t), MovementClass::Non);
    }

    #[test]
    fn fast_movers_are_also_trending() {
        let items = vec![item("Shoyu Ramen", 150.0), item("Taco", 50.0), item("Mug", 5.0)];
        let summary = FsnSummary::build(&items, &MovementThresholds::default());
        assert_eq!(summary.fast, vec!["Shoyu Ramen"]);
        assert_eq!(summary.trending, vec!["Shoyu Ramen"]);
        assert_eq!(summary.slow, vec!["Taco"]);
        assert_eq!(summary.non, vec!["Mug"]);
    }

    #[test]
    fn boundary_count_is_slow_not_fast() {
        let items = vec![item("Boundary", 100.0)];
        let summary = FsnSummary::build(&items, &MovementThresholds::default());
        assert!(summary.fast.is_empty());
        assert!(summary.trending.is_empty());
        assert_eq!(summary.slow, vec!["Boundary"]);
    }

    #[test]
    fn summary_deserializes_wire_names() {
        let json = r#"[{"ItemName": "Shoyu Ramen", "saleCount": 150}]"#;
        let items: Vec<ItemSalesSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].item_name, "Shoyu Ramen");
        assert_eq!(items[0].sale_count, 150.0);
    }
}
