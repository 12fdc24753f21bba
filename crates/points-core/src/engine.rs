//! # Scoring Engine
//!
//! Runs every [`BonusRule`] against a receipt and sums the results.
//!
//! ## Scoring Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Receipt                                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  for rule in BonusRule::ALL ──► rule.evaluate(receipt)                  │
//! │     │                              │                                    │
//! │     │                              ├── Err(MalformedField) → abort      │
//! │     │                              └── Ok(points) → RuleContribution    │
//! │     ▼                                                                   │
//! │  ScoreBreakdown ──► total() ──► Points                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::rules::BonusRule;
use crate::types::{Points, Receipt};

/// Points one rule awarded to a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct RuleContribution {
    pub rule: BonusRule,
    #[ts(type = "number")]
    pub points: Points,
}

/// Per-rule contributions for one receipt, in [`BonusRule::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Sum of every contribution.
    pub fn total(&self) -> Points {
        self.contributions.iter().map(|c| c.points).sum()
    }

    /// Points awarded by a single rule (0 if it did not run).
    pub fn points_for(&self, rule: BonusRule) -> Points {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map(|c| c.points)
            .unwrap_or(0)
    }
}

/// Evaluates every rule and records what each one awarded.
///
/// ## Errors
/// Stops at the first rule that hits a malformed field.
pub fn breakdown(receipt: &Receipt) -> CoreResult<ScoreBreakdown> {
    let mut contributions = Vec::with_capacity(BonusRule::ALL.len());
    let mut running_total: Points = 0;

    for rule in BonusRule::ALL {
        let points = rule.evaluate(receipt)?;
        running_total += points;

        debug!(
            rule = rule.label(),
            points,
            running_total,
            retailer = %receipt.retailer,
            "Applied bonus rule"
        );

        contributions.push(RuleContribution { rule, points });
    }

    Ok(ScoreBreakdown { contributions })
}

/// Computes the point total for a receipt.
///
/// Pure function of the receipt's fields: scoring the same receipt twice
/// always yields the same total.
///
/// ## Example
/// ```rust
/// use points_core::{engine::score, LineItem, Receipt};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-02".to_string(),
///     purchase_time: "13:13".to_string(),
///     items: vec![LineItem::new("Pepsi - 12-oz", "1.25")],
///     total: "1.25".to_string(),
/// };
///
/// // 6 (name) + 25 (quarter) = 31
/// assert_eq!(score(&receipt).unwrap(), 31);
/// ```
pub fn score(receipt: &Receipt) -> CoreResult<Points> {
    Ok(breakdown(receipt)?.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::LineItem;

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                LineItem::new("Mountain Dew 12PK", "6.49"),
                LineItem::new("Emils Cheese Pizza", "12.25"),
                LineItem::new("Knorr Creamy Chicken", "1.26"),
                LineItem::new("Doritos Nacho Cheese", "3.35"),
                LineItem::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        }
    }

    fn corner_market_receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![
                LineItem::new("Gatorade", "2.25"),
                LineItem::new("Gatorade", "2.25"),
                LineItem::new("Gatorade", "2.25"),
                LineItem::new("Gatorade", "2.25"),
            ],
            total: "9.00".to_string(),
        }
    }

    #[test]
    fn test_target_receipt_scores_28() {
        // 6 name + 10 pairs + 3 + 3 description + 6 odd day
        let breakdown = breakdown(&target_receipt()).unwrap();
        assert_eq!(breakdown.points_for(BonusRule::AlphanumericName), 6);
        assert_eq!(breakdown.points_for(BonusRule::ItemPair), 10);
        assert_eq!(breakdown.points_for(BonusRule::DescriptionLength), 6);
        assert_eq!(breakdown.points_for(BonusRule::OddDay), 6);
        assert_eq!(breakdown.points_for(BonusRule::HappyHour), 0);
        assert_eq!(breakdown.total(), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        // 14 name + 50 whole + 25 quarter + 10 pairs + 10 happy hour
        assert_eq!(score(&corner_market_receipt()).unwrap(), 109);
    }

    #[test]
    fn test_two_item_target_receipt() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-13".to_string(),
            purchase_time: "14:30".to_string(),
            items: vec![
                LineItem::new("Bread", "20.00"),
                LineItem::new("Milk", "15.35"),
            ],
            total: "35.35".to_string(),
        };
        // 6 name + 0 whole + 0 quarter + 5 pair + 0 descriptions + 6 odd + 10 happy
        assert_eq!(score(&receipt).unwrap(), 27);
    }

    #[test]
    fn test_breakdown_has_one_entry_per_rule() {
        let breakdown = breakdown(&target_receipt()).unwrap();
        let rules: Vec<_> = breakdown.contributions.iter().map(|c| c.rule).collect();
        assert_eq!(rules, BonusRule::ALL.to_vec());
    }

    #[test]
    fn test_oversized_price_is_rejected_not_overflowed() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:13".to_string(),
            items: vec![
                LineItem::new("Cheese", "100000000000000000000.00"),
                LineItem::new("Cheese", "100000000000000000000.00"),
            ],
            total: "1.00".to_string(),
        };

        let err = score(&receipt).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedField { ref field, .. } if field == "items[0].price"
        ));
    }

    #[test]
    fn test_maximum_prices_score_without_overflow() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "13:13".to_string(),
            items: vec![LineItem::new("Cheese", "1000000000.00"); crate::MAX_RECEIPT_ITEMS],
            total: "1000000000.00".to_string(),
        };

        // 6 name + 50 whole + 25 quarter + 500 pairs × 5 + 1000 × 200_000_000
        let expected = 6 + 50 + 25 + 2_500 + 200_000_000_000;
        assert_eq!(score(&receipt).unwrap(), expected);
    }

    #[test]
    fn test_score_is_idempotent() {
        let receipt = target_receipt();
        let first = score(&receipt).unwrap();
        for _ in 0..10 {
            assert_eq!(score(&receipt).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_receipt_scores_name_and_total_only() {
        let receipt = Receipt {
            retailer: "".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "09:00".to_string(),
            items: vec![],
            total: "0.00".to_string(),
        };
        assert_eq!(score(&receipt).unwrap(), 75);
    }

    #[test]
    fn test_malformed_total_aborts_scoring() {
        let mut receipt = target_receipt();
        receipt.total = "thirty-five".to_string();

        let err = score(&receipt).unwrap_err();
        assert!(matches!(err, CoreError::MalformedField { ref field, .. } if field == "total"));
    }

    #[test]
    fn test_malformed_time_aborts_scoring() {
        let mut receipt = target_receipt();
        receipt.purchase_time = "1 PM".to_string();
        assert!(score(&receipt).is_err());
    }

    #[test]
    fn test_malformed_item_price_aborts_scoring() {
        let mut receipt = target_receipt();
        receipt.items[4].price = "".to_string();

        let err = score(&receipt).unwrap_err();
        assert!(
            matches!(err, CoreError::MalformedField { ref field, .. } if field == "items[4].price")
        );
    }
}
