//! # Bonus Rules
//!
//! The fixed set of rules that award points for a receipt.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                 Reads            Awards                           │
//! │  ───────────────────  ───────────────  ───────────────────────────────  │
//! │  AlphanumericName     retailer         1 per letter or digit            │
//! │  WholeDollar          total            50 if total mod 1.00 == 0        │
//! │  QuarterMultiple      total            25 if total mod 0.25 == 0        │
//! │  ItemPair             items.len()      5 per pair of items              │
//! │  DescriptionLength    each item        ceil(price × 0.2) if trimmed     │
//! │                                        description length mod 3 == 0    │
//! │  OddDay               purchaseDate     6 if the day is odd              │
//! │  HappyHour            purchaseTime     10 if 13:59 < time < 16:01       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule is a pure function of the receipt and the constants below.
//! Rules never see each other's results, so the order they run in does not
//! change the total.

use chrono::Timelike;
use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::fields::{day_ones_digit, parse_purchase_time};
use crate::money::Amount;
use crate::types::{LineItem, Points, Receipt};

// =============================================================================
// Reward Schedule
// =============================================================================

/// Points per alphanumeric character in the retailer name.
pub const LETTER_POINTS: Points = 1;

/// Points when the total is a round dollar amount.
pub const WHOLE_DOLLAR_POINTS: Points = 50;

/// Points when the total is a multiple of [`QUARTER_STEP`].
pub const QUARTER_POINTS: Points = 25;

/// Divisor for the quarter-multiple rule.
pub const QUARTER_STEP: f64 = 0.25;

/// Points for every two items on the receipt.
pub const ITEM_PAIR_POINTS: Points = 5;

/// Trimmed description length must divide by this to earn the item bonus.
pub const DESCRIPTION_LENGTH_FACTOR: usize = 3;

/// Item price multiplier for the description bonus (result rounded up).
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Points when the purchase day is odd.
pub const ODD_DAY_POINTS: Points = 6;

/// Happy hour opens after 13:59:00 (exclusive).
pub const HAPPY_HOUR_START_SECS: u32 = 13 * 3600 + 59 * 60;

/// Happy hour closes before 16:01:00 (exclusive).
pub const HAPPY_HOUR_END_SECS: u32 = 16 * 3600 + 60;

/// Points for a purchase made during happy hour.
pub const HAPPY_HOUR_POINTS: Points = 10;

/// Wire name of the receipt total.
pub const TOTAL_FIELD: &str = "total";

// =============================================================================
// Rule Registry
// =============================================================================

/// One of the seven bonus rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BonusRule {
    AlphanumericName,
    WholeDollar,
    QuarterMultiple,
    ItemPair,
    DescriptionLength,
    OddDay,
    HappyHour,
}

impl BonusRule {
    /// Every rule, in reporting order.
    pub const ALL: [BonusRule; 7] = [
        BonusRule::AlphanumericName,
        BonusRule::WholeDollar,
        BonusRule::QuarterMultiple,
        BonusRule::ItemPair,
        BonusRule::DescriptionLength,
        BonusRule::OddDay,
        BonusRule::HappyHour,
    ];

    /// Human-readable rule name for logs and breakdowns.
    pub const fn label(&self) -> &'static str {
        match self {
            BonusRule::AlphanumericName => "Alphanumeric name",
            BonusRule::WholeDollar => "Whole dollar",
            BonusRule::QuarterMultiple => "Quarter multiple",
            BonusRule::ItemPair => "Item pairs",
            BonusRule::DescriptionLength => "Description length",
            BonusRule::OddDay => "Odd day",
            BonusRule::HappyHour => "Happy hour",
        }
    }

    /// Evaluates the rule against a receipt.
    ///
    /// Per-item rules are applied to every line item and summed.
    ///
    /// ## Errors
    /// `CoreError::MalformedField` from the first field that fails to parse.
    pub fn evaluate(&self, receipt: &Receipt) -> CoreResult<Points> {
        match self {
            BonusRule::AlphanumericName => Ok(alphanumeric_name_bonus(&receipt.retailer)),
            BonusRule::WholeDollar => Ok(whole_dollar_bonus(parse_total(receipt)?)),
            BonusRule::QuarterMultiple => Ok(quarter_multiple_bonus(parse_total(receipt)?)),
            BonusRule::ItemPair => Ok(item_pair_bonus(receipt.items.len())),
            BonusRule::DescriptionLength => receipt
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| description_length_bonus(index, item))
                .sum(),
            BonusRule::OddDay => odd_day_bonus(&receipt.purchase_date),
            BonusRule::HappyHour => happy_hour_bonus(&receipt.purchase_time),
        }
    }
}

fn parse_total(receipt: &Receipt) -> CoreResult<Amount> {
    Amount::parse(TOTAL_FIELD, &receipt.total)
}

/// Wire name of an item's price, e.g. `items[2].price`.
pub fn item_price_field(index: usize) -> String {
    format!("items[{index}].price")
}

// =============================================================================
// Rules
// =============================================================================

/// One point per letter or digit in the retailer name.
///
/// ## Example
/// ```rust
/// use points_core::rules::alphanumeric_name_bonus;
///
/// assert_eq!(alphanumeric_name_bonus("Target"), 6);
/// assert_eq!(alphanumeric_name_bonus("M&M Corner Market"), 14);
/// ```
pub fn alphanumeric_name_bonus(retailer: &str) -> Points {
    let count = retailer.chars().filter(|c| c.is_alphanumeric()).count() as Points;
    count * LETTER_POINTS
}

/// 50 points if the total has no cents.
pub fn whole_dollar_bonus(total: Amount) -> Points {
    if total.is_whole() {
        WHOLE_DOLLAR_POINTS
    } else {
        0
    }
}

/// 25 points if the total is a multiple of 0.25.
pub fn quarter_multiple_bonus(total: Amount) -> Points {
    if total.is_multiple_of(QUARTER_STEP) {
        QUARTER_POINTS
    } else {
        0
    }
}

/// 5 points for every two items, rounding down.
pub fn item_pair_bonus(item_count: usize) -> Points {
    (item_count / 2) as Points * ITEM_PAIR_POINTS
}

/// `ceil(price × 0.2)` when the trimmed description length is a multiple
/// of 3, otherwise 0.
///
/// The length is counted in bytes. The price is parsed even when the
/// description does not qualify, so a malformed price always fails.
pub fn description_length_bonus(index: usize, item: &LineItem) -> CoreResult<Points> {
    let price = Amount::parse(&item_price_field(index), &item.price)?;

    if item.trimmed_description().len() % DESCRIPTION_LENGTH_FACTOR == 0 {
        Ok(price.scaled_ceil(DESCRIPTION_PRICE_MULTIPLIER))
    } else {
        Ok(0)
    }
}

/// 6 points if the day of the purchase date is odd.
pub fn odd_day_bonus(purchase_date: &str) -> CoreResult<Points> {
    let ones = day_ones_digit(purchase_date)?;
    Ok(if ones % 2 == 1 { ODD_DAY_POINTS } else { 0 })
}

/// 10 points if the purchase time is after 13:59 and before 16:01.
pub fn happy_hour_bonus(purchase_time: &str) -> CoreResult<Points> {
    let secs = parse_purchase_time(purchase_time)?.num_seconds_from_midnight();

    if secs > HAPPY_HOUR_START_SECS && secs < HAPPY_HOUR_END_SECS {
        Ok(HAPPY_HOUR_POINTS)
    } else {
        Ok(0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
