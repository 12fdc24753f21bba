//! # Money Module
//!
//! Provides the `Amount` type for the monetary fields of a receipt
//! (`total` and each item's `price`).
//!
//! ## Why Binary Floats Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DIVISIBILITY CHECKS ON RECEIPT AMOUNTS                                 │
//! │                                                                         │
//! │  Receipts carry amounts as text: "35.35", "10.00", "6.49"              │
//! │                                                                         │
//! │  The bonus rules ask two kinds of questions:                           │
//! │    total mod 1.00 == 0 ?     total mod 0.25 == 0 ?                      │
//! │    ceil(price × 0.2)                                                    │
//! │                                                                         │
//! │  Multiples of 0.25 are exact in binary floating point, so the          │
//! │  modulo test is exact for every two-digit amount:                      │
//! │    10.50 % 0.25 = 0.0        35.35 % 0.25 = 0.1 (approx, non-zero)     │
//! │                                                                         │
//! │  Amounts are never added together, so float drift cannot accumulate.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::money::Amount;
//!
//! let total = Amount::parse("total", "10.50").unwrap();
//! assert!(!total.is_whole());
//! assert!(total.is_multiple_of(0.25));
//!
//! assert!(Amount::parse("total", "ten dollars").is_err());
//! ```

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Largest accepted amount: one billion dollars.
///
/// Keeps `scaled_ceil` and every points sum far below `u64::MAX`.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

// =============================================================================
// Amount Type
// =============================================================================

/// A parsed, finite, non-negative monetary amount.
///
/// ## Invariants
/// - Never `NaN` or infinite
/// - Never below zero, so every rule built on it yields points ≥ 0
/// - Never above `MAX_AMOUNT`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Parses a decimal string such as `"35.35"`.
    ///
    /// `field` names the receipt field for the error message.
    ///
    /// ## Errors
    /// `CoreError::MalformedField` when the string is not a decimal number,
    /// is not finite, is negative, or exceeds `MAX_AMOUNT`.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Amount;
    ///
    /// let price = Amount::parse("price", "6.49").unwrap();
    /// assert_eq!(price.value(), 6.49);
    ///
    /// assert!(Amount::parse("price", "").is_err());
    /// assert!(Amount::parse("price", "NaN").is_err());
    /// assert!(Amount::parse("price", "-1.00").is_err());
    /// ```
    pub fn parse(field: &str, raw: &str) -> CoreResult<Self> {
        let value: f64 = raw
            .parse()
            .map_err(|_| CoreError::malformed(field, raw, "not a decimal number"))?;

        if !value.is_finite() {
            return Err(CoreError::malformed(field, raw, "not a finite number"));
        }

        if value < 0.0 {
            return Err(CoreError::malformed(field, raw, "must not be negative"));
        }

        if value > MAX_AMOUNT {
            return Err(CoreError::malformed(field, raw, "exceeds maximum amount"));
        }

        Ok(Amount(value))
    }

    /// Returns the raw floating-point value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks whether the amount divides evenly by `step` (exact float modulo).
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Amount;
    ///
    /// let total = Amount::parse("total", "10.75").unwrap();
    /// assert!(total.is_multiple_of(0.25));
    /// assert!(!total.is_multiple_of(0.5));
    /// ```
    #[inline]
    pub fn is_multiple_of(&self, step: f64) -> bool {
        self.0 % step == 0.0
    }

    /// Checks whether the amount is a whole number of dollars.
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.is_multiple_of(1.0)
    }

    /// Multiplies by `factor` and rounds up to the next whole number.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Amount;
    ///
    /// let price = Amount::parse("price", "12.25").unwrap();
    /// // 12.25 × 0.2 = 2.45 → 3
    /// assert_eq!(price.scaled_ceil(0.2), 3);
    /// ```
    pub fn scaled_ceil(&self, factor: f64) -> u64 {
        // At most MAX_AMOUNT × factor, well inside u64.
        (self.0 * factor).ceil() as u64
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Amount::parse("total", "35.35").unwrap().value(), 35.35);
        assert_eq!(Amount::parse("total", "0.00").unwrap().value(), 0.0);
        assert_eq!(Amount::parse("total", "9").unwrap().value(), 9.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Amount::parse("total", "12.x").unwrap_err();
        assert!(matches!(err, CoreError::MalformedField { ref field, .. } if field == "total"));

        assert!(Amount::parse("total", "").is_err());
        assert!(Amount::parse("total", " 1.00").is_err());
        assert!(Amount::parse("total", "$1.00").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite_and_negative() {
        assert!(Amount::parse("total", "inf").is_err());
        assert!(Amount::parse("total", "NaN").is_err());
        assert!(Amount::parse("total", "-0.01").is_err());
    }

    #[test]
    fn test_parse_rejects_amounts_above_maximum() {
        assert!(Amount::parse("price", "1000000000.00").is_ok());

        let err = Amount::parse("price", "1000000000.01").unwrap_err();
        assert!(matches!(err, CoreError::MalformedField { ref reason, .. } if reason == "exceeds maximum amount"));

        assert!(Amount::parse("price", "100000000000000000000.00").is_err());
        assert!(Amount::parse("total", "1e300").is_err());
    }

    #[test]
    fn test_scaled_ceil_at_maximum() {
        let max = Amount::parse("price", "1000000000.00").unwrap();
        assert_eq!(max.scaled_ceil(0.2), 200_000_000);
    }

    #[test]
    fn test_whole_dollar() {
        assert!(Amount::parse("total", "10.00").unwrap().is_whole());
        assert!(!Amount::parse("total", "10.49").unwrap().is_whole());
        assert!(Amount::parse("total", "0.00").unwrap().is_whole());
    }

    #[test]
    fn test_quarter_multiples() {
        for raw in ["10.00", "10.25", "10.50", "10.75"] {
            assert!(Amount::parse("total", raw).unwrap().is_multiple_of(0.25), "{raw}");
        }
        for raw in ["35.35", "10.10", "10.01", "10.99"] {
            assert!(!Amount::parse("total", raw).unwrap().is_multiple_of(0.25), "{raw}");
        }
    }

    #[test]
    fn test_scaled_ceil() {
        assert_eq!(Amount::parse("price", "10.00").unwrap().scaled_ceil(0.2), 2);
        assert_eq!(Amount::parse("price", "12.00").unwrap().scaled_ceil(0.2), 3);
        assert_eq!(Amount::parse("price", "15.00").unwrap().scaled_ceil(0.2), 3);
        assert_eq!(Amount::parse("price", "0.00").unwrap().scaled_ceil(0.2), 0);
        assert_eq!(Amount::parse("price", "0.01").unwrap().scaled_ceil(0.2), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::parse("total", "35.35").unwrap().to_string(), "$35.35");
        assert_eq!(Amount::parse("total", "9").unwrap().to_string(), "$9.00");
    }
}
