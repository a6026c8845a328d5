//! Lossless decimal numeric type backed by rust_decimal.
//!
//! All money, score, and share arithmetic in the engine goes through this
//! wrapper so that repeated reconciliation runs over the same inputs are
//! bit-identical. Rounding happens only at the persistence boundary via
//! [`Decimal::round_dp`], never inside the allocation loop.

use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lossless decimal numeric type for payout calculations.
///
/// Backed by rust_decimal to avoid floating-point drift.
/// Serializes to JSON number (not string) by default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Decimal {
    /// Wrap a RustDecimal.
    pub fn new(value: RustDecimal) -> Self {
        Decimal(value)
    }

    /// Build a decimal from an integer mantissa and a base-ten scale,
    /// e.g. `from_parts(1, 2)` is `0.01`. Used for compiled-in constants.
    pub fn from_parts(mantissa: i64, scale: u32) -> Self {
        Decimal(RustDecimal::new(mantissa, scale))
    }

    /// Parse a Decimal from a string losslessly.
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Format as a canonical string: no exponent notation, no trailing zeros.
    pub fn to_canonical_string(&self) -> String {
        format!("{}", self.0.normalize())
    }

    /// Get the underlying RustDecimal.
    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    /// The additive identity (0).
    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    /// The multiplicative identity (1).
    pub fn one() -> Self {
        Decimal(RustDecimal::ONE)
    }

    /// Returns the value 100, the divisor for percent-to-multiplier math.
    pub fn hundred() -> Self {
        Decimal(RustDecimal::ONE_HUNDRED)
    }

    /// Returns true if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is > 0.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.0.is_sign_positive()
    }

    /// Returns true if the value is < 0.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// Round to `dp` decimal places, banker's rounding. Boundary use only:
    /// callers round once when persisting, the engine itself stays exact.
    pub fn round_dp(&self, dp: u32) -> Self {
        Decimal(self.0.round_dp(dp))
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Decimal(self.0.abs())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}

impl From<Decimal> for RustDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal(RustDecimal::from(value))
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Decimal) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 * rhs.0)
    }
}

impl std::ops::Div for Decimal {
    type Output = Decimal;

    fn div(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 / rhs.0)
    }
}

impl std::ops::Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_parse_roundtrip() {
        for s in ["42500", "0.001", "0.4", "-1", "0", "99999999.99"] {
            let decimal = d(s);
            let reparsed = d(&decimal.to_canonical_string());
            assert_eq!(decimal, reparsed, "roundtrip failed for {}", s);
        }
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(Decimal::from_parts(1, 2), d("0.01"));
        assert_eq!(Decimal::from_parts(5, 1), d("0.5"));
        assert_eq!(Decimal::from_parts(40, 2), d("0.4"));
        assert_eq!(Decimal::from_parts(95, 0), d("95"));
    }

    #[test]
    fn test_percent_identity_is_exact() {
        // 15% of 50,000: commission + net must reassemble the gross exactly.
        let gross = d("50000");
        let multiplier = Decimal::one() - d("15") / Decimal::hundred();
        let net = gross * multiplier;
        assert_eq!(net, d("42500"));
        assert_eq!(gross - net + net, gross);
    }

    #[test]
    fn test_round_dp_bankers() {
        assert_eq!(d("10.005").round_dp(2), d("10"));
        assert_eq!(d("10.015").round_dp(2), d("10.02"));
        assert_eq!(d("10.004").round_dp(2), d("10"));
    }

    #[test]
    fn test_canonical_no_exponent() {
        let formatted = d("1000000").to_canonical_string();
        assert!(!formatted.contains('e'));
        assert_eq!(formatted, "1000000");
    }

    #[test]
    fn test_sign_predicates() {
        assert!(d("0.1").is_positive());
        assert!(d("-0.1").is_negative());
        assert!(d("0").is_zero());
        assert!(!d("0").is_positive());
        assert!(!d("0").is_negative());
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(Decimal::from(1500u64), d("1500"));
    }

    #[test]
    fn test_json_serializes_as_number() {
        let json = serde_json::to_value(d("0.4")).unwrap();
        assert!(json.is_number());
        assert_eq!(json.to_string(), "0.4");
    }
}
