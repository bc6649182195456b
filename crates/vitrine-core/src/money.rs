//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total computed as parseFloat(price) * quantity needs a          │
//! │  rounding pass after every sum just to stay presentable.                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    R$ 49,90 = 4990 cents. Sums and quantity products stay exact;        │
//! │    rounding happens once, at the parsing boundary.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Text
//! Catalog markup carries prices as display text (`R$ 49,90`). That text is
//! parsed into cents exactly once, when it crosses into the cart; see
//! [`Money::parse_display`]. Formatting for the cart panel is the renderer's
//! concern and flows back out through the view types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::error::{CartError, CartResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos for BRL).
///
/// ## Design Decisions
/// - **i64 (signed)**: Totals subtract to zero cleanly when lines vanish;
///   negative values are rejected at the cart boundary, not by the type
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for snapshot serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let price = Money::from_cents(4990); // Represents R$ 49,90
    /// assert_eq!(price.cents(), 4990);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (reais and centavos).
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let price = Money::from_reais_centavos(49, 90); // R$ 49,90
    /// assert_eq!(price.cents(), 4990);
    /// ```
    #[inline]
    pub const fn from_reais_centavos(reais: i64, centavos: i64) -> Self {
        Money(reais * 100 + centavos)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4990); // R$ 49,90
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 14970); // R$ 149,70
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Line: Camiseta R$ 49,90
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: R$ 149,70
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Renders the bare amount, no currency symbol: `1.234,56`.
    ///
    /// The symbol is a presentation concern owned by store configuration;
    /// this is the numeric part both sides share.
    pub fn amount_display(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}", sign, self.abs_amount_display())
    }

    /// Parses display-formatted price text into a Money value.
    ///
    /// This is the inbound half of the catalog boundary: product prices live
    /// in markup as locale-formatted strings and must become cents before
    /// the cart will touch them.
    ///
    /// ## Accepted Shapes
    /// ```text
    /// "R$ 49,90"    → 4990      (currency symbol stripped)
    /// "49,90"       → 4990      (comma decimal)
    /// "49.90"       → 4990      (dot decimal)
    /// "1.234,56"    → 123456    (dot grouping, comma decimal)
    /// "1.234"       → 123400    (grouping only - three digits after the
    ///                            last separator mean it is not a decimal)
    /// "49,9"        → 4990      (one fraction digit, padded)
    /// "50"          → 5000      (whole amount)
    /// ```
    ///
    /// ## Rules
    /// - A leading run of non-numeric characters (the currency symbol and
    ///   any spacing, including the non-breaking space locale formatters
    ///   emit) is ignored.
    /// - The last `.` or `,` is the decimal separator iff it is followed by
    ///   one or two digits; otherwise every separator is a grouping
    ///   separator, and every group after the first must have exactly three
    ///   digits.
    /// - Negative amounts, empty input, and anything else fail with
    ///   [`CartError::InvalidPrice`]. There is no NaN escape hatch: a price
    ///   either parses to cents or the add is rejected.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// assert_eq!(Money::parse_display("R$ 49,90").unwrap().cents(), 4990);
    /// assert!(Money::parse_display("R$ abc").is_err());
    /// assert!(Money::parse_display("-49,90").is_err());
    /// ```
    pub fn parse_display(input: &str) -> CartResult<Money> {
        let invalid = || CartError::InvalidPrice {
            input: input.to_string(),
        };

        // Strip the currency symbol: everything up to the first character
        // that could start the numeric part.
        let stripped = input
            .trim()
            .trim_start_matches(|c: char| {
                !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | ','))
            })
            .trim();

        let unsigned = stripped.strip_prefix('+').unwrap_or(stripped);
        if unsigned.starts_with('-') {
            // Negative prices never make it into a cart line.
            return Err(invalid());
        }
        if unsigned.is_empty()
            || !unsigned
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return Err(invalid());
        }

        // The last separator is the decimal separator iff one or two digits
        // follow it. "1.234" is twelve hundred thirty-four, not a fraction.
        let (int_part, frac_part) = match unsigned.rfind(['.', ',']) {
            Some(pos) => {
                let digits_after = unsigned.len() - pos - 1;
                if (1..=2).contains(&digits_after) {
                    (&unsigned[..pos], &unsigned[pos + 1..])
                } else {
                    (unsigned, "")
                }
            }
            None => (unsigned, ""),
        };

        // Remaining separators are grouping separators; each group after the
        // first must hold exactly three digits ("1,2345" is malformed, not
        // twelve thousand).
        let groups: Vec<&str> = int_part.split(['.', ',']).collect();
        let whole: i64 = if int_part.is_empty() {
            // ",50" / ".50" - fraction-only input
            if frac_part.is_empty() {
                return Err(invalid());
            }
            0
        } else {
            if groups.len() > 1 {
                let first_ok = (1..=3).contains(&groups[0].len());
                let rest_ok = groups[1..].iter().all(|g| g.len() == 3);
                if !first_ok || !rest_ok {
                    return Err(invalid());
                }
            }
            groups.concat().parse::<i64>().map_err(|_| invalid())?
        };

        let frac: i64 = match frac_part.len() {
            0 => 0,
            1 => frac_part.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => frac_part.parse::<i64>().map_err(|_| invalid())?,
            _ => unreachable!("decimal separator admits at most two digits"),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Money::from_cents)
            .ok_or_else(invalid)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in BRL shape: `R$ 1.234,56`.
///
/// ## Note
/// This is for logs and debugging. The cart panel formats through the store
/// configuration so the symbol stays a presentation concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R$ {}", sign, self.abs_amount_display())
    }
}

impl Money {
    fn abs_amount_display(&self) -> String {
        format!(
            "{},{:02}",
            group_thousands(self.reais().abs()),
            self.centavos_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used by total accumulation.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Renders a non-negative whole amount with `.` thousands grouping.
fn group_thousands(mut n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut groups: Vec<String> = Vec::new();
    while n > 0 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }

    // The leading group keeps no zero padding
    let mut out = groups
        .pop()
        .map(|g| g.trim_start_matches('0').to_string())
        .unwrap_or_default();
    for g in groups.into_iter().rev() {
        out.push('.');
        out.push_str(&g);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(4990);
        assert_eq!(money.cents(), 4990);
        assert_eq!(money.reais(), 49);
        assert_eq!(money.centavos_part(), 90);
    }

    #[test]
    fn test_from_reais_centavos() {
        assert_eq!(Money::from_reais_centavos(49, 90).cents(), 4990);
        assert_eq!(Money::from_reais_centavos(0, 5).cents(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(4990)), "R$ 49,90");
        assert_eq!(format!("{}", Money::from_cents(500)), "R$ 5,00");
        assert_eq!(format!("{}", Money::from_cents(0)), "R$ 0,00");
        assert_eq!(format!("{}", Money::from_cents(123456)), "R$ 1.234,56");
        assert_eq!(format!("{}", Money::from_cents(123456789)), "R$ 1.234.567,89");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-R$ 5,50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);

        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Money::from_cents(4990).amount_display(), "49,90");
        assert_eq!(Money::from_cents(123456).amount_display(), "1.234,56");
        assert_eq!(Money::from_cents(-550).amount_display(), "-5,50");
    }

    #[test]
    fn test_parse_display_formatted() {
        assert_eq!(Money::parse_display("R$ 49,90").unwrap().cents(), 4990);
        assert_eq!(Money::parse_display("R$49,90").unwrap().cents(), 4990);
        assert_eq!(Money::parse_display("R$\u{a0}89,90").unwrap().cents(), 8990);
        assert_eq!(Money::parse_display("  R$ 5,00  ").unwrap().cents(), 500);
    }

    #[test]
    fn test_parse_bare_amounts() {
        assert_eq!(Money::parse_display("49,90").unwrap().cents(), 4990);
        assert_eq!(Money::parse_display("49.90").unwrap().cents(), 4990);
        assert_eq!(Money::parse_display("49,9").unwrap().cents(), 4990);
        assert_eq!(Money::parse_display("50").unwrap().cents(), 5000);
        assert_eq!(Money::parse_display("0,50").unwrap().cents(), 50);
        assert_eq!(Money::parse_display(",50").unwrap().cents(), 50);
    }

    #[test]
    fn test_parse_grouped_amounts() {
        assert_eq!(Money::parse_display("1.234,56").unwrap().cents(), 123456);
        assert_eq!(Money::parse_display("R$ 1.234,56").unwrap().cents(), 123456);
        assert_eq!(Money::parse_display("1.234").unwrap().cents(), 123400);
        assert_eq!(Money::parse_display("12.345.678,90").unwrap().cents(), 1234567890);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse_display("").is_err());
        assert!(Money::parse_display("R$").is_err());
        assert!(Money::parse_display("R$ abc").is_err());
        assert!(Money::parse_display("12a4").is_err());
        assert!(Money::parse_display("1,2345").is_err());
        assert!(Money::parse_display("1.23.45").is_err());
        assert!(Money::parse_display("49,").is_err());
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(Money::parse_display("-49,90").is_err());
        assert!(Money::parse_display("R$ -49,90").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        assert!(Money::parse_display("99999999999999999999").is_err());
    }
}
