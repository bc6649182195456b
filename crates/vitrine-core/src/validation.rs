//! # Validation Module
//!
//! Input validation for values crossing into the cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Renderer (browser)                                           │
//! │  ├── <input type="number"> hints, required attributes                  │
//! │  └── Immediate visual feedback                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store boundary (vitrine-store)                               │
//! │  ├── Price-text parsing (money::parse_display)                         │
//! │  └── Quantity-text parsing (parse_quantity, THIS MODULE)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart rules (THIS MODULE + cart.rs)                           │
//! │  ├── Title shape, price sign                                           │
//! │  └── Capacity / dedup invariants                                       │
//! │                                                                         │
//! │  The browser layer is advisory only - markup can be edited live, so    │
//! │  nothing it promises is trusted here.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CartError, CartResult, ValidationError};
use crate::money::Money;
use crate::MAX_TITLE_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be blank (the title is the line key)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_title;
///
/// assert!(validate_title("Camiseta Básica").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price about to be frozen onto a cart line.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: promotional freebies)
pub fn validate_unit_price(price: Money) -> CartResult<()> {
    if price.is_negative() {
        return Err(CartError::InvalidPrice {
            input: price.to_string(),
        });
    }

    Ok(())
}

/// Parses raw quantity-field text into a unit count.
///
/// The quantity input in the cart panel is free text; whatever the shopper
/// typed arrives here verbatim.
///
/// ## Rules
/// - Strict integer parse: `"3"` is three, `"3 "` is three, `"3.5"`,
///   `"3x"`, and `""` are not numbers at all (no prefix salvaging)
/// - Must be >= 1 - zero units is not a quantity, it is a removal, and
///   removals have their own button
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart panel: quantity field edited                                      │
/// │                                                                         │
/// │  Shopper types: "abc"                                                   │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity("abc") ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── not an integer → InvalidQuantity                              │
/// │       │     └── policy decides: reject, or keep text + count zero       │
/// │       │                                                                 │
/// │       └── Ok(n >= 1) → line.quantity = n                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(raw: &str) -> CartResult<i64> {
    let parsed: i64 = raw.trim().parse().map_err(|_| CartError::InvalidQuantity {
        input: raw.to_string(),
    })?;

    if parsed < 1 {
        return Err(CartError::InvalidQuantity {
            input: raw.to_string(),
        });
    }

    Ok(parsed)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Camiseta").is_ok());
        assert!(validate_title("Calça Jeans Skinny 42").is_ok());

        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::from_cents(4990)).is_ok());
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("+3").unwrap(), 3);
    }

    #[test]
    fn test_parse_quantity_rejects_non_integers() {
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("2abc").is_err());
    }

    #[test]
    fn test_parse_quantity_rejects_non_positive() {
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-3").is_err());
    }
}
