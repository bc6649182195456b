//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  ├── CartError        - Cart rule violations                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vitrine-store errors (separate crate)                                 │
//! │  └── StoreError       - Persistence / serialization failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → StoreError → Renderer             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (title, rejected input, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing notice
//! 5. No error is fatal - the cart stays usable after any rejection

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart business rule violations.
///
/// These errors represent a single rejected operation. The cart is never
/// left half-mutated: an operation either completes or changes nothing.
#[derive(Debug, Error)]
pub enum CartError {
    /// The distinct-line ceiling has been reached.
    ///
    /// ## When This Occurs
    /// - A 5th distinct product is added to a full cart
    /// - A catalog click lands while the cart already shows 4 lines
    ///   (including re-adds of a product already in the cart - the ceiling
    ///   gates every catalog add; direct quantity edits are the only way
    ///   to grow a full cart)
    ///
    /// ## User Workflow
    /// ```text
    /// Click "add to cart" (5th product)
    ///      │
    ///      ▼
    /// Cart has 4 distinct lines
    ///      │
    ///      ▼
    /// CartFull { max: 4 }
    ///      │
    ///      ▼
    /// UI shows: "O carrinho está cheio." - cart unchanged
    /// ```
    #[error("Cart cannot have more than {max} distinct products")]
    CartFull { max: usize },

    /// Price text could not be parsed into a monetary amount.
    ///
    /// ## When This Occurs
    /// - Catalog markup carries a malformed price ("R$ abc")
    /// - A negative amount reaches the cart boundary
    ///
    /// Rejected at entry; a line with an unusable price never exists.
    #[error("Invalid price: {input:?}")]
    InvalidPrice { input: String },

    /// Quantity input is not a positive integer.
    ///
    /// ## When This Occurs
    /// - The quantity field is edited to "abc" or "0" under the strict
    ///   policy (the tolerant policy degrades instead of raising this)
    #[error("Invalid quantity: {input:?}")]
    InvalidQuantity { input: String },

    /// A quantity edit addressed a title that is not in the cart.
    #[error("Product not in cart: {title}")]
    UnknownLine { title: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input from the catalog markup or the quantity
/// field doesn't meet requirements. Used for early validation before cart
/// rules run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::CartFull { max: 4 };
        assert_eq!(
            err.to_string(),
            "Cart cannot have more than 4 distinct products"
        );

        let err = CartError::InvalidQuantity {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid quantity: \"abc\"");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "title must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_cart_error() {
        let validation_err = ValidationError::Required {
            field: "title".to_string(),
        };
        let cart_err: CartError = validation_err.into();
        assert!(matches!(cart_err, CartError::Validation(_)));
    }
}
