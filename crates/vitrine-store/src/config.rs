//! # Store Configuration
//!
//! Configuration for the cart store, fixed at construction.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VITRINE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization; the store clones what
//! it needs at construction time.

use serde::{Deserialize, Serialize};
use vitrine_core::Money;

/// What to do with quantity-field text that is not a positive integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityPolicy {
    /// Reject the edit outright; the line keeps its previous quantity.
    Strict,

    /// Keep the rejected text on the line and count it as zero units
    /// until corrected: the field repaints what the shopper typed, the
    /// totals quietly exclude it.
    #[default]
    Tolerant,
}

/// Cart store configuration.
///
/// ## Fields
/// All fields have defaults matching the shipped widget; tests and embedders
/// override what they need.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Storage key for the serialized line list.
    pub lines_key: String,

    /// Storage key for the cached display total.
    ///
    /// The value under this key is convenience for a quick badge/summary
    /// paint before the snapshot is parsed; it is always re-derived from
    /// the lines and never treated as authoritative.
    pub total_key: String,

    /// Policy for malformed quantity input.
    pub quantity_policy: QuantityPolicy,

    /// Currency symbol for display formatting.
    pub currency_symbol: String,
}

impl Default for StoreConfig {
    /// Returns the shipped-widget configuration.
    ///
    /// ## Default Values
    /// - Storage keys: "cartItems" / "cartTotal"
    /// - Quantity policy: tolerant
    /// - Currency: BRL ("R$")
    fn default() -> Self {
        StoreConfig {
            lines_key: "cartItems".to_string(),
            total_key: "cartTotal".to_string(),
            quantity_policy: QuantityPolicy::default(),
            currency_symbol: "R$".to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VITRINE_QUANTITY_POLICY`: "strict" or "tolerant"
    /// - `VITRINE_CURRENCY_SYMBOL`: override display symbol
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(policy) = std::env::var("VITRINE_QUANTITY_POLICY") {
            match policy.to_ascii_lowercase().as_str() {
                "strict" => config.quantity_policy = QuantityPolicy::Strict,
                "tolerant" => config.quantity_policy = QuantityPolicy::Tolerant,
                _ => {}
            }
        }

        if let Ok(symbol) = std::env::var("VITRINE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a cent amount as a display string.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_display(4990), "R$ 49,90");
    /// assert_eq!(config.format_display(123456), "R$ 1.234,56");
    /// ```
    pub fn format_display(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        format!(
            "{}{} {}",
            sign,
            self.currency_symbol,
            Money::from_cents(cents.abs()).amount_display()
        )
    }
}
