//! # View Model
//!
//! The renderer-facing read model: everything the cart panel, the badge,
//! and the total row need to paint, with money already formatted.
//!
//! ## Boundary Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart Panel (renderer draws this from CartView)                         │
//! │                                                                         │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  CARRINHO                                          badge: 3    │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  [img] Camiseta        R$ 49,90      [ 2 ]          (trash)   │    │
//! │  │  [img] Calça Jeans     R$ 89,90      [ 1 ]          (trash)   │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  Total                               R$ 189,70                │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cents travel alongside the formatted strings so the renderer never has
//! to parse money text back out of its own labels.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitrine_core::cart::{Cart, CartLine, LineQuantity};

use crate::config::StoreConfig;

/// One row of the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    /// Product title (also the key for events flowing back in).
    pub title: String,

    /// Unit price in cents.
    pub unit_price_cents: i64,

    /// Unit price ready for display ("R$ 49,90").
    pub unit_price_display: String,

    /// Quantity for the input field: a number, or the shopper's rejected
    /// text preserved verbatim.
    pub quantity: LineQuantity,

    /// Line total in cents (zero while the quantity text is invalid).
    pub line_total_cents: i64,

    /// Display-image reference (opaque).
    pub image_ref: String,
}

/// The full cart read model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    /// Rows in display order.
    pub lines: Vec<LineView>,

    /// Cart total in cents.
    pub total_cents: i64,

    /// Cart total ready for display.
    pub total_display: String,

    /// Badge value: total units across lines.
    pub badge_count: i64,

    /// Number of distinct lines (capacity is judged against this).
    pub distinct_lines: usize,
}

impl LineView {
    fn render(line: &CartLine, config: &StoreConfig) -> Self {
        LineView {
            title: line.title.clone(),
            unit_price_cents: line.unit_price_cents,
            unit_price_display: config.format_display(line.unit_price_cents),
            quantity: line.quantity.clone(),
            line_total_cents: line.line_total_cents(),
            image_ref: line.image_ref.clone(),
        }
    }
}

impl CartView {
    /// Builds the read model for the current cart state.
    pub fn render(cart: &Cart, config: &StoreConfig) -> Self {
        CartView {
            lines: cart
                .lines()
                .iter()
                .map(|l| LineView::render(l, config))
                .collect(),
            total_cents: cart.total_cents(),
            total_display: config.format_display(cart.total_cents()),
            badge_count: cart.badge_count(),
            distinct_lines: cart.distinct_lines(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vitrine_core::Money;

    fn seeded_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_line("Camiseta", Money::from_cents(4990), "img/camiseta.png", Utc::now())
            .unwrap();
        cart.add_line("Calça", Money::from_cents(8990), "img/calca.png", Utc::now())
            .unwrap();
        cart.set_quantity("Camiseta", 2).unwrap();
        cart
    }

    #[test]
    fn test_render() {
        let view = CartView::render(&seeded_cart(), &StoreConfig::default());

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.total_cents, 18970);
        assert_eq!(view.total_display, "R$ 189,70");
        assert_eq!(view.badge_count, 3);
        assert_eq!(view.distinct_lines, 2);

        let first = &view.lines[0];
        assert_eq!(first.title, "Camiseta");
        assert_eq!(first.unit_price_display, "R$ 49,90");
        assert_eq!(first.line_total_cents, 9980);
        assert_eq!(first.quantity, LineQuantity::Units(2));
    }

    #[test]
    fn test_render_empty() {
        let view = CartView::render(&Cart::new(), &StoreConfig::default());

        assert!(view.lines.is_empty());
        assert_eq!(view.total_display, "R$ 0,00");
        assert_eq!(view.badge_count, 0);
    }

    #[test]
    fn test_wire_shape() {
        let view = CartView::render(&seeded_cart(), &StoreConfig::default());
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["totalCents"], 18970);
        assert_eq!(value["totalDisplay"], "R$ 189,70");
        assert_eq!(value["badgeCount"], 3);
        assert_eq!(value["lines"][0]["unitPriceDisplay"], "R$ 49,90");
        assert_eq!(value["lines"][0]["quantity"], 2);
    }

    #[test]
    fn test_invalid_quantity_renders_raw_text() {
        let mut cart = seeded_cart();
        cart.set_quantity_invalid("Camiseta", "abc").unwrap();

        let view = CartView::render(&cart, &StoreConfig::default());
        let value = serde_json::to_value(&view).unwrap();

        // The input field repaints exactly what the shopper typed
        assert_eq!(value["lines"][0]["quantity"], "abc");
        assert_eq!(view.total_cents, 8990);
    }
}
