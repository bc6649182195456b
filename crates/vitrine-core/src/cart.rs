//! # Cart Module
//!
//! The cart itself: ordered lines, deduplication, the distinct-line
//! ceiling, totals, and the badge count.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           Operation               State Change          │
//! │  ──────────────           ─────────               ────────────          │
//! │                                                                         │
//! │  Click product ──────────► add_line() ──────────► push / qty += 1      │
//! │                                                                         │
//! │  Edit quantity field ────► set_quantity() ──────► line.quantity = n    │
//! │                                                                         │
//! │  Click trash icon ───────► remove_line() ───────► lines.retain(..)     │
//! │                                                                         │
//! │  (explicit clear) ───────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  Every mutation leaves total_cents() and badge_count() consistent       │
//! │  with the lines that remain - there is no deferred recompute step.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::validation::{validate_title, validate_unit_price};
use crate::MAX_CART_LINES;

// =============================================================================
// Line Quantity
// =============================================================================

/// The quantity of a cart line.
///
/// The quantity field in the cart panel is free-text, so a shopper can type
/// something that is not a number. Under the tolerant input policy the line
/// keeps that raw text instead of being dropped: it contributes zero to the
/// total and the badge until it is corrected, and the panel can re-render
/// exactly what was typed.
///
/// Serializes untagged: a number for `Units`, the raw string for `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum LineQuantity {
    /// A well-formed quantity, always >= 1.
    Units(i64),

    /// Rejected free-text input, preserved verbatim for display.
    Invalid(String),
}

impl LineQuantity {
    /// The unit count this quantity contributes: `n` for `Units(n)`,
    /// 0 for `Invalid`.
    pub fn units(&self) -> i64 {
        match self {
            LineQuantity::Units(n) => *n,
            LineQuantity::Invalid(_) => 0,
        }
    }

    /// Whether this is a well-formed quantity.
    pub fn is_valid(&self) -> bool {
        matches!(self, LineQuantity::Units(_))
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct product entry in the cart, uniquely keyed by title.
///
/// ## Design Notes
/// - `title`: the dedup key. The catalog has no stable product IDs; the
///   displayed name is the identity of a line.
/// - `unit_price_cents`: frozen copy of the catalog price at the moment of
///   adding. The cart never re-reads the catalog, so a price change on the
///   page does not ripple into lines already in the cart.
/// - `image_ref`: opaque reference to the display image; stored and echoed
///   back to the renderer, never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Product title (line key).
    pub title: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart.
    pub quantity: LineQuantity,

    /// Display-image reference (opaque).
    pub image_ref: String,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    ///
    /// A line holding invalid quantity text contributes zero - the line is
    /// excluded from the sum, not from the cart.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity.units()
    }
}

// =============================================================================
// Add Outcome
// =============================================================================

/// What `add_line` did with the incoming product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended at the end of the cart.
    Inserted,

    /// The title was already carted; its quantity grew instead.
    Incremented,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `title` (adding the same title increments quantity)
/// - `Units(n)` quantities always have n >= 1
/// - Distinct lines never exceed `MAX_CART_LINES` (4)
/// - Insertion order is display order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart, or grows the matching line's quantity.
    ///
    /// ## Behavior
    /// - Cart already holds 4 distinct lines: fails with [`CartError::CartFull`]
    ///   and changes nothing. The ceiling gates every catalog add, re-adds of
    ///   a carted title included; direct quantity edits are the only way to
    ///   grow a full cart.
    /// - Title already carted: quantity += 1 (`AddOutcome::Incremented`).
    ///   If the line currently holds rejected quantity text, the add resets
    ///   it to 1 unit - the one the shopper just asked for.
    /// - Otherwise: a new line with quantity 1 appends at the end
    ///   (`AddOutcome::Inserted`).
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Camiseta  R$ 49,90"
    ///      │
    ///      ▼
    /// 4 distinct lines already? ──yes──► CartFull, nothing changes
    ///      │ no
    ///      ▼
    /// "Camiseta" already carted? ──yes──► quantity += 1
    ///      │ no
    ///      ▼
    /// Append line {Camiseta, 4990, qty 1}
    /// ```
    pub fn add_line(
        &mut self,
        title: &str,
        unit_price: Money,
        image_ref: &str,
        added_at: DateTime<Utc>,
    ) -> CartResult<AddOutcome> {
        validate_title(title)?;
        validate_unit_price(unit_price)?;

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CartError::CartFull {
                max: MAX_CART_LINES,
            });
        }

        if let Some(line) = self.find_mut(title) {
            line.quantity = match &line.quantity {
                LineQuantity::Units(n) => LineQuantity::Units(n + 1),
                LineQuantity::Invalid(_) => LineQuantity::Units(1),
            };
            return Ok(AddOutcome::Incremented);
        }

        self.lines.push(CartLine {
            title: title.to_string(),
            unit_price_cents: unit_price.cents(),
            quantity: LineQuantity::Units(1),
            image_ref: image_ref.to_string(),
            added_at,
        });
        Ok(AddOutcome::Inserted)
    }

    /// Sets the quantity of a carted line to a well-formed unit count.
    ///
    /// ## Behavior
    /// - `units < 1`: fails with [`CartError::InvalidQuantity`]
    /// - Title not carted: fails with [`CartError::UnknownLine`]
    pub fn set_quantity(&mut self, title: &str, units: i64) -> CartResult<()> {
        if units < 1 {
            return Err(CartError::InvalidQuantity {
                input: units.to_string(),
            });
        }

        match self.find_mut(title) {
            Some(line) => {
                line.quantity = LineQuantity::Units(units);
                Ok(())
            }
            None => Err(CartError::UnknownLine {
                title: title.to_string(),
            }),
        }
    }

    /// Records rejected quantity text on a carted line (tolerant policy).
    ///
    /// The line stays in the cart with the raw text preserved for display;
    /// it contributes zero to the total and the badge until corrected.
    pub fn set_quantity_invalid(&mut self, title: &str, raw: &str) -> CartResult<()> {
        match self.find_mut(title) {
            Some(line) => {
                line.quantity = LineQuantity::Invalid(raw.to_string());
                Ok(())
            }
            None => Err(CartError::UnknownLine {
                title: title.to_string(),
            }),
        }
    }

    /// Removes the line with the given title.
    ///
    /// Returns whether a line was actually removed; removing an absent title
    /// is a no-op, not an error.
    pub fn remove_line(&mut self, title: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.title != title);
        self.lines.len() != initial_len
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The cart total in cents.
    ///
    /// Sum of `unit_price × quantity` over well-formed lines; lines holding
    /// invalid quantity text contribute zero. With integer cents the sum is
    /// exact - no post-hoc rounding pass exists.
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// The cart total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Total units across all lines - the cart-icon badge value.
    ///
    /// Counts units, not distinct lines: two Camisetas and one Calça badge
    /// as 3. Invalid quantities count zero.
    pub fn badge_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity.units()).sum()
    }

    /// Number of distinct lines in the cart.
    #[inline]
    pub fn distinct_lines(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines in display order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up a line by title.
    pub fn find(&self, title: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.title == title)
    }

    fn find_mut(&mut self, title: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.title == title)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
