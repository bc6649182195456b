//! # Snapshot Module
//!
//! The serializable representation of cart state written to persistent
//! storage, and the replay that turns it back into a [`Cart`].
//!
//! ## Persistence Round Trip
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Round Trip                                  │
//! │                                                                         │
//! │  Cart ──capture()──► CartSnapshot ──serde_json──► storage blob          │
//! │                                                                         │
//! │  storage blob ──serde_json──► CartSnapshot ──restore()──► Cart          │
//! │                                                                         │
//! │  restore() REPLAYS add_line entry by entry, then overrides each         │
//! │  quantity - so the distinct-line ceiling gates rehydration exactly      │
//! │  like it gates live adds. A snapshot that somehow holds five distinct   │
//! │  titles comes back as the first four.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices persist as raw cents. Formatted money text never round-trips
//! through storage; it is rebuilt from cents at render time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartLine, LineQuantity};
use crate::error::CartError;
use crate::money::Money;

// =============================================================================
// Snapshot Types
// =============================================================================

/// One persisted cart line.
///
/// A frozen copy of [`CartLine`] in wire shape: camelCase keys for the JS
/// side, quantity untagged (number when well-formed, raw string when the
/// shopper's text was rejected under the tolerant policy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SnapshotEntry {
    /// Product title (line key).
    pub title: String,

    /// Unit price in cents - raw numeric, never display text.
    pub unit_price_cents: i64,

    /// Quantity: units, or preserved rejected text.
    pub quantity: LineQuantity,

    /// Display-image reference (opaque).
    pub image_ref: String,

    /// When the line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

/// The serialized representation of cart state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    /// Entries in display order.
    pub entries: Vec<SnapshotEntry>,
}

impl CartSnapshot {
    /// Captures the current cart state, in display order.
    pub fn capture(cart: &Cart) -> Self {
        CartSnapshot {
            entries: cart.lines().iter().map(SnapshotEntry::from).collect(),
        }
    }

    /// Rebuilds a cart by replaying each entry through `add_line` and then
    /// overriding the quantity.
    ///
    /// ## Degraded Inputs
    /// Storage contents are treated as untrusted:
    /// - More distinct titles than the ceiling allows: replay stops at the
    ///   ceiling; the tail is dropped
    /// - An entry the live rules would reject (blank title, negative price):
    ///   skipped, the rest of the snapshot still restores
    /// - A stored unit count below 1: restored as rejected text, counting
    ///   zero, exactly as the tolerant policy would have recorded it
    pub fn restore(&self) -> Cart {
        let mut cart = Cart::new();

        for entry in &self.entries {
            match cart.add_line(
                &entry.title,
                Money::from_cents(entry.unit_price_cents),
                &entry.image_ref,
                entry.added_at,
            ) {
                Ok(_) => {}
                Err(CartError::CartFull { .. }) => break,
                Err(_) => continue,
            }

            // The line exists as of the add above, so these writes cannot miss.
            let _ = match &entry.quantity {
                LineQuantity::Units(n) if *n >= 1 => cart.set_quantity(&entry.title, *n),
                LineQuantity::Units(n) => cart.set_quantity_invalid(&entry.title, &n.to_string()),
                LineQuantity::Invalid(raw) => cart.set_quantity_invalid(&entry.title, raw),
            };
        }

        cart
    }
}

impl From<&CartLine> for SnapshotEntry {
    fn from(line: &CartLine) -> Self {
        SnapshotEntry {
            title: line.title.clone(),
            unit_price_cents: line.unit_price_cents,
            quantity: line.quantity.clone(),
            image_ref: line.image_ref.clone(),
            added_at: line.added_at,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, cents: i64, quantity: LineQuantity) -> SnapshotEntry {
        SnapshotEntry {
            title: title.to_string(),
            unit_price_cents: cents,
            quantity,
            image_ref: format!("img/{title}.png"),
            added_at: Utc::now(),
        }
    }

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
    fn test_round_trip_preserves_lines() {
        let cart = seeded_cart();

        let snapshot = CartSnapshot::capture(&cart);
        let restored = snapshot.restore();

        let pairs: Vec<(&str, LineQuantity)> = restored
            .lines()
            .iter()
            .map(|l| (l.title.as_str(), l.quantity.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Camiseta", LineQuantity::Units(2)),
                ("Calça", LineQuantity::Units(1)),
            ]
        );
        assert_eq!(restored.total_cents(), cart.total_cents());
        assert_eq!(restored.badge_count(), cart.badge_count());
    }

    #[test]
    fn test_round_trip_through_json() {
        let cart = seeded_cart();

        let blob = serde_json::to_string(&CartSnapshot::capture(&cart)).unwrap();
        let restored: CartSnapshot = serde_json::from_str(&blob).unwrap();

        assert_eq!(restored.restore().total_cents(), cart.total_cents());
    }

    #[test]
    fn test_wire_shape() {
        let mut cart = Cart::new();
        cart.add_line("Camiseta", Money::from_cents(4990), "img/camiseta.png", Utc::now())
            .unwrap();
        cart.set_quantity_invalid("Camiseta", "abc").unwrap();

        let value = serde_json::to_value(CartSnapshot::capture(&cart)).unwrap();
        let entry = &value["entries"][0];

        // camelCase keys, cents as a number, rejected quantity as raw text
        assert_eq!(entry["title"], "Camiseta");
        assert_eq!(entry["unitPriceCents"], 4990);
        assert_eq!(entry["quantity"], "abc");
        assert_eq!(entry["imageRef"], "img/camiseta.png");
        assert!(entry["addedAt"].is_string());
    }

    #[test]
    fn test_invalid_quantity_round_trips() {
        let mut cart = Cart::new();
        cart.add_line("Camiseta", Money::from_cents(4990), "img/camiseta.png", Utc::now())
            .unwrap();
        cart.set_quantity_invalid("Camiseta", "abc").unwrap();

        let restored = CartSnapshot::capture(&cart).restore();

        assert_eq!(
            restored.find("Camiseta").unwrap().quantity,
            LineQuantity::Invalid("abc".to_string())
        );
        assert_eq!(restored.total_cents(), 0);
    }

    #[test]
    fn test_oversized_snapshot_truncates_at_ceiling() {
        let snapshot = CartSnapshot {
            entries: vec![
                entry("Camiseta", 4990, LineQuantity::Units(1)),
                entry("Calça", 8990, LineQuantity::Units(1)),
                entry("Tênis", 12990, LineQuantity::Units(1)),
                entry("Boné", 2990, LineQuantity::Units(1)),
                entry("Jaqueta", 19990, LineQuantity::Units(1)),
            ],
        };

        let restored = snapshot.restore();

        assert_eq!(restored.distinct_lines(), 4);
        assert!(restored.find("Jaqueta").is_none());
    }

    #[test]
    fn test_corrupt_entry_is_skipped() {
        let snapshot = CartSnapshot {
            entries: vec![
                entry("", 4990, LineQuantity::Units(1)),
                entry("Calça", 8990, LineQuantity::Units(2)),
            ],
        };

        let restored = snapshot.restore();

        assert_eq!(restored.distinct_lines(), 1);
        assert_eq!(restored.find("Calça").unwrap().quantity, LineQuantity::Units(2));
    }

    #[test]
    fn test_non_positive_stored_units_restore_as_invalid() {
        let snapshot = CartSnapshot {
            entries: vec![entry("Camiseta", 4990, LineQuantity::Units(0))],
        };

        let restored = snapshot.restore();

        assert_eq!(
            restored.find("Camiseta").unwrap().quantity,
            LineQuantity::Invalid("0".to_string())
        );
        assert_eq!(restored.badge_count(), 0);
    }
}
