//! # vitrine-core: Pure Business Logic for the Vitrine Cart Widget
//!
//! This crate is the **heart** of Vitrine. It contains all cart business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Vitrine Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Renderer (browser JS)                          │   │
//! │  │    Catalog grid ──► Cart panel ──► Badge ──► Quantity inputs   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ events / view model                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vitrine-store                                │   │
//! │  │    CartStore, StorageAdapter, CartView                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │ snapshot  │  │ validation│  │   │
//! │  │   │   Money   │  │   Cart    │  │ capture   │  │   rules   │  │   │
//! │  │   │  parsing  │  │ CartLine  │  │ restore   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO STORAGE • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The cart itself (lines, dedup, capacity, totals, badge)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`snapshot`] - Serializable snapshot with replay-based restore
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, DOM access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use vitrine_core::cart::Cart;
//! use vitrine_core::money::Money;
//!
//! let mut cart = Cart::new();
//!
//! // Price text arrives formatted from the catalog markup
//! let price = Money::parse_display("R$ 49,90").unwrap();
//! cart.add_line("Camiseta", price, "img/camiseta.png", Utc::now()).unwrap();
//!
//! assert_eq!(cart.total_cents(), 4990);
//! assert_eq!(cart.badge_count(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod snapshot;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Money` instead of
// `use vitrine_core::money::Money`

pub use cart::{AddOutcome, Cart, CartLine, LineQuantity};
pub use error::{CartError, CartResult, ValidationError};
pub use money::Money;
pub use snapshot::{CartSnapshot, SnapshotEntry};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct lines allowed in a cart.
///
/// ## Business Reason
/// The cart panel is a fixed-height overlay with room for four product rows;
/// a fifth distinct product is refused outright. The ceiling bounds distinct
/// lines, not total units - quantity edits can grow a line past any size.
pub const MAX_CART_LINES: usize = 4;

/// Maximum length of a product title, in characters.
///
/// ## Business Reason
/// Titles come from catalog markup and act as the line key; an unbounded key
/// would let a broken catalog page wedge arbitrarily large blobs into
/// persisted snapshots.
pub const MAX_TITLE_LENGTH: usize = 200;
