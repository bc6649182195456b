//! # vitrine-store: Cart Store & Persistence for Vitrine
//!
//! This crate is the stateful half of Vitrine: it owns the live cart,
//! applies shopper events to it, persists a snapshot after every mutation,
//! and hands the renderer a ready-to-draw view model.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Vitrine Data Flow                                 │
//! │                                                                         │
//! │  Renderer event (catalog click, quantity edit, trash click)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   vitrine-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   CartStore   │    │   Storage     │    │    View      │  │   │
//! │  │   │  (store.rs)   │    │ (storage.rs)  │    │  (view.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ parse event   │───►│ MemoryStorage │    │ CartView     │  │   │
//! │  │   │ mutate cart   │    │ FileStorage   │    │ LineView     │  │   │
//! │  │   │ persist       │    │               │    │              │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────▲───────┘  │   │
//! │  │           │                                        │          │   │
//! │  └───────────┼────────────────────────────────────────┼──────────┘   │
//! │              ▼                                        │               │
//! │       vitrine-core (Cart, Money, Snapshot)────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `CartStore`: event handling, persistence, rehydration
//! - [`storage`] - `StorageAdapter` trait + memory/file implementations
//! - [`view`] - Renderer-facing read model
//! - [`config`] - Storage keys, quantity policy, currency display
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use vitrine_store::{CartStore, MemoryStorage, StoreConfig};
//!
//! let mut store = CartStore::open(MemoryStorage::new(), StoreConfig::default()).unwrap();
//!
//! let view = store
//!     .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
//!     .unwrap();
//! assert_eq!(view.badge_count, 1);
//! assert_eq!(view.total_display, "R$ 49,90");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod storage;
pub mod store;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{QuantityPolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter};
pub use store::CartStore;
pub use view::{CartView, LineView};
