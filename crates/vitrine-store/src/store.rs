//! # Cart Store
//!
//! The stateful owner of the cart: applies shopper events, persists a
//! snapshot after every mutation, and serves the view model.
//!
//! ## Event Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Lifecycle                                  │
//! │                                                                         │
//! │  ┌───────────┐  load + replay   ┌───────────┐   events    ┌──────────┐ │
//! │  │  Storage  │─────────────────►│ CartStore │◄────────────│ Renderer │ │
//! │  │ (snapshot)│                  │  (live    │             │ (browser)│ │
//! │  │           │◄─────────────────│   cart)   │────────────►│          │ │
//! │  └───────────┘  persist after   └───────────┘  CartView   └──────────┘ │
//! │                 every mutation                                          │
//! │                                                                         │
//! │  Shopper Event              Store Operation                             │
//! │  ─────────────              ───────────────                             │
//! │  Catalog click ───────────► activate_catalog_item(title, price, img)   │
//! │  Quantity field edit ─────► change_line_quantity(title, raw_text)      │
//! │  Trash icon click ────────► remove_line(title)                         │
//! │  (explicit reset) ────────► clear()                                    │
//! │                                                                         │
//! │  Panel open/close never reaches this layer - visibility is pure UI      │
//! │  state and stays in the renderer.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations are synchronous and strictly sequential: one event runs to
//! completion (mutation + persist) before the next begins. There is no
//! lock because there is no second thread; the renderer owns a single
//! `&mut` store.

use chrono::Utc;
use tracing::{debug, info, warn};

use vitrine_core::cart::Cart;
use vitrine_core::snapshot::CartSnapshot;
use vitrine_core::validation::parse_quantity;
use vitrine_core::Money;

use crate::config::{QuantityPolicy, StoreConfig};
use crate::error::StoreResult;
use crate::storage::StorageAdapter;
use crate::view::CartView;

// =============================================================================
// Cart Store
// =============================================================================

/// The stateful cart store.
///
/// Generic over its storage so tests run on [`MemoryStorage`] and shipped
/// builds on [`FileStorage`] (or an embedder's own adapter) without a
/// separate code path.
///
/// [`MemoryStorage`]: crate::MemoryStorage
/// [`FileStorage`]: crate::FileStorage
#[derive(Debug)]
pub struct CartStore<S: StorageAdapter> {
    cart: Cart,
    storage: S,
    config: StoreConfig,
}

impl<S: StorageAdapter> CartStore<S> {
    /// Opens a store over `storage`, rehydrating any persisted cart.
    ///
    /// ## Rehydration
    /// - No blob under the lines key: a fresh empty cart (first visit)
    /// - A blob that parses: replayed through the cart rules - the
    ///   distinct-line ceiling applies to restore exactly as to live adds
    /// - A blob that does not parse: logged and discarded; the shopper gets
    ///   an empty cart rather than a wedged widget
    ///
    /// Storage read failures do propagate - an adapter that cannot answer
    /// at all is broken in a way an empty cart would mask.
    pub fn open(storage: S, config: StoreConfig) -> StoreResult<Self> {
        let cart = match storage.load(&config.lines_key)? {
            None => {
                debug!("no persisted cart, starting empty");
                Cart::new()
            }
            Some(blob) => match serde_json::from_str::<CartSnapshot>(&blob) {
                Ok(snapshot) => {
                    let cart = snapshot.restore();
                    info!(
                        lines = cart.distinct_lines(),
                        badge = cart.badge_count(),
                        "cart rehydrated from storage"
                    );
                    cart
                }
                Err(error) => {
                    warn!(%error, "persisted cart unreadable, starting empty");
                    Cart::new()
                }
            },
        };

        Ok(CartStore {
            cart,
            storage,
            config,
        })
    }

    /// Handles a catalog click: parse the displayed price, add the product.
    ///
    /// ## Behavior
    /// - Price text that does not parse to a non-negative amount fails with
    ///   `InvalidPrice`; nothing changes
    /// - A full cart (4 distinct lines) fails with `CartFull`; nothing
    ///   changes and the renderer shows the blocking notice
    /// - Otherwise the line is inserted (quantity 1) or incremented, the
    ///   snapshot is persisted, and the fresh view comes back
    ///
    /// ## Arguments
    /// * `title` - product title from the catalog markup (the line key)
    /// * `price_text` - displayed price, e.g. `"R$ 49,90"`
    /// * `image_ref` - display-image reference to freeze onto the line
    pub fn activate_catalog_item(
        &mut self,
        title: &str,
        price_text: &str,
        image_ref: &str,
    ) -> StoreResult<CartView> {
        debug!(%title, %price_text, "catalog item activated");

        let price = Money::parse_display(price_text)?;
        let outcome = self.cart.add_line(title, price, image_ref, Utc::now())?;
        debug!(%title, ?outcome, "line added");

        self.persist()?;
        Ok(self.view())
    }

    /// Handles a direct edit of a line's quantity field.
    ///
    /// ## Behavior
    /// - Well-formed positive integer: the line takes it
    /// - Anything else: the configured [`QuantityPolicy`] decides -
    ///   `Strict` rejects with `InvalidQuantity` (state and storage
    ///   untouched), `Tolerant` keeps the raw text on the line counting
    ///   zero until corrected
    /// - A title not in the cart fails with `UnknownLine` either way
    pub fn change_line_quantity(&mut self, title: &str, raw_value: &str) -> StoreResult<CartView> {
        debug!(%title, %raw_value, "quantity field edited");

        match parse_quantity(raw_value) {
            Ok(units) => self.cart.set_quantity(title, units)?,
            Err(rejection) => match self.config.quantity_policy {
                QuantityPolicy::Strict => return Err(rejection.into()),
                QuantityPolicy::Tolerant => {
                    warn!(%title, %raw_value, "quantity text rejected, counting zero");
                    self.cart.set_quantity_invalid(title, raw_value)?;
                }
            },
        }

        self.persist()?;
        Ok(self.view())
    }

    /// Handles a trash-icon click.
    ///
    /// Removing a title that is not carted is a no-op, not an error - the
    /// row the shopper clicked may already be gone.
    pub fn remove_line(&mut self, title: &str) -> StoreResult<CartView> {
        if self.cart.remove_line(title) {
            debug!(%title, "line removed");
        } else {
            debug!(%title, "remove for a title not in cart, no-op");
        }

        self.persist()?;
        Ok(self.view())
    }

    /// Empties the cart and persists the empty state.
    ///
    /// The one path that evicts persisted cart data.
    pub fn clear(&mut self) -> StoreResult<CartView> {
        debug!("cart cleared");
        self.cart.clear();

        self.persist()?;
        Ok(self.view())
    }

    /// The current read model for the renderer.
    pub fn view(&self) -> CartView {
        CartView::render(&self.cart, &self.config)
    }

    /// The badge value, for paints that need nothing else.
    pub fn badge_count(&self) -> i64 {
        self.cart.badge_count()
    }

    /// Read access to the live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Read access to the underlying storage adapter.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes the snapshot and the cached total.
    ///
    /// Runs after every successful mutation; the cached total is a
    /// convenience for quick first paints and is re-derived from the lines
    /// on every load.
    fn persist(&mut self) -> StoreResult<()> {
        let blob = serde_json::to_string(&CartSnapshot::capture(&self.cart))?;
        self.storage.save(&self.config.lines_key, &blob)?;
        self.storage
            .save(&self.config.total_key, &self.cart.total_cents().to_string())?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use vitrine_core::CartError;
    use vitrine_core::cart::LineQuantity;
    use crate::error::StoreError;

    fn open_default() -> CartStore<MemoryStorage> {
        CartStore::open(MemoryStorage::new(), StoreConfig::default()).unwrap()
    }

    fn strict_config() -> StoreConfig {
        StoreConfig {
            quantity_policy: QuantityPolicy::Strict,
            ..StoreConfig::default()
        }
    }

    #[test]
    fn test_open_empty() {
        let store = open_default();

        assert!(store.cart().is_empty());
        assert_eq!(store.view().total_display, "R$ 0,00");
    }

    #[test]
    fn test_running_total_scenario() {
        let mut store = open_default();

        let view = store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();
        assert_eq!(view.total_cents, 4990);
        assert_eq!(view.badge_count, 1);

        let view = store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.total_cents, 9980);
        assert_eq!(view.badge_count, 2);

        let view = store
            .activate_catalog_item("Calça", "R$ 89,90", "img/calca.png")
            .unwrap();
        assert_eq!(view.total_cents, 18970);
        assert_eq!(view.total_display, "R$ 189,70");
        assert_eq!(view.badge_count, 3);
    }

    #[test]
    fn test_tolerant_quantity_excludes_line_from_total() {
        let mut store = open_default();
        store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();
        store
            .activate_catalog_item("Calça", "R$ 89,90", "img/calca.png")
            .unwrap();

        let view = store.change_line_quantity("Camiseta", "abc").unwrap();

        assert_eq!(view.total_cents, 8990);
        assert_eq!(view.badge_count, 1);
        assert_eq!(view.lines.len(), 2); // The line itself stays
        assert_eq!(view.lines[0].quantity, LineQuantity::Invalid("abc".to_string()));
    }

    #[test]
    fn test_strict_quantity_rejects_and_keeps_state() {
        let mut store = CartStore::open(MemoryStorage::new(), strict_config()).unwrap();
        store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();
        store.change_line_quantity("Camiseta", "2").unwrap();

        let err = store.change_line_quantity("Camiseta", "abc").unwrap_err();

        assert!(matches!(
            err,
            StoreError::Cart(CartError::InvalidQuantity { .. })
        ));
        // The line keeps its previous quantity
        let view = store.view();
        assert_eq!(view.lines[0].quantity, LineQuantity::Units(2));
        assert_eq!(view.total_cents, 9980);
    }

    #[test]
    fn test_cart_full_leaves_store_usable() {
        let mut store = open_default();
        for (title, price) in [
            ("Camiseta", "R$ 49,90"),
            ("Calça", "R$ 89,90"),
            ("Tênis", "R$ 129,90"),
            ("Boné", "R$ 29,90"),
        ] {
            store.activate_catalog_item(title, price, "img/x.png").unwrap();
        }

        let err = store
            .activate_catalog_item("Jaqueta", "R$ 199,90", "img/jaqueta.png")
            .unwrap_err();

        assert!(matches!(err, StoreError::Cart(CartError::CartFull { .. })));
        assert_eq!(store.view().distinct_lines, 4);

        // Rejection is local to the one operation
        let view = store.change_line_quantity("Boné", "3").unwrap();
        assert_eq!(view.badge_count, 6);
    }

    #[test]
    fn test_invalid_price_text_rejected() {
        let mut store = open_default();

        let err = store
            .activate_catalog_item("Camiseta", "R$ abc", "img/camiseta.png")
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::Cart(CartError::InvalidPrice { .. })
        ));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_line_and_absent_noop() {
        let mut store = open_default();
        store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();

        let view = store.remove_line("Camiseta").unwrap();
        assert!(view.lines.is_empty());

        // Absent title: no error, state unchanged
        let view = store.remove_line("Camiseta").unwrap();
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_unknown_line_quantity_edit() {
        let mut store = open_default();

        let err = store.change_line_quantity("Camiseta", "2").unwrap_err();

        assert!(matches!(
            err,
            StoreError::Cart(CartError::UnknownLine { .. })
        ));
    }

    #[test]
    fn test_persists_after_every_mutation() {
        let mut store = open_default();
        store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();
        store.change_line_quantity("Camiseta", "2").unwrap();

        let blob = store
            .storage()
            .load("cartItems")
            .unwrap()
            .expect("snapshot persisted");
        assert!(blob.contains("Camiseta"));
        assert_eq!(
            store.storage().load("cartTotal").unwrap().as_deref(),
            Some("9980")
        );
    }

    #[test]
    fn test_reload_sees_persisted_cart() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = CartStore::open(
            FileStorage::new(dir.path()).unwrap(),
            StoreConfig::default(),
        )
        .unwrap();
        store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();
        store
            .activate_catalog_item("Calça", "R$ 89,90", "img/calca.png")
            .unwrap();
        store.change_line_quantity("Camiseta", "2").unwrap();
        drop(store);

        // Page reload: a fresh store over the same directory
        let store = CartStore::open(
            FileStorage::new(dir.path()).unwrap(),
            StoreConfig::default(),
        )
        .unwrap();

        let view = store.view();
        assert_eq!(view.distinct_lines, 2);
        assert_eq!(view.total_cents, 18970);
        assert_eq!(view.badge_count, 3);
        assert_eq!(view.lines[0].title, "Camiseta");
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let mut storage = MemoryStorage::new();
        storage.save("cartItems", "definitely not json").unwrap();

        let mut store = CartStore::open(storage, StoreConfig::default()).unwrap();

        assert!(store.cart().is_empty());
        // ...and the store works normally afterwards
        let view = store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();
        assert_eq!(view.badge_count, 1);
    }

    #[test]
    fn test_clear_empties_cart_and_storage() {
        let mut store = open_default();
        store
            .activate_catalog_item("Camiseta", "R$ 49,90", "img/camiseta.png")
            .unwrap();

        let view = store.clear().unwrap();

        assert!(view.lines.is_empty());
        assert_eq!(view.badge_count, 0);
        let blob = store.storage().load("cartItems").unwrap().unwrap();
        assert_eq!(blob, r#"{"entries":[]}"#);
        assert_eq!(
            store.storage().load("cartTotal").unwrap().as_deref(),
            Some("0")
        );
    }
}
