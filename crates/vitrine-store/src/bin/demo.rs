//! # Demo Session
//!
//! Drives a `CartStore` through a scripted shopping session for development.
//!
//! ## Usage
//! ```bash
//! # Persistent cart in the platform app-data directory
//! cargo run -p vitrine-store --bin demo
//!
//! # Run it twice to watch rehydration pick the cart back up
//! cargo run -p vitrine-store --bin demo
//!
//! # Throwaway in-memory cart
//! cargo run -p vitrine-store --bin demo -- --memory
//!
//! # Explicit storage directory / strict quantity policy
//! cargo run -p vitrine-store --bin demo -- --dir ./data --strict
//! ```
//!
//! ## What It Shows
//! - Rehydration of a persisted cart (empty on first run), then an
//!   explicit clear so the script starts from a known state
//! - Dedup: the same product added twice becomes one line, quantity 2
//! - The distinct-line ceiling refusing a 5th product
//! - A malformed quantity edit under the configured policy
//! - Removal, and the final persisted state

use std::env;
use std::process::exit;

use tracing::info;
use tracing_subscriber::EnvFilter;

use vitrine_store::{
    CartStore, CartView, FileStorage, MemoryStorage, QuantityPolicy, StorageAdapter, StoreConfig,
    StoreResult,
};

/// The demo catalog: five products, so the fourth add fills the cart and
/// the fifth shows the ceiling.
const CATALOG: &[(&str, &str, &str)] = &[
    ("Camiseta Básica", "R$ 49,90", "img/camiseta.png"),
    ("Calça Jeans", "R$ 89,90", "img/calca.png"),
    ("Tênis Casual", "R$ 129,90", "img/tenis.png"),
    ("Boné Trucker", "R$ 29,90", "img/bone.png"),
    ("Jaqueta Corta-Vento", "R$ 199,90", "img/jaqueta.png"),
];

fn main() {
    // Default: INFO, override with RUST_LOG (e.g. RUST_LOG=vitrine_store=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run() {
        eprintln!("demo failed: {error}");
        exit(1);
    }
}

fn run() -> StoreResult<()> {
    let mut use_memory = false;
    let mut strict = false;
    let mut dir: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--memory" => use_memory = true,
            "--strict" => strict = true,
            "--dir" => dir = args.next(),
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!("usage: demo [--memory] [--strict] [--dir PATH]");
                exit(2);
            }
        }
    }

    let mut config = StoreConfig::from_env();
    if strict {
        config.quantity_policy = QuantityPolicy::Strict;
    }

    let storage: Box<dyn StorageAdapter> = if use_memory {
        Box::new(MemoryStorage::new())
    } else if let Some(dir) = dir {
        Box::new(FileStorage::new(dir)?)
    } else {
        let storage = FileStorage::open_default()?;
        info!(dir = ?storage.dir(), "using file storage");
        Box::new(storage)
    };

    let mut store = CartStore::open(storage, config)?;

    println!("== cart as rehydrated ==");
    print_view(&store.view());

    // Start the script from a known state; without this a second run would
    // begin against an already-full cart
    store.clear()?;

    // A browsing session: first product twice (dedup), then fill the cart
    let (title, price, img) = CATALOG[0];
    store.activate_catalog_item(title, price, img)?;
    store.activate_catalog_item(title, price, img)?;
    for &(title, price, img) in &CATALOG[1..4] {
        store.activate_catalog_item(title, price, img)?;
    }

    println!("\n== after adds (Camiseta twice, cart now full) ==");
    print_view(&store.view());

    // The 5th distinct product hits the ceiling
    let (title, price, img) = CATALOG[4];
    match store.activate_catalog_item(title, price, img) {
        Ok(_) => println!("\nunexpected: the ceiling did not hold"),
        Err(error) => println!("\nadd \"{title}\" refused: {error}"),
    }

    // A fat-fingered quantity edit
    match store.change_line_quantity(CATALOG[1].0, "abc") {
        Ok(view) => {
            println!("\n== after quantity edit \"abc\" (tolerant: counts zero) ==");
            print_view(&view);
        }
        Err(error) => println!("\nquantity edit \"abc\" refused: {error}"),
    }
    store.change_line_quantity(CATALOG[1].0, "3")?;

    let view = store.remove_line(CATALOG[2].0)?;
    println!("\n== after fixing quantity to 3 and removing \"{}\" ==", CATALOG[2].0);
    print_view(&view);

    info!("cart persisted; run the demo again to see it rehydrate");
    Ok(())
}

fn print_view(view: &CartView) {
    if view.lines.is_empty() {
        println!("  (empty cart)");
    }
    for line in &view.lines {
        let quantity = quantity_label(&line.quantity);
        println!(
            "  {:<22} {:>12}  x {}",
            line.title, line.unit_price_display, quantity
        );
    }
    println!(
        "  total: {}   badge: {}   lines: {}",
        view.total_display, view.badge_count, view.distinct_lines
    );
}

fn quantity_label(quantity: &vitrine_core::LineQuantity) -> String {
    match quantity {
        vitrine_core::LineQuantity::Units(n) => n.to_string(),
        vitrine_core::LineQuantity::Invalid(raw) => format!("{raw:?}"),
    }
}
