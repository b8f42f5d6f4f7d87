//! Integration tests for the GoMarketplace cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p go-marketplace-integration-tests
//! ```
//!
//! The tests in `tests/` drive a real [`go_marketplace_cart::CartStore`]
//! against file-backed storage in a temporary directory; nothing here
//! touches the network or a shared database.

use std::sync::Once;

use go_marketplace_core::{NewProduct, Price, ProductId};

static TRACING: Once = Once::new();

/// Install a test tracing subscriber once per process.
///
/// Respects `RUST_LOG`; defaults to `info` for the cart crates so test
/// failures come with the store's own log lines.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "go_marketplace_cart=info".into());

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .init();
    });
}

/// A catalog descriptor with deterministic fields derived from `id`.
#[must_use]
pub fn catalog_product(id: &str, cents: i64) -> NewProduct {
    NewProduct {
        id: ProductId::from(id),
        title: format!("Product {id}"),
        image_url: format!("https://img.example/{id}.png"),
        price: Price::from_cents(cents),
    }
}
