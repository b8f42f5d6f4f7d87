//! The cart state container.
//!
//! `CartStore` is the single access point the UI layer gets: it owns the
//! authoritative [`Cart`] snapshot, applies the three operations, pushes
//! every new snapshot to subscribers over a watch channel, and mirrors
//! it to storage under one fixed key.
//!
//! # Ordering and consistency
//!
//! All operations serialize on one internal lock and read the current
//! snapshot under that lock, so two racing operations cannot both build
//! on the same stale state (no last-writer-wins on the in-memory cart).
//! Persistence is awaited under the same lock and always writes exactly
//! the snapshot that was just published, so storage writes land in
//! operation order and storage never sees a cart the subscribers didn't.
//!
//! A failed write is surfaced as an error, but the in-memory publish is
//! not rolled back: the UI keeps the mutation and the caller learns that
//! storage is now behind. There are no retries.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::instrument;

use go_marketplace_core::{Cart, NewProduct, ProductId};

use crate::error::Result;
use crate::storage::CartStorage;

/// Cart state container with device-local persistence.
///
/// Created via [`CartStore::open`], which rehydrates the saved cart
/// before returning; an unhydrated store is unobservable by construction.
/// Share it with consumers behind an `Arc`.
pub struct CartStore {
    storage: Arc<dyn CartStorage>,
    key: String,
    /// Authoritative state; every operation reads and replaces it under
    /// this lock, and persists before releasing it.
    state: Mutex<Cart>,
    /// Publication channel; holds the latest published snapshot.
    tx: watch::Sender<Cart>,
}

impl CartStore {
    /// Open the store, rehydrating the cart saved under `key`.
    ///
    /// An absent key means a fresh install and yields an empty cart. An
    /// unreadable value (corrupt blob, storage read failure) also yields
    /// an empty cart, logged at `warn`; the next successful operation
    /// overwrites the bad value.
    pub async fn open(storage: Arc<dyn CartStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = Self::load(storage.as_ref(), &key).await;
        let (tx, _) = watch::channel(cart.clone());

        Self {
            storage,
            key,
            state: Mutex::new(cart),
            tx,
        }
    }

    async fn load(storage: &dyn CartStorage, key: &str) -> Cart {
        match storage.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => {
                    tracing::debug!(lines = cart.len(), "cart rehydrated from storage");
                    cart
                }
                Err(e) => {
                    tracing::warn!(error = %e, "saved cart is unreadable, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart storage read failed, starting empty");
                Cart::new()
            }
        }
    }

    /// The latest published cart snapshot.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.tx.borrow().clone()
    }

    /// Subscribe to cart snapshots.
    ///
    /// The receiver is primed with the current snapshot; every operation
    /// that changes the cart replaces it.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.tx.subscribe()
    }

    /// Add a product to the cart.
    ///
    /// A product not yet in the cart is appended with quantity 1; one
    /// already present has its quantity incremented instead, exactly as
    /// if [`CartStore::increment`] had been called.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CartError`] if the new snapshot cannot be
    /// persisted; the snapshot is published regardless.
    #[instrument(skip(self, item), fields(product_id = %item.id))]
    pub async fn add_to_cart(&self, item: NewProduct) -> Result<Cart> {
        let mut state = self.state.lock().await;

        // Existing line: adding is defined as incrementing.
        let next = match state.incremented(&item.id) {
            Some(next) => next,
            None => state.added(item),
        };

        self.commit(&mut state, next).await
    }

    /// Increase a cart line's quantity by 1.
    ///
    /// An id not in the cart is a benign no-op: the unchanged snapshot is
    /// returned, nothing is published or persisted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CartError`] if the new snapshot cannot be
    /// persisted; the snapshot is published regardless.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: &ProductId) -> Result<Cart> {
        let mut state = self.state.lock().await;

        let Some(next) = state.incremented(id) else {
            tracing::debug!("increment for id not in cart, ignoring");
            return Ok(state.clone());
        };

        self.commit(&mut state, next).await
    }

    /// Decrease a cart line's quantity by 1, removing the line when it
    /// reaches 0.
    ///
    /// An id not in the cart is a benign no-op: the unchanged snapshot is
    /// returned, nothing is published or persisted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CartError`] if the new snapshot cannot be
    /// persisted; the snapshot is published regardless.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: &ProductId) -> Result<Cart> {
        let mut state = self.state.lock().await;

        let Some(next) = state.decremented(id) else {
            tracing::debug!("decrement for id not in cart, ignoring");
            return Ok(state.clone());
        };

        self.commit(&mut state, next).await
    }

    /// Publish `next` and mirror it to storage. Caller holds the state
    /// lock via `state`.
    async fn commit(&self, state: &mut Cart, next: Cart) -> Result<Cart> {
        *state = next.clone();
        self.tx.send_replace(next.clone());

        let encoded = serde_json::to_string(&next)?;
        if let Err(e) = self.storage.set(&self.key, &encoded).await {
            tracing::error!(error = %e, "cart write failed; storage is now behind the published cart");
            return Err(e.into());
        }
        tracing::debug!(lines = next.len(), bytes = encoded.len(), "cart persisted");

        Ok(next)
    }
}
