//! GoMarketplace Cart - cart state container with device-local persistence.
//!
//! This crate owns the live cart for a storefront session: it holds the
//! current [`go_marketplace_core::Cart`] snapshot in memory, applies the
//! add/increment/decrement operations, publishes every new snapshot to
//! subscribers, and mirrors it to a key-value storage backend under one
//! fixed key so the cart survives restarts.
//!
//! # Architecture
//!
//! - [`store::CartStore`] - the single access point for cart state
//! - [`storage`] - the key-value backend trait plus file and in-memory
//!   implementations
//! - [`config`] - environment-driven configuration
//!
//! The store is handed to consumers explicitly (constructor injection);
//! there is no ambient singleton, so "used before initialization" cannot
//! happen by construction: [`store::CartStore::open`] only returns after
//! the saved cart has been rehydrated.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::{CartError, Result};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
