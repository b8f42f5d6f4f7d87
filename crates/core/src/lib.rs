//! GoMarketplace Core - Shared cart domain types.
//!
//! This crate provides the types shared by the GoMarketplace components:
//! - `cart` - Cart state container with device-local persistence
//! - Any future UI or sync layer consuming cart snapshots
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no storage access, no async. This keeps it lightweight and allows it to
//! be used anywhere, including synchronous UI code.
//!
//! # Modules
//!
//! - [`types`] - `ProductId`, `Price`, `Product`, and the [`types::Cart`]
//!   collection with its transition functions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
