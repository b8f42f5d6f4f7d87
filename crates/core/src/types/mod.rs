//! Core types for GoMarketplace.
//!
//! This module provides type-safe wrappers for the cart domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::Cart;
pub use id::ProductId;
pub use price::Price;
pub use product::{NewProduct, Product};
