//! Product line types for the cart.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// One product line in the cart.
///
/// The serialized field names (`id`, `title`, `image_url`, `price`,
/// `quantity`) are the on-device storage format; renaming a field here is
/// a breaking change for carts persisted by earlier versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque catalog identifier, unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Reference to a display image.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Units of this product in the cart. Always `>= 1`; a line that
    /// would reach 0 is removed from the cart instead.
    pub quantity: u32,
}

impl Product {
    /// The line total (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A product descriptor as it arrives from the catalog UI: everything a
/// [`Product`] carries except the cart-managed `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Opaque catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Reference to a display image.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl NewProduct {
    /// Promote the descriptor to a cart line with the given quantity.
    #[must_use]
    pub fn with_quantity(self, quantity: u32) -> Product {
        Product {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}
