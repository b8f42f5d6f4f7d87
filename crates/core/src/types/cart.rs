//! The cart collection and its pure state transitions.
//!
//! `Cart` is an ordered, id-unique sequence of [`Product`] lines. All
//! transitions produce a fresh snapshot rather than mutating in place;
//! the state container in `go-marketplace-cart` publishes each snapshot
//! to subscribers and mirrors it to storage.
//!
//! # Invariants
//!
//! - Every line has `quantity >= 1`; a line reaching 0 is removed.
//! - No two lines share an `id`.
//! - Insertion order is preserved; quantity updates keep a line's
//!   position, new lines append.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::{NewProduct, Product};

/// The ordered, id-unique collection of products selected for purchase.
///
/// Serializes transparently as the plain array of products, which is
/// also the on-device persisted blob format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The product lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line by product ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|product| &product.id == id)
    }

    /// Whether a line with this product ID is present.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Total units across all lines (the cart badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|product| product.quantity).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(Product::line_total).sum()
    }

    /// Add a product to the cart.
    ///
    /// If no line carries the product's ID, a new line with quantity 1 is
    /// appended. If a line already exists, its quantity is incremented in
    /// place instead of inserting a duplicate.
    #[must_use]
    pub fn added(&self, item: NewProduct) -> Self {
        if self.contains(&item.id) {
            // The id exists, so incremented cannot return None
            self.incremented(&item.id).unwrap_or_else(|| self.clone())
        } else {
            let mut items = self.items.clone();
            items.push(item.with_quantity(1));
            Self { items }
        }
    }

    /// Increase a line's quantity by 1, keeping its position and all
    /// other lines unchanged.
    ///
    /// Returns `None` when no line carries this ID.
    #[must_use]
    pub fn incremented(&self, id: &ProductId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }

        let items = self
            .items
            .iter()
            .map(|product| {
                if &product.id == id {
                    Product {
                        quantity: product.quantity + 1,
                        ..product.clone()
                    }
                } else {
                    product.clone()
                }
            })
            .collect();

        Some(Self { items })
    }

    /// Decrease a line's quantity by 1, dropping the line entirely when
    /// it reaches 0. Other lines keep their position.
    ///
    /// Returns `None` when no line carries this ID.
    #[must_use]
    pub fn decremented(&self, id: &ProductId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }

        let items = self
            .items
            .iter()
            .map(|product| {
                if &product.id == id {
                    Product {
                        quantity: product.quantity - 1,
                        ..product.clone()
                    }
                } else {
                    product.clone()
                }
            })
            .filter(|product| product.quantity > 0)
            .collect();

        Some(Self { items })
    }
}

impl From<Vec<Product>> for Cart {
    fn from(items: Vec<Product>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn descriptor(id: &str, cents: i64) -> NewProduct {
        NewProduct {
            id: ProductId::from(id),
            title: format!("Product {id}"),
            image_url: format!("https://img.example/{id}.png"),
            price: Price::from_cents(cents),
        }
    }

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.items()
            .iter()
            .map(|product| product.id.as_str())
            .collect()
    }

    #[test]
    fn test_added_appends_with_quantity_one() {
        let cart = Cart::new().added(descriptor("a", 1000));

        assert_eq!(cart.len(), 1);
        let line = cart.get(&ProductId::from("a")).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.title, "Product a");
    }

    #[test]
    fn test_added_existing_equals_incremented() {
        let cart = Cart::new()
            .added(descriptor("a", 1000))
            .added(descriptor("b", 500));

        let via_add = cart.added(descriptor("a", 1000));
        let via_increment = cart.incremented(&ProductId::from("a")).unwrap();

        assert_eq!(via_add, via_increment);
    }

    #[test]
    fn test_no_duplicate_ids() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart = cart.added(descriptor("a", 1000));
        }
        cart = cart.added(descriptor("b", 500));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(&ProductId::from("a")).unwrap().quantity, 5);
    }

    #[test]
    fn test_incremented_preserves_position_and_other_lines() {
        let cart = Cart::new()
            .added(descriptor("a", 1000))
            .added(descriptor("b", 500))
            .added(descriptor("c", 250));

        let bumped = cart.incremented(&ProductId::from("b")).unwrap();

        assert_eq!(ids(&bumped), vec!["a", "b", "c"]);
        assert_eq!(bumped.get(&ProductId::from("a")), cart.get(&ProductId::from("a")));
        assert_eq!(bumped.get(&ProductId::from("c")), cart.get(&ProductId::from("c")));
        assert_eq!(bumped.get(&ProductId::from("b")).unwrap().quantity, 2);
    }

    #[test]
    fn test_incremented_unknown_id_is_none() {
        let cart = Cart::new().added(descriptor("a", 1000));
        assert!(cart.incremented(&ProductId::from("missing")).is_none());
    }

    #[test]
    fn test_decremented_to_zero_removes_line() {
        let cart = Cart::new()
            .added(descriptor("a", 1000))
            .added(descriptor("b", 500));

        let reduced = cart.decremented(&ProductId::from("a")).unwrap();

        assert!(!reduced.contains(&ProductId::from("a")));
        assert_eq!(ids(&reduced), vec!["b"]);
    }

    #[test]
    fn test_decremented_keeps_line_above_zero() {
        let cart = Cart::new().added(descriptor("a", 1000));
        let cart = cart.incremented(&ProductId::from("a")).unwrap();

        let reduced = cart.decremented(&ProductId::from("a")).unwrap();

        assert_eq!(reduced.get(&ProductId::from("a")).unwrap().quantity, 1);
    }

    #[test]
    fn test_decremented_unknown_id_is_none() {
        let cart = Cart::new().added(descriptor("a", 1000));
        assert!(cart.decremented(&ProductId::from("missing")).is_none());
    }

    #[test]
    fn test_quantity_floor_holds_across_operations() {
        let mut cart = Cart::new();
        cart = cart.added(descriptor("a", 1000));
        cart = cart.added(descriptor("b", 500));
        cart = cart.added(descriptor("a", 1000));
        cart = cart.decremented(&ProductId::from("b")).unwrap();
        cart = cart.decremented(&ProductId::from("a")).unwrap();

        for product in cart.items() {
            assert!(product.quantity >= 1);
        }
    }

    #[test]
    fn test_totals() {
        let cart = Cart::new()
            .added(descriptor("a", 1000))
            .added(descriptor("a", 1000))
            .added(descriptor("b", 550));

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), Price::from_cents(2550));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let cart = Cart::new().added(descriptor("a", 1000));
        let value = serde_json::to_value(&cart).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    // The worked example: add A twice, then decrement twice back to empty.
    #[test]
    fn test_add_add_decrement_decrement_scenario() {
        let a = NewProduct {
            id: ProductId::from("A"),
            title: "Shoe".to_string(),
            image_url: "u".to_string(),
            price: Price::from_cents(1000),
        };

        let cart = Cart::new().added(a.clone());
        assert_eq!(cart.get(&ProductId::from("A")).unwrap().quantity, 1);

        let cart = cart.added(a);
        assert_eq!(cart.get(&ProductId::from("A")).unwrap().quantity, 2);

        let cart = cart.decremented(&ProductId::from("A")).unwrap();
        assert_eq!(cart.get(&ProductId::from("A")).unwrap().quantity, 1);

        let cart = cart.decremented(&ProductId::from("A")).unwrap();
        assert!(cart.is_empty());
    }
}
