//! Cart store.
//!
//! Holds the in-progress, pre-commit set of selected products for the
//! current session. The cart is deliberately never persisted: it belongs
//! to the session, not the identity, so a stale cart can never reappear
//! after a different account logs in.

use serde::{Deserialize, Serialize};

use electromart_core::{Money, ProductId};

use crate::catalog::Product;

/// A product line in the cart.
///
/// Unique by `product_id` within a cart; `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog product this line refers to.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Product image URL.
    pub image: String,
    /// Number of units. Never 0 - a line that would drop to 0 is removed.
    pub quantity: u32,
}

/// Input for adding a product line; quantity starts at 1.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
}

impl From<&Product> for NewCartItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// The session's cart.
///
/// Items keep insertion order for display; totals don't depend on it.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If a line with this product already exists its quantity goes up by
    /// one, otherwise a new line is inserted with quantity 1. Never fails.
    pub fn add(&mut self, item: NewCartItem) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|l| l.product_id == item.product_id)
        {
            line.quantity += 1;
            tracing::debug!(product_id = %item.product_id, quantity = line.quantity, "cart line incremented");
            return;
        }

        tracing::debug!(product_id = %item.product_id, "cart line added");
        self.items.push(CartItem {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            image: item.image,
            quantity: 1,
        });
    }

    /// Add one unit of a catalog product.
    pub fn add_product(&mut self, product: &Product) {
        self.add(NewCartItem::from(product));
    }

    /// Set a line's quantity.
    ///
    /// A quantity of 0 or less removes the line. No-op if the product is
    /// not in the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.items.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            tracing::debug!(product_id = %product_id, quantity = line.quantity, "cart quantity set");
        }
    }

    /// Remove a line entirely. No-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|l| &l.product_id != product_id);
        if self.items.len() != before {
            tracing::debug!(product_id = %product_id, "cart line removed");
        }
    }

    /// Empty the cart. Called exactly once per completed checkout.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Sum of unit price times quantity across all lines.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.items.iter().map(|l| l.price * l.quantity).sum()
    }
}
