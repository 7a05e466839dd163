//! Read-only demo catalog.
//!
//! A real deployment would source products from an upstream service; the
//! demo store ships a small fixed catalog so browsing, search, and the
//! cart have something to work with.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use electromart_core::{Money, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Money,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<Money>,
    /// Product image URL.
    pub image: String,
    /// Average review rating, 0-5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Category name used for browsing filters.
    pub category: String,
}

impl Product {
    /// Discount in whole percent against the original price, if on sale.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.amount() <= Decimal::ZERO {
            return None;
        }

        let ratio = (original.amount() - self.price.amount()) / original.amount();
        (ratio * Decimal::from(100)).round().to_u32()
    }
}

/// The product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The fixed demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            products: demo_products(),
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct category names, in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products in a category.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Case-insensitive substring search over product names.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(move |p| p.name.to_lowercase().contains(&query))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Sony WH-1000XM4 Wireless Headphones".to_owned(),
            price: Money::from(24_990),
            original_price: Some(Money::from(29_990)),
            image: "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_owned(),
            rating: 4.8,
            reviews: 1234,
            category: "Electronics".to_owned(),
        },
        Product {
            id: ProductId::new("2"),
            name: "iPhone 15 Pro 128GB".to_owned(),
            price: Money::from(89_990),
            original_price: Some(Money::from(94_990)),
            image: "https://images.pexels.com/photos/699122/pexels-photo-699122.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_owned(),
            rating: 4.9,
            reviews: 2156,
            category: "Smartphones".to_owned(),
        },
        Product {
            id: ProductId::new("3"),
            name: "MacBook Air M2 13\" 256GB".to_owned(),
            price: Money::from(119_990),
            original_price: None,
            image: "https://images.pexels.com/photos/18105/pexels-photo.jpg?auto=compress&cs=tinysrgb&w=400"
                .to_owned(),
            rating: 4.7,
            reviews: 892,
            category: "Computers".to_owned(),
        },
        Product {
            id: ProductId::new("4"),
            name: "Apple Watch Series 9".to_owned(),
            price: Money::from(39_990),
            original_price: Some(Money::from(44_990)),
            image: "https://images.pexels.com/photos/393047/pexels-photo-393047.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_owned(),
            rating: 4.6,
            reviews: 567,
            category: "Wearables".to_owned(),
        },
        Product {
            id: ProductId::new("5"),
            name: "iPad Pro 11\" 128GB".to_owned(),
            price: Money::from(69_990),
            original_price: None,
            image: "https://images.pexels.com/photos/1334597/pexels-photo-1334597.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_owned(),
            rating: 4.8,
            reviews: 1098,
            category: "Tablets".to_owned(),
        },
        Product {
            id: ProductId::new("6"),
            name: "PlayStation 5".to_owned(),
            price: Money::from(49_990),
            original_price: Some(Money::from(54_990)),
            image: "https://images.pexels.com/photos/4009402/pexels-photo-4009402.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_owned(),
            rating: 4.9,
            reviews: 3245,
            category: "Gaming".to_owned(),
        },
    ]
}
