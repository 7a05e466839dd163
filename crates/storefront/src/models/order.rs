//! Order domain types.
//!
//! An order is an immutable historical record created once a cart is
//! committed through checkout. Its line items are snapshot copies of the
//! cart items at commit time, so later cart mutations never affect
//! history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use electromart_core::{DeliveryMethod, Money, OrderId, OrderStatus, PaymentMethod, ProductId};

use crate::cart::CartItem;
use crate::models::user::Address;

/// A line item frozen into an order at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Catalog product this line was created from.
    pub product_id: ProductId,
    /// Product name at commit time.
    pub name: String,
    /// Unit price at commit time.
    pub price: Money,
    /// Quantity ordered.
    pub quantity: u32,
    /// Product image URL.
    pub image: String,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            image: item.image.clone(),
        }
    }
}

/// A placed order. Never mutated or deleted after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Commit timestamp.
    pub placed_at: DateTime<Utc>,
    /// Lifecycle status. Created as `Pending`; the session core never
    /// advances it afterwards.
    pub status: OrderStatus,
    /// Snapshot line items. Always non-empty.
    pub items: Vec<OrderItem>,
    /// Sum of line totals - equals the cart's total price at commit time.
    pub total: Money,
    /// Flat surcharge of the chosen delivery method.
    pub delivery_fee: Money,
    /// How the order is delivered.
    pub delivery_method: DeliveryMethod,
    /// How the shopper intends to pay. Informational only.
    pub payment_method: PaymentMethod,
    /// Delivery address, copied (not referenced) from the user's saved
    /// addresses so later edits don't rewrite history.
    pub delivery_address: Address,
    /// Opaque carrier tracking code, prefixed with the carrier region.
    pub tracking_number: Option<String>,
}

impl Order {
    /// Goods total plus the delivery surcharge.
    #[must_use]
    pub fn grand_total(&self) -> Money {
        self.total + self.delivery_fee
    }
}

/// Everything the checkout knows about an order before the account store
/// assigns its ID and timestamp.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub total: Money,
    pub delivery_fee: Money,
    pub delivery_method: DeliveryMethod,
    pub payment_method: PaymentMethod,
    pub delivery_address: Address,
    pub tracking_number: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use electromart_core::AddressId;

    fn sample_address() -> Address {
        Address {
            id: AddressId::generate(),
            label: "Home".to_owned(),
            street: "10 Tverskaya St, apt 25".to_owned(),
            city: "Moscow".to_owned(),
            postal_code: "125009".to_owned(),
            is_default: true,
        }
    }

    #[test]
    fn test_grand_total_includes_delivery_fee() {
        let order = Order {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            status: OrderStatus::Pending,
            items: vec![OrderItem {
                product_id: ProductId::new("1"),
                name: "Headphones".to_owned(),
                price: Money::from(24_990),
                quantity: 1,
                image: String::new(),
            }],
            total: Money::from(24_990),
            delivery_fee: DeliveryMethod::Courier.fee(),
            delivery_method: DeliveryMethod::Courier,
            payment_method: PaymentMethod::Card,
            delivery_address: sample_address(),
            tracking_number: Some("RU123456789".to_owned()),
        };

        assert_eq!(order.grand_total(), Money::from(25_490));
    }

    #[test]
    fn test_serde_roundtrip_deep_equality() {
        let order = Order {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            status: OrderStatus::Delivered,
            items: vec![OrderItem {
                product_id: ProductId::new("2"),
                name: "iPhone 15 Pro 128GB".to_owned(),
                price: Money::from(89_990),
                quantity: 2,
                image: "https://example.com/iphone.jpg".to_owned(),
            }],
            total: Money::from(179_980),
            delivery_fee: DeliveryMethod::Post.fee(),
            delivery_method: DeliveryMethod::Post,
            payment_method: PaymentMethod::CashOnDelivery,
            delivery_address: sample_address(),
            tracking_number: None,
        };

        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }
}
