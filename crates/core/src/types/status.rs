//! Status and selection enums for orders and checkout.
//!
//! These are closed enums rather than freeform strings so every consumption
//! site matches exhaustively and invalid states are unrepresentable.

use serde::{Deserialize, Serialize};

use crate::Money;

/// Lifecycle status of a placed order.
///
/// Orders are created as `Pending`; nothing in the session core advances
/// the status afterwards (fulfillment is outside this system). Seeded demo
/// data uses the later states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// How an order is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Door-to-door courier, 1-2 days.
    #[default]
    Courier,
    /// National postal service, 3-7 days.
    Post,
}

impl DeliveryMethod {
    /// Human-readable label shown on orders.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Courier => "Courier",
            Self::Post => "Postal delivery",
        }
    }

    /// Flat delivery surcharge for this method, in currency units.
    #[must_use]
    pub fn fee(&self) -> Money {
        match self {
            Self::Courier => Money::from(500),
            Self::Post => Money::from(200),
        }
    }
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the shopper intends to pay.
///
/// Purely informational in the demo store - no charge is ever attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Bank card.
    #[default]
    Card,
    /// Instant bank transfer.
    InstantTransfer,
    /// Cash handed to the courier on delivery.
    CashOnDelivery,
}

impl PaymentMethod {
    /// Human-readable label shown during checkout.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Card => "Bank card",
            Self::InstantTransfer => "Instant transfer",
            Self::CashOnDelivery => "Cash on delivery",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
