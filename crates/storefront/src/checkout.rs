//! Checkout workflow: the linear 3-step wizard that turns a cart into an
//! order.
//!
//! Steps run `Address -> Payment -> Review` with no branching and no
//! skipping. The wizard holds the in-progress selections (delivery method,
//! payment method, address) and commits nothing until `confirm` succeeds
//! from the review step; backing out of the first step abandons the
//! workflow and discards the selections without touching the cart or the
//! account.

use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::instrument;

use electromart_core::{AddressId, DeliveryMethod, OrderId, OrderStatus, PaymentMethod};

use crate::account::AccountStore;
use crate::cart::CartStore;
use crate::error::{Result, StoreError};
use crate::models::order::{OrderDraft, OrderItem};

/// Carrier-region prefix baked into generated tracking numbers.
const TRACKING_PREFIX: &str = "RU";

/// Length of the random tracking-number suffix.
const TRACKING_SUFFIX_LEN: usize = 9;

/// A step of the checkout wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    /// Pick the delivery address and method.
    #[default]
    Address,
    /// Pick the payment method.
    Payment,
    /// Review and confirm the order.
    Review,
}

impl CheckoutStep {
    /// 1-based step index for display ("step 2 of 3").
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Address => 1,
            Self::Payment => 2,
            Self::Review => 3,
        }
    }
}

/// What a `back()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Retreated to an earlier step.
    MovedTo(CheckoutStep),
    /// Backed out of the first step: the workflow was abandoned and its
    /// selections discarded.
    Cancelled,
}

/// The checkout wizard state machine.
///
/// Owned by the session; resets to the first step after every completed or
/// abandoned checkout.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    delivery_method: DeliveryMethod,
    payment_method: PaymentMethod,
    address_id: Option<AddressId>,
}

impl CheckoutFlow {
    /// Create a fresh workflow at the address step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Currently selected delivery method.
    #[must_use]
    pub const fn delivery_method(&self) -> DeliveryMethod {
        self.delivery_method
    }

    /// Currently selected payment method.
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Explicitly selected address, if the shopper picked one.
    ///
    /// When unset, `confirm` falls back to the user's default address.
    #[must_use]
    pub const fn selected_address(&self) -> Option<AddressId> {
        self.address_id
    }

    /// Select the delivery method.
    pub fn select_delivery(&mut self, method: DeliveryMethod) {
        self.delivery_method = method;
    }

    /// Select the payment method.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Select the delivery address.
    pub fn select_address(&mut self, id: AddressId) {
        self.address_id = Some(id);
    }

    /// Advance to the next step. A no-op at the review step - confirming
    /// must be invoked explicitly.
    pub fn next(&mut self) -> CheckoutStep {
        self.step = match self.step {
            CheckoutStep::Address => CheckoutStep::Payment,
            CheckoutStep::Payment | CheckoutStep::Review => CheckoutStep::Review,
        };
        self.step
    }

    /// Retreat one step. At the address step this abandons the whole
    /// workflow instead: selections are discarded and the state resets,
    /// with no side effects on the cart or the account.
    pub fn back(&mut self) -> BackOutcome {
        match self.step {
            CheckoutStep::Address => {
                self.reset();
                BackOutcome::Cancelled
            }
            CheckoutStep::Payment => {
                self.step = CheckoutStep::Address;
                BackOutcome::MovedTo(self.step)
            }
            CheckoutStep::Review => {
                self.step = CheckoutStep::Payment;
                BackOutcome::MovedTo(self.step)
            }
        }
    }

    /// Reset to the address step and default selections.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Commit the order. Only valid from the review step.
    ///
    /// Builds an order from the current cart (snapshot items, status
    /// `Pending`, a fresh tracking number), records it in the account
    /// store, empties the cart, and resets the workflow.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotAtReview` if invoked from an earlier step.
    /// - `StoreError::NotAuthenticated` if no user is logged in.
    /// - `StoreError::EmptyCart` if the cart holds no items.
    /// - `StoreError::NoDeliveryAddress` if no address is selected and the
    ///   user has no default.
    ///
    /// On any error the workflow state, cart, and account are unchanged.
    #[instrument(skip(self, cart, account))]
    pub fn confirm(&mut self, cart: &mut CartStore, account: &mut AccountStore) -> Result<OrderId> {
        if self.step != CheckoutStep::Review {
            return Err(StoreError::NotAtReview);
        }

        let user = account.user().ok_or(StoreError::NotAuthenticated)?;

        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let delivery_address = match self.address_id {
            Some(id) => user.address(id),
            None => user.default_address(),
        }
        .ok_or(StoreError::NoDeliveryAddress)?
        .clone();

        let draft = OrderDraft {
            status: OrderStatus::Pending,
            items: cart.items().iter().map(OrderItem::from).collect(),
            total: cart.total_price(),
            delivery_fee: self.delivery_method.fee(),
            delivery_method: self.delivery_method,
            payment_method: self.payment_method,
            delivery_address,
            tracking_number: Some(generate_tracking_number()),
        };

        let order_id = account.add_order(draft);
        cart.clear();
        self.reset();

        tracing::info!(order_id = %order_id, "checkout completed");
        Ok(order_id)
    }
}

/// Generate an opaque tracking code: carrier-region prefix plus random
/// uppercase alphanumerics. Uniqueness is best-effort; the code carries no
/// parsing semantics beyond display.
fn generate_tracking_number() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(TRACKING_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("{TRACKING_PREFIX}{suffix}")
}
