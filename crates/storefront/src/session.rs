//! The session context object.
//!
//! One `Session` per shopper. It owns the cart, the account store, the
//! checkout workflow, and the catalog, and is passed to collaborators
//! explicitly - there are no process-wide globals, so a server-rendered
//! host can run any number of concurrent sessions.

use electromart_core::{OrderId, ProductId};

use crate::account::AccountStore;
use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::checkout::CheckoutFlow;
use crate::config::StorefrontConfig;
use crate::error::Result;

/// All state behind one shopper's storefront session.
#[derive(Debug)]
pub struct Session {
    cart: CartStore,
    account: AccountStore,
    checkout: CheckoutFlow,
    catalog: Catalog,
}

impl Session {
    /// Create a session: open the configured storage and load the account
    /// records from it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if storage cannot be opened or a
    /// stored record is corrupt.
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let storage = config.open_storage()?;
        let account = AccountStore::open(storage, config.seed_demo_order)?;

        Ok(Self {
            cart: CartStore::new(),
            account,
            checkout: CheckoutFlow::new(),
            catalog: Catalog::demo(),
        })
    }

    /// The session's cart.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access to the cart.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The session's account store.
    #[must_use]
    pub fn account(&self) -> &AccountStore {
        &self.account
    }

    /// Mutable access to the account store.
    pub fn account_mut(&mut self) -> &mut AccountStore {
        &mut self.account
    }

    /// The checkout workflow.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    /// Mutable access to the checkout workflow.
    pub fn checkout_mut(&mut self) -> &mut CheckoutFlow {
        &mut self.checkout
    }

    /// The product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Returns `false` if the product is not in the catalog.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> bool {
        match self.catalog.find(product_id) {
            Some(product) => {
                let item = product.into();
                self.cart.add(item);
                true
            }
            None => false,
        }
    }

    /// Commit the checkout: record the order, empty the cart, reset the
    /// workflow.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::confirm`].
    pub fn confirm_order(&mut self) -> Result<OrderId> {
        self.checkout.confirm(&mut self.cart, &mut self.account)
    }
}
