//! Account store: the session's user profile and order history.
//!
//! Login is an unauthenticated mock - it unconditionally installs a canned
//! demo profile carrying the supplied email. Every mutation to the profile
//! or the order history is mirrored to durable storage synchronously; a
//! failed save is logged as a warning and the in-memory state stays
//! authoritative for the rest of the session.

use chrono::{Duration, Utc};

use electromart_core::{
    AddressId, DeliveryMethod, Email, Money, OrderId, OrderStatus, PaymentMethod, ProductId,
    UserId,
};

use crate::error::{Result, StoreError};
use crate::models::order::{Order, OrderDraft, OrderItem};
use crate::models::user::{Address, AddressUpdate, NewAddress, ProfileUpdate, User};
use crate::storage::{Storage, StorageError, keys};

/// Holds the current user (or none) and the order history, newest first.
pub struct AccountStore {
    user: Option<User>,
    orders: Vec<Order>,
    storage: Box<dyn Storage>,
}

impl AccountStore {
    /// Open the account store, loading `user` and `orders` from storage.
    ///
    /// An absent `user` record means logged out. An absent `orders` record
    /// seeds one demonstration order when `seed_demo_order` is set, so a
    /// fresh install has something to show on the orders page.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if a record cannot be read or decodes
    /// to the wrong shape.
    pub fn open(storage: Box<dyn Storage>, seed_demo_order: bool) -> Result<Self> {
        let mut store = Self {
            user: None,
            orders: Vec::new(),
            storage,
        };

        store.user = match store.storage.load(keys::USER)? {
            Some(value) => Some(
                serde_json::from_value(value)
                    .map_err(|e| StorageError::Corrupt(format!("user record: {e}")))?,
            ),
            None => None,
        };

        match store.storage.load(keys::ORDERS)? {
            Some(value) => {
                store.orders = serde_json::from_value(value)
                    .map_err(|e| StorageError::Corrupt(format!("orders record: {e}")))?;
            }
            None if seed_demo_order => {
                store.orders = vec![demo_order()];
                store.persist_orders();
            }
            None => {}
        }

        Ok(store)
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Order history, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Mock login: unconditionally replace the current user with a canned
    /// demo profile carrying `email`.
    ///
    /// The profile comes with exactly one saved address, marked default.
    /// Never fails - there is no real authentication here.
    pub fn login(&mut self, email: Email) {
        tracing::info!(email = %email, "mock login");
        self.user = Some(demo_profile(email));
        self.persist_user();
    }

    /// Log out: drop the current user and its storage record.
    ///
    /// The cart is untouched - it belongs to the session, not the identity.
    pub fn logout(&mut self) {
        if self.user.take().is_some() {
            tracing::info!("logged out");
        }
        if let Err(e) = self.storage.delete(keys::USER) {
            tracing::warn!(error = %e, "failed to remove user record");
        }
    }

    /// Apply a field-level profile edit. `None` fields stay unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotAuthenticated` when logged out.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }

        self.persist_user();
        Ok(())
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    /// Add a saved address and return its freshly generated ID.
    ///
    /// If the new address is marked default, the flag is cleared from every
    /// other address so at most one default exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotAuthenticated` when logged out.
    pub fn add_address(&mut self, address: NewAddress) -> Result<AddressId> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;

        let id = AddressId::generate();
        user.addresses.push(Address {
            id,
            label: address.label,
            street: address.street,
            city: address.city,
            postal_code: address.postal_code,
            is_default: address.is_default,
        });
        if address.is_default {
            set_exclusive_default(&mut user.addresses, id);
        }

        self.persist_user();
        Ok(id)
    }

    /// Remove a saved address. Absent IDs are a no-op.
    ///
    /// Removing the default address leaves no default; checkout simply has
    /// no preselected address afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotAuthenticated` when logged out.
    pub fn remove_address(&mut self, id: AddressId) -> Result<()> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;

        let before = user.addresses.len();
        user.addresses.retain(|a| a.id != id);
        if user.addresses.len() != before {
            self.persist_user();
        }
        Ok(())
    }

    /// Apply a field-level edit to a saved address. Absent IDs are a no-op.
    ///
    /// Setting `is_default` clears the flag from every other address.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotAuthenticated` when logged out.
    pub fn update_address(&mut self, id: AddressId, update: AddressUpdate) -> Result<()> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;

        let Some(address) = user.addresses.iter_mut().find(|a| a.id == id) else {
            return Ok(());
        };

        if let Some(label) = update.label {
            address.label = label;
        }
        if let Some(street) = update.street {
            address.street = street;
        }
        if let Some(city) = update.city {
            address.city = city;
        }
        if let Some(postal_code) = update.postal_code {
            address.postal_code = postal_code;
        }
        if let Some(is_default) = update.is_default {
            address.is_default = is_default;
            if is_default {
                set_exclusive_default(&mut user.addresses, id);
            }
        }

        self.persist_user();
        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Commit an order: assign a fresh ID and the current timestamp, then
    /// prepend it to the history (newest first - consumers rely on this
    /// ordering for display).
    pub fn add_order(&mut self, draft: OrderDraft) -> OrderId {
        let order = Order {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            status: draft.status,
            items: draft.items,
            total: draft.total,
            delivery_fee: draft.delivery_fee,
            delivery_method: draft.delivery_method,
            payment_method: draft.payment_method,
            delivery_address: draft.delivery_address,
            tracking_number: draft.tracking_number,
        };
        let id = order.id;
        tracing::info!(order_id = %id, total = %order.total, "order recorded");

        self.orders.insert(0, order);
        self.persist_orders();
        id
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_user(&mut self) {
        let result = if let Some(user) = &self.user {
            match serde_json::to_value(user) {
                Ok(value) => self.storage.save(keys::USER, &value),
                Err(e) => Err(StorageError::from(e)),
            }
        } else {
            self.storage.delete(keys::USER)
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to persist user record; in-memory state remains authoritative");
        }
    }

    fn persist_orders(&mut self) {
        let result = match serde_json::to_value(&self.orders) {
            Ok(value) => self.storage.save(keys::ORDERS, &value),
            Err(e) => Err(StorageError::from(e)),
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to persist orders record; in-memory state remains authoritative");
        }
    }
}

impl std::fmt::Debug for AccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountStore")
            .field("user", &self.user)
            .field("orders", &self.orders.len())
            .finish_non_exhaustive()
    }
}

/// Ensure `keep` is the only default address.
fn set_exclusive_default(addresses: &mut [Address], keep: AddressId) {
    for address in addresses {
        address.is_default = address.id == keep;
    }
}

/// The canned profile installed by the mock login.
fn demo_profile(email: Email) -> User {
    User {
        id: UserId::generate(),
        email,
        name: "Ivan Petrov".to_owned(),
        phone: "+7 (999) 123-45-67".to_owned(),
        addresses: vec![Address {
            id: AddressId::generate(),
            label: "Home".to_owned(),
            street: "10 Tverskaya St, apt 25".to_owned(),
            city: "Moscow".to_owned(),
            postal_code: "125009".to_owned(),
            is_default: true,
        }],
    }
}

/// The demonstration order seeded into an empty history.
fn demo_order() -> Order {
    Order {
        id: OrderId::generate(),
        placed_at: Utc::now() - Duration::days(3),
        status: OrderStatus::Delivered,
        items: vec![OrderItem {
            product_id: ProductId::new("1"),
            name: "Sony WH-1000XM4 Wireless Headphones".to_owned(),
            price: Money::from(24_990),
            quantity: 1,
            image: "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_owned(),
        }],
        total: Money::from(24_990),
        delivery_fee: DeliveryMethod::Courier.fee(),
        delivery_method: DeliveryMethod::Courier,
        payment_method: PaymentMethod::Card,
        delivery_address: Address {
            id: AddressId::generate(),
            label: "Home".to_owned(),
            street: "10 Tverskaya St, apt 25".to_owned(),
            city: "Moscow".to_owned(),
            postal_code: "125009".to_owned(),
            is_default: true,
        },
        tracking_number: Some("RU123456789".to_owned()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> AccountStore {
        AccountStore::open(Box::new(MemoryStorage::new()), false).unwrap()
    }

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_login_installs_demo_profile_with_default_address() {
        let mut account = store();
        account.login(email("a@x.com"));

        let user = account.user().unwrap();
        assert_eq!(user.email.as_str(), "a@x.com");
        assert_eq!(user.addresses.len(), 1);
        assert!(user.addresses.first().unwrap().is_default);
    }

    #[test]
    fn test_logout_clears_user() {
        let mut account = store();
        account.login(email("a@x.com"));
        account.logout();
        assert!(account.user().is_none());
    }

    #[test]
    fn test_update_profile_is_field_level() {
        let mut account = store();
        account.login(email("a@x.com"));

        account
            .update_profile(ProfileUpdate {
                name: Some("Anna Sidorova".to_owned()),
                ..ProfileUpdate::default()
            })
            .unwrap();

        let user = account.user().unwrap();
        assert_eq!(user.name, "Anna Sidorova");
        // Unspecified fields keep their stored values.
        assert_eq!(user.email.as_str(), "a@x.com");
        assert_eq!(user.phone, "+7 (999) 123-45-67");
    }

    #[test]
    fn test_update_profile_requires_login() {
        let mut account = store();
        assert!(matches!(
            account.update_profile(ProfileUpdate::default()),
            Err(StoreError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_address_ids_unique_across_rapid_calls() {
        let mut account = store();
        account.login(email("a@x.com"));

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let id = account
                .add_address(NewAddress {
                    label: "Office".to_owned(),
                    street: "1 Lenina Ave".to_owned(),
                    city: "Moscow".to_owned(),
                    postal_code: "101000".to_owned(),
                    is_default: false,
                })
                .unwrap();
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn test_new_default_address_unsets_previous() {
        let mut account = store();
        account.login(email("a@x.com"));

        let id = account
            .add_address(NewAddress {
                label: "Office".to_owned(),
                street: "1 Lenina Ave".to_owned(),
                city: "Moscow".to_owned(),
                postal_code: "101000".to_owned(),
                is_default: true,
            })
            .unwrap();

        let user = account.user().unwrap();
        let defaults: Vec<_> = user.addresses.iter().filter(|a| a.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults.first().unwrap().id, id);
    }

    #[test]
    fn test_remove_absent_address_is_noop() {
        let mut account = store();
        account.login(email("a@x.com"));

        account.remove_address(AddressId::generate()).unwrap();
        assert_eq!(account.user().unwrap().addresses.len(), 1);
    }

    #[test]
    fn test_removing_default_does_not_promote_another() {
        let mut account = store();
        account.login(email("a@x.com"));
        account
            .add_address(NewAddress {
                label: "Office".to_owned(),
                street: "1 Lenina Ave".to_owned(),
                city: "Moscow".to_owned(),
                postal_code: "101000".to_owned(),
                is_default: false,
            })
            .unwrap();

        let default_id = account.user().unwrap().default_address().unwrap().id;
        account.remove_address(default_id).unwrap();

        let user = account.user().unwrap();
        assert_eq!(user.addresses.len(), 1);
        assert!(user.default_address().is_none());
    }

    #[test]
    fn test_update_address_field_level_and_default_exclusive() {
        let mut account = store();
        account.login(email("a@x.com"));
        let id = account
            .add_address(NewAddress {
                label: "Office".to_owned(),
                street: "1 Lenina Ave".to_owned(),
                city: "Moscow".to_owned(),
                postal_code: "101000".to_owned(),
                is_default: false,
            })
            .unwrap();

        account
            .update_address(
                id,
                AddressUpdate {
                    city: Some("Kazan".to_owned()),
                    is_default: Some(true),
                    ..AddressUpdate::default()
                },
            )
            .unwrap();

        let user = account.user().unwrap();
        let updated = user.address(id).unwrap();
        assert_eq!(updated.city, "Kazan");
        assert_eq!(updated.street, "1 Lenina Ave");
        assert!(updated.is_default);
        assert_eq!(user.addresses.iter().filter(|a| a.is_default).count(), 1);
    }

    #[test]
    fn test_update_absent_address_is_noop() {
        let mut account = store();
        account.login(email("a@x.com"));

        account
            .update_address(AddressId::generate(), AddressUpdate::default())
            .unwrap();
        assert_eq!(account.user().unwrap().addresses.len(), 1);
    }

    #[test]
    fn test_orders_are_prepended_newest_first() {
        let mut account = store();
        account.login(email("a@x.com"));
        let address = account.user().unwrap().default_address().unwrap().clone();

        let draft = |name: &str| OrderDraft {
            status: OrderStatus::Pending,
            items: vec![OrderItem {
                product_id: ProductId::new("1"),
                name: name.to_owned(),
                price: Money::from(100),
                quantity: 1,
                image: String::new(),
            }],
            total: Money::from(100),
            delivery_fee: DeliveryMethod::Post.fee(),
            delivery_method: DeliveryMethod::Post,
            payment_method: PaymentMethod::Card,
            delivery_address: address.clone(),
            tracking_number: None,
        };

        let first = account.add_order(draft("first"));
        let second = account.add_order(draft("second"));

        assert_eq!(account.orders().len(), 2);
        assert_eq!(account.orders().first().unwrap().id, second);
        assert_eq!(account.orders().get(1).unwrap().id, first);
    }

    #[test]
    fn test_seeded_demo_order() {
        let account = AccountStore::open(Box::new(MemoryStorage::new()), true).unwrap();
        assert_eq!(account.orders().len(), 1);

        let demo = account.orders().first().unwrap();
        assert_eq!(demo.status, OrderStatus::Delivered);
        assert_eq!(demo.grand_total(), Money::from(25_490));
    }

    #[test]
    fn test_persistence_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();

        let (saved_user, saved_orders) = {
            let storage = crate::storage::FileStorage::open(dir.path()).unwrap();
            let mut account = AccountStore::open(Box::new(storage), true).unwrap();
            account.login(email("roundtrip@x.com"));
            (
                account.user().cloned(),
                account.orders().to_vec(),
            )
        };

        let storage = crate::storage::FileStorage::open(dir.path()).unwrap();
        let reloaded = AccountStore::open(Box::new(storage), true).unwrap();

        assert_eq!(reloaded.user(), saved_user.as_ref());
        assert_eq!(reloaded.orders(), saved_orders.as_slice());
    }
}
