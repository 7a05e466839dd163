//! User and address domain types.

use serde::{Deserialize, Serialize};

use electromart_core::{AddressId, Email, UserId};

/// A storefront user.
///
/// Exactly one user is live per session, or none (logged out). The profile
/// is fabricated by the mock login and owned by the account store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (the only field the mock login honors).
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Saved delivery addresses.
    pub addresses: Vec<Address>,
}

impl User {
    /// The user's default delivery address, if any.
    ///
    /// At most one address is default at a time; the account store enforces
    /// this on every address mutation.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// Look up an address by ID.
    #[must_use]
    pub fn address(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Unique address ID.
    pub id: AddressId,
    /// Short label ("Home", "Office").
    pub label: String,
    /// Street, house and apartment.
    pub street: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Whether this address is preselected at checkout.
    pub is_default: bool,
}

/// Input for creating an address; the store assigns the ID.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub label: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub is_default: bool,
}

/// Field-level profile edit.
///
/// `None` leaves a field unchanged. This replaces the original shallow
/// merge so an absent field can never clobber a stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub email: Option<Email>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Field-level address edit. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct AddressUpdate {
    pub label: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub is_default: Option<bool>,
}
