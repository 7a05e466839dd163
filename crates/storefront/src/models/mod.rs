//! Domain types for the session core.
//!
//! These are validated domain objects, separate from whatever shape the
//! rendering layer displays them in.

pub mod order;
pub mod user;

pub use order::{Order, OrderDraft, OrderItem};
pub use user::{Address, AddressUpdate, NewAddress, ProfileUpdate, User};
