//! ElectroMart Storefront session core.
//!
//! This crate holds everything a storefront session needs behind the
//! rendering layer: the cart, the account (profile, addresses, order
//! history), the three-step checkout workflow, the demo catalog, and the
//! mock payment gateway. The rendering layer is an external collaborator
//! that only reads state and invokes the operations exposed here.
//!
//! # Architecture
//!
//! - All state is in memory and owned by a [`session::Session`] context
//!   object - there are no process-wide globals, so several independent
//!   sessions can coexist.
//! - The account store mirrors its `user` and `orders` records to a
//!   key-value [`storage::Storage`] adapter after every mutation.
//! - Everything is synchronous and single-threaded: mutations apply in
//!   call order and a read after a write always observes the new value.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod payment;
pub mod session;
pub mod storage;

pub use account::AccountStore;
pub use cart::CartStore;
pub use catalog::{Catalog, Product};
pub use checkout::{BackOutcome, CheckoutFlow, CheckoutStep};
pub use config::{StorageBackend, StorefrontConfig};
pub use error::{Result, StoreError};
pub use session::Session;
