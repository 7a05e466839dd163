//! Unified error handling for the session core.
//!
//! Most store operations are total: removing an absent cart item or
//! address is a silent no-op, not an error. The variants here cover the
//! cases that genuinely must be surfaced to the caller. None of them are
//! fatal to the session - in-memory state stays authoritative even when
//! storage misbehaves.

use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type for the storefront session core.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation requires a logged-in user.
    #[error("not authenticated: please log in first")]
    NotAuthenticated,

    /// Checkout cannot commit an order from an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// No delivery address is selected and the user has no default.
    #[error("no delivery address selected")]
    NoDeliveryAddress,

    /// Order confirmation was invoked outside the review step.
    #[error("checkout is not at the review step")]
    NotAtReview,

    /// Durable storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
