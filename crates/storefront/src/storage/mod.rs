//! Durable key-value storage for the account store.
//!
//! The session core persists exactly two records: the logged-in `user`
//! (absent while logged out) and the `orders` history, both as JSON. The
//! [`Storage`] trait is the whole contract; the account store neither
//! knows nor cares where the records live.
//!
//! Save failures are surfaced as [`StorageError`] so callers can log a
//! non-fatal warning and carry on - the in-memory state stays
//! authoritative for the rest of the session.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde_json::Value;
use thiserror::Error;

/// Record keys used by the account store.
pub mod keys {
    /// Key for the logged-in user profile.
    pub const USER: &str = "user";

    /// Key for the order history, newest first.
    pub const ORDERS: &str = "orders";
}

/// Errors that can occur reading or writing durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (storage unavailable, quota exceeded, ...).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stored record exists but cannot be decoded.
    #[error("stored data is corrupted: {0}")]
    Corrupt(String),
}

/// Durable key-value storage of JSON records.
pub trait Storage {
    /// Load the record stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the record cannot be read and
    /// `StorageError::Corrupt` if it exists but is not valid JSON.
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the record cannot be written.
    fn save(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;

    /// Remove the record stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the record cannot be removed.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}
