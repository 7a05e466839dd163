//! Session configuration.
//!
//! The core is embedded by a rendering layer, so configuration is plain
//! values handed over at construction - there is no process surface (no
//! CLI, no environment variables) to load from.

use std::path::PathBuf;

use crate::storage::{FileStorage, MemoryStorage, Storage, StorageError};

/// Where the account store keeps its durable records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Records live in memory and die with the session.
    Memory,
    /// Records live as JSON files under a data directory.
    DataDir(PathBuf),
}

/// Configuration for a storefront session.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Storage backend for the `user` and `orders` records.
    pub storage: StorageBackend,
    /// Seed one demonstration order into an empty history so a fresh
    /// install has something to show on the orders page.
    pub seed_demo_order: bool,
}

impl StorefrontConfig {
    /// In-memory storage; nothing survives the session.
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            storage: StorageBackend::Memory,
            seed_demo_order: true,
        }
    }

    /// File-backed storage under `dir`.
    #[must_use]
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageBackend::DataDir(dir.into()),
            seed_demo_order: true,
        }
    }

    /// Toggle demo-order seeding.
    #[must_use]
    pub const fn seed_demo_order(mut self, seed: bool) -> Self {
        self.seed_demo_order = seed;
        self
    }

    /// Open the configured storage backend.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if a data directory cannot be created.
    pub fn open_storage(&self) -> Result<Box<dyn Storage>, StorageError> {
        match &self.storage {
            StorageBackend::Memory => Ok(Box::new(MemoryStorage::new())),
            StorageBackend::DataDir(dir) => Ok(Box::new(FileStorage::open(dir.clone())?)),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}
