//! Console dependencies for engines (using traits for testability)
//!
//! This module provides the central dependency container shared by all
//! engines. The storage collaborator sits behind a trait so tests can swap
//! it without touching engine code.

use std::sync::Arc;

use crate::domains::directory::DirectoryStore;
use crate::kernel::memory::InMemoryStorage;
use crate::kernel::traits::BaseStorage;

/// Shared dependencies handed to every engine.
#[derive(Clone)]
pub struct ConsoleDeps {
    pub store: Arc<DirectoryStore>,
    pub storage: Arc<dyn BaseStorage>,
}

impl ConsoleDeps {
    pub fn new(store: Arc<DirectoryStore>, storage: Arc<dyn BaseStorage>) -> Self {
        Self { store, storage }
    }

    /// Fresh deps with an empty directory and in-memory storage.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(DirectoryStore::new()),
            storage: Arc::new(InMemoryStorage::new()),
        }
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn storage(&self) -> &dyn BaseStorage {
        self.storage.as_ref()
    }
}
