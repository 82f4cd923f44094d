//! In-memory storage backend.
//!
//! The default `BaseStorage` wiring for tests and single-process use.
//! Records go through JSON so that load exercises the same serialization a
//! real backend would.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::common::sync::{read_guard, write_guard};
use crate::common::{DirectoryError, EntityKind};
use crate::domains::directory::Entity;
use crate::kernel::traits::BaseStorage;

#[derive(Default)]
pub struct InMemoryStorage {
    records: RwLock<HashMap<(EntityKind, Uuid), serde_json::Value>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        read_guard(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BaseStorage for InMemoryStorage {
    async fn persist(&self, entity: &Entity) -> Result<(), DirectoryError> {
        let value = serde_json::to_value(entity)
            .map_err(|e| DirectoryError::Storage(e.to_string()))?;
        write_guard(&self.records).insert((entity.kind(), entity.id()), value);
        Ok(())
    }

    async fn load(&self, kind: EntityKind, id: Uuid) -> Result<Option<Entity>, DirectoryError> {
        let value = {
            let records = read_guard(&self.records);
            records.get(&(kind, id)).cloned()
        };
        value
            .map(|v| serde_json::from_value(v).map_err(|e| DirectoryError::Storage(e.to_string())))
            .transpose()
    }
}
