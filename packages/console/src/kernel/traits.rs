// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (moderation, rosters, search) lives in domain engines that
// use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseStorage)

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::{DirectoryError, EntityKind};
use crate::domains::directory::Entity;

// =============================================================================
// Storage Trait (Infrastructure - external persistence collaborator)
// =============================================================================

/// Minimal save/load contract to the external persistence layer.
///
/// The core never retries and never interprets storage failures; they come
/// back to callers unchanged as `DirectoryError::Storage`. Format and
/// transport are entirely the implementor's business.
#[async_trait]
pub trait BaseStorage: Send + Sync {
    /// Persist one committed entity.
    async fn persist(&self, entity: &Entity) -> Result<(), DirectoryError>;

    /// Load one entity, or `None` when the id is unknown to storage.
    async fn load(&self, kind: EntityKind, id: Uuid) -> Result<Option<Entity>, DirectoryError>;
}
