use thiserror::Error;
use uuid::Uuid;

use super::types::EntityKind;

/// Typed failures returned by the directory engines.
///
/// All variants are locally recoverable: the engine hands the failure back to
/// the caller and the process keeps running. Storage failures from the
/// external persistence collaborator are passed through opaque.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid {kind} transition: {action} is not legal from {from}")]
    InvalidTransition {
        kind: EntityKind,
        from: String,
        action: String,
    },

    #[error("account {account_id} is already a member of group {group_id}")]
    DuplicateMembership {
        account_id: Uuid,
        group_id: Uuid,
    },

    #[error("group {group_id} already has a {role}")]
    LeadershipLimit { group_id: Uuid, role: String },

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl DirectoryError {
    /// Shorthand for the most common failure.
    pub fn not_found(kind: EntityKind, id: impl Into<Uuid>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
