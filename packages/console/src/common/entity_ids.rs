//! Typed ID definitions for all directory entities.
//!
//! This module defines type aliases for each directory entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use console_core::common::{AccountId, GroupId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let account_id: AccountId = AccountId::new();
//! let group_id: GroupId = GroupId::new();
//!
//! // This would be a compile error:
//! // let wrong: GroupId = account_id;
//! ```

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Account entities (volunteers, organizations, requestors).
pub struct Account;

/// Marker type for Post entities (community content under review).
pub struct Post;

/// Marker type for Group entities (volunteer groups).
pub struct Group;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Account entities.
pub type AccountId = Id<Account>;

/// Typed ID for Post entities.
pub type PostId = Id<Post>;

/// Typed ID for Group entities.
pub type GroupId = Id<Group>;
