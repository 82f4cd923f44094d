// Common types used across multiple domains and layers
//
// These types are shared between the kernel and domain layers to avoid
// circular dependencies while maintaining type safety.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of entity the directory holds.
///
/// Used by the search engine to pick a collection and by the storage
/// contract to key persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Account,
    Post,
    Group,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Account => "account",
            EntityKind::Post => "post",
            EntityKind::Group => "group",
        };
        f.write_str(s)
    }
}

/// An inclusive date range used by search filters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: chrono::DateTime<chrono::Utc>,
    pub to: chrono::DateTime<chrono::Utc>,
}

impl DateRange {
    pub fn contains(&self, at: chrono::DateTime<chrono::Utc>) -> bool {
        self.from <= at && at <= self.to
    }
}
