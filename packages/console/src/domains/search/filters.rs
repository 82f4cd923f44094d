//! Search filter criteria and their validation.
//!
//! Filters are typed, so "unknown keys" cannot be expressed at all; unknown
//! *values* for a closed taxonomy (account type, any status) and impossible
//! ranges are rejected with `InvalidFilter` before any matching happens.

use serde::{Deserialize, Serialize};

use crate::common::{DateRange, DirectoryError, EntityKind};
use crate::domains::account::models::{AccountStatus, AccountType};
use crate::domains::group::models::GroupStatus;
use crate::domains::post::models::PostStatus;

/// Optional filter criteria for a directory search.
///
/// Every unspecified option imposes no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Account type, post category, or group type, depending on the target.
    pub variant: Option<String>,
    /// Lifecycle status, interpreted against the target's status enum.
    pub status: Option<String>,
    /// Join date (accounts), publish date (posts), or established date (groups).
    pub date_range: Option<DateRange>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.variant.is_none() && self.status.is_none() && self.date_range.is_none()
    }

    /// Check the criteria against the entity kind being searched.
    ///
    /// `known_categories` backs the open post-category set; account and group
    /// statuses/types validate against their closed enums.
    pub fn validate(
        &self,
        kind: EntityKind,
        known_categories: &[String],
    ) -> Result<(), DirectoryError> {
        if let Some(range) = &self.date_range {
            if range.from > range.to {
                return Err(DirectoryError::InvalidFilter(format!(
                    "date range starts after it ends: {} > {}",
                    range.from, range.to
                )));
            }
        }

        match kind {
            EntityKind::Account => {
                if let Some(v) = &self.variant {
                    if AccountType::from_str_opt(v).is_none() {
                        return Err(DirectoryError::InvalidFilter(format!(
                            "unknown account type: {v}"
                        )));
                    }
                }
                if let Some(s) = &self.status {
                    if AccountStatus::from_str_opt(s).is_none() {
                        return Err(DirectoryError::InvalidFilter(format!(
                            "unknown account status: {s}"
                        )));
                    }
                }
            }
            EntityKind::Post => {
                if let Some(v) = &self.variant {
                    if !known_categories.iter().any(|c| c == v) {
                        return Err(DirectoryError::InvalidFilter(format!(
                            "unknown post category: {v}"
                        )));
                    }
                }
                if let Some(s) = &self.status {
                    if PostStatus::from_str_opt(s).is_none() {
                        return Err(DirectoryError::InvalidFilter(format!(
                            "unknown post status: {s}"
                        )));
                    }
                }
            }
            EntityKind::Group => {
                // group types are an open taxonomy; only status is closed
                if let Some(s) = &self.status {
                    if GroupStatus::from_str_opt(s).is_none() {
                        return Err(DirectoryError::InvalidFilter(format!(
                            "unknown group status: {s}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
