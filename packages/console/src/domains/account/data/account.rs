use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::AccountId;
use crate::domains::account::models::{Account, AccountStatus, AccountType};

/// Read-only account projection handed to the presentation layer.
///
/// Owned copy, never a live reference into the store, so nothing the UI does
/// can mutate directory state behind the engines' backs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountData {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
    pub status: AccountStatus,
    pub join_date: DateTime<Utc>,
    /// Live count of non-deleted posts authored by this account.
    pub post_count: u32,
    pub warning_count: u32,
    /// Avatar fallback, e.g. "JS" for "Jane Smith".
    pub initials: String,
}

impl AccountData {
    pub fn from_account(account: &Account, post_count: u32) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            account_type: account.account_type,
            status: account.status,
            join_date: account.join_date,
            post_count,
            warning_count: account.warning_count,
            initials: account.initials(),
        }
    }

    /// Status chip classes (exhaustive over `AccountStatus`).
    pub fn status_badge_classes(&self) -> &'static str {
        self.status.badge_classes()
    }

    /// Type chip classes (exhaustive over `AccountType`).
    pub fn type_badge_classes(&self) -> &'static str {
        self.account_type.badge_classes()
    }
}
