use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{AccountId, DirectoryError};

lazy_static! {
    // Pragmatic format check: local part, @, domain with at least one dot
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
            .expect("invalid email regex");
}

/// What kind of participant an account represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Volunteer,
    Organization,
    Requestor,
}

impl AccountType {
    /// Badge classes for the account type chip rendered by the console.
    ///
    /// Exhaustive over the variants so an unhandled type is a compile error,
    /// not a grey fallback.
    pub fn badge_classes(&self) -> &'static str {
        match self {
            AccountType::Volunteer => "bg-blue-100 text-blue-800",
            AccountType::Organization => "bg-purple-100 text-purple-800",
            AccountType::Requestor => "bg-orange-100 text-orange-800",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Volunteer => "volunteer",
            AccountType::Organization => "organization",
            AccountType::Requestor => "requestor",
        }
    }

    /// Parse a filter value into a type, if recognized.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "volunteer" => Some(AccountType::Volunteer),
            "organization" => Some(AccountType::Organization),
            "requestor" => Some(AccountType::Requestor),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation standing of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Warning,
    Banned,
}

impl AccountStatus {
    /// Badge classes for the status chip rendered by the console.
    pub fn badge_classes(&self) -> &'static str {
        match self {
            AccountStatus::Active => "bg-green-100 text-green-800",
            AccountStatus::Warning => "bg-yellow-100 text-yellow-800",
            AccountStatus::Banned => "bg-red-100 text-red-800",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Warning => "warning",
            AccountStatus::Banned => "banned",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "active" => Some(AccountStatus::Active),
            "warning" => Some(AccountStatus::Warning),
            "banned" => Some(AccountStatus::Banned),
            _ => None,
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account in the directory.
///
/// Accounts are created on registration and mutated only by the moderation
/// engine. They are never physically deleted: `deleted_at` tombstones an
/// account, keeping the id for audit while hiding it from normal queries.
/// `post_count` is derived at projection time and never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
    pub status: AccountStatus,
    pub join_date: DateTime<Utc>,
    pub warning_count: u32,
    /// Reasons given with each warning, oldest first. Cleared on restore.
    pub warning_reasons: Vec<String>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(name: impl Into<String>, email: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            email: email.into(),
            account_type,
            status: AccountStatus::Active,
            join_date: Utc::now(),
            warning_count: 0,
            warning_reasons: Vec::new(),
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Avatar fallback: first letter of each name word, uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Field-level invariants, checked on every commit to the store.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.name.trim().is_empty() {
            return Err(DirectoryError::Validation(
                "account name must not be empty".to_string(),
            ));
        }
        if !EMAIL_REGEX.is_match(&self.email) {
            return Err(DirectoryError::Validation(format!(
                "malformed email address: {}",
                self.email
            )));
        }
        // A warned account cannot look like it is in good standing
        if self.warning_count > 0 && self.status == AccountStatus::Active {
            return Err(DirectoryError::Validation(format!(
                "account {} has {} warnings but status active",
                self.id, self.warning_count
            )));
        }
        if self.warning_reasons.len() as u32 > self.warning_count {
            return Err(DirectoryError::Validation(
                "more warning reasons than warnings".to_string(),
            ));
        }
        Ok(())
    }
}
