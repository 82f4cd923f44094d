use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::common::{AccountId, DirectoryError, GroupId};

/// Role of a member within a group.
///
/// Leader and co-leader are each a single-occupancy slot per group; plain
/// membership is unbounded. The roster engine enforces the slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Leader,
    CoLeader,
    Member,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Leader => "leader",
            MemberRole::CoLeader => "co-leader",
            MemberRole::Member => "member",
        }
    }

    /// True for roles shown with the leadership crown in the console.
    pub fn is_leadership(&self) -> bool {
        matches!(self, MemberRole::Leader | MemberRole::CoLeader)
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a group is currently operating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    Active,
    Inactive,
}

impl GroupStatus {
    pub fn badge_classes(&self) -> &'static str {
        match self {
            GroupStatus::Active => "bg-green-100 text-green-800",
            GroupStatus::Inactive => "bg-gray-100 text-gray-800",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStatus::Active => "active",
            GroupStatus::Inactive => "inactive",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "active" => Some(GroupStatus::Active),
            "inactive" => Some(GroupStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record binding an account to a group with a role and skill set.
///
/// Uniquely keyed by (account_id, group_id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub account_id: AccountId,
    pub group_id: GroupId,
    pub role: MemberRole,
    pub join_date: DateTime<Utc>,
    pub skills: BTreeSet<String>,
}

impl Membership {
    pub fn new(account_id: AccountId, group_id: GroupId, role: MemberRole) -> Self {
        Self {
            account_id,
            group_id,
            role,
            join_date: Utc::now(),
            skills: BTreeSet::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }
}

/// A volunteer group and its roster.
///
/// The member count is never stored; it is always derived from `members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    /// Open taxonomy, e.g. "Environmental", "Community".
    pub group_type: String,
    pub status: GroupStatus,
    pub location: String,
    pub established_date: DateTime<Utc>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub next_meeting: Option<DateTime<Utc>>,
    /// Roster in join order.
    pub members: Vec<Membership>,
}

impl Group {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        group_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            description: description.into(),
            group_type: group_type.into(),
            status: GroupStatus::Active,
            location: location.into(),
            established_date: Utc::now(),
            contact: None,
            phone: None,
            next_meeting: None,
            members: Vec::new(),
        }
    }

    pub fn membership(&self, account_id: AccountId) -> Option<&Membership> {
        self.members.iter().find(|m| m.account_id == account_id)
    }

    /// Occupant of a leadership slot, if any.
    pub fn holder_of(&self, role: MemberRole) -> Option<&Membership> {
        self.members.iter().find(|m| m.role == role)
    }

    /// Live membership count. Always recomputed, never cached.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Field-level invariants, checked on every commit to the store.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.name.trim().is_empty() {
            return Err(DirectoryError::Validation(
                "group name must not be empty".to_string(),
            ));
        }
        // (account_id, group_id) must be unique within the roster
        let mut seen = BTreeSet::new();
        for m in &self.members {
            if m.group_id != self.id {
                return Err(DirectoryError::Validation(format!(
                    "membership for account {} points at group {}, not {}",
                    m.account_id, m.group_id, self.id
                )));
            }
            if !seen.insert(m.account_id) {
                return Err(DirectoryError::Validation(format!(
                    "account {} appears twice in group {}",
                    m.account_id, self.id
                )));
            }
        }
        // Each leadership slot holds at most one member
        for role in [MemberRole::Leader, MemberRole::CoLeader] {
            if self.members.iter().filter(|m| m.role == role).count() > 1 {
                return Err(DirectoryError::Validation(format!(
                    "group {} has more than one {}",
                    self.id, role
                )));
            }
        }
        Ok(())
    }
}
