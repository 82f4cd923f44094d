use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{AccountId, GroupId};
use crate::domains::group::models::{Group, GroupStatus, MemberRole, Membership};

/// Roster row for the group detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipData {
    pub account_id: AccountId,
    /// Resolved display name of the account at projection time.
    pub name: String,
    pub role: MemberRole,
    pub join_date: DateTime<Utc>,
    pub skills: Vec<String>,
    pub is_leadership: bool,
}

impl MembershipData {
    pub fn from_membership(membership: &Membership, name: impl Into<String>) -> Self {
        Self {
            account_id: membership.account_id,
            name: name.into(),
            role: membership.role,
            join_date: membership.join_date,
            skills: membership.skills.iter().cloned().collect(),
            is_leadership: membership.role.is_leadership(),
        }
    }
}

/// Read-only group projection handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupData {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub group_type: String,
    pub status: GroupStatus,
    pub location: String,
    pub established_date: DateTime<Utc>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub next_meeting: Option<DateTime<Utc>>,
    /// Derived from the live roster, never stored.
    pub member_count: u32,
    pub members: Vec<MembershipData>,
}

impl GroupData {
    pub fn from_group(group: &Group, members: Vec<MembershipData>) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone(),
            group_type: group.group_type.clone(),
            status: group.status,
            location: group.location.clone(),
            established_date: group.established_date,
            contact: group.contact.clone(),
            phone: group.phone.clone(),
            next_meeting: group.next_meeting,
            member_count: group.member_count() as u32,
            members,
        }
    }

    /// Status chip classes (exhaustive over `GroupStatus`).
    pub fn status_badge_classes(&self) -> &'static str {
        self.status.badge_classes()
    }
}
