//! Roster engine - group membership management.
//!
//! Each operation is one atomic roster update against the directory store.
//! Leadership slots (leader, co-leader) hold at most one member each; plain
//! membership is unbounded.

use tracing::info;

use crate::common::{AccountId, DirectoryError, EntityKind, GroupId};
use crate::domains::directory::Entity;
use crate::domains::group::models::{Group, MemberRole, Membership};
use crate::kernel::ConsoleDeps;

pub struct RosterEngine {
    deps: ConsoleDeps,
}

impl RosterEngine {
    pub fn new(deps: ConsoleDeps) -> Self {
        Self { deps }
    }

    /// Add an account to a group's roster.
    pub async fn add_member<I, S>(
        &self,
        group_id: GroupId,
        account_id: AccountId,
        role: MemberRole,
        skills: I,
    ) -> Result<Group, DirectoryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // the account must exist and not be tombstoned
        let account = self.deps.store().account(account_id)?;
        if account.is_deleted() {
            return Err(DirectoryError::not_found(EntityKind::Account, account_id));
        }

        let membership = Membership::new(account_id, group_id, role).with_skills(skills);
        let group = self.deps.store().update_group(group_id, |group| {
            if group.membership(account_id).is_some() {
                return Err(DirectoryError::DuplicateMembership {
                    account_id: account_id.into_uuid(),
                    group_id: group_id.into_uuid(),
                });
            }
            check_leadership_slot(group, role, account_id)?;
            group.members.push(membership);
            Ok(())
        })?;

        info!(group_id = %group_id, account_id = %account_id, role = %role, "Added group member");
        self.persist_group(&group).await?;
        Ok(group)
    }

    /// Remove an account from a group's roster.
    ///
    /// Removing the sole leader leaves the group leaderless; nobody is
    /// auto-promoted.
    pub async fn remove_member(
        &self,
        group_id: GroupId,
        account_id: AccountId,
    ) -> Result<Group, DirectoryError> {
        let group = self.deps.store().update_group(group_id, |group| {
            let before = group.members.len();
            group.members.retain(|m| m.account_id != account_id);
            if group.members.len() == before {
                return Err(DirectoryError::not_found(EntityKind::Account, account_id));
            }
            Ok(())
        })?;

        info!(
            group_id = %group_id,
            account_id = %account_id,
            member_count = group.member_count(),
            "Removed group member"
        );
        self.persist_group(&group).await?;
        Ok(group)
    }

    /// Change a member's role, re-validating the leadership slots.
    pub async fn change_role(
        &self,
        group_id: GroupId,
        account_id: AccountId,
        new_role: MemberRole,
    ) -> Result<Group, DirectoryError> {
        let group = self.deps.store().update_group(group_id, |group| {
            if group.membership(account_id).is_none() {
                return Err(DirectoryError::not_found(EntityKind::Account, account_id));
            }
            check_leadership_slot(group, new_role, account_id)?;
            for m in &mut group.members {
                if m.account_id == account_id {
                    m.role = new_role;
                }
            }
            Ok(())
        })?;

        info!(group_id = %group_id, account_id = %account_id, role = %new_role, "Changed member role");
        self.persist_group(&group).await?;
        Ok(group)
    }

    /// Live membership count for a group. Derived, never stored.
    pub fn member_count(&self, group_id: GroupId) -> Result<u32, DirectoryError> {
        Ok(self.deps.store().group(group_id)?.member_count() as u32)
    }

    async fn persist_group(&self, group: &Group) -> Result<(), DirectoryError> {
        self.deps
            .storage()
            .persist(&Entity::Group(group.clone()))
            .await
    }
}

/// Reject a role that would double-book a leadership slot.
fn check_leadership_slot(
    group: &Group,
    role: MemberRole,
    candidate: AccountId,
) -> Result<(), DirectoryError> {
    if !role.is_leadership() {
        return Ok(());
    }
    match group.holder_of(role) {
        Some(holder) if holder.account_id != candidate => Err(DirectoryError::LeadershipLimit {
            group_id: group.id.into_uuid(),
            role: role.to_string(),
        }),
        _ => Ok(()),
    }
}
