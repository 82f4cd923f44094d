//! Moderation engine - validated state transitions on accounts and posts.
//!
//! Every operation is a single atomic transaction against the directory
//! store (the account/post machines decide, the store commits under its
//! write lock), followed by a persist call to the storage collaborator.
//! Concurrent operations on the same entity serialize on the store lock, so
//! warning counts only ever move forward.

use tracing::info;

use crate::common::{AccountId, DirectoryError, EntityKind, PostId};
use crate::domains::account::machines::{self as account_machine, AccountAction};
use crate::domains::account::models::Account;
use crate::domains::directory::Entity;
use crate::domains::post::machines::{self as post_machine, PostAction};
use crate::domains::post::models::{EngagementDelta, Post, PostStatus};
use crate::kernel::ConsoleDeps;

pub struct ModerationEngine {
    deps: ConsoleDeps,
}

impl ModerationEngine {
    pub fn new(deps: ConsoleDeps) -> Self {
        Self { deps }
    }

    /// Issue a warning. Escalates to a ban at the third warning.
    pub async fn warn(
        &self,
        account_id: AccountId,
        reason: &str,
    ) -> Result<Account, DirectoryError> {
        let account = self.deps.store().update_account(account_id, |account| {
            if account.is_deleted() {
                return Err(DirectoryError::not_found(EntityKind::Account, account_id));
            }
            let next = account_machine::apply(
                account.status,
                account.warning_count,
                AccountAction::Warn,
            )?;
            account.status = next.status;
            account.warning_count = next.warning_count;
            account.warning_reasons.push(reason.to_string());
            Ok(())
        })?;

        info!(
            account_id = %account_id,
            reason = %reason,
            warnings = account.warning_count,
            status = %account.status,
            "Warned account"
        );
        self.persist_account(&account).await?;
        Ok(account)
    }

    /// Ban outright, regardless of warning count. Idempotent: banning a
    /// banned account returns its current state.
    pub async fn ban(
        &self,
        account_id: AccountId,
        reason: &str,
    ) -> Result<Account, DirectoryError> {
        let account = self.deps.store().update_account(account_id, |account| {
            if account.is_deleted() {
                return Err(DirectoryError::not_found(EntityKind::Account, account_id));
            }
            let next = account_machine::apply(
                account.status,
                account.warning_count,
                AccountAction::Ban,
            )?;
            account.status = next.status;
            account.warning_count = next.warning_count;
            Ok(())
        })?;

        info!(account_id = %account_id, reason = %reason, "Banned account");
        self.persist_account(&account).await?;
        Ok(account)
    }

    /// Lift a ban. Resets the warning count and clears the reasons.
    pub async fn restore(&self, account_id: AccountId) -> Result<Account, DirectoryError> {
        let account = self.deps.store().update_account(account_id, |account| {
            if account.is_deleted() {
                return Err(DirectoryError::not_found(EntityKind::Account, account_id));
            }
            let next = account_machine::apply(
                account.status,
                account.warning_count,
                AccountAction::Restore,
            )?;
            account.status = next.status;
            account.warning_count = next.warning_count;
            account.warning_reasons.clear();
            Ok(())
        })?;

        info!(account_id = %account_id, "Restored account");
        self.persist_account(&account).await?;
        Ok(account)
    }

    /// Tombstone an account and cascade to its authored posts.
    ///
    /// Soft deletion: ids survive for audit, but the entities disappear from
    /// queries. There is no undelete.
    pub async fn delete_account(&self, account_id: AccountId) -> Result<(), DirectoryError> {
        let now = chrono::Utc::now();
        let account = self.deps.store().update_account(account_id, |account| {
            if account.is_deleted() {
                return Err(DirectoryError::not_found(EntityKind::Account, account_id));
            }
            account.deleted_at = Some(now);
            Ok(())
        })?;
        self.persist_account(&account).await?;

        // Cascade is sequenced here, one atomic post update at a time
        let post_ids = self.deps.store().post_ids_by_author(account_id);
        let cascaded = post_ids.len();
        for post_id in post_ids {
            let post = self.deps.store().update_post(post_id, |post| {
                post.deleted_at = Some(now);
                Ok(())
            })?;
            self.persist_post(&post).await?;
        }

        info!(account_id = %account_id, cascaded_posts = cascaded, "Deleted account");
        Ok(())
    }

    /// Apply a post lifecycle action (publish, unpublish, archive, restore).
    pub async fn moderate_post(
        &self,
        post_id: PostId,
        action: PostAction,
    ) -> Result<Post, DirectoryError> {
        let post = self.deps.store().update_post(post_id, |post| {
            if post.is_deleted() {
                return Err(DirectoryError::not_found(EntityKind::Post, post_id));
            }
            let next = post_machine::apply(post.status, action)?;
            // first publish stamps the timestamp; it survives every later edge
            if next == PostStatus::Published && post.published_at.is_none() {
                post.published_at = Some(chrono::Utc::now());
            }
            post.status = next;
            Ok(())
        })?;

        info!(post_id = %post_id, action = action.as_str(), status = %post.status, "Moderated post");
        self.persist_post(&post).await?;
        Ok(post)
    }

    /// Apply an additive engagement delta.
    ///
    /// Deltas commute and are applied under the store's write lock, so
    /// concurrent readers bumping counters never lose updates.
    pub async fn record_engagement(
        &self,
        post_id: PostId,
        delta: EngagementDelta,
    ) -> Result<Post, DirectoryError> {
        let post = self.deps.store().update_post(post_id, |post| {
            if post.is_deleted() {
                return Err(DirectoryError::not_found(EntityKind::Post, post_id));
            }
            post.engagement.add(delta);
            Ok(())
        })?;

        self.persist_post(&post).await?;
        Ok(post)
    }

    async fn persist_account(&self, account: &Account) -> Result<(), DirectoryError> {
        self.deps
            .storage()
            .persist(&Entity::Account(account.clone()))
            .await
    }

    async fn persist_post(&self, post: &Post) -> Result<(), DirectoryError> {
        self.deps
            .storage()
            .persist(&Entity::Post(post.clone()))
            .await
    }
}
