//! Integration tests for the moderation engine.
//!
//! Covers the account and post state machines end to end: warning
//! escalation, bans, restores, soft deletion with cascade, and the post
//! publication lifecycle.

mod common;

use crate::common::TestHarness;
use console_core::common::{AccountId, DirectoryError, PostId};
use console_core::domains::account::models::AccountStatus;
use console_core::domains::post::models::{EngagementDelta, PostStatus};
use console_core::domains::post::PostAction;
use test_context::test_context;

// =============================================================================
// Account moderation
// =============================================================================

/// Three warnings from active escalate to banned with warning_count = 3.
#[test_context(TestHarness)]
#[tokio::test]
async fn warn_three_times_bans_the_account(ctx: &TestHarness) {
    let moderation = ctx.moderation();
    let john = ctx.account_id_by_email("john@example.com");

    let first = moderation.warn(john, "Spam in comments").await.unwrap();
    assert_eq!(first.status, AccountStatus::Warning);
    assert_eq!(first.warning_count, 1);

    let second = moderation.warn(john, "More spam").await.unwrap();
    assert_eq!(second.status, AccountStatus::Warning);
    assert_eq!(second.warning_count, 2);

    let third = moderation.warn(john, "Continued spam").await.unwrap();
    assert_eq!(third.status, AccountStatus::Banned);
    assert_eq!(third.warning_count, 3);
    assert_eq!(third.warning_reasons.len(), 3);
}

/// Warnings issued at the same time both land; the count only moves forward.
#[test_context(TestHarness)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_warnings_are_both_recorded(ctx: &TestHarness) {
    let john = ctx.account_id_by_email("john@example.com");

    let first = {
        let moderation = ctx.moderation();
        tokio::spawn(async move { moderation.warn(john, "Spam in comments").await })
    };
    let second = {
        let moderation = ctx.moderation();
        tokio::spawn(async move { moderation.warn(john, "Harassment").await })
    };
    let (first, second) = tokio::join!(first, second);
    first.unwrap().unwrap();
    second.unwrap().unwrap();

    let account = ctx.deps.store().account(john).unwrap();
    assert_eq!(account.warning_count, 2);
    assert_eq!(account.status, AccountStatus::Warning);
    assert_eq!(account.warning_reasons.len(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn warn_unknown_account_is_not_found(ctx: &TestHarness) {
    let err = ctx
        .moderation()
        .warn(AccountId::new(), "whatever")
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound { .. }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn warn_banned_account_is_invalid_transition(ctx: &TestHarness) {
    let jane = ctx.account_id_by_email("jane@example.com");
    let err = ctx.moderation().warn(jane, "extra").await.unwrap_err();
    assert!(matches!(err, DirectoryError::InvalidTransition { .. }));
}

/// Banning twice produces the same observable state as banning once.
#[test_context(TestHarness)]
#[tokio::test]
async fn ban_is_idempotent(ctx: &TestHarness) {
    let moderation = ctx.moderation();
    let john = ctx.account_id_by_email("john@example.com");

    let once = moderation.ban(john, "Severe violation").await.unwrap();
    assert_eq!(once.status, AccountStatus::Banned);

    let twice = moderation.ban(john, "Severe violation").await.unwrap();
    assert_eq!(twice.status, once.status);
    assert_eq!(twice.warning_count, once.warning_count);
}

/// Direct ban works regardless of the current warning count.
#[test_context(TestHarness)]
#[tokio::test]
async fn ban_skips_warning_escalation(ctx: &TestHarness) {
    let foundation = ctx.account_id_by_email("contact@foundation.org");
    let banned = ctx
        .moderation()
        .ban(foundation, "Fraudulent listings")
        .await
        .unwrap();
    assert_eq!(banned.status, AccountStatus::Banned);
    // the count survives the ban for audit
    assert_eq!(banned.warning_count, 1);
}

/// Restore always resets to active with zero warnings.
#[test_context(TestHarness)]
#[tokio::test]
async fn restore_resets_warnings(ctx: &TestHarness) {
    let jane = ctx.account_id_by_email("jane@example.com");
    let restored = ctx.moderation().restore(jane).await.unwrap();
    assert_eq!(restored.status, AccountStatus::Active);
    assert_eq!(restored.warning_count, 0);
    assert!(restored.warning_reasons.is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn restore_active_account_is_invalid(ctx: &TestHarness) {
    let john = ctx.account_id_by_email("john@example.com");
    let err = ctx.moderation().restore(john).await.unwrap_err();
    assert!(matches!(err, DirectoryError::InvalidTransition { .. }));
}

/// Soft delete tombstones the account and cascades to its posts; the ids
/// remain fetchable for audit but vanish from queries.
#[test_context(TestHarness)]
#[tokio::test]
async fn delete_account_cascades_to_posts(ctx: &TestHarness) {
    let moderation = ctx.moderation();
    let sarah = ctx.account_id_by_email("sarah.j@example.com");
    let store = ctx.deps.store();

    assert_eq!(store.post_count_by_author(sarah), 1);
    let before = store.posts().len();

    moderation.delete_account(sarah).await.unwrap();

    // account survives for audit but is out of the live listing
    let tombstone = store.account(sarah).unwrap();
    assert!(tombstone.is_deleted());
    assert!(store.accounts().iter().all(|a| a.id != sarah));

    // authored post went with it
    assert_eq!(store.posts().len(), before - 1);
    assert_eq!(store.post_count_by_author(sarah), 0);

    // deletion is irreversible: the account is gone from moderation's view
    let err = moderation.delete_account(sarah).await.unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound { .. }));
}

// =============================================================================
// Post moderation
// =============================================================================

/// publish -> archive -> restore ends in draft with published_at preserved.
#[test_context(TestHarness)]
#[tokio::test]
async fn post_restore_preserves_publish_timestamp(ctx: &TestHarness) {
    let moderation = ctx.moderation();
    let store = ctx.deps.store();

    // take a seeded published post through archive and back
    let post = store
        .posts()
        .into_iter()
        .find(|p| p.status == PostStatus::Published)
        .expect("seed has published posts");
    let original_published_at = post.published_at.expect("published post has timestamp");

    let archived = moderation
        .moderate_post(post.id, PostAction::Archive)
        .await
        .unwrap();
    assert_eq!(archived.status, PostStatus::Archived);

    let restored = moderation
        .moderate_post(post.id, PostAction::Restore)
        .await
        .unwrap();
    assert_eq!(restored.status, PostStatus::Draft);
    assert_eq!(restored.published_at, Some(original_published_at));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn republish_keeps_first_publish_timestamp(ctx: &TestHarness) {
    let moderation = ctx.moderation();
    let post = ctx
        .deps
        .store()
        .posts()
        .into_iter()
        .find(|p| p.status == PostStatus::Published)
        .unwrap();
    let first_published_at = post.published_at.unwrap();

    moderation
        .moderate_post(post.id, PostAction::Unpublish)
        .await
        .unwrap();
    let republished = moderation
        .moderate_post(post.id, PostAction::Publish)
        .await
        .unwrap();

    assert_eq!(republished.status, PostStatus::Published);
    assert_eq!(republished.published_at, Some(first_published_at));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn illegal_post_action_is_invalid_transition(ctx: &TestHarness) {
    let moderation = ctx.moderation();
    let post = ctx.deps.store().posts().into_iter().next().unwrap();

    // seeded posts are published; publishing again is not an edge
    let err = moderation
        .moderate_post(post.id, PostAction::Publish)
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::InvalidTransition { .. }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn moderate_unknown_post_is_not_found(ctx: &TestHarness) {
    let err = ctx
        .moderation()
        .moderate_post(PostId::new(), PostAction::Publish)
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound { .. }));
}

/// Engagement deltas only ever grow the counters.
#[test_context(TestHarness)]
#[tokio::test]
async fn record_engagement_accumulates(ctx: &TestHarness) {
    let moderation = ctx.moderation();
    let post = ctx.deps.store().posts().into_iter().next().unwrap();
    let before = post.engagement;

    moderation
        .record_engagement(post.id, EngagementDelta::view())
        .await
        .unwrap();
    let after = moderation
        .record_engagement(post.id, EngagementDelta::like())
        .await
        .unwrap();

    assert_eq!(after.engagement.views, before.views + 1);
    assert_eq!(after.engagement.likes, before.likes + 1);
    assert!(before.monotone_to(&after.engagement));
}
