//! Integration tests for the roster engine.

mod common;

use crate::common::TestHarness;
use console_core::common::{AccountId, DirectoryError};
use console_core::domains::group::models::MemberRole;
use test_context::test_context;

/// A second leader is rejected and the incumbent keeps the slot.
#[test_context(TestHarness)]
#[tokio::test]
async fn leader_slot_is_single_occupancy(ctx: &TestHarness) {
    let roster = ctx.roster();
    let heroes = ctx.group_id_by_name("Environmental Heroes");
    let sarah = ctx.account_id_by_email("sarah.j@example.com");
    let john = ctx.account_id_by_email("john@example.com");

    let err = roster
        .add_member(heroes, john, MemberRole::Leader, ["Leadership"])
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::LeadershipLimit { .. }));

    let group = ctx.deps.store().group(heroes).unwrap();
    assert_eq!(
        group.holder_of(MemberRole::Leader).unwrap().account_id,
        sarah
    );
    // the rejected candidate never joined
    assert!(group.membership(john).is_none());
}

/// Co-leader is its own slot: filling it next to a leader is fine, filling
/// it twice is not.
#[test_context(TestHarness)]
#[tokio::test]
async fn co_leader_slot_is_independent(ctx: &TestHarness) {
    let roster = ctx.roster();
    let builders = ctx.group_id_by_name("Community Builders");
    let john = ctx.account_id_by_email("john@example.com");
    let michael = ctx.account_id_by_email("michael.c@example.com");

    // Builders has a leader but no co-leader yet
    roster
        .add_member(builders, john, MemberRole::CoLeader, ["Coordination"])
        .await
        .unwrap();

    let err = roster
        .add_member(builders, michael, MemberRole::CoLeader, ["Outreach"])
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::LeadershipLimit { .. }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_membership_is_rejected(ctx: &TestHarness) {
    let roster = ctx.roster();
    let heroes = ctx.group_id_by_name("Environmental Heroes");
    let emily = ctx.account_id_by_email("emily.c@example.com");

    let err = roster
        .add_member(heroes, emily, MemberRole::Member, ["Photography"])
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::DuplicateMembership { .. }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn add_member_requires_existing_account(ctx: &TestHarness) {
    let roster = ctx.roster();
    let heroes = ctx.group_id_by_name("Environmental Heroes");

    let err = roster
        .add_member(heroes, AccountId::new(), MemberRole::Member, ["Anything"])
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound { .. }));
}

/// Removing the sole leader leaves the group leaderless; nobody is promoted.
#[test_context(TestHarness)]
#[tokio::test]
async fn removing_sole_leader_leaves_group_leaderless(ctx: &TestHarness) {
    let roster = ctx.roster();
    let builders = ctx.group_id_by_name("Community Builders");
    let rachel = ctx.account_id_by_email("rachel.m@example.com");

    let group = roster.remove_member(builders, rachel).await.unwrap();
    assert!(group.holder_of(MemberRole::Leader).is_none());
    assert_eq!(group.member_count(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn remove_unknown_member_is_not_found(ctx: &TestHarness) {
    let roster = ctx.roster();
    let builders = ctx.group_id_by_name("Community Builders");
    let john = ctx.account_id_by_email("john@example.com");

    let err = roster.remove_member(builders, john).await.unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound { .. }));
}

/// member_count tracks the live roster through every operation.
#[test_context(TestHarness)]
#[tokio::test]
async fn member_count_stays_consistent(ctx: &TestHarness) {
    let roster = ctx.roster();
    let builders = ctx.group_id_by_name("Community Builders");
    let john = ctx.account_id_by_email("john@example.com");

    assert_eq!(roster.member_count(builders).unwrap(), 3);

    roster
        .add_member(builders, john, MemberRole::Member, ["Driving"])
        .await
        .unwrap();
    assert_eq!(roster.member_count(builders).unwrap(), 4);

    roster.remove_member(builders, john).await.unwrap();
    assert_eq!(roster.member_count(builders).unwrap(), 3);
}

/// change_role re-validates the leadership slots.
#[test_context(TestHarness)]
#[tokio::test]
async fn change_role_enforces_leadership_cap(ctx: &TestHarness) {
    let roster = ctx.roster();
    let heroes = ctx.group_id_by_name("Environmental Heroes");
    let emily = ctx.account_id_by_email("emily.c@example.com");
    let david = ctx.account_id_by_email("david.w@example.com");

    // leader slot is taken by Sarah
    let err = roster
        .change_role(heroes, emily, MemberRole::Leader)
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::LeadershipLimit { .. }));

    // vacate the co-leader slot, then promotion into it works
    let mike = ctx.account_id_by_email("mike.r@example.com");
    roster
        .change_role(heroes, mike, MemberRole::Member)
        .await
        .unwrap();
    let group = roster
        .change_role(heroes, david, MemberRole::CoLeader)
        .await
        .unwrap();
    assert_eq!(
        group.holder_of(MemberRole::CoLeader).unwrap().account_id,
        david
    );
}

/// Re-assigning a member their current leadership role is a no-op, not a
/// limit violation.
#[test_context(TestHarness)]
#[tokio::test]
async fn change_role_to_same_role_is_allowed(ctx: &TestHarness) {
    let roster = ctx.roster();
    let heroes = ctx.group_id_by_name("Environmental Heroes");
    let sarah = ctx.account_id_by_email("sarah.j@example.com");

    let group = roster
        .change_role(heroes, sarah, MemberRole::Leader)
        .await
        .unwrap();
    assert_eq!(
        group.holder_of(MemberRole::Leader).unwrap().account_id,
        sarah
    );
}
