//! Demo data seeding - explicit init for development and tests.
//!
//! The directory starts empty; callers opt into this seed (see
//! `Config::seed_demo_data`). Nothing here runs implicitly.

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::common::DirectoryError;
use crate::domains::account::models::{Account, AccountStatus, AccountType};
use crate::domains::directory::store::DirectoryStore;
use crate::domains::group::models::{Group, GroupStatus, MemberRole, Membership};
use crate::domains::post::models::{Engagement, Post, PostStatus};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn seed_account(
    store: &DirectoryStore,
    name: &str,
    email: &str,
    account_type: AccountType,
    join_date: DateTime<Utc>,
) -> Result<Account, DirectoryError> {
    let mut account = Account::new(name, email, account_type);
    account.join_date = join_date;
    store.upsert_account(account)
}

/// Populate the store with the demo directory: three moderated accounts, two
/// volunteer groups with rosters, and two published posts.
pub fn seed_demo(store: &DirectoryStore) -> Result<(), DirectoryError> {
    // ---- accounts under moderation -------------------------------------
    seed_account(
        store,
        "John Doe",
        "john@example.com",
        AccountType::Volunteer,
        date(2024, 1, 15),
    )?;

    let mut foundation = Account::new(
        "Community Foundation",
        "contact@foundation.org",
        AccountType::Organization,
    );
    foundation.join_date = date(2023, 12, 1);
    foundation.status = AccountStatus::Warning;
    foundation.warning_count = 1;
    foundation
        .warning_reasons
        .push("Repeated off-topic posting".to_string());
    store.upsert_account(foundation)?;

    let mut jane = Account::new("Jane Smith", "jane@example.com", AccountType::Requestor);
    jane.join_date = date(2024, 2, 20);
    jane.status = AccountStatus::Banned;
    jane.warning_count = 3;
    jane.warning_reasons = vec![
        "Spam links in requests".to_string(),
        "Harassing volunteers in comments".to_string(),
        "Continued harassment after warning".to_string(),
    ];
    store.upsert_account(jane)?;

    // ---- group rosters ---------------------------------------------------
    let sarah = seed_account(
        store,
        "Sarah Johnson",
        "sarah.j@example.com",
        AccountType::Volunteer,
        date(2023, 6, 15),
    )?;
    let mike = seed_account(
        store,
        "Mike Rodriguez",
        "mike.r@example.com",
        AccountType::Volunteer,
        date(2023, 7, 1),
    )?;
    let emily = seed_account(
        store,
        "Emily Chen",
        "emily.c@example.com",
        AccountType::Volunteer,
        date(2023, 8, 12),
    )?;
    let david = seed_account(
        store,
        "David Wilson",
        "david.w@example.com",
        AccountType::Volunteer,
        date(2023, 9, 5),
    )?;
    let lisa = seed_account(
        store,
        "Lisa Thompson",
        "lisa.t@example.com",
        AccountType::Volunteer,
        date(2023, 10, 18),
    )?;
    let alex = seed_account(
        store,
        "Alex Kim",
        "alex.k@example.com",
        AccountType::Volunteer,
        date(2023, 11, 22),
    )?;
    let rachel = seed_account(
        store,
        "Rachel Martinez",
        "rachel.m@example.com",
        AccountType::Volunteer,
        date(2023, 4, 20),
    )?;
    let james = seed_account(
        store,
        "James Park",
        "james.p@example.com",
        AccountType::Volunteer,
        date(2023, 5, 15),
    )?;
    let maria = seed_account(
        store,
        "Maria Garcia",
        "maria.g@example.com",
        AccountType::Volunteer,
        date(2023, 6, 3),
    )?;
    let michael = seed_account(
        store,
        "Michael Chen",
        "michael.c@example.com",
        AccountType::Volunteer,
        date(2023, 12, 10),
    )?;

    let mut heroes = Group::new(
        "Environmental Heroes",
        "A dedicated group of volunteers focused on environmental conservation \
         and sustainability initiatives.",
        "Environmental",
        "Downtown Community Center",
    );
    heroes.status = GroupStatus::Active;
    heroes.established_date = date(2023, 6, 15);
    heroes.contact = Some("env.heroes@example.com".to_string());
    heroes.phone = Some("+1 (555) 123-4567".to_string());
    heroes.next_meeting = Some(date(2024, 2, 15));
    let roster = [
        (sarah.id, MemberRole::Leader, date(2023, 6, 15), vec!["Project Management", "Environmental Science"]),
        (mike.id, MemberRole::CoLeader, date(2023, 7, 1), vec!["Community Outreach", "Event Planning"]),
        (emily.id, MemberRole::Member, date(2023, 8, 12), vec!["Social Media", "Photography"]),
        (david.id, MemberRole::Member, date(2023, 9, 5), vec!["Logistics", "Coordination"]),
        (lisa.id, MemberRole::Member, date(2023, 10, 18), vec!["Education", "Public Speaking"]),
        (alex.id, MemberRole::Member, date(2023, 11, 22), vec!["Data Analysis", "Research"]),
    ];
    for (account_id, role, joined, skills) in roster {
        let mut membership = Membership::new(account_id, heroes.id, role).with_skills(skills);
        membership.join_date = joined;
        heroes.members.push(membership);
    }
    store.upsert_group(heroes)?;

    let mut builders = Group::new(
        "Community Builders",
        "A vibrant group focused on strengthening community bonds through \
         social initiatives and neighborhood improvement projects.",
        "Community",
        "Westside Community Hall",
    );
    builders.status = GroupStatus::Active;
    builders.established_date = date(2023, 4, 20);
    builders.contact = Some("builders@example.com".to_string());
    builders.phone = Some("+1 (555) 987-6543".to_string());
    builders.next_meeting = Some(date(2024, 2, 12));
    let roster = [
        (rachel.id, MemberRole::Leader, date(2023, 4, 20), vec!["Community Engagement", "Leadership"]),
        (james.id, MemberRole::Member, date(2023, 5, 15), vec!["Construction", "Carpentry"]),
        (maria.id, MemberRole::Member, date(2023, 6, 3), vec!["Event Planning", "Fundraising"]),
    ];
    for (account_id, role, joined, skills) in roster {
        let mut membership = Membership::new(account_id, builders.id, role).with_skills(skills);
        membership.join_date = joined;
        builders.members.push(membership);
    }
    store.upsert_group(builders)?;

    // ---- published posts ---------------------------------------------------
    let mut cleanup = Post::new(
        "Environmental Clean-up Drive",
        "Join us for a community-wide environmental clean-up initiative that \
         aims to restore our local parks and waterways.",
        sarah.id,
        "Environment",
    )
    .with_tags(["Environment", "Community", "Volunteer", "Clean-up"]);
    cleanup.status = PostStatus::Published;
    cleanup.published_at = Some(date(2024, 1, 15));
    cleanup.created_at = date(2024, 1, 15);
    cleanup.engagement = Engagement {
        views: 342,
        likes: 28,
        comments: 15,
        shares: 8,
    };
    store.upsert_post(cleanup)?;

    let mut workshops = Post::new(
        "Skills Workshop Series",
        "A new workshop series designed to help volunteers develop valuable \
         professional and personal skills while contributing to meaningful causes.",
        michael.id,
        "Education",
    )
    .with_tags(["Education", "Skills", "Workshop", "Professional Development"]);
    workshops.status = PostStatus::Published;
    workshops.published_at = Some(date(2024, 1, 12));
    workshops.created_at = date(2024, 1, 12);
    workshops.engagement = Engagement {
        views: 189,
        likes: 22,
        comments: 12,
        shares: 5,
    };
    store.upsert_post(workshops)?;

    info!(
        accounts = store.accounts().len(),
        groups = store.groups().len(),
        posts = store.posts().len(),
        "Seeded demo directory"
    );
    Ok(())
}
