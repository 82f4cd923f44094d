//! The directory store - the only stateful component of the core.
//!
//! Owns every Account, Post, and Group. Engines operate through the store's
//! typed accessors and atomic update closures; nothing else mutates state.
//! Each map is guarded by its own `RwLock`, so a mutation commits atomically
//! per entity and a concurrent reader sees either the pre- or post-state,
//! never an intermediate one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::RwLock;
use uuid::Uuid;

use crate::common::sync::{read_guard, write_guard};
use crate::common::{AccountId, DirectoryError, EntityKind, GroupId, PostId};
use crate::domains::account::models::Account;
use crate::domains::group::models::Group;
use crate::domains::post::models::Post;

/// Post categories recognized out of the box.
///
/// The taxonomy is an open set backed by this registry; deployments can
/// register more at init time.
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["Environment", "Education", "Community", "Health", "Other"];

/// A directory entity of any kind, as handed to the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Account(Account),
    Post(Post),
    Group(Group),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Account(_) => EntityKind::Account,
            Entity::Post(_) => EntityKind::Post,
            Entity::Group(_) => EntityKind::Group,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Entity::Account(a) => a.id.into_uuid(),
            Entity::Post(p) => p.id.into_uuid(),
            Entity::Group(g) => g.id.into_uuid(),
        }
    }
}

/// In-memory directory of accounts, posts, and groups.
///
/// Iteration order over each collection is insertion order (`IndexMap`),
/// which keeps unfiltered listings stable across reads.
pub struct DirectoryStore {
    accounts: RwLock<IndexMap<AccountId, Account>>,
    posts: RwLock<IndexMap<PostId, Post>>,
    groups: RwLock<IndexMap<GroupId, Group>>,
    categories: RwLock<BTreeSet<String>>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(IndexMap::new()),
            posts: RwLock::new(IndexMap::new()),
            groups: RwLock::new(IndexMap::new()),
            categories: RwLock::new(
                DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            ),
        }
    }

    // =========================================================================
    // Category registry
    // =========================================================================

    /// Register an additional post category.
    pub fn register_category(&self, category: impl Into<String>) {
        write_guard(&self.categories).insert(category.into());
    }

    pub fn categories(&self) -> Vec<String> {
        read_guard(&self.categories)
            .iter()
            .cloned()
            .collect()
    }

    fn check_category(&self, category: &str) -> Result<(), DirectoryError> {
        let known = read_guard(&self.categories);
        if known.contains(category) {
            Ok(())
        } else {
            Err(DirectoryError::Validation(format!(
                "unknown post category: {category}"
            )))
        }
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Fetch an account by id, tombstoned or not (audit path).
    pub fn account(&self, id: AccountId) -> Result<Account, DirectoryError> {
        read_guard(&self.accounts)
            .get(&id)
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Account, id))
    }

    /// All live (non-tombstoned) accounts in insertion order.
    pub fn accounts(&self) -> Vec<Account> {
        read_guard(&self.accounts)
            .values()
            .filter(|a| !a.is_deleted())
            .cloned()
            .collect()
    }

    /// Insert a new account or replace the fields of an existing one.
    ///
    /// Status transitions are not allowed through this path; they belong to
    /// the moderation engine. Email addresses must be unique directory-wide.
    pub fn upsert_account(&self, account: Account) -> Result<Account, DirectoryError> {
        account.validate()?;
        let mut map = write_guard(&self.accounts);

        if let Some(existing) = map.get(&account.id) {
            if existing.status != account.status {
                return Err(DirectoryError::Validation(format!(
                    "account status changes from {} to {} must go through moderation",
                    existing.status, account.status
                )));
            }
        }
        let email = account.email.to_lowercase();
        if map
            .values()
            .any(|a| a.id != account.id && a.email.to_lowercase() == email)
        {
            return Err(DirectoryError::Validation(format!(
                "email {} is already registered",
                account.email
            )));
        }

        map.insert(account.id, account.clone());
        Ok(account)
    }

    /// Atomically mutate an account under the write lock.
    ///
    /// The closure works on a copy; the copy is validated and committed only
    /// when both it and the validation succeed, so a failed update leaves no
    /// partial state behind. This is the engines' transition path.
    pub(crate) fn update_account<F>(&self, id: AccountId, f: F) -> Result<Account, DirectoryError>
    where
        F: FnOnce(&mut Account) -> Result<(), DirectoryError>,
    {
        let mut map = write_guard(&self.accounts);
        let mut account = map
            .get(&id)
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Account, id))?;
        f(&mut account)?;
        account.validate()?;
        map.insert(id, account.clone());
        Ok(account)
    }

    /// Live posts authored by the account. Derived, never stored.
    pub fn post_count_by_author(&self, author_id: AccountId) -> u32 {
        read_guard(&self.posts)
            .values()
            .filter(|p| p.author_id == author_id && !p.is_deleted())
            .count() as u32
    }

    // =========================================================================
    // Posts
    // =========================================================================

    pub fn post(&self, id: PostId) -> Result<Post, DirectoryError> {
        read_guard(&self.posts)
            .get(&id)
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Post, id))
    }

    /// All live (non-tombstoned) posts in insertion order.
    pub fn posts(&self) -> Vec<Post> {
        read_guard(&self.posts)
            .values()
            .filter(|p| !p.is_deleted())
            .cloned()
            .collect()
    }

    /// Insert a new post or replace the fields of an existing one.
    ///
    /// Rejects status changes (moderation engine territory: an archived post
    /// cannot be flipped back to draft here), unknown categories, missing
    /// authors, and engagement counters moving backwards.
    pub fn upsert_post(&self, post: Post) -> Result<Post, DirectoryError> {
        post.validate()?;
        self.check_category(&post.category)?;
        {
            let accounts = read_guard(&self.accounts);
            let author = accounts
                .get(&post.author_id)
                .ok_or_else(|| DirectoryError::not_found(EntityKind::Account, post.author_id))?;
            if author.is_deleted() {
                return Err(DirectoryError::not_found(EntityKind::Account, post.author_id));
            }
        }

        let mut map = write_guard(&self.posts);
        if let Some(existing) = map.get(&post.id) {
            if existing.status != post.status {
                return Err(DirectoryError::Validation(format!(
                    "post status changes from {} to {} must go through moderation",
                    existing.status, post.status
                )));
            }
            if !existing.engagement.monotone_to(&post.engagement) {
                return Err(DirectoryError::Validation(
                    "engagement counters may not decrease".to_string(),
                ));
            }
        }

        map.insert(post.id, post.clone());
        Ok(post)
    }

    /// Atomically mutate a post under the write lock (engine path).
    pub(crate) fn update_post<F>(&self, id: PostId, f: F) -> Result<Post, DirectoryError>
    where
        F: FnOnce(&mut Post) -> Result<(), DirectoryError>,
    {
        let mut map = write_guard(&self.posts);
        let mut post = map
            .get(&id)
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Post, id))?;
        f(&mut post)?;
        post.validate()?;
        map.insert(id, post.clone());
        Ok(post)
    }

    /// Ids of live posts by the given author (cascade input).
    pub(crate) fn post_ids_by_author(&self, author_id: AccountId) -> Vec<PostId> {
        read_guard(&self.posts)
            .values()
            .filter(|p| p.author_id == author_id && !p.is_deleted())
            .map(|p| p.id)
            .collect()
    }

    // =========================================================================
    // Groups
    // =========================================================================

    pub fn group(&self, id: GroupId) -> Result<Group, DirectoryError> {
        read_guard(&self.groups)
            .get(&id)
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Group, id))
    }

    /// All groups in insertion order.
    pub fn groups(&self) -> Vec<Group> {
        read_guard(&self.groups)
            .values()
            .cloned()
            .collect()
    }

    pub fn upsert_group(&self, group: Group) -> Result<Group, DirectoryError> {
        group.validate()?;
        let mut map = write_guard(&self.groups);
        map.insert(group.id, group.clone());
        Ok(group)
    }

    /// Atomically mutate a group roster under the write lock (engine path).
    pub(crate) fn update_group<F>(&self, id: GroupId, f: F) -> Result<Group, DirectoryError>
    where
        F: FnOnce(&mut Group) -> Result<(), DirectoryError>,
    {
        let mut map = write_guard(&self.groups);
        let mut group = map
            .get(&id)
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(EntityKind::Group, id))?;
        f(&mut group)?;
        group.validate()?;
        map.insert(id, group.clone());
        Ok(group)
    }

    // =========================================================================
    // Unified contract
    // =========================================================================

    /// Fetch any entity by kind and raw id (storage and audit path).
    pub fn get(&self, kind: EntityKind, id: Uuid) -> Result<Entity, DirectoryError> {
        match kind {
            EntityKind::Account => self.account(AccountId::from_uuid(id)).map(Entity::Account),
            EntityKind::Post => self.post(PostId::from_uuid(id)).map(Entity::Post),
            EntityKind::Group => self.group(GroupId::from_uuid(id)).map(Entity::Group),
        }
    }

    /// Upsert any entity (storage load path).
    pub fn upsert(&self, entity: Entity) -> Result<Entity, DirectoryError> {
        match entity {
            Entity::Account(a) => self.upsert_account(a).map(Entity::Account),
            Entity::Post(p) => self.upsert_post(p).map(Entity::Post),
            Entity::Group(g) => self.upsert_group(g).map(Entity::Group),
        }
    }

    /// All live entities of one kind, in insertion order.
    pub fn all(&self, kind: EntityKind) -> Vec<Entity> {
        match kind {
            EntityKind::Account => self.accounts().into_iter().map(Entity::Account).collect(),
            EntityKind::Post => self.posts().into_iter().map(Entity::Post).collect(),
            EntityKind::Group => self.groups().into_iter().map(Entity::Group).collect(),
        }
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}
