//! Query engine - read-only search over the directory.
//!
//! Pure function of (directory state, term, filters): it never mutates the
//! store and returns owned projections. Ordering is deterministic: exact
//! term matches first, then most recent first, ties broken by id ascending.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::{DirectoryError, EntityKind};
use crate::domains::account::data::AccountData;
use crate::domains::account::models::{AccountStatus, AccountType};
use crate::domains::group::data::{GroupData, MembershipData};
use crate::domains::group::models::GroupStatus;
use crate::domains::post::data::PostData;
use crate::domains::post::models::PostStatus;
use crate::domains::search::filters::SearchFilters;
use crate::kernel::ConsoleDeps;

/// Results of a kind-dispatched search.
#[derive(Debug, Clone)]
pub enum SearchResults {
    Accounts(Vec<AccountData>),
    Posts(Vec<PostData>),
    Groups(Vec<GroupData>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Accounts(v) => v.len(),
            SearchResults::Posts(v) => v.len(),
            SearchResults::Groups(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Relevance key: exact matches sort ahead of partial ones, newer entries
/// ahead of older, and ids ascending settle any remaining tie.
fn rank(exact: bool, recency: Option<DateTime<Utc>>, id: Uuid) -> (u8, i64, Uuid) {
    let bucket = if exact { 0 } else { 1 };
    // negate so newer timestamps sort first; undated entries go last
    let recency_key = recency.map(|t| -t.timestamp_millis()).unwrap_or(i64::MAX);
    (bucket, recency_key, id)
}

fn term_matches(term: &str, fields: &[&str]) -> (bool, bool) {
    if term.is_empty() {
        return (true, false);
    }
    let mut hit = false;
    let mut exact = false;
    for field in fields {
        let field = field.to_lowercase();
        if field == term {
            exact = true;
            hit = true;
        } else if field.contains(term) {
            hit = true;
        }
    }
    (hit, exact)
}

pub struct QueryEngine {
    deps: ConsoleDeps,
}

impl QueryEngine {
    pub fn new(deps: ConsoleDeps) -> Self {
        Self { deps }
    }

    /// Dispatch a search by entity kind.
    pub fn search(
        &self,
        kind: EntityKind,
        term: &str,
        filters: &SearchFilters,
    ) -> Result<SearchResults, DirectoryError> {
        match kind {
            EntityKind::Account => self.search_accounts(term, filters).map(SearchResults::Accounts),
            EntityKind::Post => self.search_posts(term, filters).map(SearchResults::Posts),
            EntityKind::Group => self.search_groups(term, filters).map(SearchResults::Groups),
        }
    }

    /// Search accounts by name or email.
    pub fn search_accounts(
        &self,
        term: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<AccountData>, DirectoryError> {
        filters.validate(EntityKind::Account, &[])?;
        let term = term.trim().to_lowercase();
        let type_filter = filters.variant.as_deref().and_then(AccountType::from_str_opt);
        let status_filter = filters.status.as_deref().and_then(AccountStatus::from_str_opt);

        let store = self.deps.store();
        let mut hits: Vec<(bool, _)> = Vec::new();
        for account in store.accounts() {
            if let Some(t) = type_filter {
                if account.account_type != t {
                    continue;
                }
            }
            if let Some(s) = status_filter {
                if account.status != s {
                    continue;
                }
            }
            if let Some(range) = &filters.date_range {
                if !range.contains(account.join_date) {
                    continue;
                }
            }
            let (hit, exact) = term_matches(&term, &[account.name.as_str(), account.email.as_str()]);
            if hit {
                hits.push((exact, account));
            }
        }

        hits.sort_by_key(|(exact, a)| rank(*exact, Some(a.join_date), a.id.into_uuid()));
        Ok(hits
            .into_iter()
            .map(|(_, a)| {
                let post_count = store.post_count_by_author(a.id);
                AccountData::from_account(&a, post_count)
            })
            .collect())
    }

    /// Search posts by title or author name.
    pub fn search_posts(
        &self,
        term: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<PostData>, DirectoryError> {
        let store = self.deps.store();
        filters.validate(EntityKind::Post, &store.categories())?;
        let term = term.trim().to_lowercase();
        let status_filter = filters.status.as_deref().and_then(PostStatus::from_str_opt);

        let mut hits: Vec<(bool, _, String)> = Vec::new();
        for post in store.posts() {
            if let Some(category) = &filters.variant {
                if &post.category != category {
                    continue;
                }
            }
            if let Some(s) = status_filter {
                if post.status != s {
                    continue;
                }
            }
            if let Some(range) = &filters.date_range {
                match post.published_at {
                    Some(at) if range.contains(at) => {}
                    _ => continue,
                }
            }
            let author_name = store
                .account(post.author_id)
                .map(|a| a.name)
                .unwrap_or_default();
            let (hit, exact) = term_matches(&term, &[post.title.as_str(), author_name.as_str()]);
            if hit {
                hits.push((exact, post, author_name));
            }
        }

        hits.sort_by_key(|(exact, p, _)| rank(*exact, p.published_at, p.id.into_uuid()));
        Ok(hits
            .into_iter()
            .map(|(_, p, author)| PostData::from_post(&p, author))
            .collect())
    }

    /// Search groups by name.
    pub fn search_groups(
        &self,
        term: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<GroupData>, DirectoryError> {
        filters.validate(EntityKind::Group, &[])?;
        let term = term.trim().to_lowercase();
        let status_filter = filters.status.as_deref().and_then(GroupStatus::from_str_opt);

        let store = self.deps.store();
        let mut hits: Vec<(bool, _)> = Vec::new();
        for group in store.groups() {
            if let Some(t) = &filters.variant {
                if !group.group_type.eq_ignore_ascii_case(t) {
                    continue;
                }
            }
            if let Some(s) = status_filter {
                if group.status != s {
                    continue;
                }
            }
            if let Some(range) = &filters.date_range {
                if !range.contains(group.established_date) {
                    continue;
                }
            }
            let (hit, exact) = term_matches(&term, &[group.name.as_str()]);
            if hit {
                hits.push((exact, group));
            }
        }

        hits.sort_by_key(|(exact, g)| rank(*exact, Some(g.established_date), g.id.into_uuid()));
        Ok(hits
            .into_iter()
            .map(|(_, g)| {
                let members = g
                    .members
                    .iter()
                    .map(|m| {
                        let name = store
                            .account(m.account_id)
                            .map(|a| a.name)
                            .unwrap_or_default();
                        MembershipData::from_membership(m, name)
                    })
                    .collect();
                GroupData::from_group(&g, members)
            })
            .collect())
    }
}
