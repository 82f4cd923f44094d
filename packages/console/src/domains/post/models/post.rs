use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::common::{AccountId, DirectoryError, PostId};

/// Publication lifecycle of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    /// Badge classes for the status chip rendered by the console.
    pub fn badge_classes(&self) -> &'static str {
        match self {
            PostStatus::Draft => "bg-yellow-100 text-yellow-800",
            PostStatus::Published => "bg-green-100 text-green-800",
            PostStatus::Archived => "bg-gray-100 text-gray-800",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            "archived" => Some(PostStatus::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reader engagement counters. Monotonically non-decreasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// An additive engagement update.
///
/// Deltas commute, so concurrent increments from many readers can be applied
/// in any order without losing updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementDelta {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

impl EngagementDelta {
    pub fn view() -> Self {
        Self {
            views: 1,
            ..Default::default()
        }
    }

    pub fn like() -> Self {
        Self {
            likes: 1,
            ..Default::default()
        }
    }
}

impl Engagement {
    pub fn add(&mut self, delta: EngagementDelta) {
        self.views = self.views.saturating_add(delta.views);
        self.likes = self.likes.saturating_add(delta.likes);
        self.comments = self.comments.saturating_add(delta.comments);
        self.shares = self.shares.saturating_add(delta.shares);
    }

    /// True when no counter of `other` is behind this one.
    pub fn monotone_to(&self, other: &Engagement) -> bool {
        self.views <= other.views
            && self.likes <= other.likes
            && self.comments <= other.comments
            && self.shares <= other.shares
    }
}

/// Community content under admin review.
///
/// `published_at` is set on first publish and survives unpublish/archive and
/// restore, so "has ever been published" stays answerable. Tombstoned posts
/// keep their id for audit (`deleted_at`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author_id: AccountId,
    pub category: String,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub engagement: Engagement,
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author_id: AccountId,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: PostId::new(),
            title: title.into(),
            body: body.into(),
            author_id,
            category: category.into(),
            status: PostStatus::Draft,
            published_at: None,
            engagement: Engagement::default(),
            tags: BTreeSet::new(),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Field-level invariants, checked on every commit to the store.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.title.trim().is_empty() {
            return Err(DirectoryError::Validation(
                "post title must not be empty".to_string(),
            ));
        }
        // published/archived both imply the post has been published at least once
        if self.published_at.is_none() && self.status != PostStatus::Draft {
            return Err(DirectoryError::Validation(format!(
                "post {} is {} but has never been published",
                self.id, self.status
            )));
        }
        Ok(())
    }
}
