use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{AccountId, PostId};
use crate::domains::post::models::{Engagement, Post, PostStatus};

/// Read-only post projection handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostData {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author_id: AccountId,
    /// Resolved display name of the author at projection time.
    pub author_name: String,
    pub category: String,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub engagement: Engagement,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PostData {
    pub fn from_post(post: &Post, author_name: impl Into<String>) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            author_id: post.author_id,
            author_name: author_name.into(),
            category: post.category.clone(),
            status: post.status,
            published_at: post.published_at,
            engagement: post.engagement,
            tags: post.tags.iter().cloned().collect(),
            created_at: post.created_at,
        }
    }

    /// Status chip classes (exhaustive over `PostStatus`).
    pub fn status_badge_classes(&self) -> &'static str {
        self.status.badge_classes()
    }
}
