//! Post status machine - pure transition logic

use crate::common::{DirectoryError, EntityKind};
use crate::domains::post::models::PostStatus;

/// Moderation actions an admin can take on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Publish,
    Unpublish,
    Archive,
    Restore,
}

impl PostAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostAction::Publish => "publish",
            PostAction::Unpublish => "unpublish",
            PostAction::Archive => "archive",
            PostAction::Restore => "restore",
        }
    }
}

/// Apply a moderation action to a post's current status.
///
/// Transition table:
/// - draft --publish--> published
/// - published --unpublish--> draft
/// - published --archive--> archived
/// - archived --restore--> draft (the only way out of archived)
pub fn apply(status: PostStatus, action: PostAction) -> Result<PostStatus, DirectoryError> {
    use PostStatus::*;

    match (status, action) {
        (Draft, PostAction::Publish) => Ok(Published),
        (Published, PostAction::Unpublish) => Ok(Draft),
        (Published, PostAction::Archive) => Ok(Archived),
        (Archived, PostAction::Restore) => Ok(Draft),
        (from, action) => Err(DirectoryError::InvalidTransition {
            kind: EntityKind::Post,
            from: from.to_string(),
            action: action.as_str().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle() {
        let published = apply(PostStatus::Draft, PostAction::Publish).unwrap();
        assert_eq!(published, PostStatus::Published);

        let archived = apply(published, PostAction::Archive).unwrap();
        assert_eq!(archived, PostStatus::Archived);

        let restored = apply(archived, PostAction::Restore).unwrap();
        assert_eq!(restored, PostStatus::Draft);
    }

    #[test]
    fn test_unpublish_returns_to_draft() {
        assert_eq!(
            apply(PostStatus::Published, PostAction::Unpublish).unwrap(),
            PostStatus::Draft
        );
    }

    #[test]
    fn test_archive_only_from_published() {
        assert!(apply(PostStatus::Draft, PostAction::Archive).is_err());
        assert!(apply(PostStatus::Archived, PostAction::Archive).is_err());
    }

    #[test]
    fn test_no_exit_from_archived_except_restore() {
        assert!(apply(PostStatus::Archived, PostAction::Publish).is_err());
        assert!(apply(PostStatus::Archived, PostAction::Unpublish).is_err());
        assert!(apply(PostStatus::Archived, PostAction::Restore).is_ok());
    }
}
