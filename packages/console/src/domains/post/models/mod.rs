pub mod post;

pub use post::{Engagement, EngagementDelta, Post, PostStatus};
