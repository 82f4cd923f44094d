pub mod data;
pub mod machines;
pub mod models;

pub use data::PostData;
pub use machines::PostAction;
pub use models::{Engagement, EngagementDelta, Post, PostStatus};
