pub mod seed;
pub mod store;

pub use seed::seed_demo;
pub use store::{DirectoryStore, Entity, DEFAULT_CATEGORIES};
