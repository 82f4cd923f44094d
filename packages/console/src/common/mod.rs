// Common types and utilities shared across the application

pub mod entity_ids;
pub mod errors;
pub mod id;
pub(crate) mod sync;
pub mod types;

pub use entity_ids::*;
pub use errors::DirectoryError;
pub use id::{Id, V4, V7};
pub use types::*;
