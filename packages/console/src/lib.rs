// Volunteer Community Admin Console - Directory Core
//
// This crate provides the moderation and directory data model behind the
// admin console: accounts, posts, and groups, with moderation, roster, and
// search engines on top. The presentation layer consumes read-only
// projections from the engines and never mutates the directory directly.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
