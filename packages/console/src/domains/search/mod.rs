pub mod engine;
pub mod filters;

pub use engine::{QueryEngine, SearchResults};
pub use filters::SearchFilters;
