pub mod engine;

pub use engine::ModerationEngine;
