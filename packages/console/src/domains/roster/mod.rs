pub mod engine;

pub use engine::RosterEngine;
