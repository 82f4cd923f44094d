// Domain layer - entities, state machines, and the engines over them

pub mod account;
pub mod directory;
pub mod group;
pub mod moderation;
pub mod post;
pub mod roster;
pub mod search;
