pub mod group;

pub use group::{Group, GroupStatus, MemberRole, Membership};
