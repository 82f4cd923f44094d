pub mod data;
pub mod models;

pub use data::{GroupData, MembershipData};
pub use models::{Group, GroupStatus, MemberRole, Membership};
