pub mod group;

pub use group::{GroupData, MembershipData};
