pub mod data;
pub mod machines;
pub mod models;

pub use data::AccountData;
pub use machines::{AccountAction, BAN_THRESHOLD};
pub use models::{Account, AccountStatus, AccountType};
