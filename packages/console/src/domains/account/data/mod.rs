pub mod account;

pub use account::AccountData;
