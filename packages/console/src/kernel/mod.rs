// Kernel - infrastructure shared by all engines

pub mod deps;
pub mod memory;
pub mod traits;

pub use deps::ConsoleDeps;
pub use memory::InMemoryStorage;
pub use traits::BaseStorage;
