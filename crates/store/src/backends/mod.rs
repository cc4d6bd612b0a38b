//! Configuration backend implementations.

pub mod filesystem;
pub mod memory;

pub use filesystem::JsonFileConfig;
pub use memory::MemoryConfig;
