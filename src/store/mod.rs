//! Persistence layer with a repository trait and the in-memory backend.

pub mod fixtures;
pub mod memory;
pub mod traits;

pub use memory::MemoryBackend;
pub use traits::Database;
