pub mod memory_store;
pub mod seed;

pub use memory_store::MemoryStore;
