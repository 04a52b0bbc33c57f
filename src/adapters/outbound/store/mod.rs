/// Graph store adapters
mod file_store;
mod memory_store;

pub use file_store::FileGraphStore;
pub use memory_store::InMemoryGraphStore;
