pub mod memory;
pub mod profile_store;

pub use memory::InMemoryProfileStore;
pub use profile_store::ProfileStore;
