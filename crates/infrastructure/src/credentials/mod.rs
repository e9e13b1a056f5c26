//! Credential stores.

mod file_store;
mod memory_store;

pub use file_store::{CredentialStoreError, FileCredentialStore};
pub use memory_store::MemoryCredentialStore;
