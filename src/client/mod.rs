//! Client-side view of the active organization: a cache in front of hostname
//! resolution, plus explicit switching for operator tooling.

pub mod provider;
pub mod storage;

pub use provider::{
    cache_or_derive, read_cached, write_cached, OrganizationProvider, ProviderError, ProviderState,
    Resolved, ResolutionSource, STORAGE_KEY,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
