use std::sync::Arc;

use super::storage::{KeyValueStore, StorageError};
use crate::organization::Organization;
use crate::services::OrganizationService;

/// Key the active organization is cached under
pub const STORAGE_KEY: &str = "currentOrganization";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Read back from the store as-is
    Cached,
    /// Classified from the hostname and looked up, then stored
    Derived,
    /// Set explicitly through `switch_organization`
    Switched,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub organization: Organization,
    pub source: ResolutionSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    Loading,
    Resolved,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Organization has not been resolved yet")]
    NotResolved,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Cached organization, if the store holds one that parses. Unreadable
/// entries count as absent.
pub fn read_cached<S: KeyValueStore>(store: &S) -> Option<Organization> {
    let raw = store.get(STORAGE_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(org) => Some(org),
        Err(e) => {
            tracing::warn!("Ignoring unreadable cached organization: {}", e);
            None
        }
    }
}

pub fn write_cached<S: KeyValueStore>(store: &S, org: &Organization) -> Result<(), StorageError> {
    let raw = serde_json::to_string(org)?;
    store.set(STORAGE_KEY, &raw)
}

/// Cached organization when there is one, otherwise classify `host`, look
/// it up and cache the result. Never fails; a write failure only costs the
/// cache.
pub fn cache_or_derive<S: KeyValueStore>(
    store: &S,
    service: &OrganizationService,
    host: &str,
    dev_override: Option<&str>,
) -> Resolved {
    if let Some(organization) = read_cached(store) {
        tracing::debug!("Using cached organization '{}'", organization.slug);
        return Resolved {
            organization,
            source: ResolutionSource::Cached,
        };
    }

    let organization = service.resolve_host(host, dev_override).clone();
    tracing::debug!("Derived organization '{}' from host '{}'", organization.slug, host);

    if let Err(e) = write_cached(store, &organization) {
        tracing::warn!("Failed to cache organization '{}': {}", organization.slug, e);
    }

    Resolved {
        organization,
        source: ResolutionSource::Derived,
    }
}

/// Holds the active organization for one client session.
///
/// Starts in `Loading`; `load` moves it to `Resolved` and it stays there
/// until `clear`.
pub struct OrganizationProvider<S: KeyValueStore> {
    store: S,
    service: Arc<OrganizationService>,
    resolved: Option<Resolved>,
}

impl<S: KeyValueStore> OrganizationProvider<S> {
    pub fn new(store: S, service: Arc<OrganizationService>) -> Self {
        Self {
            store,
            service,
            resolved: None,
        }
    }

    pub fn state(&self) -> ProviderState {
        match self.resolved {
            Some(_) => ProviderState::Resolved,
            None => ProviderState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.resolved.is_none()
    }

    /// Resolve once; later calls return the current value untouched.
    pub fn load(&mut self, host: &str, dev_override: Option<&str>) -> &Resolved {
        let store = &self.store;
        let service = &self.service;
        self.resolved
            .get_or_insert_with(|| cache_or_derive(store, service, host, dev_override))
    }

    pub fn current(&self) -> Option<&Organization> {
        self.resolved.as_ref().map(|r| &r.organization)
    }

    pub fn source(&self) -> Option<ResolutionSource> {
        self.resolved.as_ref().map(|r| r.source)
    }

    /// Replace the active organization and its cached copy. Only valid once
    /// resolved; the state stays `Resolved`. Nothing changes if the cache
    /// write fails.
    pub fn switch_organization(&mut self, organization: Organization) -> Result<(), ProviderError> {
        let resolved = self.resolved.as_mut().ok_or(ProviderError::NotResolved)?;

        write_cached(&self.store, &organization)?;
        tracing::info!("Switched organization to '{}'", organization.slug);

        resolved.organization = organization;
        resolved.source = ResolutionSource::Switched;
        Ok(())
    }

    /// Drop the cached organization and return to `Loading`
    pub fn clear(&mut self) -> Result<(), ProviderError> {
        self.store.remove(STORAGE_KEY)?;
        self.resolved = None;
        Ok(())
    }
}
