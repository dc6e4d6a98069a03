use std::path::PathBuf;
use std::sync::Arc;

use propertyhub::client::{
    read_cached, FileStore, KeyValueStore, OrganizationProvider, ProviderState, ResolutionSource,
    STORAGE_KEY,
};
use propertyhub::services::OrganizationService;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("propertyhub_client_{}", uuid::Uuid::new_v4().simple()))
}

fn service() -> Arc<OrganizationService> {
    Arc::new(OrganizationService::seeded())
}

#[test]
fn cached_organization_survives_reload() {
    let dir = temp_dir();

    let derived = {
        let mut provider = OrganizationProvider::new(FileStore::new(&dir), service());
        provider.load("portal.skylinetowers.com", None).organization.clone()
    };

    // a fresh store over the same directory plays the next page load
    let mut provider = OrganizationProvider::new(FileStore::new(&dir), service());
    let reloaded = provider.load("localhost", None);

    assert_eq!(reloaded.source, ResolutionSource::Cached);
    assert_eq!(reloaded.organization, derived);
}

#[test]
fn switch_is_visible_without_reload() {
    let dir = temp_dir();
    let svc = service();
    let store = FileStore::new(&dir);

    let mut provider = OrganizationProvider::new(&store, svc.clone());
    provider.load("localhost", None);
    assert_eq!(provider.current().map(|o| o.slug.as_str()), Some("demo"));

    let acme = svc.find_by_slug("acme").cloned().expect("seeded");
    provider.switch_organization(acme.clone()).expect("switch");

    assert_eq!(provider.state(), ProviderState::Resolved);
    assert_eq!(provider.current(), Some(&acme));
    assert_eq!(read_cached(&FileStore::new(&dir)), Some(acme));
}

#[test]
fn corrupt_cache_file_is_rederived() {
    let dir = temp_dir();
    let store = FileStore::new(&dir);
    store.set(STORAGE_KEY, "not json at all").expect("write");

    let mut provider = OrganizationProvider::new(&store, service());
    let resolved = provider.load("harborview.propertyhub.app", None);

    assert_eq!(resolved.source, ResolutionSource::Derived);
    assert_eq!(resolved.organization.slug, "harborview");
    assert_eq!(read_cached(&store).map(|o| o.slug), Some("harborview".to_string()));
}

#[test]
fn clear_removes_cache_file() {
    let dir = temp_dir();
    let store = FileStore::new(&dir);

    let mut provider = OrganizationProvider::new(&store, service());
    provider.load("acme.propertyhub.app", None);
    assert!(store.get(STORAGE_KEY).is_some());

    provider.clear().expect("clear");
    assert!(provider.is_loading());
    assert!(store.get(STORAGE_KEY).is_none());

    // clearing twice is not an error
    provider.clear().expect("clear again");
}
