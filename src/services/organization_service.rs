use std::path::Path;

use crate::organization::{DirectoryError, Organization, OrganizationDirectory};
use crate::tenancy::{HostClassifier, HostIdentifier};

/// Resolves routing identifiers to organizations.
///
/// Resolution never fails: an unknown slug, an unregistered custom domain or
/// a missing identifier all resolve to the directory default.
#[derive(Debug, Clone)]
pub struct OrganizationService {
    directory: OrganizationDirectory,
    classifier: HostClassifier,
}

impl OrganizationService {
    pub fn new(directory: OrganizationDirectory, classifier: HostClassifier) -> Self {
        Self {
            directory,
            classifier,
        }
    }

    /// Service over the built-in directory with label-count classification
    pub fn seeded() -> Self {
        Self::new(OrganizationDirectory::seed(), HostClassifier::default())
    }

    /// Build from a directory file, or the built-in directory when no path is given
    pub fn from_config(
        directory_path: Option<&Path>,
        platform_domains: &[String],
    ) -> Result<Self, DirectoryError> {
        let directory = match directory_path {
            Some(path) => {
                let directory = OrganizationDirectory::load(path)?;
                tracing::info!(
                    "Loaded {} organizations from {}",
                    directory.len(),
                    path.display()
                );
                directory
            }
            None => OrganizationDirectory::seed(),
        };

        Ok(Self::new(directory, HostClassifier::new(platform_domains)))
    }

    pub fn classifier(&self) -> &HostClassifier {
        &self.classifier
    }

    pub fn directory(&self) -> &OrganizationDirectory {
        &self.directory
    }

    /// Exact match only: custom domains against `Custom` records, slugs
    /// against `Subdomain` records.
    pub fn lookup(&self, identifier: &HostIdentifier) -> Option<&Organization> {
        match identifier {
            HostIdentifier::CustomDomain(host) => self.directory.find_custom_domain(host),
            HostIdentifier::Slug(slug) => self.directory.find_subdomain(slug),
            HostIdentifier::None => None,
        }
    }

    pub fn resolve(&self, identifier: &HostIdentifier) -> &Organization {
        match self.lookup(identifier) {
            Some(org) => org,
            None => {
                let fallback = self.directory.default_organization();
                tracing::debug!(
                    "No organization for identifier '{}', using default '{}'",
                    identifier,
                    fallback.slug
                );
                fallback
            }
        }
    }

    /// Classify a host and resolve the result
    pub fn resolve_host(&self, host: &str, dev_override: Option<&str>) -> &Organization {
        let identifier = self.classifier.classify(host, dev_override);
        self.resolve(&identifier)
    }

    /// Any organization by slug, regardless of how it is routed
    pub fn find_by_slug(&self, slug: &str) -> Option<&Organization> {
        self.directory.find_by_slug(slug)
    }

    pub fn default_organization(&self) -> &Organization {
        self.directory.default_organization()
    }

    pub fn list(&self) -> &[Organization] {
        self.directory.organizations()
    }
}
