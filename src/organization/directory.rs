use std::collections::HashSet;
use std::path::Path;

use super::{seed, DomainType, Organization};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Organization directory is empty")]
    Empty,
    #[error("Duplicate organization slug: {0}")]
    DuplicateSlug(String),
    #[error("Duplicate organization domain: {0}")]
    DuplicateDomain(String),
    #[error("Organization '{0}' uses a custom domain but has no domain set")]
    MissingDomain(String),
    #[error("Failed to read directory file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON directory file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML directory file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Ordered, read-only list of known organizations. Index 0 is the default.
#[derive(Debug, Clone)]
pub struct OrganizationDirectory {
    organizations: Vec<Organization>,
}

impl OrganizationDirectory {
    pub fn new(organizations: Vec<Organization>) -> Result<Self, DirectoryError> {
        if organizations.is_empty() {
            return Err(DirectoryError::Empty);
        }

        let mut slugs = HashSet::new();
        let mut domains = HashSet::new();

        for org in &organizations {
            if !slugs.insert(org.slug.to_lowercase()) {
                return Err(DirectoryError::DuplicateSlug(org.slug.clone()));
            }

            match &org.domain {
                Some(domain) => {
                    if !domains.insert(domain.to_lowercase()) {
                        return Err(DirectoryError::DuplicateDomain(domain.clone()));
                    }
                }
                None if org.domain_type == DomainType::Custom => {
                    return Err(DirectoryError::MissingDomain(org.slug.clone()));
                }
                None => {}
            }
        }

        Ok(Self { organizations })
    }

    /// The built-in seed directory
    pub fn seed() -> Self {
        Self {
            organizations: seed::organizations(),
        }
    }

    /// Load a directory from a `.json`, `.yaml` or `.yml` file holding a list
    /// of organizations.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path)?;

        let organizations: Vec<Organization> = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Self::new(organizations)
    }

    pub fn default_organization(&self) -> &Organization {
        // Non-empty is checked in `new`
        &self.organizations[0]
    }

    /// Subdomain-routed organization with the given slug
    pub fn find_subdomain(&self, slug: &str) -> Option<&Organization> {
        self.organizations
            .iter()
            .find(|o| o.domain_type == DomainType::Subdomain && o.slug.eq_ignore_ascii_case(slug))
    }

    /// Custom-domain organization registered for the given hostname
    pub fn find_custom_domain(&self, hostname: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| {
            o.domain_type == DomainType::Custom
                && o.domain
                    .as_deref()
                    .is_some_and(|d| d.eq_ignore_ascii_case(hostname))
        })
    }

    /// Any organization with the given slug, regardless of routing type
    pub fn find_by_slug(&self, slug: &str) -> Option<&Organization> {
        self.organizations
            .iter()
            .find(|o| o.slug.eq_ignore_ascii_case(slug))
    }

    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}
