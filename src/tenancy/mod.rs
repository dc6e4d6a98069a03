//! Tenant identity derived from request hosts.

pub mod hostname;

pub use hostname::{
    is_development_host, normalize_host, HostClassifier, HostIdentifier, CUSTOM_DOMAIN_PREFIX,
    DEV_ORGANIZATION_SLUG, RESERVED_SUBDOMAINS,
};

/// Request/response header carrying the resolved identifier (wire form)
pub const ORGANIZATION_HEADER: &str = "x-organization-slug";

/// Request/response header carrying the raw host the identifier came from
pub const HOSTNAME_HEADER: &str = "x-hostname";

/// Query parameter that overrides the identifier on development hosts
pub const ORG_QUERY_PARAM: &str = "org";

/// Edge resolver output attached to each intercepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationHint {
    pub identifier: HostIdentifier,
    pub hostname: String,
}
