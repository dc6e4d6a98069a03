use std::fmt;
use std::net::IpAddr;

/// First labels that never name a tenant
pub const RESERVED_SUBDOMAINS: [&str; 4] = ["www", "app", "api", "admin"];

/// Identifier handed out for loopback hosts when no override is given
pub const DEV_ORGANIZATION_SLUG: &str = "demo";

/// Prefix marking a custom-domain candidate in the header wire form
pub const CUSTOM_DOMAIN_PREFIX: &str = "custom:";

const DEV_HOSTS: [&str; 4] = ["localhost", "127.0.0.1", "::1", "0.0.0.0"];

/// Routing identifier derived from a request host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostIdentifier {
    /// Subdomain label of a subdomain-routed organization
    Slug(String),
    /// Full hostname that may be a registered custom domain
    CustomDomain(String),
    /// Nothing to route on; the default organization applies
    None,
}

impl HostIdentifier {
    /// Header form: `slug`, `custom:<host>`, or the empty string.
    pub fn to_header_value(&self) -> String {
        match self {
            HostIdentifier::Slug(slug) => slug.clone(),
            HostIdentifier::CustomDomain(host) => format!("{}{}", CUSTOM_DOMAIN_PREFIX, host),
            HostIdentifier::None => String::new(),
        }
    }

    /// Inverse of [`to_header_value`](Self::to_header_value). Blank input and
    /// a bare `custom:` both read as `None`.
    pub fn from_header_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return HostIdentifier::None;
        }

        match value.strip_prefix(CUSTOM_DOMAIN_PREFIX) {
            Some(host) => {
                let host = normalize_host(host);
                if host.is_empty() {
                    HostIdentifier::None
                } else {
                    HostIdentifier::CustomDomain(host)
                }
            }
            None => HostIdentifier::Slug(value.to_string()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, HostIdentifier::None)
    }
}

impl fmt::Display for HostIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_value())
    }
}

/// Lowercase, drop the port (bracketed IPv6 included) and any trailing dot.
pub fn normalize_host(raw: &str) -> String {
    let host = raw.trim().to_ascii_lowercase();

    let host = if let Some(rest) = host.strip_prefix('[') {
        rest.split(']').next().unwrap_or_default().to_string()
    } else if host.matches(':').count() == 1 {
        host.split(':').next().unwrap_or_default().to_string()
    } else {
        // bare IPv6 literal or no port at all
        host
    };

    host.trim_end_matches('.').to_string()
}

/// Loopback and local development hosts. Expects a normalized host.
pub fn is_development_host(host: &str) -> bool {
    DEV_HOSTS.contains(&host) || host.ends_with(".localhost")
}

pub fn is_reserved_subdomain(label: &str) -> bool {
    RESERVED_SUBDOMAINS.contains(&label)
}

/// Whether a label can be an organization slug (`[a-z0-9-]`, no edge hyphens)
fn is_slug_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Maps request hosts to routing identifiers.
///
/// With no platform domains configured the classifier works on label counts
/// alone: `acme.com` and `acme.example.com` both yield `acme`. With platform
/// domains configured, only hosts directly under one of them yield slugs and
/// every other multi-label host is a custom-domain candidate.
#[derive(Debug, Clone, Default)]
pub struct HostClassifier {
    platform_domains: Vec<String>,
}

impl HostClassifier {
    pub fn new<I, S>(platform_domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let platform_domains = platform_domains
            .into_iter()
            .map(|d| normalize_host(d.as_ref()).trim_start_matches('.').to_string())
            .filter(|d| !d.is_empty())
            .collect();

        Self { platform_domains }
    }

    pub fn platform_domains(&self) -> &[String] {
        &self.platform_domains
    }

    pub fn classify(&self, host: &str, dev_override: Option<&str>) -> HostIdentifier {
        let host = normalize_host(host);
        if host.is_empty() {
            return HostIdentifier::None;
        }

        if is_development_host(&host) {
            return match dev_override.map(str::trim).filter(|o| !o.is_empty()) {
                Some(explicit) => HostIdentifier::from_header_value(explicit),
                None => HostIdentifier::Slug(DEV_ORGANIZATION_SLUG.to_string()),
            };
        }

        if host.parse::<IpAddr>().is_ok() {
            return HostIdentifier::None;
        }

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
            return HostIdentifier::None;
        }

        if let Some(platform) = self.platform_domain_for(&host) {
            return classify_under_platform(&host, platform);
        }

        if !self.platform_domains.is_empty() {
            return HostIdentifier::CustomDomain(host);
        }

        let first = labels[0];
        if !is_slug_label(first) {
            return HostIdentifier::CustomDomain(host);
        }

        if labels.len() == 2 {
            return HostIdentifier::Slug(first.to_string());
        }

        if is_reserved_subdomain(first) {
            return HostIdentifier::None;
        }

        HostIdentifier::Slug(first.to_string())
    }

    /// Longest configured platform domain the host equals or sits under
    fn platform_domain_for(&self, host: &str) -> Option<&str> {
        self.platform_domains
            .iter()
            .filter(|p| {
                host == p.as_str()
                    || host
                        .strip_suffix(p.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            })
            .max_by_key(|p| p.len())
            .map(String::as_str)
    }
}

fn classify_under_platform(host: &str, platform: &str) -> HostIdentifier {
    let prefix = match host.strip_suffix(platform).and_then(|p| p.strip_suffix('.')) {
        Some(prefix) => prefix,
        // the platform apex itself
        None => return HostIdentifier::None,
    };

    if prefix.contains('.') {
        return HostIdentifier::CustomDomain(host.to_string());
    }

    if is_reserved_subdomain(prefix) || !is_slug_label(prefix) {
        return HostIdentifier::None;
    }

    HostIdentifier::Slug(prefix.to_string())
}
