//! Page contexts for the role dashboards.
//!
//! Every builder takes the resolved organization explicitly; nothing here
//! looks tenant identity up on its own.

use std::fmt;
use std::str::FromStr;

use axum::extract::Path;
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, ResolvedOrganization};
use crate::organization::{Branding, DomainType, Organization, OrganizationStatus, Plan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    PropertyAdmin,
    Tenant,
    ServiceProvider,
    Concierge,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::PropertyAdmin,
        Role::Tenant,
        Role::ServiceProvider,
        Role::Concierge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::PropertyAdmin => "property-admin",
            Role::Tenant => "tenant",
            Role::ServiceProvider => "service-provider",
            Role::Concierge => "concierge",
        }
    }

    /// Navigation sections in display order, before feature filtering
    fn sections(&self) -> &'static [&'static str] {
        match self {
            Role::SuperAdmin => &["overview", "organizations", "billing", "reports", "settings"],
            Role::PropertyAdmin => &[
                "overview", "properties", "units", "residents", "maintenance", "amenities",
                "visitors", "parcels", "payments", "documents", "community", "reports", "settings",
            ],
            Role::Tenant => &[
                "overview", "maintenance", "amenities", "visitors", "parcels", "payments",
                "documents", "community",
            ],
            Role::ServiceProvider => &["overview", "maintenance", "schedule", "invoices"],
            Role::Concierge => &["overview", "visitors", "parcels", "amenities"],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown role '{}'", s))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub domain: Option<String>,
    pub domain_type: DomainType,
    pub plan: Plan,
    pub status: OrganizationStatus,
}

impl From<&Organization> for OrganizationSummary {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            slug: org.slug.clone(),
            domain: org.domain.clone(),
            domain_type: org.domain_type,
            plan: org.plan,
            status: org.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageContext {
    pub organization: OrganizationSummary,
    pub identifier: String,
    pub hostname: String,
    pub branding: Branding,
    pub features: Vec<&'static str>,
    pub suspended: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardContext {
    pub role: Role,
    #[serde(flatten)]
    pub page: PageContext,
    pub navigation: Vec<&'static str>,
}

pub fn page_context(resolved: &ResolvedOrganization) -> PageContext {
    let org = &resolved.organization;
    PageContext {
        organization: OrganizationSummary::from(org),
        identifier: resolved.identifier.to_header_value(),
        hostname: resolved.hostname.clone(),
        branding: org.settings.branding.clone(),
        features: org.enabled_features(),
        suspended: !org.is_active(),
    }
}

/// Sections for a role, minus those whose feature toggle is off
pub fn navigation(role: Role, org: &Organization) -> Vec<&'static str> {
    let enabled = org.enabled_features();
    let toggled = [
        "maintenance", "amenities", "visitors", "parcels", "payments", "documents", "community",
        "reports",
    ];

    role.sections()
        .iter()
        .copied()
        .filter(|section| !toggled.contains(section) || enabled.contains(section))
        .collect()
}

pub async fn home(resolved: ResolvedOrganization) -> ApiResponse<PageContext> {
    ApiResponse::success(page_context(&resolved))
}

pub async fn dashboard(
    Path(role): Path<String>,
    resolved: ResolvedOrganization,
) -> ApiResult<DashboardContext> {
    let role: Role = role.parse().map_err(ApiError::not_found)?;

    Ok(ApiResponse::success(DashboardContext {
        role,
        navigation: navigation(role, &resolved.organization),
        page: page_context(&resolved),
    }))
}
