pub mod directory;
pub mod seed;

pub use directory::{DirectoryError, OrganizationDirectory};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tenant of the platform.
///
/// Field names are camelCase on the wire so the cached JSON matches what the
/// browser side stores under the organization cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub domain_type: DomainType,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub plan: Plan,
    pub status: OrganizationStatus,
    pub created_at: DateTime<Utc>,
    pub settings: OrganizationSettings,
}

/// Which of `slug` / `domain` routes requests to the organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Subdomain,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Starter,
    Professional,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationStatus {
    Active,
    Suspended,
    Trial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSettings {
    pub branding: Branding,
    pub features: FeatureToggles,
    pub notifications: NotificationChannels,
    pub integrations: Integrations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggles {
    pub maintenance: bool,
    pub amenities: bool,
    pub visitors: bool,
    pub parcels: bool,
    pub payments: bool,
    pub documents: bool,
    pub community: bool,
    pub reports: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationChannels {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Integrations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_provider: Option<String>,
}

impl Organization {
    /// The key requests are routed by: the custom domain for `Custom`
    /// organizations, the slug otherwise.
    pub fn routing_key(&self) -> &str {
        match self.domain_type {
            DomainType::Custom => self.domain.as_deref().unwrap_or(&self.slug),
            DomainType::Subdomain => &self.slug,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.status, OrganizationStatus::Suspended)
    }

    /// Names of the enabled feature toggles, in declaration order.
    pub fn enabled_features(&self) -> Vec<&'static str> {
        let f = &self.settings.features;
        [
            ("maintenance", f.maintenance),
            ("amenities", f.amenities),
            ("visitors", f.visitors),
            ("parcels", f.parcels),
            ("payments", f.payments),
            ("documents", f.documents),
            ("community", f.community),
            ("reports", f.reports),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}
