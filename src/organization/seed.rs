//! Built-in organization directory used when no directory file is configured.
//!
//! Index 0 is the platform default and carries the development slug, so a
//! plain `localhost` request lands on it.

use chrono::{DateTime, NaiveDate, Utc};

use super::{
    Branding, DomainType, FeatureToggles, Integrations, NotificationChannels, Organization,
    OrganizationSettings, OrganizationStatus, Plan,
};

pub fn organizations() -> Vec<Organization> {
    vec![
        Organization {
            id: "org_001".to_string(),
            name: "Demo Properties".to_string(),
            slug: "demo".to_string(),
            domain: None,
            domain_type: DomainType::Subdomain,
            email: "admin@demo-properties.com".to_string(),
            phone: "+1 (555) 010-0001".to_string(),
            address: "100 Main Street, Springfield".to_string(),
            plan: Plan::Enterprise,
            status: OrganizationStatus::Active,
            created_at: date(2023, 1, 15),
            settings: OrganizationSettings {
                branding: Branding {
                    primary_color: "#2563eb".to_string(),
                    secondary_color: "#64748b".to_string(),
                    logo: Some("/logos/demo.svg".to_string()),
                    custom_css: None,
                },
                features: all_features(),
                notifications: NotificationChannels { email: true, sms: true, push: true },
                integrations: Integrations {
                    payment_gateway: Some("stripe".to_string()),
                    sms_provider: Some("twilio".to_string()),
                    email_provider: Some("sendgrid".to_string()),
                },
            },
        },
        Organization {
            id: "org_002".to_string(),
            name: "Acme Realty".to_string(),
            slug: "acme".to_string(),
            domain: None,
            domain_type: DomainType::Subdomain,
            email: "office@acmerealty.com".to_string(),
            phone: "+1 (555) 010-0002".to_string(),
            address: "42 Harbor Road, Portsmouth".to_string(),
            plan: Plan::Professional,
            status: OrganizationStatus::Active,
            created_at: date(2023, 4, 2),
            settings: OrganizationSettings {
                branding: Branding {
                    primary_color: "#dc2626".to_string(),
                    secondary_color: "#1f2937".to_string(),
                    logo: None,
                    custom_css: None,
                },
                features: FeatureToggles {
                    maintenance: true,
                    amenities: true,
                    visitors: true,
                    parcels: true,
                    payments: true,
                    documents: true,
                    community: false,
                    reports: true,
                },
                notifications: NotificationChannels { email: true, sms: false, push: true },
                integrations: Integrations {
                    payment_gateway: Some("stripe".to_string()),
                    sms_provider: None,
                    email_provider: Some("postmark".to_string()),
                },
            },
        },
        Organization {
            id: "org_003".to_string(),
            name: "Skyline Towers".to_string(),
            slug: "skyline".to_string(),
            domain: Some("portal.skylinetowers.com".to_string()),
            domain_type: DomainType::Custom,
            email: "management@skylinetowers.com".to_string(),
            phone: "+1 (555) 010-0003".to_string(),
            address: "1 Skyline Plaza, Metropolis".to_string(),
            plan: Plan::Enterprise,
            status: OrganizationStatus::Active,
            created_at: date(2023, 6, 20),
            settings: OrganizationSettings {
                branding: Branding {
                    primary_color: "#0f766e".to_string(),
                    secondary_color: "#f59e0b".to_string(),
                    logo: Some("https://portal.skylinetowers.com/logo.png".to_string()),
                    custom_css: Some(".sidebar { background: #0f766e; }".to_string()),
                },
                features: all_features(),
                notifications: NotificationChannels { email: true, sms: true, push: false },
                integrations: Integrations {
                    payment_gateway: Some("adyen".to_string()),
                    sms_provider: Some("twilio".to_string()),
                    email_provider: Some("ses".to_string()),
                },
            },
        },
        Organization {
            id: "org_004".to_string(),
            name: "Harbor View Residences".to_string(),
            slug: "harborview".to_string(),
            domain: None,
            domain_type: DomainType::Subdomain,
            email: "hello@harborview.com".to_string(),
            phone: "+1 (555) 010-0004".to_string(),
            address: "8 Pier Lane, Bayside".to_string(),
            plan: Plan::Starter,
            status: OrganizationStatus::Trial,
            created_at: date(2024, 2, 11),
            settings: OrganizationSettings {
                branding: Branding {
                    primary_color: "#0369a1".to_string(),
                    secondary_color: "#e2e8f0".to_string(),
                    logo: None,
                    custom_css: None,
                },
                features: FeatureToggles {
                    maintenance: true,
                    visitors: true,
                    parcels: true,
                    ..FeatureToggles::default()
                },
                notifications: NotificationChannels { email: true, sms: false, push: false },
                integrations: Integrations::default(),
            },
        },
        Organization {
            id: "org_005".to_string(),
            name: "Maple Court".to_string(),
            slug: "maplecourt".to_string(),
            domain: None,
            domain_type: DomainType::Subdomain,
            email: "board@maplecourt.org".to_string(),
            phone: "+1 (555) 010-0005".to_string(),
            address: "55 Maple Court, Riverside".to_string(),
            plan: Plan::Free,
            status: OrganizationStatus::Suspended,
            created_at: date(2024, 5, 30),
            settings: OrganizationSettings {
                branding: Branding {
                    primary_color: "#15803d".to_string(),
                    secondary_color: "#fef3c7".to_string(),
                    logo: None,
                    custom_css: None,
                },
                features: FeatureToggles {
                    maintenance: true,
                    ..FeatureToggles::default()
                },
                notifications: NotificationChannels { email: true, sms: false, push: false },
                integrations: Integrations::default(),
            },
        },
    ]
}

fn all_features() -> FeatureToggles {
    FeatureToggles {
        maintenance: true,
        amenities: true,
        visitors: true,
        parcels: true,
        payments: true,
        documents: true,
        community: true,
        reports: true,
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
