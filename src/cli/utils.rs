use serde_json::{json, Value};
use crate::cli::OutputFormat;
use crate::organization::{DomainType, Organization};

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(target), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output the active organization in the appropriate format
pub fn output_current_organization(
    output_format: &OutputFormat,
    org: &Organization,
    source: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({
                "current_organization": org,
                "source": source
            }))?);
        }
        OutputFormat::Text => {
            println!("Current organization: {} ({})", org.name, org.slug);
            println!("Routing: {}", routing_label(org));
            println!("Plan: {:?}  Status: {:?}", org.plan, org.status);
            println!("Source: {}", source);
        }
    }
    Ok(())
}

/// `subdomain:<slug>` or `custom:<domain>`
pub fn routing_label(org: &Organization) -> String {
    match org.domain_type {
        DomainType::Subdomain => format!("subdomain:{}", org.slug),
        DomainType::Custom => format!("custom:{}", org.routing_key()),
    }
}
