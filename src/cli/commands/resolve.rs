use serde_json::json;

use crate::cli::utils::routing_label;
use crate::cli::{CliContext, OutputFormat};

pub fn handle(
    ctx: &CliContext,
    host: &str,
    org: Option<&str>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let svc = &ctx.organizations;
    let identifier = svc.classifier().classify(host, org);
    let matched = svc.lookup(&identifier);
    let organization = svc.resolve(&identifier);

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({
                "host": host,
                "identifier": identifier.to_header_value(),
                "is_default": matched.is_none(),
                "organization": organization
            }))?);
        }
        OutputFormat::Text => {
            let identifier = match identifier.to_header_value() {
                value if value.is_empty() => "(none)".to_string(),
                value => value,
            };
            println!("Host:         {}", host);
            println!("Identifier:   {}", identifier);
            println!("Organization: {} ({})", organization.name, routing_label(organization));
            if matched.is_none() {
                println!("Note: no organization matched; serving the default");
            }
        }
    }

    Ok(())
}
