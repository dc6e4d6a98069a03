use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_current_organization, output_success, routing_label};
use crate::cli::{CliContext, OutputFormat};
use crate::client::{read_cached, FileStore, OrganizationProvider, ResolutionSource};

const DEFAULT_HOST: &str = "localhost";

#[derive(Subcommand)]
pub enum OrgCommands {
    #[command(about = "List all organizations in the directory")]
    List,

    #[command(about = "Show the active organization, resolving it if nothing is cached")]
    Current {
        #[arg(long, default_value = DEFAULT_HOST, help = "Hostname to derive from when the cache is empty")]
        host: String,
        #[arg(long, help = "Explicit organization for development hosts")]
        org: Option<String>,
    },

    #[command(about = "Switch the active organization")]
    Use {
        #[arg(help = "Organization slug")]
        slug: String,
    },

    #[command(about = "Forget the cached organization")]
    Clear,
}

pub fn handle(ctx: &CliContext, cmd: OrgCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        OrgCommands::List => {
            let current = read_cached(&ctx.store).map(|org| org.id);
            let organizations = ctx.organizations.list();

            match output_format {
                OutputFormat::Json => {
                    let items: Vec<_> = organizations.iter().map(|org| {
                        json!({
                            "id": org.id,
                            "name": org.name,
                            "slug": org.slug,
                            "routing": routing_label(org),
                            "plan": org.plan,
                            "status": org.status,
                            "current": current.as_deref() == Some(org.id.as_str())
                        })
                    }).collect();
                    println!("{}", serde_json::to_string_pretty(&json!({"organizations": items}))?);
                }
                OutputFormat::Text => {
                    println!("{:<15} {:<25} {:<40} {:<14} {}", "SLUG", "NAME", "ROUTING", "PLAN", "STATUS");
                    println!("{}", "-".repeat(105));

                    for org in organizations {
                        let marker = if current.as_deref() == Some(org.id.as_str()) { "*" } else { " " };
                        println!("{}{:<14} {:<25} {:<40} {:<14} {:?}",
                            marker, org.slug, org.name, routing_label(org), format!("{:?}", org.plan), org.status);
                    }
                }
            }

            Ok(())
        }
        OrgCommands::Current { host, org } => {
            let mut provider = provider(ctx);
            let resolved = provider.load(&host, org.as_deref());
            output_current_organization(&output_format, &resolved.organization, source_label(resolved.source))
        }
        OrgCommands::Use { slug } => {
            let target = ctx
                .organizations
                .find_by_slug(&slug)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Organization '{}' not found", slug))?;

            let mut provider = provider(ctx);
            provider.load(DEFAULT_HOST, None);
            provider.switch_organization(target)?;

            output_success(
                &output_format,
                &format!("Switched to organization '{}'", slug),
                Some(json!({ "current_organization": slug })),
            )
        }
        OrgCommands::Clear => {
            let mut provider = provider(ctx);
            provider.clear()?;
            output_success(&output_format, "Cleared cached organization", None)
        }
    }
}

fn provider(ctx: &CliContext) -> OrganizationProvider<&FileStore> {
    OrganizationProvider::new(&ctx.store, ctx.organizations.clone())
}

fn source_label(source: ResolutionSource) -> &'static str {
    match source {
        ResolutionSource::Cached => "cached",
        ResolutionSource::Derived => "derived",
        ResolutionSource::Switched => "switched",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::{KeyValueStore, STORAGE_KEY};
    use crate::services::OrganizationService;

    fn context() -> CliContext {
        let dir = std::env::temp_dir().join(format!("propertyhub_cli_{}", uuid::Uuid::new_v4().simple()));
        CliContext {
            organizations: Arc::new(OrganizationService::seeded()),
            store: FileStore::new(dir),
        }
    }

    fn cached_slug(ctx: &CliContext) -> Option<String> {
        read_cached(&ctx.store).map(|org| org.slug)
    }

    #[test]
    fn test_use_on_empty_cache_persists_target() {
        let ctx = context();
        handle(&ctx, OrgCommands::Use { slug: "acme".to_string() }, OutputFormat::Json).unwrap();
        assert_eq!(cached_slug(&ctx).as_deref(), Some("acme"));

        handle(&ctx, OrgCommands::Use { slug: "harborview".to_string() }, OutputFormat::Text).unwrap();
        assert_eq!(cached_slug(&ctx).as_deref(), Some("harborview"));
    }

    #[test]
    fn test_use_unknown_slug_leaves_cache_alone() {
        let ctx = context();
        let err = handle(&ctx, OrgCommands::Use { slug: "nobody".to_string() }, OutputFormat::Text)
            .unwrap_err();
        assert!(err.to_string().contains("nobody"));
        assert!(ctx.store.get(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_current_derives_then_reads_cache() {
        let ctx = context();
        let current = |host: &str| OrgCommands::Current {
            host: host.to_string(),
            org: None,
        };

        handle(&ctx, current("acme.propertyhub.app"), OutputFormat::Json).unwrap();
        assert_eq!(cached_slug(&ctx).as_deref(), Some("acme"));

        // the cached organization wins over a different host
        handle(&ctx, current("harborview.propertyhub.app"), OutputFormat::Text).unwrap();
        assert_eq!(cached_slug(&ctx).as_deref(), Some("acme"));
    }

    #[test]
    fn test_clear_and_list() {
        let ctx = context();
        handle(&ctx, OrgCommands::Use { slug: "skyline".to_string() }, OutputFormat::Text).unwrap();
        handle(&ctx, OrgCommands::List, OutputFormat::Json).unwrap();
        handle(&ctx, OrgCommands::List, OutputFormat::Text).unwrap();

        handle(&ctx, OrgCommands::Clear, OutputFormat::Text).unwrap();
        assert!(ctx.store.get(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(source_label(ResolutionSource::Cached), "cached");
        assert_eq!(source_label(ResolutionSource::Derived), "derived");
        assert_eq!(source_label(ResolutionSource::Switched), "switched");
    }
}
