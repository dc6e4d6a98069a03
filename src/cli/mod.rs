pub mod commands;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::client::FileStore;
use crate::config::AppConfig;
use crate::services::OrganizationService;

#[derive(Parser)]
#[command(name = "phub")]
#[command(about = "PropertyHub CLI - resolve and switch organizations")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "Directory holding the cached organization")]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show which organization a hostname resolves to")]
    Resolve {
        #[arg(help = "Hostname, optionally with port")]
        host: String,
        #[arg(long, help = "Explicit organization for development hosts")]
        org: Option<String>,
    },

    #[command(about = "List, inspect and switch the active organization")]
    Org {
        #[command(subcommand)]
        cmd: commands::org::OrgCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// What every command works against: the directory and the local cache
pub struct CliContext {
    pub organizations: Arc<OrganizationService>,
    pub store: FileStore,
}

impl CliContext {
    pub fn from_config(config: &AppConfig, storage_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let organizations = OrganizationService::from_config(
            config.tenancy.directory_path.as_deref(),
            &config.tenancy.platform_domains,
        )?;
        let store = FileStore::new(storage_dir.unwrap_or_else(|| config.client.storage_dir.clone()));

        Ok(Self {
            organizations: Arc::new(organizations),
            store,
        })
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let ctx = CliContext::from_config(crate::config::config(), cli.storage_dir)?;

    match cli.command {
        Commands::Resolve { host, org } => {
            commands::resolve::handle(&ctx, &host, org.as_deref(), output_format)
        }
        Commands::Org { cmd } => commands::org::handle(&ctx, cmd, output_format),
    }
}
