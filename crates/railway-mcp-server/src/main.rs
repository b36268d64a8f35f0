use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use railway_mcp_server::server::Server;
use runtime::read_config;
use tracing::info;

mod runtime;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Arguments to the MCP server
#[derive(Debug, clap::Parser)]
#[command(
    version,
    styles = STYLES,
    about = "Railway MCP Server - deploy and manage Railway projects from an AI agent",
)]
struct Args {
    /// Path to the config file
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config: runtime::Config = match Args::parse().config {
        Some(config_path) => read_config(config_path)?,
        None => runtime::read_config_from_env()?,
    };

    let _guard = runtime::setup_logging(&config)?;

    info!("Railway MCP Server v{}", std::env!("CARGO_PKG_VERSION"));

    let client_config = config
        .railway
        .into_client_config()
        .context("Could not configure the Railway API client")?;

    Ok(Server::builder()
        .transport(config.transport)
        .client_config(client_config)
        .read_only(config.overrides.read_only)
        .build()
        .start()
        .await?)
}
