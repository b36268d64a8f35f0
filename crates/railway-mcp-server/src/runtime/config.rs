use railway_mcp_server::server::Transport;
use schemars::JsonSchema;
use serde::Deserialize;

use super::{logging::Logging, overrides::Overrides, railway::RailwayConfig};

/// Configuration for the MCP server
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Railway API credentials and endpoint
    pub railway: RailwayConfig,

    /// Logging configuration
    pub logging: Logging,

    /// Overrides for server behaviour
    pub overrides: Overrides,

    /// The type of server transport to use
    pub transport: Transport,
}
