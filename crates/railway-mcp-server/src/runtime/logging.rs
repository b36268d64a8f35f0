//! Logging config
//!
//! Only used by the main binary; the subscriber itself is installed by
//! [super::setup_logging].

mod defaults;
mod log_rotation_kind;
mod parsers;

pub use log_rotation_kind::LogRotationKind;
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging related options
#[derive(Debug, Deserialize, JsonSchema)]
pub struct Logging {
    /// The log level to use for tracing
    #[serde(default = "defaults::log_level", deserialize_with = "parsers::level")]
    #[schemars(schema_with = "level")]
    pub level: Level,

    /// Directory to write rolling log files to, instead of stderr
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Log file rotation period to use when log file path provided
    /// [default: Hourly]
    #[serde(default)]
    pub rotation: LogRotationKind,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            path: None,
            rotation: LogRotationKind::default(),
        }
    }
}

impl Logging {
    /// Filter from RUST_LOG plus the configured level, quieting the MCP SDK at info
    pub fn env_filter(&self) -> Result<EnvFilter, anyhow::Error> {
        let env_filter = EnvFilter::from_default_env().add_directive(self.level.into());

        if self.level == Level::INFO {
            return Ok(env_filter.add_directive("rmcp=warn".parse()?));
        }
        Ok(env_filter)
    }
}

fn level(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    /// Log level
    #[derive(JsonSchema)]
    #[schemars(rename_all = "lowercase")]
    // Only used to generate the schema
    #[allow(dead_code)]
    enum Level {
        Trace,
        Debug,
        Info,
        Warn,
        Error,
    }

    Level::json_schema(generator)
}
