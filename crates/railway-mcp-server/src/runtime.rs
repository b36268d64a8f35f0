//! Runtime utilites
//!
//! This module is only used by the binaries and covers configuration loading
//! and logging setup.

mod config;
mod endpoint;
mod logging;
mod overrides;
mod railway;

use std::path::{Path, PathBuf};

pub use config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use logging::LogRotationKind;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Separator to use when drilling down into nested options in the env figment
const ENV_NESTED_SEPARATOR: &str = "__";

/// Read configuration from environment variables only (when no config file is provided)
#[allow(clippy::result_large_err)]
pub fn read_config_from_env() -> Result<Config, figment::Error> {
    Figment::new()
        .join(railway_common_env())
        .join(Env::prefixed("RAILWAY_MCP_").split(ENV_NESTED_SEPARATOR))
        .extract()
}

/// Read in a config from a YAML file, filling in any missing values from the environment
#[allow(clippy::result_large_err)]
pub fn read_config(yaml_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
    Figment::new()
        .join(railway_common_env())
        .join(Env::prefixed("RAILWAY_MCP_").split(ENV_NESTED_SEPARATOR))
        .join(Yaml::file(yaml_path))
        .extract()
}

/// Sets up either file logging or stderr logging depending on provided configuration options
pub fn setup_logging(config: &Config) -> Result<Option<WorkerGuard>, anyhow::Error> {
    let env_filter = config.logging.env_filter()?;

    if let Some(path) = &config.logging.path {
        setup_file_logging(path, env_filter, config.logging.rotation.clone())
    } else {
        setup_stderr_logging(env_filter)
    }
}

/// Sets up rolling file appender logging but falls back to stderr logging on failure
fn setup_file_logging(
    log_path: &PathBuf,
    env_filter: EnvFilter,
    rotation: LogRotationKind,
) -> Result<Option<WorkerGuard>, anyhow::Error> {
    if let Err(err) = std::fs::create_dir_all(log_path) {
        eprintln!("Could not create log directory ({err}) - falling back to stderr");
        return setup_stderr_logging(env_filter);
    }

    let (non_blocking_writer, guard) = match RollingFileAppender::builder()
        .rotation(rotation.into())
        .filename_prefix("railway_mcp_server")
        .filename_suffix("log")
        .build(log_path)
    {
        Ok(appender) => tracing_appender::non_blocking(appender),
        Err(err) => {
            eprintln!("Log file setup failed ({err}) - falling back to stderr");
            return setup_stderr_logging(env_filter);
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(Some(guard))
}

/// Sets up stderr logging, leaving stdout to the stdio transport
fn setup_stderr_logging(env_filter: EnvFilter) -> Result<Option<WorkerGuard>, anyhow::Error> {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false),
        )
        .init();

    Ok(None)
}

/// Figment provider that maps the usual Railway environment variables into
/// the nested structure needed by the config
fn railway_common_env() -> Env {
    Env::prefixed("RAILWAY_")
        .only(&["token", "api_url"])
        .map(|key| match key.to_string().to_lowercase().as_str() {
            "token" => "RAILWAY:TOKEN".into(),
            "api_url" => "RAILWAY:API_URL".into(),

            // Filtered out by `only` above
            other => other.to_string().into(),
        })
        .split(":")
}
