use reqwest::StatusCode;
use rmcp::model::ErrorCode;
use serde_json::{Value, json};
use tokio::task::JoinError;

/// An error returned while talking to the Railway API
#[derive(Debug, thiserror::Error)]
pub enum RailwayError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("{message}")]
    GraphQL {
        /// The message of the first reported error
        message: String,
        /// Every error reported by the API, verbatim
        errors: Vec<Value>,
    },

    #[error("HTTP error {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Project {0} not found")]
    ProjectNotFound(String),

    #[error("Service {0} not found")]
    ServiceNotFound(String),

    #[error("Environment {environment_id} not found in project {project_id}")]
    EnvironmentNotFound {
        project_id: String,
        environment_id: String,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Client not initialized. Open a session before executing operations")]
    ClientNotInitialized,

    #[error("Failed to reach the Railway API: {source}")]
    Transport {
        timed_out: bool,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from the Railway API: {0}")]
    Decode(String),
}

impl RailwayError {
    /// A stable identifier for the kind of failure, exposed to MCP clients
    pub fn kind(&self) -> &'static str {
        match self {
            RailwayError::Authentication(_) => "authentication_error",
            RailwayError::GraphQL { .. } => "graphql_error",
            RailwayError::Api { .. } => "api_error",
            RailwayError::ProjectNotFound(_) => "project_not_found",
            RailwayError::ServiceNotFound(_) => "service_not_found",
            RailwayError::EnvironmentNotFound { .. } => "environment_not_found",
            RailwayError::Configuration(_) => "configuration_error",
            RailwayError::ClientNotInitialized => "client_not_initialized",
            RailwayError::Transport { timed_out: true, .. } => "timeout",
            RailwayError::Transport { .. } => "transport_error",
            RailwayError::Decode(_) => "decode_error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RailwayError::ProjectNotFound(_)
                | RailwayError::ServiceNotFound(_)
                | RailwayError::EnvironmentNotFound { .. }
        )
    }
}

impl From<reqwest::Error> for RailwayError {
    fn from(source: reqwest::Error) -> Self {
        RailwayError::Transport {
            timed_out: source.is_timeout(),
            source,
        }
    }
}

impl From<RailwayError> for McpError {
    fn from(error: RailwayError) -> Self {
        let code = match &error {
            RailwayError::Authentication(_) => ErrorCode::INVALID_REQUEST,
            error if error.is_not_found() => ErrorCode::RESOURCE_NOT_FOUND,
            _ => ErrorCode::INTERNAL_ERROR,
        };
        let data = match &error {
            RailwayError::GraphQL { errors, .. } => json!({
                "kind": error.kind(),
                "errors": errors,
            }),
            RailwayError::Api { status, body } => json!({
                "kind": error.kind(),
                "status": status.as_u16(),
                "body": body,
            }),
            _ => json!({ "kind": error.kind() }),
        };
        McpError::new(code, error.to_string(), Some(data))
    }
}

/// An error in server initialization
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Railway(#[from] RailwayError),

    #[error("Could not bind server: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize MCP server: {0}")]
    McpInitialize(String),

    #[error("Failed to start server")]
    StartupError(#[from] JoinError),
}

/// An MCP tool error
pub type McpError = rmcp::model::ErrorData;
