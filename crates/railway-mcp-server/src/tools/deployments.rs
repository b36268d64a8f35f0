use super::{DeploymentInput, outcome};
use crate::client::RailwayClient;
use crate::errors::RailwayError;
use crate::graphql::Variables;
use crate::operations::{Operation, mutations, queries};
use crate::pagination::{Connection, nodes};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A deployment of a service
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub static_url: Option<String>,
    /// Free-form metadata, passed through untouched
    pub meta: Option<Value>,
}

/// Input for the list_deployments tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListDeploymentsInput {
    /// The Railway service ID
    pub service_id: String,
    /// The Railway environment ID
    pub environment_id: String,
    /// Maximum number of deployments to return
    #[serde(default = "defaults::deployments_limit")]
    pub limit: u32,
}

#[derive(Deserialize)]
struct ListDeploymentsData {
    deployments: Option<Connection<Deployment>>,
}

pub async fn list_deployments(
    client: &RailwayClient,
    input: ListDeploymentsInput,
) -> Result<Vec<Deployment>, RailwayError> {
    let variables = Variables::new()
        .with("serviceId", input.service_id)
        .with("environmentId", input.environment_id)
        .with("first", input.limit);

    let data: ListDeploymentsData = queries::LIST_DEPLOYMENTS.fetch(client, variables).await?;

    Ok(nodes(data.deployments))
}

#[derive(Deserialize)]
struct GetDeploymentData {
    deployment: Option<Deployment>,
}

pub async fn get_deployment(
    client: &RailwayClient,
    input: DeploymentInput,
) -> Result<Deployment, RailwayError> {
    let data: GetDeploymentData = queries::GET_DEPLOYMENT
        .fetch(client, Variables::new().with("deploymentId", input.deployment_id))
        .await?;

    Ok(data.deployment.unwrap_or_default())
}

/// The deployment created by a redeploy
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Redeployment {
    pub id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RedeployData {
    deployment_redeploy: Option<Redeployment>,
}

pub async fn redeploy(
    client: &RailwayClient,
    input: DeploymentInput,
) -> Result<Redeployment, RailwayError> {
    let data: RedeployData = mutations::REDEPLOY
        .fetch(client, Variables::new().with("deploymentId", input.deployment_id))
        .await?;

    Ok(data.deployment_redeploy.unwrap_or_default())
}

/// The outcome of cancelling or restarting a deployment
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentAction {
    pub success: bool,
    pub deployment_id: String,
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelDeploymentData {
    deployment_cancel: Option<bool>,
}

pub async fn cancel_deployment(
    client: &RailwayClient,
    input: DeploymentInput,
) -> Result<DeploymentAction, RailwayError> {
    let data: CancelDeploymentData = mutations::CANCEL_DEPLOYMENT
        .fetch(client, Variables::new().with("deploymentId", input.deployment_id.as_str()))
        .await?;
    let success = data.deployment_cancel.unwrap_or(false);

    Ok(DeploymentAction {
        success,
        deployment_id: input.deployment_id,
        message: outcome(
            success,
            "Deployment cancelled successfully",
            "Failed to cancel deployment",
        ),
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestartDeploymentData {
    deployment_restart: Option<bool>,
}

pub async fn restart_deployment(
    client: &RailwayClient,
    input: DeploymentInput,
) -> Result<DeploymentAction, RailwayError> {
    let data: RestartDeploymentData = mutations::RESTART_DEPLOYMENT
        .fetch(client, Variables::new().with("deploymentId", input.deployment_id.as_str()))
        .await?;
    let success = data.deployment_restart.unwrap_or(false);

    Ok(DeploymentAction {
        success,
        deployment_id: input.deployment_id,
        message: outcome(
            success,
            "Deployment restarted successfully",
            "Failed to restart deployment",
        ),
    })
}

/// A single log line
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LogEntry {
    pub message: Option<String>,
    pub timestamp: Option<String>,
    pub severity: Option<String>,
}

/// Input for the get_logs tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetLogsInput {
    /// The Railway deployment ID
    pub deployment_id: String,
    /// Type of logs to retrieve: "build" or "deployment"
    #[serde(default = "defaults::log_type")]
    pub log_type: String,
    /// Maximum number of log entries
    #[serde(default = "defaults::logs_limit")]
    pub limit: u32,
}

/// Which log stream of a deployment to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogStream {
    Build,
    Deployment,
}

impl LogStream {
    /// Anything other than `build` selects the deployment logs
    fn from_log_type(log_type: &str) -> Self {
        match log_type {
            "build" => LogStream::Build,
            _ => LogStream::Deployment,
        }
    }

    fn operation(self) -> &'static Operation {
        match self {
            LogStream::Build => &queries::GET_BUILD_LOGS,
            LogStream::Deployment => &queries::GET_DEPLOYMENT_LOGS,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogsData {
    build_logs: Option<Vec<LogEntry>>,
    deployment_logs: Option<Vec<LogEntry>>,
}

pub async fn get_logs(
    client: &RailwayClient,
    input: GetLogsInput,
) -> Result<Vec<LogEntry>, RailwayError> {
    let stream = LogStream::from_log_type(&input.log_type);
    let variables = Variables::new()
        .with("deploymentId", input.deployment_id)
        .with("limit", input.limit);

    let data: LogsData = stream.operation().fetch(client, variables).await?;

    let logs = match stream {
        LogStream::Build => data.build_logs,
        LogStream::Deployment => data.deployment_logs,
    };
    Ok(logs.unwrap_or_default())
}

mod defaults {
    pub(super) const fn deployments_limit() -> u32 {
        10
    }

    pub(super) const fn logs_limit() -> u32 {
        100
    }

    pub(super) fn log_type() -> String {
        "deployment".to_string()
    }
}
