use super::{ProjectInput, outcome};
use crate::client::RailwayClient;
use crate::errors::RailwayError;
use crate::graphql::Variables;
use crate::operations::{mutations, queries};
use crate::pagination::{Connection, nodes};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An environment in a project
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// An environment along with the project it belongs to
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedEnvironment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub project_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Deserialize)]
struct ListEnvironmentsData {
    project: Option<ProjectEnvironments>,
}

#[derive(Deserialize)]
struct ProjectEnvironments {
    environments: Option<Connection<Environment>>,
}

pub async fn list_environments(
    client: &RailwayClient,
    input: ProjectInput,
) -> Result<Vec<Environment>, RailwayError> {
    let data: ListEnvironmentsData = queries::LIST_ENVIRONMENTS
        .fetch(client, Variables::new().with("projectId", input.project_id))
        .await?;

    Ok(nodes(data.project.and_then(|project| project.environments)))
}

/// Input for the create_environment tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateEnvironmentInput {
    /// The Railway project ID
    pub project_id: String,
    /// Name for the new environment
    pub name: String,
}

/// A freshly created environment
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEnvironment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateEnvironmentData {
    environment_create: Option<CreatedEnvironment>,
}

pub async fn create_environment(
    client: &RailwayClient,
    input: CreateEnvironmentInput,
) -> Result<CreatedEnvironment, RailwayError> {
    let variables = Variables::new()
        .with("projectId", input.project_id)
        .with("name", input.name);

    let data: CreateEnvironmentData =
        mutations::CREATE_ENVIRONMENT.fetch(client, variables).await?;

    Ok(data.environment_create.unwrap_or_default())
}

/// Input for the link_environment tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LinkEnvironmentInput {
    /// The Railway project ID
    pub project_id: String,
    /// The Railway environment ID
    pub environment_id: String,
}

/// Find an environment by scanning its project, since Railway has no direct lookup for it
pub async fn link_environment(
    client: &RailwayClient,
    input: LinkEnvironmentInput,
) -> Result<LinkedEnvironment, RailwayError> {
    let data: ListEnvironmentsData = queries::LIST_ENVIRONMENTS
        .fetch(client, Variables::new().with("projectId", input.project_id.as_str()))
        .await?;

    let Some(project) = data.project else {
        return Err(RailwayError::ProjectNotFound(input.project_id));
    };

    nodes(project.environments)
        .into_iter()
        .find(|environment| environment.id.as_deref() == Some(input.environment_id.as_str()))
        .map(|environment| LinkedEnvironment {
            id: environment.id,
            name: environment.name,
            project_id: input.project_id.clone(),
            created_at: environment.created_at,
            updated_at: environment.updated_at,
        })
        .ok_or_else(|| RailwayError::EnvironmentNotFound {
            project_id: input.project_id.clone(),
            environment_id: input.environment_id.clone(),
        })
}

/// Input for tools acting on an environment
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EnvironmentInput {
    /// The Railway environment ID
    pub environment_id: String,
}

/// The outcome of deleting an environment
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedEnvironment {
    pub success: bool,
    pub environment_id: String,
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteEnvironmentData {
    environment_delete: Option<bool>,
}

pub async fn delete_environment(
    client: &RailwayClient,
    input: EnvironmentInput,
) -> Result<DeletedEnvironment, RailwayError> {
    let data: DeleteEnvironmentData = mutations::DELETE_ENVIRONMENT
        .fetch(
            client,
            Variables::new().with("environmentId", input.environment_id.as_str()),
        )
        .await?;
    let success = data.environment_delete.unwrap_or(false);

    Ok(DeletedEnvironment {
        success,
        environment_id: input.environment_id,
        message: outcome(
            success,
            "Environment deleted successfully",
            "Failed to delete environment",
        ),
    })
}
