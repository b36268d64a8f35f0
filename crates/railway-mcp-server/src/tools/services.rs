use super::{ProjectInput, ServiceEnvironmentInput, ServiceInput, outcome};
use crate::client::RailwayClient;
use crate::errors::RailwayError;
use crate::graphql::Variables;
use crate::operations::{mutations, queries};
use crate::pagination::{Connection, nodes};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A service in a project
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A service along with the project it belongs to
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedService {
    pub id: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub project_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Deserialize)]
struct ListServicesData {
    project: Option<ProjectServices>,
}

#[derive(Deserialize)]
struct ProjectServices {
    services: Option<Connection<Service>>,
}

pub async fn list_services(
    client: &RailwayClient,
    input: ProjectInput,
) -> Result<Vec<Service>, RailwayError> {
    let data: ListServicesData = queries::LIST_SERVICES
        .fetch(client, Variables::new().with("projectId", input.project_id))
        .await?;

    Ok(nodes(data.project.and_then(|project| project.services)))
}

#[derive(Deserialize)]
struct GetServiceData {
    service: Option<LinkedService>,
}

pub async fn link_service(
    client: &RailwayClient,
    input: ServiceInput,
) -> Result<LinkedService, RailwayError> {
    let data: GetServiceData = queries::GET_SERVICE
        .fetch(client, Variables::new().with("serviceId", input.service_id.as_str()))
        .await?;

    data.service
        .ok_or(RailwayError::ServiceNotFound(input.service_id))
}

/// Input for the create_service tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateServiceInput {
    /// The Railway project ID
    pub project_id: String,
    /// Name for the new service
    pub name: String,
}

/// A freshly created service
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedService {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateServiceData {
    service_create: Option<CreatedService>,
}

pub async fn create_service(
    client: &RailwayClient,
    input: CreateServiceInput,
) -> Result<CreatedService, RailwayError> {
    let variables = Variables::new()
        .with("projectId", input.project_id)
        .with("name", input.name);

    let data: CreateServiceData = mutations::CREATE_SERVICE.fetch(client, variables).await?;

    Ok(data.service_create.unwrap_or_default())
}

/// The outcome of deleting a service
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedService {
    pub success: bool,
    pub service_id: String,
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteServiceData {
    service_delete: Option<bool>,
}

pub async fn delete_service(
    client: &RailwayClient,
    input: ServiceInput,
) -> Result<DeletedService, RailwayError> {
    let data: DeleteServiceData = mutations::DELETE_SERVICE
        .fetch(client, Variables::new().with("serviceId", input.service_id.as_str()))
        .await?;
    let success = data.service_delete.unwrap_or(false);

    Ok(DeletedService {
        success,
        service_id: input.service_id,
        message: outcome(
            success,
            "Service deleted successfully",
            "Failed to delete service",
        ),
    })
}

/// The outcome of triggering a deployment
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResult {
    pub success: bool,
    pub service_id: String,
    pub environment_id: String,
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeployServiceData {
    service_instance_deploy: Option<bool>,
}

pub async fn deploy(
    client: &RailwayClient,
    input: ServiceEnvironmentInput,
) -> Result<DeployResult, RailwayError> {
    let variables = Variables::new()
        .with("serviceId", input.service_id.as_str())
        .with("environmentId", input.environment_id.as_str());

    let data: DeployServiceData = mutations::DEPLOY_SERVICE.fetch(client, variables).await?;
    let success = data.service_instance_deploy.unwrap_or(false);

    Ok(DeployResult {
        success,
        service_id: input.service_id,
        environment_id: input.environment_id,
        message: outcome(
            success,
            "Deployment triggered successfully",
            "Deployment failed",
        ),
    })
}
