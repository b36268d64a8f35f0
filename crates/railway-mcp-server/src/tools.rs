//! MCP tools backed by the Railway GraphQL API
//!
//! Each tool deserializes its typed input, runs one operation from the catalog
//! and reshapes the response into a flat, stable JSON structure.

pub mod deployments;
pub mod domains;
pub mod environments;
pub mod projects;
pub mod services;
pub mod status;
pub mod templates;
pub mod variables;

use crate::client::RailwayClient;
use crate::errors::{McpError, RailwayError};
use crate::graphql::JsonObject;
use crate::operations::OperationKind;
use rmcp::model::{ErrorCode, Tool, ToolAnnotations};
use schemars::{JsonSchema, SchemaGenerator};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Generate the JSON schema of a tool input
pub(crate) fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    match SchemaGenerator::default().into_root_schema_for::<T>().to_value() {
        Value::Object(schema) => Arc::new(schema),
        _ => Arc::default(),
    }
}

macro_rules! railway_tools {
    ($($tool:ident => $name:literal, $kind:ident, $input:ty, $description:literal;)*) => {
        /// A tool exposed by the server
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum RailwayTool {
            $($tool,)*
        }

        impl RailwayTool {
            pub const ALL: &'static [RailwayTool] = &[$(RailwayTool::$tool,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(RailwayTool::$tool => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(RailwayTool::$tool),)*
                    _ => None,
                }
            }

            /// The kind of operation the tool runs against Railway
            pub fn kind(self) -> OperationKind {
                match self {
                    $(RailwayTool::$tool => OperationKind::$kind,)*
                }
            }

            /// The MCP definition of the tool
            pub fn definition(self) -> Tool {
                let tool = match self {
                    $(RailwayTool::$tool => Tool::new($name, $description, input_schema::<$input>()),)*
                };
                tool.annotate(ToolAnnotations::new().read_only(self.kind() == OperationKind::Query))
            }
        }
    };
}

railway_tools! {
    CheckRailwayStatus => "check_railway_status", Query, NoInput,
        "Verify API access and authentication. Returns the current user's information if authenticated.";
    ListProjects => "list_projects", Query, NoInput,
        "List all accessible Railway projects, with their environments and services.";
    GetProject => "get_project", Query, ProjectInput,
        "Get a Railway project with its environments and services.";
    CreateProjectAndLink => "create_project_and_link", Mutation, projects::CreateProjectInput,
        "Create a new Railway project. Returns the created project and its environments.";
    DeleteProject => "delete_project", Mutation, ProjectInput,
        "Delete a Railway project and everything in it.";
    ListServices => "list_services", Query, ProjectInput,
        "List services in a project.";
    LinkService => "link_service", Query, ServiceInput,
        "Get service details for context/linking.";
    CreateService => "create_service", Mutation, services::CreateServiceInput,
        "Create a new empty service in a project.";
    DeleteService => "delete_service", Mutation, ServiceInput,
        "Delete a service.";
    Deploy => "deploy", Mutation, ServiceEnvironmentInput,
        "Trigger deployment for a service in an environment.";
    ListEnvironments => "list_environments", Query, ProjectInput,
        "List environments in a project.";
    CreateEnvironment => "create_environment", Mutation, environments::CreateEnvironmentInput,
        "Create a new environment in a project.";
    LinkEnvironment => "link_environment", Query, environments::LinkEnvironmentInput,
        "Get environment details for context/linking.";
    DeleteEnvironment => "delete_environment", Mutation, environments::EnvironmentInput,
        "Delete an environment.";
    ListDeployments => "list_deployments", Query, deployments::ListDeploymentsInput,
        "List deployments for a service in an environment, most recent first.";
    GetDeployment => "get_deployment", Query, DeploymentInput,
        "Get the status and details of a deployment.";
    Redeploy => "redeploy", Mutation, DeploymentInput,
        "Redeploy an existing deployment.";
    CancelDeployment => "cancel_deployment", Mutation, DeploymentInput,
        "Cancel a deployment that is still building or deploying.";
    RestartDeployment => "restart_deployment", Mutation, DeploymentInput,
        "Restart a running deployment.";
    GetLogs => "get_logs", Query, deployments::GetLogsInput,
        "Retrieve build or deployment logs.";
    ListVariables => "list_variables", Query, variables::ListVariablesInput,
        "List environment variables. Values are masked unless `include_values` is set.";
    SetVariables => "set_variables", Mutation, variables::SetVariablesInput,
        "Set environment variables.";
    DeleteVariable => "delete_variable", Mutation, variables::DeleteVariableInput,
        "Delete an environment variable.";
    GenerateDomain => "generate_domain", Mutation, ServiceEnvironmentInput,
        "Generate a Railway-provided domain for a service.";
    CreateCustomDomain => "create_custom_domain", Mutation, domains::CreateCustomDomainInput,
        "Attach a custom domain to a service.";
    DeleteServiceDomain => "delete_service_domain", Mutation, domains::DeleteServiceDomainInput,
        "Remove a Railway-provided domain from a service.";
    ListDomains => "list_domains", Query, domains::ListDomainsInput,
        "List the Railway-provided and custom domains of a service.";
    ListTemplates => "list_templates", Query, templates::ListTemplatesInput,
        "List available templates from the Railway Template Library.";
    GetTemplate => "get_template", Query, templates::GetTemplateInput,
        "Get template details, including the services it deploys.";
    DeployTemplate => "deploy_template", Mutation, templates::DeployTemplateInput,
        "Deploy from the Railway Template Library.";
}

impl RailwayTool {
    /// Run the tool with raw MCP arguments, returning its JSON result
    pub async fn call(self, client: &RailwayClient, arguments: Value) -> Result<Value, McpError> {
        match self {
            RailwayTool::CheckRailwayStatus => respond(status::check_railway_status(client).await),
            RailwayTool::ListProjects => respond(projects::list_projects(client).await),
            RailwayTool::GetProject => {
                respond(projects::get_project(client, input(arguments)?).await)
            }
            RailwayTool::CreateProjectAndLink => {
                respond(projects::create_project_and_link(client, input(arguments)?).await)
            }
            RailwayTool::DeleteProject => {
                respond(projects::delete_project(client, input(arguments)?).await)
            }
            RailwayTool::ListServices => {
                respond(services::list_services(client, input(arguments)?).await)
            }
            RailwayTool::LinkService => {
                respond(services::link_service(client, input(arguments)?).await)
            }
            RailwayTool::CreateService => {
                respond(services::create_service(client, input(arguments)?).await)
            }
            RailwayTool::DeleteService => {
                respond(services::delete_service(client, input(arguments)?).await)
            }
            RailwayTool::Deploy => respond(services::deploy(client, input(arguments)?).await),
            RailwayTool::ListEnvironments => {
                respond(environments::list_environments(client, input(arguments)?).await)
            }
            RailwayTool::CreateEnvironment => {
                respond(environments::create_environment(client, input(arguments)?).await)
            }
            RailwayTool::LinkEnvironment => {
                respond(environments::link_environment(client, input(arguments)?).await)
            }
            RailwayTool::DeleteEnvironment => {
                respond(environments::delete_environment(client, input(arguments)?).await)
            }
            RailwayTool::ListDeployments => {
                respond(deployments::list_deployments(client, input(arguments)?).await)
            }
            RailwayTool::GetDeployment => {
                respond(deployments::get_deployment(client, input(arguments)?).await)
            }
            RailwayTool::Redeploy => {
                respond(deployments::redeploy(client, input(arguments)?).await)
            }
            RailwayTool::CancelDeployment => {
                respond(deployments::cancel_deployment(client, input(arguments)?).await)
            }
            RailwayTool::RestartDeployment => {
                respond(deployments::restart_deployment(client, input(arguments)?).await)
            }
            RailwayTool::GetLogs => respond(deployments::get_logs(client, input(arguments)?).await),
            RailwayTool::ListVariables => {
                respond(variables::list_variables(client, input(arguments)?).await)
            }
            RailwayTool::SetVariables => {
                respond(variables::set_variables(client, input(arguments)?).await)
            }
            RailwayTool::DeleteVariable => {
                respond(variables::delete_variable(client, input(arguments)?).await)
            }
            RailwayTool::GenerateDomain => {
                respond(domains::generate_domain(client, input(arguments)?).await)
            }
            RailwayTool::CreateCustomDomain => {
                respond(domains::create_custom_domain(client, input(arguments)?).await)
            }
            RailwayTool::DeleteServiceDomain => {
                respond(domains::delete_service_domain(client, input(arguments)?).await)
            }
            RailwayTool::ListDomains => {
                respond(domains::list_domains(client, input(arguments)?).await)
            }
            RailwayTool::ListTemplates => {
                respond(templates::list_templates(client, input(arguments)?).await)
            }
            RailwayTool::GetTemplate => {
                respond(templates::get_template(client, input(arguments)?).await)
            }
            RailwayTool::DeployTemplate => {
                respond(templates::deploy_template(client, input(arguments)?).await)
            }
        }
    }
}

fn input<T: DeserializeOwned>(arguments: Value) -> Result<T, McpError> {
    serde_json::from_value(arguments).map_err(|e| {
        McpError::new(
            ErrorCode::INVALID_PARAMS,
            format!("Invalid input: {e}"),
            None,
        )
    })
}

fn respond<T: Serialize>(result: Result<T, RailwayError>) -> Result<Value, McpError> {
    serde_json::to_value(result?).map_err(|e| {
        McpError::new(
            ErrorCode::INTERNAL_ERROR,
            format!("Failed to serialize tool output: {e}"),
            None,
        )
    })
}

/// Pick the success or failure message of a boolean mutation
pub(crate) fn outcome(success: bool, succeeded: &'static str, failed: &'static str) -> &'static str {
    if success { succeeded } else { failed }
}

/// Input for tools without arguments
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoInput {}

/// Input for tools acting on a project
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectInput {
    /// The Railway project ID
    pub project_id: String,
}

/// Input for tools acting on a service
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ServiceInput {
    /// The Railway service ID
    pub service_id: String,
}

/// Input for tools acting on a deployment
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeploymentInput {
    /// The Railway deployment ID
    pub deployment_id: String,
}

/// Input for tools acting on a service within an environment
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ServiceEnvironmentInput {
    /// The Railway service ID
    pub service_id: String,
    /// The Railway environment ID
    pub environment_id: String,
}

/// An `{id, name}` reference to a child resource
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Summary {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Drop empty strings from optional inputs, so they are not sent at all
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
