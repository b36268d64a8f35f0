use super::{ProjectInput, Summary, non_empty, outcome};
use crate::client::RailwayClient;
use crate::errors::RailwayError;
use crate::graphql::Variables;
use crate::operations::{mutations, queries};
use crate::pagination::{Connection, nodes};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project with references to its environments and services
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub environments: Vec<Summary>,
    pub services: Vec<Summary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectNode {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    environments: Option<Connection<Summary>>,
    services: Option<Connection<Summary>>,
}

impl From<ProjectNode> for Project {
    fn from(node: ProjectNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            description: node.description,
            created_at: node.created_at,
            updated_at: node.updated_at,
            environments: nodes(node.environments),
            services: nodes(node.services),
        }
    }
}

#[derive(Deserialize)]
struct ListProjectsData {
    me: Option<ProjectsOwner>,
}

#[derive(Deserialize)]
struct ProjectsOwner {
    projects: Option<Connection<ProjectNode>>,
}

pub async fn list_projects(client: &RailwayClient) -> Result<Vec<Project>, RailwayError> {
    let data: ListProjectsData = queries::LIST_PROJECTS.fetch(client, Variables::new()).await?;

    Ok(nodes(data.me.and_then(|me| me.projects))
        .into_iter()
        .map(Project::from)
        .collect())
}

#[derive(Deserialize)]
struct GetProjectData {
    project: Option<ProjectNode>,
}

pub async fn get_project(
    client: &RailwayClient,
    input: ProjectInput,
) -> Result<Project, RailwayError> {
    let data: GetProjectData = queries::GET_PROJECT
        .fetch(client, Variables::new().with("projectId", input.project_id.as_str()))
        .await?;

    data.project
        .map(Project::from)
        .ok_or(RailwayError::ProjectNotFound(input.project_id))
}

/// Input for the create_project_and_link tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateProjectInput {
    /// Project name
    pub name: String,
    /// Optional project description
    #[serde(default)]
    pub description: Option<String>,
    /// Name for the default environment. Railway picks one when omitted.
    #[serde(default)]
    pub default_environment_name: Option<String>,
}

/// A freshly created project
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub environments: Vec<Summary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectData {
    project_create: Option<ProjectNode>,
}

pub async fn create_project_and_link(
    client: &RailwayClient,
    input: CreateProjectInput,
) -> Result<CreatedProject, RailwayError> {
    let variables = Variables::new()
        .with("name", input.name)
        .with_optional("description", non_empty(input.description))
        .with_optional(
            "defaultEnvironmentName",
            non_empty(input.default_environment_name),
        );

    let data: CreateProjectData = mutations::CREATE_PROJECT.fetch(client, variables).await?;
    let project = data.project_create.unwrap_or_default();

    Ok(CreatedProject {
        id: project.id,
        name: project.name,
        description: project.description,
        created_at: project.created_at,
        environments: nodes(project.environments),
    })
}

/// The outcome of deleting a project
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedProject {
    pub success: bool,
    pub project_id: String,
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteProjectData {
    project_delete: Option<bool>,
}

pub async fn delete_project(
    client: &RailwayClient,
    input: ProjectInput,
) -> Result<DeletedProject, RailwayError> {
    let data: DeleteProjectData = mutations::DELETE_PROJECT
        .fetch(client, Variables::new().with("projectId", input.project_id.as_str()))
        .await?;
    let success = data.project_delete.unwrap_or(false);

    Ok(DeletedProject {
        success,
        project_id: input.project_id,
        message: outcome(
            success,
            "Project deleted successfully",
            "Failed to delete project",
        ),
    })
}
