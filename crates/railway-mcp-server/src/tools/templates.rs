use crate::client::RailwayClient;
use crate::errors::RailwayError;
use crate::graphql::{JsonObject, Variables};
use crate::operations::{mutations, queries};
use crate::pagination::{Connection, nodes};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A template from the Railway Template Library
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub health: Option<Value>,
    pub active_projects: Option<i64>,
}

/// Input for the list_templates tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListTemplatesInput {
    /// Maximum number of templates to return
    #[serde(default = "defaults::templates_limit")]
    pub limit: u32,
}

#[derive(Deserialize)]
struct ListTemplatesData {
    templates: Option<Connection<Template>>,
}

pub async fn list_templates(
    client: &RailwayClient,
    input: ListTemplatesInput,
) -> Result<Vec<Template>, RailwayError> {
    let data: ListTemplatesData = queries::LIST_TEMPLATES
        .fetch(client, Variables::new().with("first", input.limit))
        .await?;

    Ok(nodes(data.templates))
}

/// Input for the get_template tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTemplateInput {
    /// Template code, e.g. "redis" or "postgres"
    pub code: String,
}

/// A service deployed by a template
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TemplateService {
    pub name: Option<String>,
    pub icon: Option<String>,
}

/// A template along with the services it deploys
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TemplateDetails {
    #[serde(flatten)]
    pub template: Template,
    #[serde(default)]
    pub services: Option<Vec<TemplateService>>,
}

#[derive(Deserialize)]
struct GetTemplateData {
    template: Option<TemplateDetails>,
}

pub async fn get_template(
    client: &RailwayClient,
    input: GetTemplateInput,
) -> Result<TemplateDetails, RailwayError> {
    let data: GetTemplateData = queries::GET_TEMPLATE
        .fetch(client, Variables::new().with("code", input.code))
        .await?;
    let mut details = data.template.unwrap_or_default();
    details.services.get_or_insert_with(Vec::new);

    Ok(details)
}

/// Input for the deploy_template tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeployTemplateInput {
    /// The Railway project ID to deploy to
    pub project_id: String,
    /// The Railway environment ID to deploy to
    pub environment_id: String,
    /// Template code, e.g. "redis", "postgres" or "mysql"
    pub template_code: String,
    /// Optional list of service configurations
    #[serde(default)]
    pub services: Option<Vec<JsonObject>>,
}

/// The result of starting a template deployment
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDeployment {
    pub project_id: Option<String>,
    pub workflow_id: Option<String>,
    pub template_code: String,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeployTemplateData {
    template_deploy: Option<DeployedTemplate>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeployedTemplate {
    project_id: Option<String>,
    workflow_id: Option<String>,
}

pub async fn deploy_template(
    client: &RailwayClient,
    input: DeployTemplateInput,
) -> Result<TemplateDeployment, RailwayError> {
    let services = input
        .services
        .filter(|services| !services.is_empty())
        .map(|services| services.into_iter().map(Value::Object).collect::<Vec<_>>());
    let variables = Variables::new()
        .with("projectId", input.project_id)
        .with("environmentId", input.environment_id)
        .with("templateCode", input.template_code.as_str())
        .with_optional("services", services);

    let data: DeployTemplateData = mutations::DEPLOY_TEMPLATE.fetch(client, variables).await?;
    let deployed = data.template_deploy.unwrap_or_default();

    Ok(TemplateDeployment {
        project_id: deployed.project_id,
        workflow_id: deployed.workflow_id,
        message: format!("Template '{}' deployment initiated", input.template_code),
        template_code: input.template_code,
    })
}

mod defaults {
    pub(super) const fn templates_limit() -> u32 {
        50
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{connected_client, mock_operation};
    use insta::assert_json_snapshot;
    use serde_json::json;

    #[test]
    fn list_templates_defaults_to_fifty() {
        let input: ListTemplatesInput = serde_json::from_value(json!({})).unwrap();

        assert_eq!(input.limit, 50);
    }

    #[tokio::test]
    async fn it_lists_templates() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_operation(
            &mut server,
            &queries::LIST_TEMPLATES,
            json!({ "first": 50 }),
            json!({
                "templates": {
                    "edges": [
                        {
                            "node": {
                                "id": "tpl_1",
                                "code": "redis",
                                "name": "Redis",
                                "description": "An in-memory data store",
                                "category": "Storage",
                                "health": 98,
                                "activeProjects": 1200
                            }
                        },
                        { "node": { "id": "tpl_2", "code": "postgres" } }
                    ]
                }
            }),
        )
        .await;
        let client = connected_client(&server).await;

        let templates = list_templates(&client, ListTemplatesInput { limit: 50 })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_json_snapshot!(templates, @r#"
        [
          {
            "id": "tpl_1",
            "code": "redis",
            "name": "Redis",
            "description": "An in-memory data store",
            "category": "Storage",
            "health": 98,
            "activeProjects": 1200
          },
          {
            "id": "tpl_2",
            "code": "postgres",
            "name": null,
            "description": null,
            "category": null,
            "health": null,
            "activeProjects": null
          }
        ]
        "#);
    }

    #[tokio::test]
    async fn it_gets_a_template_with_services() {
        let mut server = mockito::Server::new_async().await;
        mock_operation(
            &mut server,
            &queries::GET_TEMPLATE,
            json!({ "code": "redis" }),
            json!({
                "template": {
                    "id": "tpl_1",
                    "code": "redis",
                    "name": "Redis",
                    "services": [{ "name": "redis", "icon": "https://devicons.railway.app/redis" }]
                }
            }),
        )
        .await;
        let client = connected_client(&server).await;

        let template = get_template(
            &client,
            GetTemplateInput {
                code: "redis".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(template.template.code.as_deref(), Some("redis"));
        assert_eq!(
            template.services,
            Some(vec![TemplateService {
                name: Some("redis".into()),
                icon: Some("https://devicons.railway.app/redis".into()),
            }])
        );
    }

    #[tokio::test]
    async fn missing_template_services_are_empty() {
        let mut server = mockito::Server::new_async().await;
        mock_operation(
            &mut server,
            &queries::GET_TEMPLATE,
            json!({ "code": "redis" }),
            json!({ "template": { "id": "tpl_1", "services": null } }),
        )
        .await;
        let client = connected_client(&server).await;

        let template = get_template(
            &client,
            GetTemplateInput {
                code: "redis".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            serde_json::to_value(&template).unwrap().get("services"),
            Some(&json!([]))
        );
    }

    #[tokio::test]
    async fn deploying_a_template_echoes_its_code() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_operation(
            &mut server,
            &mutations::DEPLOY_TEMPLATE,
            json!({ "projectId": "proj_1", "environmentId": "env_1", "templateCode": "redis" }),
            json!({ "templateDeploy": { "projectId": "proj_1", "workflowId": "wf_1" } }),
        )
        .await;
        let client = connected_client(&server).await;

        let deployment = deploy_template(
            &client,
            DeployTemplateInput {
                project_id: "proj_1".into(),
                environment_id: "env_1".into(),
                template_code: "redis".into(),
                services: Some(Vec::new()),
            },
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(
            deployment,
            TemplateDeployment {
                project_id: Some("proj_1".into()),
                workflow_id: Some("wf_1".into()),
                template_code: "redis".into(),
                message: "Template 'redis' deployment initiated".into(),
            }
        );
    }

    #[tokio::test]
    async fn template_services_are_forwarded() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_operation(
            &mut server,
            &mutations::DEPLOY_TEMPLATE,
            json!({
                "projectId": "proj_1",
                "environmentId": "env_1",
                "templateCode": "postgres",
                "services": [{ "id": "svc_template_1", "name": "db" }]
            }),
            json!({ "templateDeploy": null }),
        )
        .await;
        let client = connected_client(&server).await;
        let service = json!({ "id": "svc_template_1", "name": "db" });

        let deployment = deploy_template(
            &client,
            DeployTemplateInput {
                project_id: "proj_1".into(),
                environment_id: "env_1".into(),
                template_code: "postgres".into(),
                services: service.as_object().cloned().map(|service| vec![service]),
            },
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(deployment.project_id, None);
        assert_eq!(deployment.workflow_id, None);
    }
}
