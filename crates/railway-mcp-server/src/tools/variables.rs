use super::{non_empty, outcome};
use crate::client::RailwayClient;
use crate::errors::RailwayError;
use crate::graphql::{JsonObject, Variables};
use crate::operations::{mutations, queries};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Placeholder returned instead of a variable value unless values are requested
pub const MASK: &str = "***";

/// Input for the list_variables tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListVariablesInput {
    /// The Railway project ID
    pub project_id: String,
    /// The Railway environment ID
    pub environment_id: String,
    /// Optional service ID for service-specific variables
    #[serde(default)]
    pub service_id: Option<String>,
    /// Return the actual values instead of masking them
    #[serde(default)]
    pub include_values: bool,
}

#[derive(Deserialize)]
struct ListVariablesData {
    variables: Option<JsonObject>,
}

pub async fn list_variables(
    client: &RailwayClient,
    input: ListVariablesInput,
) -> Result<JsonObject, RailwayError> {
    let variables = Variables::new()
        .with("projectId", input.project_id)
        .with("environmentId", input.environment_id)
        .with_optional("serviceId", non_empty(input.service_id));

    let data: ListVariablesData = queries::LIST_VARIABLES.fetch(client, variables).await?;
    let values = data.variables.unwrap_or_default();

    if input.include_values {
        return Ok(values);
    }
    Ok(values
        .into_iter()
        .map(|(name, _)| (name, Value::from(MASK)))
        .collect())
}

/// Input for the set_variables tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetVariablesInput {
    /// The Railway project ID
    pub project_id: String,
    /// The Railway environment ID
    pub environment_id: String,
    /// Variable names and the values to set them to
    pub variables: BTreeMap<String, String>,
    /// Optional service ID for service-specific variables
    #[serde(default)]
    pub service_id: Option<String>,
}

/// The outcome of setting variables
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesSet {
    pub success: bool,
    pub variables_set: Vec<String>,
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetVariablesData {
    variable_collection_upsert: Option<bool>,
}

pub async fn set_variables(
    client: &RailwayClient,
    input: SetVariablesInput,
) -> Result<VariablesSet, RailwayError> {
    let names = input.variables.keys().cloned().collect();
    let values: JsonObject = input
        .variables
        .into_iter()
        .map(|(name, value)| (name, Value::from(value)))
        .collect();
    let variables = Variables::new()
        .with("projectId", input.project_id)
        .with("environmentId", input.environment_id)
        .with("variables", values)
        .with_optional("serviceId", non_empty(input.service_id));

    let data: SetVariablesData = mutations::SET_VARIABLES.fetch(client, variables).await?;
    let success = data.variable_collection_upsert.unwrap_or(false);

    Ok(VariablesSet {
        success,
        variables_set: names,
        message: outcome(
            success,
            "Variables set successfully",
            "Failed to set variables",
        ),
    })
}

/// Input for the delete_variable tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteVariableInput {
    /// The Railway project ID
    pub project_id: String,
    /// The Railway environment ID
    pub environment_id: String,
    /// Name of the variable to delete
    pub name: String,
    /// Optional service ID for service-specific variables
    #[serde(default)]
    pub service_id: Option<String>,
}

/// The outcome of deleting a variable
#[derive(Debug, PartialEq, Serialize)]
pub struct VariableDeleted {
    pub success: bool,
    pub name: String,
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteVariableData {
    variable_delete: Option<bool>,
}

pub async fn delete_variable(
    client: &RailwayClient,
    input: DeleteVariableInput,
) -> Result<VariableDeleted, RailwayError> {
    let variables = Variables::new()
        .with("projectId", input.project_id)
        .with("environmentId", input.environment_id)
        .with("name", input.name.as_str())
        .with_optional("serviceId", non_empty(input.service_id));

    let data: DeleteVariableData = mutations::DELETE_VARIABLE.fetch(client, variables).await?;
    let success = data.variable_delete.unwrap_or(false);

    Ok(VariableDeleted {
        success,
        name: input.name,
        message: outcome(
            success,
            "Variable deleted successfully",
            "Failed to delete variable",
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{connected_client, mock_operation};
    use rstest::rstest;
    use serde_json::json;

    fn list_input(include_values: bool) -> ListVariablesInput {
        ListVariablesInput {
            project_id: "proj_1".into(),
            environment_id: "env_1".into(),
            service_id: None,
            include_values,
        }
    }

    #[tokio::test]
    async fn values_are_masked_by_default() {
        let mut server = mockito::Server::new_async().await;
        mock_operation(
            &mut server,
            &queries::LIST_VARIABLES,
            json!({ "projectId": "proj_1", "environmentId": "env_1" }),
            json!({ "variables": { "DATABASE_URL": "postgres://secret", "PORT": "8080" } }),
        )
        .await;
        let client = connected_client(&server).await;

        let variables = list_variables(&client, list_input(false)).await.unwrap();

        assert_eq!(
            Value::Object(variables),
            json!({ "DATABASE_URL": "***", "PORT": "***" })
        );
    }

    #[rstest]
    #[case::masked(false, ["***", "***"])]
    #[case::verbatim(true, ["1", "2"])]
    #[tokio::test]
    async fn variables_keep_the_upstream_order(
        #[case] include_values: bool,
        #[case] expected_values: [&str; 2],
    ) {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(r#"{"data":{"variables":{"ZEBRA":"1","APPLE":"2"}}}"#)
            .expect(1)
            .create_async()
            .await;
        let client = connected_client(&server).await;

        let variables = list_variables(&client, list_input(include_values))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            variables.keys().map(String::as_str).collect::<Vec<_>>(),
            ["ZEBRA", "APPLE"]
        );
        assert_eq!(
            variables.values().filter_map(Value::as_str).collect::<Vec<_>>(),
            expected_values
        );
        let [zebra, apple] = expected_values;
        assert_eq!(
            serde_json::to_string(&variables).unwrap(),
            format!(r#"{{"ZEBRA":"{zebra}","APPLE":"{apple}"}}"#)
        );
    }

    #[tokio::test]
    async fn values_are_returned_verbatim_on_request() {
        let upstream = json!({ "DATABASE_URL": "postgres://secret", "PORT": "8080" });
        let mut server = mockito::Server::new_async().await;
        mock_operation(
            &mut server,
            &queries::LIST_VARIABLES,
            json!({ "projectId": "proj_1", "environmentId": "env_1" }),
            json!({ "variables": upstream.clone() }),
        )
        .await;
        let client = connected_client(&server).await;

        let variables = list_variables(&client, list_input(true)).await.unwrap();

        assert_eq!(Value::Object(variables), upstream);
    }

    #[tokio::test]
    async fn service_scoped_variables_send_the_service() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_operation(
            &mut server,
            &queries::LIST_VARIABLES,
            json!({ "projectId": "proj_1", "environmentId": "env_1", "serviceId": "svc_1" }),
            json!({ "variables": null }),
        )
        .await;
        let client = connected_client(&server).await;

        let variables = list_variables(
            &client,
            ListVariablesInput {
                service_id: Some("svc_1".into()),
                ..list_input(false)
            },
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert!(variables.is_empty());
    }

    #[rstest]
    #[case(json!(true), true, "Variables set successfully")]
    #[case(json!(false), false, "Failed to set variables")]
    #[tokio::test]
    async fn setting_variables_reports_the_outcome(
        #[case] upserted: Value,
        #[case] success: bool,
        #[case] message: &'static str,
    ) {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_operation(
            &mut server,
            &mutations::SET_VARIABLES,
            json!({
                "projectId": "proj_1",
                "environmentId": "env_1",
                "variables": { "A": "1", "B": "2" }
            }),
            json!({ "variableCollectionUpsert": upserted }),
        )
        .await;
        let client = connected_client(&server).await;

        let result = set_variables(
            &client,
            SetVariablesInput {
                project_id: "proj_1".into(),
                environment_id: "env_1".into(),
                variables: BTreeMap::from([
                    ("B".to_string(), "2".to_string()),
                    ("A".to_string(), "1".to_string()),
                ]),
                service_id: Some(String::new()),
            },
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            VariablesSet {
                success,
                variables_set: vec!["A".into(), "B".into()],
                message,
            }
        );
    }

    #[tokio::test]
    async fn it_deletes_variables() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_operation(
            &mut server,
            &mutations::DELETE_VARIABLE,
            json!({
                "projectId": "proj_1",
                "environmentId": "env_1",
                "serviceId": "svc_1",
                "name": "PORT"
            }),
            json!({ "variableDelete": true }),
        )
        .await;
        let client = connected_client(&server).await;

        let deleted = delete_variable(
            &client,
            DeleteVariableInput {
                project_id: "proj_1".into(),
                environment_id: "env_1".into(),
                name: "PORT".into(),
                service_id: Some("svc_1".into()),
            },
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(
            deleted,
            VariableDeleted {
                success: true,
                name: "PORT".into(),
                message: "Variable deleted successfully",
            }
        );
    }
}
