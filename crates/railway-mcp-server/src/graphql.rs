//! GraphQL request and response envelopes for the Railway API

use crate::errors::RailwayError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object, as sent in `variables` and received in `data`
pub type JsonObject = Map<String, Value>;

const UNKNOWN_GRAPHQL_ERROR: &str = "Unknown GraphQL error";

/// Variables passed alongside a GraphQL document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(JsonObject);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Set a variable only when a value is present
    pub fn with_optional(self, name: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The body POSTed to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub(crate) struct Request<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a Variables>,
}

impl<'a> Request<'a> {
    pub fn new(query: &'a str, variables: Option<&'a Variables>) -> Self {
        Self {
            query,
            variables: variables.filter(|variables| !variables.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

/// Classify a raw HTTP response from the GraphQL endpoint into its `data` or an error
pub(crate) fn classify(status: StatusCode, body: &str) -> Result<JsonObject, RailwayError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(RailwayError::Authentication(
            "Invalid Railway API token".to_string(),
        ));
    }
    if !status.is_success() {
        return Err(RailwayError::Api {
            status,
            body: body.to_string(),
        });
    }

    let response: Response =
        serde_json::from_str(body).map_err(|e| RailwayError::Decode(e.to_string()))?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .first()
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_GRAPHQL_ERROR)
            .to_string();
        return Err(RailwayError::GraphQL { message, errors });
    }

    match response.data {
        Some(Value::Object(data)) => Ok(data),
        None | Some(Value::Null) => Ok(JsonObject::new()),
        Some(other) => Err(RailwayError::Decode(format!(
            "expected `data` to be an object, found {other}"
        ))),
    }
}

/// Decode a `data` object into the shape an operation selects
pub(crate) fn decode<T: DeserializeOwned>(data: JsonObject) -> Result<T, RailwayError> {
    serde_json::from_value(Value::Object(data)).map_err(|e| RailwayError::Decode(e.to_string()))
}
