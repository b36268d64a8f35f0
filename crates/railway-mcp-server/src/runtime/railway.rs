use railway_mcp_server::client::ClientConfig;
use railway_mcp_server::errors::RailwayError;
use schemars::JsonSchema;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use super::endpoint::ApiUrl;

/// Railway API credentials and endpoint
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RailwayConfig {
    /// Railway API token, also read from RAILWAY_TOKEN
    #[schemars(with = "Option<String>")]
    pub token: Option<SecretString>,

    /// The Railway GraphQL endpoint, also read from RAILWAY_API_URL
    #[schemars(schema_with = "Url::json_schema")]
    pub api_url: ApiUrl,
}

impl RailwayConfig {
    /// Validate the credentials into the configuration of an API session
    pub fn into_client_config(self) -> Result<ClientConfig, RailwayError> {
        let token = self.token.ok_or_else(|| {
            RailwayError::Configuration("RAILWAY_TOKEN must be set".to_string())
        })?;

        ClientConfig::new(token, self.api_url.into_inner())
    }
}
