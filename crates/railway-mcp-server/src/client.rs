//! HTTP session with the Railway GraphQL API

use crate::errors::RailwayError;
use crate::graphql::{self, JsonObject, Request, Variables};
use crate::operations::queries;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

/// The public Railway GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://backboard.railway.com/graphql/v2";

/// Per-request timeout, including connecting and reading the body
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a [`RailwayClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    token: SecretString,
    api_url: Url,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(token: SecretString, api_url: Url) -> Result<Self, RailwayError> {
        if token.expose_secret().trim().is_empty() {
            return Err(RailwayError::Configuration(
                "Railway API token must not be empty".to_string(),
            ));
        }
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(RailwayError::Configuration(format!(
                "Railway API URL must use http or https, got {api_url}"
            )));
        }

        Ok(Self {
            token,
            api_url,
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    #[cfg(test)]
    pub(crate) fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

/// The user owning the API token
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct MeData {
    me: Option<User>,
}

#[derive(Debug, Default)]
enum Session {
    #[default]
    Idle,
    Open(reqwest::Client),
    Closed,
}

/// A client for the Railway API
///
/// The underlying HTTP connection pool only exists between [`RailwayClient::connect`]
/// and [`RailwayClient::close`]. Executing an operation outside of that window fails
/// with [`RailwayError::ClientNotInitialized`] without touching the network.
#[derive(Debug)]
pub struct RailwayClient {
    config: ClientConfig,
    session: RwLock<Session>,
}

impl RailwayClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: RwLock::new(Session::Idle),
        }
    }

    /// Open the HTTP session. Does nothing if it is already open.
    pub async fn connect(&self) -> Result<(), RailwayError> {
        let mut session = self.session.write().await;
        match *session {
            Session::Open(_) => Ok(()),
            Session::Closed => Err(RailwayError::ClientNotInitialized),
            Session::Idle => {
                let http = reqwest::Client::builder()
                    .default_headers(self.default_headers()?)
                    .timeout(self.config.timeout)
                    .build()?;
                *session = Session::Open(http);
                debug!(api_url = %self.config.api_url, "Opened Railway API session");
                Ok(())
            }
        }
    }

    /// Tear down the HTTP session. The client cannot be reopened afterwards.
    pub async fn close(&self) {
        let mut session = self.session.write().await;
        if matches!(*session, Session::Open(_)) {
            debug!("Closed Railway API session");
        }
        *session = Session::Closed;
    }

    #[cfg(test)]
    pub(crate) async fn is_connected(&self) -> bool {
        matches!(*self.session.read().await, Session::Open(_))
    }

    /// POST a GraphQL document and return the `data` of its response
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<&Variables>,
    ) -> Result<JsonObject, RailwayError> {
        let http = match &*self.session.read().await {
            Session::Open(http) => http.clone(),
            Session::Idle | Session::Closed => return Err(RailwayError::ClientNotInitialized),
        };

        debug!("Sending Railway API request");
        let response = http
            .post(self.config.api_url.clone())
            .json(&Request::new(query, variables))
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Received Railway API response");
        let body = response.text().await?;

        graphql::classify(status, &body)
    }

    /// Check that the token is valid, returning the user it belongs to
    pub async fn verify_token(&self) -> Result<User, RailwayError> {
        let data: MeData = queries::ME.fetch(self, Variables::new()).await?;

        data.me
            .ok_or_else(|| RailwayError::Authentication("Unable to verify token".to_string()))
    }

    fn default_headers(&self) -> Result<HeaderMap, RailwayError> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", self.config.token.expose_secret()))
                .map_err(|_| {
                    RailwayError::Configuration(
                        "Railway API token contains characters not allowed in a header"
                            .to_string(),
                    )
                })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{TOKEN, connected_client, mock_data};
    use super::*;
    use mockito::Matcher;
    use serde_json::{Value, json};
    use std::io::Write;
    use tracing_test::traced_test;

    #[test]
    fn empty_tokens_are_rejected() {
        let api_url = Url::parse(DEFAULT_API_URL).unwrap();

        let error = ClientConfig::new("  ".into(), api_url).unwrap_err();

        assert_eq!(error.kind(), "configuration_error");
    }

    #[test]
    fn non_http_urls_are_rejected() {
        let api_url = Url::parse("ftp://backboard.railway.com/graphql").unwrap();

        let error = ClientConfig::new(TOKEN.into(), api_url).unwrap_err();

        assert_eq!(error.kind(), "configuration_error");
    }

    #[tokio::test]
    async fn it_sends_the_bearer_token_and_variables() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", "Bearer test_token")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "query": queries::GET_PROJECT.document,
                "variables": { "projectId": "proj_1" }
            })))
            .with_status(200)
            .with_body(json!({ "data": { "project": { "id": "proj_1" } } }).to_string())
            .create_async()
            .await;
        let client = connected_client(&server).await;

        let data = client
            .execute(
                queries::GET_PROJECT.document,
                Some(&Variables::new().with("projectId", "proj_1")),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(Value::Object(data), json!({ "project": { "id": "proj_1" } }));
    }

    #[tokio::test]
    #[traced_test]
    async fn requests_are_logged_without_the_token() {
        let mut server = mockito::Server::new_async().await;
        mock_data(&mut server, json!({ "me": { "id": "user_1" } })).await;
        let client = connected_client(&server).await;

        client.verify_token().await.unwrap();

        assert!(logs_contain("Sending Railway API request"));
        assert!(logs_contain("200 OK"));
        assert!(!logs_contain(TOKEN));
    }

    #[tokio::test]
    async fn it_omits_missing_variables() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_body(Matcher::Json(json!({ "query": queries::LIST_PROJECTS.document })))
            .with_status(200)
            .with_body(r#"{"data":{}}"#)
            .create_async()
            .await;
        let client = connected_client(&server).await;

        client
            .execute(queries::LIST_PROJECTS.document, None)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unauthorized_responses_are_authentication_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;
        let client = connected_client(&server).await;

        let error = client
            .execute(queries::ME.document, None)
            .await
            .unwrap_err();

        assert!(matches!(error, RailwayError::Authentication(_)));
    }

    #[tokio::test]
    async fn server_errors_keep_the_raw_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(500)
            .with_body("Server Error")
            .create_async()
            .await;
        let client = connected_client(&server).await;

        let error = client
            .execute(queries::ME.document, None)
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "HTTP error 500 Internal Server Error: Server Error");
    }

    #[tokio::test]
    async fn it_fails_before_connecting() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .expect(0)
            .create_async()
            .await;
        let api_url = Url::parse(&format!("{}/graphql", server.url())).unwrap();
        let client = RailwayClient::new(ClientConfig::new(TOKEN.into(), api_url).unwrap());

        let error = client
            .execute(queries::ME.document, None)
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(error, RailwayError::ClientNotInitialized));
    }

    #[tokio::test]
    async fn it_does_not_reconnect_after_closing() {
        let server = mockito::Server::new_async().await;
        let client = connected_client(&server).await;
        assert!(client.is_connected().await);

        client.close().await;

        assert!(!client.is_connected().await);
        assert!(matches!(
            client.execute(queries::ME.document, None).await,
            Err(RailwayError::ClientNotInitialized)
        ));
        assert!(matches!(
            client.connect().await,
            Err(RailwayError::ClientNotInitialized)
        ));
    }

    #[tokio::test]
    async fn connecting_twice_keeps_the_session() {
        let server = mockito::Server::new_async().await;
        let client = connected_client(&server).await;

        client.connect().await.unwrap();

        assert!(client.is_connected().await);
    }

    #[tokio::test]
    async fn it_verifies_the_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_data(
            &mut server,
            json!({ "me": { "id": "user_1", "name": "Ada", "email": "ada@example.com" } }),
        )
        .await;
        let client = connected_client(&server).await;

        let user = client.verify_token().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            user,
            User {
                id: Some("user_1".into()),
                name: Some("Ada".into()),
                email: Some("ada@example.com".into()),
            }
        );
    }

    #[tokio::test]
    async fn a_missing_user_fails_verification() {
        let mut server = mockito::Server::new_async().await;
        mock_data(&mut server, json!({ "me": null })).await;
        let client = connected_client(&server).await;

        let error = client.verify_token().await.unwrap_err();

        assert_eq!(error.to_string(), "Authentication failed: Unable to verify token");
    }

    #[tokio::test]
    async fn unreachable_servers_are_transport_errors() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let api_url = Url::parse(&format!("http://127.0.0.1:{port}/graphql")).unwrap();
        let client = RailwayClient::new(ClientConfig::new(TOKEN.into(), api_url).unwrap());
        client.connect().await.unwrap();

        let error = client
            .execute(queries::ME.document, None)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), "transport_error");
        assert!(matches!(
            error,
            RailwayError::Transport {
                timed_out: false,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn slow_responses_time_out_after_a_single_attempt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_chunked_body(|writer| {
                std::thread::sleep(Duration::from_millis(500));
                writer.write_all(br#"{"data":{}}"#)
            })
            .expect(1)
            .create_async()
            .await;
        let api_url = Url::parse(&format!("{}/graphql", server.url())).unwrap();
        let config = ClientConfig::new(TOKEN.into(), api_url)
            .unwrap()
            .with_timeout(Duration::from_millis(100));
        let client = RailwayClient::new(config);
        client.connect().await.unwrap();

        let error = client
            .execute(queries::ME.document, None)
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(error.kind(), "timeout");
        assert!(matches!(
            error,
            RailwayError::Transport {
                timed_out: true,
                ..
            }
        ));
    }

    #[test]
    fn requests_default_to_a_thirty_second_timeout() {
        let api_url = Url::parse(DEFAULT_API_URL).unwrap();

        let config = ClientConfig::new(TOKEN.into(), api_url).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
