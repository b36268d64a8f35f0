use crate::client::{RailwayClient, User};
use crate::errors::RailwayError;
use serde::Serialize;

/// The outcome of checking API access
#[derive(Debug, PartialEq, Serialize)]
pub struct Status {
    pub status: &'static str,
    pub user: User,
}

pub async fn check_railway_status(client: &RailwayClient) -> Result<Status, RailwayError> {
    let user = client.verify_token().await?;

    Ok(Status {
        status: "connected",
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{connected_client, mock_operation};
    use crate::operations::queries;
    use serde_json::json;

    #[tokio::test]
    async fn it_reports_the_authenticated_user() {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_operation(
            &mut server,
            &queries::ME,
            json!({}),
            json!({ "me": { "id": "user_1", "name": "Ada", "email": null } }),
        )
        .await;
        let client = connected_client(&server).await;

        let status = check_railway_status(&client).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            status,
            Status {
                status: "connected",
                user: User {
                    id: Some("user_1".into()),
                    name: Some("Ada".into()),
                    email: None,
                },
            }
        );
    }

    #[tokio::test]
    async fn rejected_tokens_are_authentication_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;
        let client = connected_client(&server).await;

        let error = check_railway_status(&client).await.unwrap_err();

        assert_eq!(error.kind(), "authentication_error");
        assert_eq!(
            error.to_string(),
            "Authentication failed: Invalid Railway API token"
        );
    }
}
