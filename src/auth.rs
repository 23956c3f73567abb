use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

const LOGIN_PATH: &str = "auth/login/username";

#[derive(Debug, Serialize, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Exchanges credentials for a session token. Runs outside `ContentClient`
/// because the session header does not exist yet at login time.
pub async fn login(base_url: &str, credentials: &Credentials) -> Result<SessionResponse> {
    let client = Client::new();
    let url = format!("{}/{}", base_url.trim_end_matches('/'), LOGIN_PATH);
    let response = client.post(url).json(credentials).send().await?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<SessionResponse>()
            .await
            .map_err(ContentError::from)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ContentError::http(status, None, body))
    }
}

#[cfg(test)]
mod tests {
    use super::{login, Credentials};
    use crate::error::ContentError;
    use serde_json::json;

    #[tokio::test]
    async fn login_returns_the_session_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login/username")
            .match_body(mockito::Matcher::Json(json!({
                "email": "ann@example.com",
                "password": "hunter2"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "sessionToken": "tok-1", "expiresIn": 3600 }).to_string())
            .create_async()
            .await;

        let credentials = Credentials {
            email: "ann@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let session = login(&server.url(), &credentials)
            .await
            .expect("login should succeed");

        mock.assert_async().await;
        assert_eq!(session.session_token.as_deref(), Some("tok-1"));
        assert_eq!(session.expires_in, Some(3600));
    }

    #[tokio::test]
    async fn rejected_credentials_surface_the_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login/username")
            .with_status(401)
            .with_body("bad credentials")
            .create_async()
            .await;

        let credentials = Credentials {
            email: "ann@example.com".to_string(),
            password: "wrong".to_string(),
        };
        let err = login(&server.url(), &credentials)
            .await
            .expect_err("login should fail");

        assert!(matches!(err, ContentError::Http { .. }));
    }
}
