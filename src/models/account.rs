//! OAuth tokens, private user data and service status.

use serde::{Deserialize, Serialize};

use crate::client::PewnClient;
use crate::codec::{null_as_default, string_or_number, Timestamp};
use crate::error::{PewnError, Result};

const TOKEN_PATH: &str = "v1/oauth/token";

/// An OAuth token pair issued by Pewn.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds, as sent by the server.
    #[serde(default, deserialize_with = "string_or_number")]
    pub expires_in: Option<String>,
    /// Name of the user the token was issued for.
    #[serde(default)]
    pub username: Option<String>,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Form body of a token request.
#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

impl Token {
    /// Exchange a one-time authorization code for a token pair.
    ///
    /// The returned refresh token is what later goes into
    /// [`Credentials`](crate::Credentials).
    #[tracing::instrument(skip(client, client_secret, code))]
    pub async fn exchange_code(
        client: &PewnClient,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> Result<Self> {
        let form = TokenRequest {
            client_id,
            client_secret,
            grant_type: "authorization_code",
            code: Some(code),
            redirect_uri: Some(redirect_uri),
            refresh_token: None,
        };
        client.post_form(TOKEN_PATH, &form).await
    }

    /// Obtain a fresh access token using the client's credentials.
    ///
    /// # Errors
    ///
    /// Returns [`PewnError::ConfigMissing`] before any request if the client
    /// has no credentials.
    #[tracing::instrument(skip(client))]
    pub async fn refresh(client: &PewnClient) -> Result<Self> {
        let credentials = client.credentials().ok_or_else(|| {
            PewnError::ConfigMissing("OAuth credentials are required to refresh a token".to_string())
        })?;

        let form = TokenRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: "refresh_token",
            code: None,
            redirect_uri: None,
            refresh_token: Some(&credentials.refresh_token),
        };
        client.post_form(TOKEN_PATH, &form).await
    }
}

impl PewnClient {
    /// Authorize a user for the first time and return the refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`PewnError::ConfigMissing`] if the server did not issue a
    /// refresh token.
    pub async fn authorize_first_time(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> Result<String> {
        let token = Token::exchange_code(self, client_id, client_secret, code, redirect_uri).await?;
        token.refresh_token.ok_or_else(|| {
            PewnError::ConfigMissing("server did not issue a refresh token".to_string())
        })
    }
}

/// Private data of the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserData {
    /// Fetch the authenticated user's private data.
    ///
    /// Refreshes the access token first, so the client needs credentials.
    #[tracing::instrument(skip(client))]
    pub async fn get(client: &PewnClient) -> Result<Self> {
        let token = Token::refresh(client).await?;
        client
            .fetch_authorized("v1/self/details", &token.access_token)
            .await
    }
}

/// Health status of the Pewn API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub last_updated: Option<Timestamp>,
}

impl Status {
    /// Fetch the current API status.
    #[tracing::instrument(skip(client))]
    pub async fn get(client: &PewnClient) -> Result<Self> {
        client.fetch("status").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_token_deserialize() {
        let json = r#"{
            "access_token": "acc",
            "refresh_token": "ref",
            "token_type": "bearer",
            "expires_in": 3600,
            "username": "damios"
        }"#;
        let token: Token = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(token.access_token, "acc");
        assert_eq!(token.refresh_token.as_deref(), Some("ref"));
        assert_eq!(token.expires_in.as_deref(), Some("3600"));
    }

    #[test]
    fn test_token_debug_hides_secrets() {
        let token: Token =
            serde_json::from_str(r#"{"access_token": "acc-secret", "refresh_token": "ref-secret"}"#)
                .unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("acc-secret"));
        assert!(!debug.contains("ref-secret"));
    }

    #[test]
    fn test_refresh_token_request_form() {
        let form = TokenRequest {
            client_id: "app",
            client_secret: "secret",
            grant_type: "refresh_token",
            code: None,
            redirect_uri: None,
            refresh_token: Some("ref"),
        };
        let serialized = serde_qs::to_string(&form).expect("Failed to serialize form");
        assert_eq!(
            serialized,
            "client_id=app&client_secret=secret&grant_type=refresh_token&refresh_token=ref"
        );
    }

    #[tokio::test]
    async fn test_refresh_without_credentials_fails_fast() {
        // Unroutable host: any request attempt would fail with an HTTP error.
        let client = PewnClient::new("http://127.0.0.1:9").unwrap();
        let err = Token::refresh(&client).await.unwrap_err();
        assert!(matches!(err, PewnError::ConfigMissing(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_status_deserialize() {
        let status: Status =
            serde_json::from_str(r#"{"status": "ok", "lastUpdated": "2016-01-01 00:00:00"}"#)
                .unwrap();
        assert_eq!(status.status, "ok");
        assert!(status.last_updated.is_some());
    }
}
