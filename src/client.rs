//! Pewn API client.
//!
//! Low-level HTTP client that builds request URLs and decodes responses.
//! Resource accessors are implemented on the model types and via traits.

use std::env;
use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{PewnError, Result};

const DEFAULT_HOST: &str = "http://pewn.de/";
const API_ROOT: &str = "api/";
const USER_AGENT: &str = concat!("pewnapi/", env!("CARGO_PKG_VERSION"));

/// OAuth credentials of a registered API application and one of its users.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The ID of the API application.
    pub client_id: String,
    /// The secret of the API application.
    pub client_secret: String,
    /// The user- and application-specific refresh token.
    pub refresh_token: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Low-level Pewn API client.
///
/// Owns the host configuration and optional OAuth credentials. Every
/// accessor takes a client explicitly, so there is no process-wide state.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use pewnapi::{Credentials, PewnClient};
///
/// # fn example() -> pewnapi::Result<()> {
/// // Public resources only
/// let client = PewnClient::default_host()?;
///
/// // Protected resources need OAuth credentials
/// let client = PewnClient::new("http://pewn.de")?
///     .with_credentials(Credentials::new("id", "secret", "refresh-token"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PewnClient {
    http: Client,
    host: Arc<Url>,
    api_root: Arc<Url>,
    credentials: Option<Arc<Credentials>>,
}

impl std::fmt::Debug for PewnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PewnClient")
            .field("host", &self.host.as_str())
            .field("authenticated", &self.credentials.is_some())
            .finish_non_exhaustive()
    }
}

impl PewnClient {
    /// Create a client for the public Pewn host (`http://pewn.de/`).
    pub fn default_host() -> Result<Self> {
        Self::new(DEFAULT_HOST)
    }

    /// Create a client from environment variables.
    ///
    /// Uses `PEWN_HOST` if set (defaults to `http://pewn.de/`). OAuth
    /// credentials are read from `PEWN_CLIENT_ID`, `PEWN_CLIENT_SECRET` and
    /// `PEWN_REFRESH_TOKEN`; either all three or none must be set.
    ///
    /// # Errors
    ///
    /// Returns an error if only some of the credential variables are set or
    /// if the host is invalid.
    pub fn from_env() -> Result<Self> {
        let host = env::var("PEWN_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let client = Self::new(&host)?;

        let vars = [
            env::var("PEWN_CLIENT_ID").ok(),
            env::var("PEWN_CLIENT_SECRET").ok(),
            env::var("PEWN_REFRESH_TOKEN").ok(),
        ];
        match vars {
            [Some(id), Some(secret), Some(refresh)] => {
                Ok(client.with_credentials(Credentials::new(id, secret, refresh)))
            }
            [None, None, None] => Ok(client),
            _ => Err(PewnError::ConfigMissing(
                "PEWN_CLIENT_ID, PEWN_CLIENT_SECRET and PEWN_REFRESH_TOKEN must be set together"
                    .to_string(),
            )),
        }
    }

    /// Create a new client for the given host (e.g. `http://pewn.de`).
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not a valid absolute URL.
    pub fn new(host: &str) -> Result<Self> {
        // Ensure host ends with /
        let host_str = if host.ends_with('/') {
            host.to_string()
        } else {
            format!("{host}/")
        };

        let host = Url::parse(&host_str).map_err(|_| PewnError::InvalidHost(host_str.clone()))?;
        if host.cannot_be_a_base() {
            return Err(PewnError::InvalidHost(host_str));
        }
        let api_root = host.join(API_ROOT)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(PewnError::HttpError)?;

        Ok(Self {
            http,
            host: Arc::new(host),
            api_root: Arc::new(api_root),
            credentials: None,
        })
    }

    /// Attach OAuth credentials, enabling access to protected resources.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(Arc::new(credentials));
        self
    }

    /// Get the configured credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_deref()
    }

    /// Get the host URL.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Get the API root URL (`{host}api/`).
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Build the URL of a JSON endpoint: `{host}api/{path}?format=json`.
    ///
    /// # Errors
    ///
    /// Returns [`PewnError::InvalidPath`] if the path is empty, starts or
    /// ends with `/`, or could leave the API root (a scheme, `..`, `?`, `#`).
    pub fn api_url(&self, path: &str) -> Result<Url> {
        let mut url = self.api_endpoint(path)?;
        url.query_pairs_mut().append_pair("format", "json");
        Ok(url)
    }

    /// Fetch a JSON endpoint and decode it into `T`.
    ///
    /// `path` is the part of the URL after `api/`, e.g. `v1/games/id/8568`.
    #[tracing::instrument(skip(self))]
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.api_url(path)?;
        tracing::debug!(%url, "GET");
        self.execute(self.http.get(url)).await
    }

    /// Fetch a JSON endpoint with additional query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn fetch_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.api_url(path)?;
        tracing::debug!(%url, "GET");
        self.execute(self.http.get(url).query(query)).await
    }

    /// Fetch a protected JSON endpoint using a bearer access token.
    #[tracing::instrument(skip(self, access_token))]
    pub async fn fetch_authorized<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T> {
        let url = self.api_url(path)?;
        tracing::debug!(%url, "GET (authorized)");
        self.execute(self.http.get(url).bearer_auth(access_token))
            .await
    }

    /// Make a form-encoded POST request and decode the JSON response.
    #[tracing::instrument(skip(self, form))]
    pub async fn post_form<T, F>(&self, path: &str, form: &F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let url = self.api_endpoint(path)?;
        tracing::debug!(%url, "POST");
        self.execute(self.http.post(url).form(form)).await
    }

    /// Download raw bytes from a path relative to the host (not the API root).
    #[tracing::instrument(skip(self, query))]
    pub async fn download<Q>(&self, path: &str, query: &Q) -> Result<Vec<u8>>
    where
        Q: Serialize + ?Sized,
    {
        validate_path(path)?;
        let url = self.host.join(path)?;
        tracing::debug!(%url, "GET (raw)");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(PewnError::HttpError)?;
        let response = Self::check_response(response).await?;
        let bytes = response.bytes().await.map_err(PewnError::HttpError)?;
        Ok(bytes.to_vec())
    }

    fn api_endpoint(&self, path: &str) -> Result<Url> {
        validate_path(path)?;
        Ok(self.api_root.join(path)?)
    }

    /// Send a request, check its status and decode the body as JSON.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(PewnError::HttpError)?;
        let response = Self::check_response(response).await?;
        let body = response.text().await.map_err(PewnError::HttpError)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(PewnError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) if !b.trim().is_empty() => b,
            _ => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        body
    }
}

/// Reject path fragments that could resolve outside the base URL.
///
/// A valid fragment is a non-empty list of `/`-separated segments with no
/// scheme, query, fragment, backslash, empty segment or dot segment.
pub(crate) fn validate_path(path: &str) -> Result<()> {
    let has_scheme = path
        .split('/')
        .next()
        .is_some_and(|first| first.contains(':'));

    if path.is_empty()
        || has_scheme
        || path.contains(['?', '#', '\\'])
        || path.split('/').any(is_unsafe_segment)
    {
        return Err(PewnError::InvalidPath(path.to_string()));
    }
    Ok(())
}

/// Empty segments and `.`/`..`, including their percent-encoded forms.
fn is_unsafe_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded.is_empty() || decoded == "." || decoded == ".."
}
