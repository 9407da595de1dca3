//! Core RewardsKit client implementation.

use crate::error::{ApiErrorPayload, ClientError, ErrorEnvelope, Result};
use crate::types::UserResource;
use reqwest::{Client as HttpClient, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.rewardskit.com";

const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// A server-mode client for the RewardsKit API.
///
/// Holds a private API key and acts on any user; every operation takes an
/// explicit `app_user_id`. For client-side embedding fixed to one user, see
/// [`BoundClient`](crate::BoundClient).
///
/// A single instance is safe for unlimited concurrent calls: all methods
/// take `&self`, per-call state lives in the call's own scope, and the
/// credentials are immutable after construction.
///
/// # Example
///
/// ```no_run
/// use rewardskit::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(std::env::var("REWARDSKIT_API_KEY")?);
///
/// match client.fetch_user("app-user-1").await? {
///     Some(user) => println!("premium: {:?}", user.is_premium),
///     None => println!("no such user"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL of the deployment.
    base_url: String,
    /// HTTP client.
    http: HttpClient,
    /// API key (or project key, in bound mode).
    api_key: String,
    /// Header the key is sent in.
    api_key_header: String,
    /// Path root for user resources.
    resource: UserResource,
}

impl Client {
    /// Create a server-mode client holding a private API key.
    ///
    /// Requests go to [`DEFAULT_BASE_URL`]; use [`Client::with_base_url`]
    /// to target another deployment.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpClient::new(),
            api_key: api_key.into(),
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            resource: UserResource::default(),
        }
    }

    /// Point the client at a different deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not start with `http://` or
    /// `https://`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {base_url}"
            )));
        }
        self.base_url = base_url;
        Ok(self)
    }

    /// Set a request timeout enforced by the underlying transport.
    ///
    /// The client itself imposes no timeout; a timed-out request surfaces
    /// as [`ClientError::Transport`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = HttpClient::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Override the header the key is sent in.
    ///
    /// Referral deployments use `X-API-Key` (the default); user-resource
    /// deployments use `x-api-key`.
    #[must_use]
    pub fn with_api_key_header(mut self, name: impl Into<String>) -> Self {
        self.api_key_header = name.into();
        self
    }

    /// Select the path root user resources live under.
    #[must_use]
    pub fn with_user_resource(mut self, resource: UserResource) -> Self {
        self.resource = resource;
        self
    }

    /// Path of a single user resource.
    pub(crate) fn user_path(&self, app_user_id: &str) -> String {
        format!("{}/{}", self.resource.root(), app_user_id)
    }

    /// Path of the user collection.
    pub(crate) fn users_root(&self) -> &'static str {
        self.resource.root()
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attach the credential header to a request.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(self.api_key_header.as_str(), self.api_key.as_str())
    }

    /// Execute a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(method = "GET", %url, "sending request");
        let request = self.with_auth(self.http.get(&url));

        request.send().await.map_err(ClientError::Transport)
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(method = "POST", %url, "sending request");
        let request = self.with_auth(self.http.post(&url)).json(body);

        request.send().await.map_err(ClientError::Transport)
    }

    /// Execute a PATCH request with a JSON body.
    pub(crate) async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(method = "PATCH", %url, "sending request");
        let request = self.with_auth(self.http.patch(&url)).json(body);

        request.send().await.map_err(ClientError::Transport)
    }

    /// Execute a DELETE request with a JSON body.
    pub(crate) async fn delete<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(method = "DELETE", %url, "sending request");
        let request = self.with_auth(self.http.delete(&url)).json(body);

        request.send().await.map_err(ClientError::Transport)
    }

    /// Handle a response and deserialize the JSON payload.
    pub(crate) async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(ClientError::Transport)?;
            serde_json::from_str(&body).map_err(ClientError::Decode)
        } else {
            Err(self.decode_error(response).await)
        }
    }

    /// Handle a single-resource fetch response.
    ///
    /// A classified 404 is an expected outcome for fetches (the resource
    /// does not exist yet) and maps to `Ok(None)`. Transport failures are
    /// never absorbed this way.
    pub(crate) async fn handle_optional_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Option<T>> {
        match self.handle_response(response).await {
            Ok(value) => Ok(Some(value)),
            Err(ClientError::Api(payload)) if payload.status_code == 404 => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Handle a response that returns no body (201/204).
    pub(crate) async fn handle_empty_response(&self, response: Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(self.decode_error(response).await)
        }
    }

    /// Decode an error response into `ClientError::Api`.
    ///
    /// The envelope is decoded here exactly once; callers only ever see the
    /// resolved [`ApiErrorPayload`]. Bodies that are not the documented
    /// envelope fall back to the HTTP status with the raw body as detail.
    async fn decode_error(&self, response: Response) -> ClientError {
        let http_status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return ClientError::Transport(err),
        };

        let payload = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => ApiErrorPayload::from_envelope(http_status, envelope),
            Err(_) => ApiErrorPayload::from_raw(http_status, body),
        };
        ClientError::Api(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let client = Client::new("secret");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.api_key, "secret");
        assert_eq!(client.api_key_header, "X-API-Key");
        assert_eq!(client.resource, UserResource::Referral);
    }

    #[test]
    fn url_building() {
        let client = Client::new("k").with_base_url("http://localhost:8080").unwrap();
        assert_eq!(
            client.url("referral/users/u1"),
            "http://localhost:8080/referral/users/u1"
        );
        assert_eq!(
            client.url("/referral/users/u1"),
            "http://localhost:8080/referral/users/u1"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = Client::new("k").with_base_url("http://localhost:8080/").unwrap();
        assert_eq!(client.url("users"), "http://localhost:8080/users");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = Client::new("k").with_base_url("localhost:8080");
        match result {
            Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("http://")),
            _ => panic!("expected InvalidUrl error"),
        }
    }

    #[test]
    fn user_path_follows_resource_config() {
        let referral = Client::new("k");
        assert_eq!(referral.user_path("u1"), "referral/users/u1");

        let users = Client::new("k").with_user_resource(UserResource::Users);
        assert_eq!(users.user_path("u1"), "users/u1");
        assert_eq!(users.users_root(), "users");
    }

    #[test]
    fn api_key_header_is_configurable() {
        let client = Client::new("k").with_api_key_header("x-api-key");
        assert_eq!(client.api_key_header, "x-api-key");
    }
}
