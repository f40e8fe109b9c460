//! Marketplace API client.
//!
//! One [`ApiClient`] instance serves every resource family; the methods
//! are grouped into modules by resource:
//!
//! - [`auth`] - login, registration, logout
//! - [`accounts`] - own profile, admin account management
//! - [`listings`] / [`categories`] - browsing and seller management
//! - [`cart`] / [`wishlist`] - add/remove/fetch, checkout submission
//! - [`orders`] - buyer and seller order tracking
//! - [`reviews`] - review CRUD and flagging
//! - [`photos`] - base64 photo resolution with placeholder fallback
//! - [`moderation`] - staff/admin flagged-content queues
//! - [`statistics`] - staff dashboard numbers
//!
//! Requests that mutate server state always require the session token;
//! a missing token is reported as [`ApiError::NotAuthenticated`] before
//! any bytes hit the wire. Read requests attach the token when present,
//! since public browsing works logged out.

pub mod accounts;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod listings;
pub mod moderation;
pub mod orders;
pub mod photos;
pub mod reviews;
pub mod statistics;
pub mod wishlist;

pub use auth::Registration;

use std::sync::Arc;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ErrorBody};
use crate::session::SessionStore;

/// Whether a request needs the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth<'a> {
    /// Attach the token when a session exists; proceed without otherwise.
    Optional,
    /// Fail with [`ApiError::NotAuthenticated`] when no session exists.
    Required,
    /// Use this token explicitly (login flow, before the session is
    /// installed).
    Token(&'a str),
}

/// Client for the Tradepost marketplace API.
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// session store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[derive(Debug)]
struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    session: SessionStore,
    placeholder_image_url: String,
    page_size: u32,
}

impl ApiClient {
    /// Create a client with a fresh, empty session store.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_session(config, SessionStore::new())
    }

    /// Create a client sharing an existing session store.
    #[must_use]
    pub fn with_session(config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base_url.clone(),
                session,
                placeholder_image_url: config.placeholder_image_url.clone(),
                page_size: config.page_size,
            }),
        }
    }

    /// The session store backing this client.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Placeholder image URL used when a photo cannot be resolved.
    #[must_use]
    pub fn placeholder_image_url(&self) -> &str {
        &self.inner.placeholder_image_url
    }

    /// Configured page size for paged listing fetches.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.inner.page_size
    }

    /// Build a full URL from an API path like `/api/listings`.
    pub(crate) fn url(&self, path: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        format!("{base}{path}")
    }

    /// The current bearer token, or a precondition failure.
    pub(crate) fn require_token(&self) -> Result<SecretString, ApiError> {
        self.inner
            .session
            .token()
            .ok_or(ApiError::NotAuthenticated)
    }

    /// Send a request and parse the JSON response body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: Auth<'_>,
        body: Option<&impl Serialize>,
    ) -> Result<T, ApiError> {
        let text = self.execute_raw(method, path, auth, body).await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                body = %text.chars().take(500).collect::<String>(),
                "Failed to parse API response"
            );
            ApiError::Parse(e)
        })
    }

    /// Send a request, ignoring any response body.
    ///
    /// Used for mutations whose success is the status code alone.
    pub(crate) async fn execute_empty(
        &self,
        method: Method,
        path: &str,
        auth: Auth<'_>,
        body: Option<&impl Serialize>,
    ) -> Result<(), ApiError> {
        self.execute_raw(method, path, auth, body).await.map(|_| ())
    }

    /// Send a request and return the raw success body.
    async fn execute_raw(
        &self,
        method: Method,
        path: &str,
        auth: Auth<'_>,
        body: Option<&impl Serialize>,
    ) -> Result<String, ApiError> {
        let mut request = self.inner.client.request(method, self.url(path));

        request = match auth {
            Auth::Required => {
                let token = self.require_token()?;
                request.bearer_auth(token.expose_secret())
            }
            Auth::Optional => match self.inner.session.token() {
                Some(token) => request.bearer_auth(token.expose_secret()),
                None => request,
            },
            Auth::Token(token) => request.bearer_auth(token),
        };

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let text = response.text().await?;

        if !status.is_success() {
            let message = ErrorBody::extract(&text);
            tracing::debug!(
                status = %status,
                path = %path,
                message = %message,
                "API returned non-success status"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }
}

/// Body type for requests that carry none.
///
/// `Option<&NoBody>::None` gives the helpers a concrete `Serialize` type.
#[derive(Debug, Serialize)]
pub(crate) struct NoBody {}

pub(crate) const NO_BODY: Option<&NoBody> = None;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = ClientConfig::for_base_url("http://localhost:8080").unwrap();
        ApiClient::new(&config)
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = client();
        assert_eq!(
            client.url("/api/listings"),
            "http://localhost:8080/api/listings"
        );
    }

    #[test]
    fn test_url_with_trailing_base_slash() {
        let config = ClientConfig::for_base_url("http://localhost:8080/").unwrap();
        let client = ApiClient::new(&config);
        assert_eq!(
            client.url("/api/categories"),
            "http://localhost:8080/api/categories"
        );
    }

    #[test]
    fn test_require_token_without_session() {
        let client = client();
        assert!(matches!(
            client.require_token(),
            Err(ApiError::NotAuthenticated)
        ));
    }
}
