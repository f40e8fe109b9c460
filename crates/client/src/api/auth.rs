//! Login, registration, and logout.
//!
//! After login resolves, the session store exposes username, email, and
//! role before any gated view renders. Two profile-resolution paths are
//! supported: a who-am-I call ([`ApiClient::login`]) and decoding the
//! claims payload embedded in the token
//! ([`ApiClient::login_via_claims`]).

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use tradepost_core::{Email, Role};

use crate::error::ApiError;
use crate::session::{AuthError, Credentials, Session, decode_claims, validate_password};
use crate::types::Profile;

use super::{ApiClient, Auth, NO_BODY};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username_or_email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
    /// Role hint some deployments return alongside the token.
    #[serde(default)]
    user_role: Option<String>,
}

/// Registration form data.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
    role: Role,
}

impl ApiClient {
    /// Log in and resolve the profile through the who-am-I endpoint.
    ///
    /// On success the session store is populated and the new session
    /// returned. Invalid credentials come back as
    /// [`AuthError::InvalidCredentials`] for form-level display, never a
    /// panic or an unhandled status.
    ///
    /// # Errors
    ///
    /// Validation errors before any network call; `InvalidCredentials`
    /// on a 401; `AuthError::Api` for other failures.
    #[instrument(skip(self, credentials), fields(identifier = %credentials.identifier))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let token = self.request_token(credentials).await?;

        let profile: Profile = self
            .execute(Method::GET, "/api/accounts", Auth::Token(&token), NO_BODY)
            .await?;

        let session = Session {
            token: SecretString::from(token),
            username: profile.username,
            email: profile.email,
            role: profile.role,
        };
        self.session().set(session.clone());
        Ok(session)
    }

    /// Log in and resolve the profile from the token's claims payload.
    ///
    /// Avoids the extra who-am-I round trip; the role comes from the
    /// login response hint when present, otherwise from the claims.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::login`], plus `MalformedToken`/`MissingRole`
    /// when the token cannot supply a profile.
    #[instrument(skip(self, credentials), fields(identifier = %credentials.identifier))]
    pub async fn login_via_claims(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, AuthError> {
        let (token, role_hint) = self.request_token_with_hint(credentials).await?;

        let claims = decode_claims(&token)?;
        let role_str = role_hint
            .or(claims.role)
            .ok_or(AuthError::MissingRole)?;
        let role: Role = role_str.parse().map_err(|_| AuthError::MissingRole)?;

        let session = Session {
            token: SecretString::from(token),
            username: claims.sub.clone(),
            email: claims.email.unwrap_or(claims.sub),
            role,
        };
        self.session().set(session.clone());
        Ok(session)
    }

    /// Register a new user account.
    ///
    /// All field validation happens client-side first; nothing reaches
    /// the network on a validation failure. The new account starts as a
    /// plain user; the caller logs in separately afterwards.
    ///
    /// # Errors
    ///
    /// `AuthError` validation variants, or `AuthError::Api` when the
    /// server rejects the registration (e.g. username taken).
    #[instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        if registration.username.trim().is_empty() {
            return Err(AuthError::IdentifierRequired);
        }
        let email = Email::parse(&registration.email)?;
        validate_password(&registration.password)?;
        if registration.password != registration.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let body = RegisterRequest {
            username: registration.username.trim(),
            password: &registration.password,
            email: email.as_str(),
            role: Role::User,
        };
        self.execute_empty(Method::POST, "/api/auth/register", Auth::Optional, Some(&body))
            .await?;
        Ok(())
    }

    /// Clear the session synchronously.
    ///
    /// In-flight requests keep their old token; their results are
    /// discarded by the session epoch check rather than cancelled.
    pub fn logout(&self) {
        self.session().clear();
    }

    async fn request_token(&self, credentials: &Credentials) -> Result<String, AuthError> {
        self.request_token_with_hint(credentials)
            .await
            .map(|(token, _)| token)
    }

    async fn request_token_with_hint(
        &self,
        credentials: &Credentials,
    ) -> Result<(String, Option<String>), AuthError> {
        credentials.validate()?;

        let body = LoginRequest {
            username_or_email: credentials.identifier.trim(),
            password: credentials.password.expose_secret(),
        };
        let response: LoginResponse = self
            .execute(Method::POST, "/api/auth/login", Auth::Optional, Some(&body))
            .await
            .map_err(|e| match e {
                ApiError::Api { status: 401, .. } => AuthError::InvalidCredentials,
                other => AuthError::Api(other),
            })?;

        Ok((response.access_token, response.user_role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_shape() {
        let body = LoginRequest {
            username_or_email: "alice@example.com",
            password: "pw",
        };
        let value = serde_json::to_value(&body).expect("serializes");
        assert_eq!(
            value,
            serde_json::json!({"usernameOrEmail": "alice@example.com", "password": "pw"})
        );
    }

    #[test]
    fn test_login_response_without_role_hint() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"accessToken": "abc"}"#).expect("parses");
        assert_eq!(response.access_token, "abc");
        assert!(response.user_role.is_none());
    }

    #[test]
    fn test_register_request_sends_canonical_role() {
        let body = RegisterRequest {
            username: "alice",
            password: "pw",
            email: "a@b.c",
            role: Role::User,
        };
        let value = serde_json::to_value(&body).expect("serializes");
        assert_eq!(value["role"], "USER");
    }
}
