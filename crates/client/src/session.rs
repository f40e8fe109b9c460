//! Session store and authentication types.
//!
//! The session is process-wide, in-memory state: created empty at app
//! start, populated by login, cleared by logout, never persisted across
//! restarts. Every authenticated fetcher reads the bearer token from
//! here.
//!
//! # Stale-response guard
//!
//! Logout does not cancel in-flight requests; it bumps a generation
//! counter instead. A view captures a [`SessionEpoch`] before fetching
//! and runs its result through [`SessionEpoch::admit`] afterwards - if
//! the session changed in between, the result is discarded rather than
//! applied to state that no longer belongs to that session.

use std::sync::{Arc, PoisonError, RwLock};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use tradepost_core::{EmailError, Role};

use crate::error::ApiError;

/// Minimum password length for registration.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters a registration password may (and must) contain.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Errors surfaced by login, registration, and their client-side
/// validation.
///
/// Validation variants are produced before any network call; they are
/// form-level messages, never thrown past the caller.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Login identifier is empty.
    #[error("username or email is required")]
    IdentifierRequired,

    /// Password field is empty.
    #[error("password is required")]
    PasswordRequired,

    /// Password does not meet the complexity policy.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Server rejected the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The bearer token could not be decoded for claims resolution.
    #[error("malformed access token")]
    MalformedToken,

    /// The token carried no usable role claim.
    #[error("no role claim in session")]
    MissingRole,

    /// Underlying API failure (network, non-2xx, parse).
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Login credentials as entered in the form.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Username or email address.
    pub identifier: String,
    /// Plaintext password, redacted from debug output.
    pub password: SecretString,
}

impl Credentials {
    /// Build credentials from form inputs.
    #[must_use]
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Client-side validation; runs before any network call.
    ///
    /// The identifier may be an email address or a username, so the only
    /// structural requirement is that it is non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::IdentifierRequired` or
    /// `AuthError::PasswordRequired`.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.identifier.trim().is_empty() {
            return Err(AuthError::IdentifierRequired);
        }
        if self.password.expose_secret().is_empty() {
            return Err(AuthError::PasswordRequired);
        }
        Ok(())
    }
}

/// Validate a registration password against the complexity policy.
///
/// Requires at least 8 characters with one lowercase letter, one
/// uppercase letter, one digit, and one of `@$!%*?&`.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` describing the first failed rule.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(AuthError::WeakPassword(
            "password must contain a lowercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AuthError::WeakPassword(
            "password must contain an uppercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AuthError::WeakPassword(
            "password must contain a digit".to_string(),
        ));
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Err(AuthError::WeakPassword(format!(
            "password must contain one of {PASSWORD_SPECIALS}"
        )));
    }
    Ok(())
}

/// The authenticated user's identity for this browsing session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque bearer token; attached to every authenticated request.
    pub token: SecretString,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Role claim, canonicalized at the store boundary.
    pub role: Role,
}

/// Claims payload embedded in the access token.
///
/// One of the two supported profile-resolution paths; the other is the
/// who-am-I endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Subject: the username.
    pub sub: String,
    /// Email claim, when present.
    #[serde(default)]
    pub email: Option<String>,
    /// Role claim, when present.
    #[serde(default)]
    pub role: Option<String>,
}

/// Decode the claims payload of a JWT-shaped bearer token.
///
/// Only decodes; signature verification is the server's job.
///
/// # Errors
///
/// Returns `AuthError::MalformedToken` if the token is not three
/// dot-separated base64url segments with a JSON payload.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AuthError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or(AuthError::MalformedToken)?
        .trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::MalformedToken)
}

#[derive(Debug, Default)]
struct StoreState {
    session: Option<Session>,
    generation: u64,
}

/// Process-wide holder for the current session.
///
/// Cheap to clone; all clones share state. Login and logout are
/// user-serialized actions, so readers only ever need the most recent
/// value.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<StoreState>>,
}

impl SessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session, if logged in.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.read().session.clone()
    }

    /// The current bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.read().session.as_ref().map(|s| s.token.clone())
    }

    /// The current role claim, if logged in.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.read().session.as_ref().map(|s| s.role)
    }

    /// Install a session (login). Bumps the generation so responses
    /// started under the previous session are discarded.
    pub fn set(&self, session: Session) {
        let mut state = self.write();
        state.session = Some(session);
        state.generation += 1;
    }

    /// Clear the session synchronously (logout).
    ///
    /// In-flight requests using the old token are not cancelled; their
    /// results fail the [`SessionEpoch`] check instead.
    pub fn clear(&self) {
        let mut state = self.write();
        state.session = None;
        state.generation += 1;
    }

    /// Capture the current epoch before starting a fetch.
    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        SessionEpoch {
            store: self.clone(),
            generation: self.read().generation,
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A snapshot of the session generation, used as a stale-response guard.
#[derive(Debug, Clone)]
pub struct SessionEpoch {
    store: SessionStore,
    generation: u64,
}

impl SessionEpoch {
    /// Whether the session is unchanged since this epoch was captured.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.store.read().generation == self.generation
    }

    /// Admit a fetched value only if the session has not changed since
    /// the fetch began; stale results are dropped.
    #[must_use]
    pub fn admit<T>(&self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            tracing::debug!("discarding response from a stale session epoch");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            token: SecretString::from("tok".to_string()),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = SessionStore::new();
        assert!(store.current().is_none());
        assert!(store.token().is_none());
        assert!(store.role().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let store = SessionStore::new();
        store.set(session(Role::User));
        assert_eq!(store.role(), Some(Role::User));
        store.clear();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_epoch_discards_after_logout() {
        let store = SessionStore::new();
        store.set(session(Role::User));
        let epoch = store.epoch();
        assert!(epoch.is_current());
        assert_eq!(epoch.admit(1), Some(1));

        store.clear();
        assert!(!epoch.is_current());
        assert_eq!(epoch.admit(1), None);
    }

    #[test]
    fn test_epoch_discards_after_relogin() {
        let store = SessionStore::new();
        store.set(session(Role::User));
        let epoch = store.epoch();
        store.set(session(Role::Admin));
        assert_eq!(epoch.admit("fetched"), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();
        store.set(session(Role::Seller));
        assert_eq!(other.role(), Some(Role::Seller));
    }

    #[test]
    fn test_credentials_validation() {
        assert!(Credentials::new("alice", "pw").validate().is_ok());
        assert!(Credentials::new("alice@example.com", "pw").validate().is_ok());
        assert!(matches!(
            Credentials::new("   ", "pw").validate(),
            Err(AuthError::IdentifierRequired)
        ));
        assert!(matches!(
            Credentials::new("alice", "").validate(),
            Err(AuthError::PasswordRequired)
        ));
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("Str0ng!pw").is_ok());
        assert!(matches!(
            validate_password("Sh0rt!a"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(matches!(
            validate_password("alllower1!"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(matches!(
            validate_password("ALLUPPER1!"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(matches!(
            validate_password("NoDigits!!"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(matches!(
            validate_password("NoSpecial1"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_decode_claims() {
        // {"sub":"alice","email":"alice@example.com","role":"user"}
        let payload = URL_SAFE_NO_PAD
            .encode(r#"{"sub":"alice","email":"alice@example.com","role":"user"}"#);
        let token = format!("header.{payload}.sig");
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
        assert_eq!(claims.role.as_deref(), Some("user"));
    }

    #[test]
    fn test_decode_claims_rejects_garbage() {
        assert!(matches!(
            decode_claims("not-a-jwt"),
            Err(AuthError::MalformedToken)
        ));
        assert!(matches!(
            decode_claims("a.%%%.c"),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session {
            token: SecretString::from("s3cret-bearer-value".to_string()),
            ..session(Role::User)
        };
        let formatted = format!("{session:?}");
        assert!(!formatted.contains("s3cret-bearer-value"));
    }
}
