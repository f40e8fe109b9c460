//! Integration tests for the Tradepost client.
//!
//! Every test here talks to a live API server and is `#[ignore]`d by
//! default.
//!
//! # Running Tests
//!
//! ```bash
//! # Point at a running server
//! export TRADEPOST_API_BASE_URL=http://localhost:8080
//!
//! # Seeded test account (plain user)
//! export TRADEPOST_TEST_USER=alice
//! export TRADEPOST_TEST_PASSWORD='Password1!'
//!
//! cargo test -p tradepost-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_session` - login, registration validation, logout
//! - `browse_catalog` - listings, categories, photo resolution
//! - `cart_wishlist` - membership mutations and snapshots

use std::sync::Once;

use tradepost_client::{ApiClient, ClientConfig, Credentials};

static TRACING: Once = Once::new();

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Base URL for the API server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("TRADEPOST_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// A fresh client with an empty session store.
#[must_use]
pub fn client() -> ApiClient {
    init_tracing();
    let config = ClientConfig::for_base_url(&base_url()).expect("valid base URL");
    ApiClient::new(&config)
}

/// Credentials for the seeded test account.
#[must_use]
pub fn test_credentials() -> Credentials {
    let user = std::env::var("TRADEPOST_TEST_USER").unwrap_or_else(|_| "alice".to_string());
    let password =
        std::env::var("TRADEPOST_TEST_PASSWORD").unwrap_or_else(|_| "Password1!".to_string());
    Credentials::new(&user, &password)
}

/// A client that has already logged in with the test account.
///
/// # Panics
///
/// Panics when the server is unreachable or the seeded account is
/// missing; these tests assume a prepared environment.
pub async fn logged_in_client() -> ApiClient {
    let client = client();
    client
        .login(&test_credentials())
        .await
        .expect("test account login");
    client
}
