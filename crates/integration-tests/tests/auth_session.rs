//! Integration tests for login, session state, and route guards.
//!
//! These tests require:
//! - A running Tradepost API server (`TRADEPOST_API_BASE_URL`)
//! - A seeded plain-user account (`TRADEPOST_TEST_USER` / `TRADEPOST_TEST_PASSWORD`)
//!
//! Run with: cargo test -p tradepost-integration-tests -- --ignored

use reqwest::StatusCode;
use tradepost_core::Role;
use tradepost_client::guard::{self, GuardDenied};
use tradepost_client::{AuthError, Credentials};
use tradepost_integration_tests::{base_url, client, logged_in_client, test_credentials};

#[tokio::test]
#[ignore = "Requires running API server and seeded test account"]
async fn test_login_populates_session() {
    let client = logged_in_client().await;

    let session = client.session().current().expect("session after login");
    assert!(!session.username.is_empty());
    assert!(!session.email.is_empty());

    // The who-am-I endpoint agrees with the stored session.
    let profile = client.profile().await.expect("profile fetch");
    assert_eq!(profile.username, session.username);
    assert_eq!(profile.role, session.role);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_login_with_wrong_password_is_invalid_credentials() {
    let client = client();
    let credentials = Credentials::new("no-such-user-here", "Definitely-wrong1!");

    let error = client.login(&credentials).await.expect_err("login fails");
    assert!(matches!(error, AuthError::InvalidCredentials));
    assert!(client.session().current().is_none());
}

#[tokio::test]
#[ignore = "Requires running API server and seeded test account"]
async fn test_claims_login_matches_whoami_login() {
    let whoami = logged_in_client().await;
    let expected = whoami.session().current().expect("session");

    let via_claims = client();
    let session = via_claims
        .login_via_claims(&test_credentials())
        .await
        .expect("claims login");
    assert_eq!(session.username, expected.username);
    assert_eq!(session.role, expected.role);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded test account"]
async fn test_logout_clears_session_and_guards() {
    let client = logged_in_client().await;
    assert!(guard::require_authenticated(client.session()).is_ok());

    client.logout();

    assert!(client.session().current().is_none());
    assert_eq!(
        guard::require_authenticated(client.session()).unwrap_err(),
        GuardDenied::RedirectToLogin
    );
    // Gated endpoints refuse without a token before any network traffic.
    let error = client.cart().await.expect_err("cart without session");
    assert!(error.status().is_none());
}

#[tokio::test]
#[ignore = "Requires running API server and seeded plain-user account"]
async fn test_plain_user_is_not_staff() {
    let client = logged_in_client().await;
    let denied = guard::require_any_role(client.session(), &[Role::Admin, Role::Stuff]);
    // Seeded test account is a plain user.
    assert_eq!(denied.unwrap_err(), GuardDenied::NotAuthorized);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_gated_endpoint_rejects_raw_unauthenticated_request() {
    // Sanity check against the raw wire, bypassing the typed client.
    let response = reqwest::Client::new()
        .get(format!("{}/api/shopping-carts", base_url()))
        .send()
        .await
        .expect("request sent");
    assert!(
        response.status() == StatusCode::UNAUTHORIZED
            || response.status() == StatusCode::FORBIDDEN,
        "expected auth rejection, got: {}",
        response.status()
    );
}
