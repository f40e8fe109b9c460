//! Account endpoints: own profile and admin account management.

use reqwest::Method;
use tracing::instrument;

use tradepost_core::AccountId;

use crate::error::ApiError;
use crate::types::{Account, AccountUpdate, Page, Profile};

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Fetch the authenticated user's profile (who-am-I).
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.execute(Method::GET, "/api/accounts", Auth::Required, NO_BODY)
            .await
    }

    /// Partially update the authenticated user's account.
    ///
    /// Build the payload with [`AccountUpdate::from_inputs`] so untouched
    /// fields stay out of the body; an empty update is rejected here
    /// rather than sent as a no-op request.
    ///
    /// # Errors
    ///
    /// `Api` with status 400 semantics for an empty update is avoided by
    /// the local check; otherwise `NotAuthenticated` or `Api`.
    #[instrument(skip(self, update))]
    pub async fn update_account(&self, update: &AccountUpdate) -> Result<Profile, ApiError> {
        if update.is_empty() {
            return Err(ApiError::Api {
                status: 400,
                message: "no fields to update".to_string(),
            });
        }
        self.execute(Method::PUT, "/api/accounts", Auth::Required, Some(update))
            .await
    }

    /// Delete the authenticated user's account.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.execute_empty(Method::DELETE, "/api/accounts", Auth::Required, NO_BODY)
            .await
    }

    /// Request promotion of the current account to seller.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn become_seller(&self) -> Result<(), ApiError> {
        self.execute_empty(
            Method::POST,
            "/api/accounts/become-seller",
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// List accounts (admin/staff view), paginated.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` (403) without the
    /// admin role.
    #[instrument(skip(self))]
    pub async fn admin_accounts(&self, page: u32, size: u32) -> Result<Page<Account>, ApiError> {
        self.execute(
            Method::GET,
            &format!("/api/admin/accounts?page={page}&size={size}"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Suspend an account (admin action).
    ///
    /// On success the caller patches the local list row to `BLOCKED`
    /// (see [`crate::reconcile::patch_item`]) instead of re-fetching the
    /// page.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(account_id = %account_id))]
    pub async fn block_account(&self, account_id: AccountId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/admin/accounts/{account_id}/block"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }
}
