//! Shopping cart endpoints and checkout submission.
//!
//! Cart membership lives on the server keyed by the session; the client
//! holds a [`CartSnapshot`] per screen and reconciles it locally after
//! each mutation (see [`crate::reconcile`]) instead of re-fetching.

use reqwest::Method;
use tracing::instrument;

use tradepost_core::ListingId;

use crate::error::ApiError;
use crate::types::{CartSnapshot, CheckoutRequest, CheckoutSession};

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Fetch the authenticated user's cart, without photos.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<CartSnapshot, ApiError> {
        self.execute(Method::GET, "/api/shopping-carts", Auth::Required, NO_BODY)
            .await
    }

    /// Fetch the cart with every item's cover photo resolved.
    ///
    /// Photo failures degrade to the placeholder; only the cart fetch
    /// itself can fail.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn cart_with_images(&self) -> Result<CartSnapshot, ApiError> {
        let snapshot = self.cart().await?;
        Ok(CartSnapshot {
            listings: self.attach_images(snapshot.listings).await,
        })
    }

    /// Add a listing to the cart.
    ///
    /// Adding a listing already in the cart is accepted by the server as
    /// a no-op; local de-duplication is handled at reconcile time.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn add_to_cart(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::POST,
            &format!("/api/listings/{listing_id}/shopping-cart"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Remove a listing from the cart.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn remove_from_cart(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::DELETE,
            &format!("/api/listings/{listing_id}/shopping-cart"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Submit checkout for the whole cart.
    ///
    /// Returns the payment session handle; the caller follows the
    /// redirect. State around this call is managed by
    /// [`crate::checkout::CheckoutFlow`].
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self, request))]
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutSession, ApiError> {
        self.execute(
            Method::POST,
            "/api/shopping-carts/checkout",
            Auth::Required,
            Some(request),
        )
        .await
    }
}
