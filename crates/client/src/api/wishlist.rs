//! Wishlist endpoints.
//!
//! The wishlist view offers a move-to-cart action: add to the cart
//! first, then drop from the wishlist only once the add succeeded, so a
//! failure never loses the item from both lists.

use reqwest::Method;
use tracing::instrument;

use tradepost_core::ListingId;

use crate::error::ApiError;
use crate::types::WishlistSnapshot;

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Fetch the authenticated user's wishlist, without photos.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn wishlist(&self) -> Result<WishlistSnapshot, ApiError> {
        self.execute(Method::GET, "/api/wishlists", Auth::Required, NO_BODY)
            .await
    }

    /// Fetch the wishlist with every item's cover photo resolved.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn wishlist_with_images(&self) -> Result<WishlistSnapshot, ApiError> {
        let snapshot = self.wishlist().await?;
        Ok(WishlistSnapshot {
            listings: self.attach_images(snapshot.listings).await,
        })
    }

    /// Add a listing to the wishlist.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn add_to_wishlist(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::POST,
            &format!("/api/listings/{listing_id}/wishlist"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Remove a listing from the wishlist.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn remove_from_wishlist(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::DELETE,
            &format!("/api/listings/{listing_id}/wishlist"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Move a wishlist item into the cart.
    ///
    /// The wishlist removal only runs after the cart add succeeds; on
    /// failure the item stays wished for.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn move_to_cart(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.add_to_cart(listing_id).await?;
        self.remove_from_wishlist(listing_id).await
    }
}
