//! Listing endpoints: browsing, seller management, flagging.
//!
//! Listing fetches that feed a product grid resolve each listing's cover
//! photo into a displayable image source. Photo resolution for different
//! listings runs concurrently; within one listing the order is strict:
//! fetch listing, inspect photos, fetch the first photo. An individual
//! photo failure never fails the page - the listing falls back to the
//! placeholder image.

use futures::future::join_all;
use reqwest::Method;
use tracing::instrument;

use tradepost_core::ListingId;

use crate::error::ApiError;
use crate::types::{Listing, ListingDraft, ListingUpdate, Page};

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Fetch a page of listings without resolving photos.
    ///
    /// # Errors
    ///
    /// `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn listings(&self, page_size: u32) -> Result<Page<Listing>, ApiError> {
        self.execute(
            Method::GET,
            &format!("/api/listings?pageSize={page_size}"),
            Auth::Optional,
            NO_BODY,
        )
        .await
    }

    /// Fetch a page of listings with every cover photo resolved.
    ///
    /// Each returned listing has `image_url` set: the first photo as a
    /// data URL, or the placeholder when the listing has no photos or
    /// its photo cannot be fetched.
    ///
    /// # Errors
    ///
    /// `Api` only when the listing fetch itself fails; photo failures
    /// degrade to the placeholder.
    #[instrument(skip(self))]
    pub async fn listings_with_images(&self, page_size: u32) -> Result<Page<Listing>, ApiError> {
        let page = self.listings(page_size).await?;
        Ok(Page {
            content: self.attach_images(page.content).await,
        })
    }

    /// Resolve cover photos for an already-fetched set of listings.
    ///
    /// Used by every grid-shaped view (home, flagged queues) after its
    /// own fetch.
    pub async fn attach_images(&self, listings: Vec<Listing>) -> Vec<Listing> {
        join_all(listings.into_iter().map(|listing| self.attach_image(listing))).await
    }

    async fn attach_image(&self, mut listing: Listing) -> Listing {
        let resolved = match listing.photos.first() {
            Some(photo) => self.listing_photo_data_url(photo.id).await,
            None => None,
        };
        listing.image_url =
            Some(resolved.unwrap_or_else(|| self.placeholder_image_url().to_string()));
        listing
    }

    /// Fetch a single listing.
    ///
    /// # Errors
    ///
    /// `NotFound` when the listing does not exist; `Api` otherwise.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn listing(&self, listing_id: ListingId) -> Result<Listing, ApiError> {
        self.execute(
            Method::GET,
            &format!("/api/listings/{listing_id}"),
            Auth::Optional,
            NO_BODY,
        )
        .await
        .map_err(|e| match e {
            ApiError::Api { status: 404, .. } => {
                ApiError::NotFound(format!("listing {listing_id}"))
            }
            other => other,
        })
    }

    /// Create a listing (seller action).
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_listing(&self, draft: &ListingDraft) -> Result<Listing, ApiError> {
        self.execute(Method::POST, "/api/listings", Auth::Required, Some(draft))
            .await
    }

    /// Partially update a listing (seller action).
    ///
    /// Build the payload with [`ListingUpdate::from_inputs`]; untouched
    /// fields never reach the body.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self, update), fields(listing_id = %listing_id))]
    pub async fn update_listing(
        &self,
        listing_id: ListingId,
        update: &ListingUpdate,
    ) -> Result<Listing, ApiError> {
        if update.is_empty() {
            return Err(ApiError::Api {
                status: 400,
                message: "no fields to update".to_string(),
            });
        }
        self.execute(
            Method::POST,
            &format!("/api/listings/{listing_id}"),
            Auth::Required,
            Some(update),
        )
        .await
    }

    /// Report a listing for moderation.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn flag_listing(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/listings/{listing_id}/flag"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }
}
