//! Staff and admin moderation queues.
//!
//! Two parallel endpoint families serve the same workflow at different
//! privilege levels: staff works under `/api/stuff/...` (the historical
//! spelling the backend shipped with), admins under `/api/admin/...`.
//! Resolving an item, either way, removes the row from the local queue
//! via [`crate::reconcile::remove_item`] rather than re-fetching the
//! page.

use reqwest::Method;
use tracing::instrument;

use tradepost_core::{ListingId, ReviewId};

use crate::error::ApiError;
use crate::types::{Listing, Page, Review};

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Fetch the staff queue of flagged listings, paginated.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` (403) without the
    /// staff role.
    #[instrument(skip(self))]
    pub async fn staff_flagged_listings(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Listing>, ApiError> {
        self.execute(
            Method::GET,
            &format!("/api/stuff/listings/flagged?page={page}&pageSize={page_size}"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Uphold a listing flag (staff action): the listing goes blocked.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn staff_block_listing(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/stuff/listings/{listing_id}/status/flag"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Dismiss a listing flag (staff action): the listing goes back to
    /// active.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn staff_dismiss_listing(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/stuff/listings/{listing_id}/status/dismiss"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Fetch the staff queue of flagged reviews, paginated.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` (403) without the
    /// staff role.
    #[instrument(skip(self))]
    pub async fn staff_flagged_reviews(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Review>, ApiError> {
        self.execute(
            Method::GET,
            &format!("/api/stuff/reviews/flagged?page={page}&pageSize={page_size}"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Uphold a review flag (staff action): the review is removed.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(review_id = %review_id))]
    pub async fn staff_block_review(&self, review_id: ReviewId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/stuff/review/{review_id}/status/flag"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Dismiss a review flag (staff action).
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(review_id = %review_id))]
    pub async fn staff_dismiss_review(&self, review_id: ReviewId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/stuff/review/{review_id}/status/dismiss"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Fetch the admin queue of flagged listings.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` (403) without the
    /// admin role.
    #[instrument(skip(self))]
    pub async fn admin_flagged_listings(&self) -> Result<Page<Listing>, ApiError> {
        self.execute(
            Method::GET,
            "/api/admin/listings/status/flagged",
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Block a flagged listing (admin action).
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn admin_block_listing(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/admin/listings/{listing_id}/block"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Dismiss a listing flag (admin action).
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn admin_dismiss_listing(&self, listing_id: ListingId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/admin/listings/{listing_id}/dismiss"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Fetch the admin queue of flagged reviews.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` (403) without the
    /// admin role.
    #[instrument(skip(self))]
    pub async fn admin_flagged_reviews(&self) -> Result<Page<Review>, ApiError> {
        self.execute(
            Method::GET,
            "/api/admin/reviews/status/flagged",
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Block a flagged review (admin action).
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(review_id = %review_id))]
    pub async fn admin_block_review(&self, review_id: ReviewId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/admin/reviews/{review_id}/block"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Dismiss a review flag (admin action).
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(review_id = %review_id))]
    pub async fn admin_dismiss_review(&self, review_id: ReviewId) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/admin/reviews/{review_id}/dismiss"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }
}
