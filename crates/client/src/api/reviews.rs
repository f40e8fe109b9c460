//! Review endpoints.
//!
//! One review per user per listing; the client hides the review form
//! when [`crate::types::Listing::has_review_by`] already matches, and
//! the server enforces the rule regardless.

use reqwest::Method;
use tracing::instrument;

use tradepost_core::{ListingId, ReviewId};

use crate::error::ApiError;
use crate::types::{Review, ReviewDraft};

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Leave a review on a listing.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure
    /// (including a duplicate review).
    #[instrument(skip(self, draft), fields(listing_id = %listing_id, rating = draft.rating))]
    pub async fn create_review(
        &self,
        listing_id: ListingId,
        draft: &ReviewDraft,
    ) -> Result<Review, ApiError> {
        self.execute(
            Method::POST,
            &format!("/api/listings/{listing_id}/review"),
            Auth::Required,
            Some(draft),
        )
        .await
    }

    /// Replace the user's own review on a listing.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self, draft), fields(listing_id = %listing_id, review_id = %review_id))]
    pub async fn update_review(
        &self,
        listing_id: ListingId,
        review_id: ReviewId,
        draft: &ReviewDraft,
    ) -> Result<Review, ApiError> {
        self.execute(
            Method::PUT,
            &format!("/api/listings/{listing_id}/review/{review_id}"),
            Auth::Required,
            Some(draft),
        )
        .await
    }

    /// Delete the user's own review.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id, review_id = %review_id))]
    pub async fn delete_review(
        &self,
        listing_id: ListingId,
        review_id: ReviewId,
    ) -> Result<(), ApiError> {
        self.execute_empty(
            Method::DELETE,
            &format!("/api/listings/{listing_id}/review/{review_id}"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }

    /// Report a review for moderation.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id, review_id = %review_id))]
    pub async fn flag_review(
        &self,
        listing_id: ListingId,
        review_id: ReviewId,
    ) -> Result<(), ApiError> {
        self.execute_empty(
            Method::PUT,
            &format!("/api/listings/{listing_id}/review/{review_id}/flag"),
            Auth::Required,
            NO_BODY,
        )
        .await
    }
}
