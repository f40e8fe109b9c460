//! Photo endpoints.
//!
//! Photos travel as base64 text inside JSON, not as binary streams. The
//! display-side helpers turn that into `data:` URLs and degrade to the
//! configured placeholder rather than surfacing an error, since a broken
//! thumbnail must never take a whole page down with it.

use reqwest::Method;
use tracing::instrument;

use tradepost_core::{ListingId, PhotoId};

use crate::error::ApiError;
use crate::types::{Photo, PhotoUpload};

use super::{ApiClient, Auth, NO_BODY};

/// Wrap base64 image bytes in a browser-displayable `data:` URL.
#[must_use]
pub fn data_url(base64: &str) -> String {
    format!("data:image/jpeg;base64,{base64}")
}

/// Map "the photo is not there" statuses to `Ok(None)`.
///
/// The photo endpoints answer 400 or 404 for an absent photo; both mean
/// "no photo", not a failure.
fn absent_as_none(result: Result<Photo, ApiError>) -> Result<Option<Photo>, ApiError> {
    match result {
        Ok(photo) => Ok(Some(photo)),
        Err(ApiError::Api {
            status: 400 | 404, ..
        }) => Ok(None),
        Err(other) => Err(other),
    }
}

impl ApiClient {
    /// Fetch a single listing photo by photo id.
    ///
    /// A 400 or 404 means the photo simply is not there and maps to
    /// `Ok(None)`; only transport and server failures are errors.
    ///
    /// # Errors
    ///
    /// `Api` on non-absence failures.
    #[instrument(skip(self), fields(photo_id = %photo_id))]
    pub async fn listing_photo(&self, photo_id: PhotoId) -> Result<Option<Photo>, ApiError> {
        absent_as_none(
            self.execute(
                Method::GET,
                &format!("/api/photo/listing/{photo_id}"),
                Auth::Optional,
                NO_BODY,
            )
            .await,
        )
    }

    /// Resolve a listing photo to a displayable `data:` URL.
    ///
    /// Returns `None` when the photo is absent or the fetch fails; the
    /// failure is logged and the caller substitutes the placeholder.
    pub async fn listing_photo_data_url(&self, photo_id: PhotoId) -> Option<String> {
        match self.listing_photo(photo_id).await {
            Ok(Some(photo)) => Some(data_url(&photo.data)),
            Ok(None) => None,
            Err(error) => {
                tracing::warn!(%photo_id, %error, "Failed to fetch listing photo");
                None
            }
        }
    }

    /// Fetch every photo attached to a listing.
    ///
    /// # Errors
    ///
    /// `Api` on server failure.
    #[instrument(skip(self), fields(listing_id = %listing_id))]
    pub async fn listing_photos(&self, listing_id: ListingId) -> Result<Vec<Photo>, ApiError> {
        self.execute(
            Method::GET,
            &format!("/api/photo/listing/listing/{listing_id}"),
            Auth::Optional,
            NO_BODY,
        )
        .await
    }

    /// Attach a photo to a listing (seller action).
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self, upload), fields(listing_id = %upload.listing_id))]
    pub async fn upload_listing_photo(&self, upload: &PhotoUpload) -> Result<(), ApiError> {
        self.execute_empty(Method::POST, "/api/photo/listing", Auth::Required, Some(upload))
            .await
    }

    /// Fetch the authenticated user's avatar photo.
    ///
    /// `Ok(None)` when no avatar has been uploaded yet.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on non-absence failures.
    #[instrument(skip(self))]
    pub async fn user_photo(&self) -> Result<Option<Photo>, ApiError> {
        absent_as_none(
            self.execute(Method::GET, "/api/photo/user", Auth::Required, NO_BODY)
                .await,
        )
    }

    /// Upload the authenticated user's avatar for the first time.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self, base64_data))]
    pub async fn upload_user_photo(&self, base64_data: &str) -> Result<(), ApiError> {
        let body = UserPhotoBody { data: base64_data };
        self.execute_empty(Method::POST, "/api/photo/user", Auth::Required, Some(&body))
            .await
    }

    /// Replace the authenticated user's avatar.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self, base64_data))]
    pub async fn update_user_photo(&self, base64_data: &str) -> Result<(), ApiError> {
        let body = UserPhotoBody { data: base64_data };
        self.execute_empty(Method::PUT, "/api/photo/user", Auth::Required, Some(&body))
            .await
    }
}

#[derive(Debug, serde::Serialize)]
struct UserPhotoBody<'a> {
    data: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_prefix() {
        assert_eq!(data_url("QUJD"), "data:image/jpeg;base64,QUJD");
    }

    fn photo() -> Photo {
        Photo {
            id: None,
            data: "QUJD".to_string(),
        }
    }

    fn api_error(status: u16) -> ApiError {
        ApiError::Api {
            status,
            message: "nope".to_string(),
        }
    }

    #[test]
    fn test_absent_statuses_mean_no_photo() {
        assert!(absent_as_none(Err(api_error(404))).unwrap().is_none());
        assert!(absent_as_none(Err(api_error(400))).unwrap().is_none());
    }

    #[test]
    fn test_present_photo_passes_through() {
        let resolved = absent_as_none(Ok(photo())).unwrap();
        assert_eq!(resolved.unwrap().data, "QUJD");
    }

    #[test]
    fn test_other_failures_stay_errors() {
        let error = absent_as_none(Err(api_error(500))).unwrap_err();
        assert_eq!(error.status(), Some(500));
        assert!(absent_as_none(Err(ApiError::NotAuthenticated)).is_err());
    }
}
