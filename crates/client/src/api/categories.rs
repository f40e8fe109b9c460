//! Category lookup.

use reqwest::Method;
use tracing::instrument;

use crate::error::ApiError;
use crate::types::Category;

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Fetch all listing categories.
    ///
    /// Public; used to populate filter dropdowns and the listing form.
    ///
    /// # Errors
    ///
    /// `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.execute(Method::GET, "/api/categories", Auth::Optional, NO_BODY)
            .await
    }
}
