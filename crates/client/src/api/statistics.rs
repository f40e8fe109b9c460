//! Staff dashboard statistics.

use reqwest::Method;
use tracing::instrument;

use crate::error::ApiError;
use crate::types::UserStatistics;

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Fetch platform-wide user statistics for the staff dashboard.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` (403) without the
    /// staff role.
    #[instrument(skip(self))]
    pub async fn user_statistics(&self) -> Result<UserStatistics, ApiError> {
        self.execute(
            Method::GET,
            "/api/stuff/statistics/users",
            Auth::Required,
            NO_BODY,
        )
        .await
    }
}
