//! Order endpoints for buyers and sellers.

use reqwest::Method;
use tracing::instrument;

use tradepost_core::{OrderId, OrderStatus};

use crate::error::ApiError;
use crate::types::{Order, OrderStatusUpdate};

use super::{ApiClient, Auth, NO_BODY};

impl ApiClient {
    /// Fetch the authenticated user's order history.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        self.execute(Method::GET, "/api/orders", Auth::Required, NO_BODY)
            .await
    }

    /// Fetch orders containing the seller's listings.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` (403) without the
    /// seller role.
    #[instrument(skip(self))]
    pub async fn seller_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.execute(Method::GET, "/api/seller/orders", Auth::Required, NO_BODY)
            .await
    }

    /// Update the fulfillment status of an order (seller action).
    ///
    /// On success the caller patches the local order row (see
    /// [`crate::reconcile::patch_item`]) instead of re-fetching.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; `Api` on server failure.
    #[instrument(skip(self), fields(order_id = %order_id, status = ?status))]
    pub async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        let body = OrderStatusUpdate {
            order_status: status,
        };
        self.execute_empty(
            Method::PUT,
            &format!("/api/seller/orders/{order_id}/status"),
            Auth::Required,
            Some(&body),
        )
        .await
    }
}
