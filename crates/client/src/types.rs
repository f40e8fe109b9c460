//! Domain types for the marketplace API.
//!
//! These mirror the JSON the API speaks (camelCase field names). The
//! client never treats them as authoritative for longer than a screen's
//! lifetime; see [`crate::reconcile`] for how local copies track server
//! mutations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tradepost_core::{
    AccountId, AccountStatus, CategoryId, ListingId, ListingStatus, OrderId, OrderStatus,
    PaymentStatus, PhotoId, Rating, ReviewId, Role,
};

// =============================================================================
// Pagination
// =============================================================================

/// A page of results as returned by the paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
        }
    }
}

// =============================================================================
// Listings
// =============================================================================

/// A listing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// Reference to a stored photo, resolved separately by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    /// Photo ID.
    pub id: PhotoId,
}

/// A marketplace listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Listing ID.
    pub id: ListingId,
    /// Title shown in search results.
    pub title: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Asking price (non-negative).
    pub price: Decimal,
    /// Category this listing belongs to.
    pub category: Category,
    /// Username of the selling account.
    #[serde(default)]
    pub seller_username: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: ListingStatus,
    /// Average review rating; `-1` sentinel when unreviewed.
    #[serde(default)]
    pub average_rating: Rating,
    /// Reviews attached to this listing, in server order.
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Photo references, first one is the cover photo.
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
    /// Displayable image source, resolved client-side.
    ///
    /// Populated by the listing fetchers: the first photo as a data URL,
    /// or the configured placeholder. Never sent to the server.
    #[serde(skip)]
    pub image_url: Option<String>,
}

impl Listing {
    /// Number of reviews; a missing review list counts as zero.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the given user already holds a review on this listing.
    ///
    /// The UI hides the "add review" form when this returns true; the
    /// server enforces the actual one-review-per-user rule.
    #[must_use]
    pub fn has_review_by(&self, username: &str) -> bool {
        self.reviews
            .iter()
            .any(|review| review.reviewer_username == username)
    }
}

/// Payload for creating a listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: CategoryId,
}

/// Partial update for a listing.
///
/// Fields the user did not change are omitted from the body entirely, so
/// the server is never sent a spurious empty-string overwrite.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl ListingUpdate {
    /// Build an update from raw form inputs, dropping fields whose
    /// trimmed value is empty.
    #[must_use]
    pub fn from_inputs(
        title: &str,
        description: &str,
        price: Option<Decimal>,
        category_id: Option<CategoryId>,
    ) -> Self {
        Self {
            title: non_empty(title),
            description: non_empty(description),
            price,
            category_id,
        }
    }

    /// Whether this update carries any field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category_id.is_none()
    }
}

// =============================================================================
// Reviews
// =============================================================================

/// A review left on a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review ID.
    pub id: ReviewId,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Short headline.
    #[serde(default)]
    pub title: String,
    /// Review body.
    #[serde(default)]
    pub description: String,
    /// Username of the reviewer.
    #[serde(default)]
    pub reviewer_username: String,
    /// Listing the review belongs to; omitted when nested in a listing.
    #[serde(default)]
    pub listing_id: Option<ListingId>,
}

/// Payload for creating or replacing a review.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    /// Star rating, 1-5.
    pub rating: u8,
    pub title: String,
    pub description: String,
}

// =============================================================================
// Cart & Wishlist
// =============================================================================

/// Snapshot of the authenticated user's shopping cart.
///
/// Authoritative only immediately after fetch; local removals are
/// speculative until the server confirms them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Listings currently in the cart, in server order.
    #[serde(default)]
    pub listings: Vec<Listing>,
}

impl CartSnapshot {
    /// Sum of the item prices.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.listings.iter().map(|listing| listing.price).sum()
    }
}

/// Snapshot of the authenticated user's wishlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishlistSnapshot {
    /// Listings currently wished for, in server order.
    #[serde(default)]
    pub listings: Vec<Listing>,
}

// =============================================================================
// Orders
// =============================================================================

/// Shipping address attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Payment details attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Total charged.
    pub total: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// e.g. `CREDIT_CARD`.
    pub payment_method: String,
    /// Payment lifecycle status.
    pub payment_status: PaymentStatus,
}

/// One listing line within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingOrder {
    /// Line ID.
    pub id: tradepost_core::ListingOrderId,
    /// The listing that was ordered.
    pub listing: Listing,
    /// Per-line fulfillment status.
    #[serde(default)]
    pub listing_status: OrderStatus,
}

/// An order placed by the user (or received by a seller).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Fulfillment status.
    pub order_status: OrderStatus,
    /// Where the order ships to.
    pub address: Address,
    /// e.g. `STANDARD`, `EXPRESS`.
    #[serde(default)]
    pub shipping_method: String,
    /// When the order shipped; `None` until then.
    #[serde(default)]
    pub shipped_date: Option<chrono::NaiveDateTime>,
    /// Payment details.
    pub payment: Payment,
    /// Lines in this order, in server order.
    #[serde(default)]
    pub listing_orders: Vec<ListingOrder>,
}

/// Body for the seller order-status update.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub order_status: OrderStatus,
}

// =============================================================================
// Accounts
// =============================================================================

/// An account row from the admin/staff view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Login name.
    pub username: String,
    /// Email address.
    ///
    /// The API has emitted this both as a plain string and as a wrapped
    /// `{"value": ...}` object; both shapes are accepted.
    #[serde(deserialize_with = "deserialize_email_field", default)]
    pub email: String,
    /// Role claim.
    pub role: Role,
    /// Account status.
    #[serde(default)]
    pub status: AccountStatus,
}

/// The authenticated user's own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(deserialize_with = "deserialize_email_field", default)]
    pub email: String,
    pub role: Role,
}

/// Partial update for the authenticated user's account.
///
/// Same omit-empty semantics as [`ListingUpdate`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AccountUpdate {
    /// Build an update from raw form inputs, dropping fields whose
    /// trimmed value is empty.
    #[must_use]
    pub fn from_inputs(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: non_empty(username),
            email: non_empty(email),
            password: non_empty(password),
        }
    }

    /// Whether this update carries any field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

// =============================================================================
// Photos
// =============================================================================

/// A stored photo payload: JSON-wrapped base64 bytes, not a binary stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    /// Photo ID; absent on some single-photo endpoints.
    #[serde(default)]
    pub id: Option<PhotoId>,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// Upload payload for a listing photo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUpload {
    pub listing_id: ListingId,
    /// Base64-encoded image bytes.
    pub data: String,
}

// =============================================================================
// Checkout
// =============================================================================

/// Checkout submission payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub payment_method: String,
    pub currency: String,
    pub shipping_method: String,
}

/// Handle to the external payment redirect, returned by checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// Payment session identifier.
    pub session_id: String,
    /// Redirect target for the external payment flow, when supplied.
    #[serde(default)]
    pub redirect_url: Option<String>,
}

// =============================================================================
// Statistics
// =============================================================================

/// Platform user statistics from the staff dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub active_users: i64,
    pub blocked_users: i64,
    pub deleted_users: i64,
    /// Registrations in the last 24 hours.
    pub new_users: i64,
    #[serde(rename = "loggedInLast24h")]
    pub logged_in_last_24h: i64,
}

// =============================================================================
// Helpers
// =============================================================================

/// Trim an input; `None` when nothing is left.
fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Accept an email as either `"a@b.c"` or `{"value": "a@b.c"}`.
fn deserialize_email_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum EmailField {
        Plain(String),
        Wrapped { value: String },
    }

    Ok(match EmailField::deserialize(deserializer)? {
        EmailField::Plain(value) | EmailField::Wrapped { value } => value,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn listing_json() -> &'static str {
        r#"{
            "id": 42,
            "title": "Mechanical Keyboard",
            "description": "Brown switches",
            "price": 79.99,
            "category": {"id": 3, "name": "Electronics"},
            "sellerUsername": "kbseller",
            "status": "ACTIVE",
            "averageRating": 4.5,
            "reviews": [
                {"id": 1, "rating": 5, "title": "Great", "description": "clack",
                 "reviewerUsername": "alice", "listingId": 42}
            ],
            "photos": [{"id": 7}]
        }"#
    }

    #[test]
    fn test_listing_deserializes_camel_case() {
        let listing: Listing = serde_json::from_str(listing_json()).unwrap();
        assert_eq!(listing.id, ListingId::new(42));
        assert_eq!(listing.seller_username, "kbseller");
        assert_eq!(listing.status, ListingStatus::Active);
        assert_eq!(listing.average_rating.value(), Some(4.5));
        assert_eq!(listing.review_count(), 1);
        assert_eq!(listing.photos, vec![PhotoRef { id: PhotoId::new(7) }]);
        assert!(listing.image_url.is_none());
    }

    #[test]
    fn test_listing_defaults_for_sparse_payloads() {
        let listing: Listing = serde_json::from_str(
            r#"{"id": 1, "title": "Bare", "price": 5,
                "category": {"id": 1, "name": "Misc"}}"#,
        )
        .unwrap();
        assert!(listing.average_rating.is_unrated());
        assert!(listing.reviews.is_empty());
        assert!(listing.photos.is_empty());
    }

    #[test]
    fn test_has_review_by() {
        let listing: Listing = serde_json::from_str(listing_json()).unwrap();
        assert!(listing.has_review_by("alice"));
        assert!(!listing.has_review_by("bob"));
    }

    #[test]
    fn test_listing_update_omits_empty_fields() {
        let update = ListingUpdate::from_inputs("  New title  ", "   ", None, None);
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({"title": "New title"}));
    }

    #[test]
    fn test_account_update_from_inputs() {
        let update = AccountUpdate::from_inputs("", " alice@example.com ", "");
        assert!(update.username.is_none());
        assert_eq!(update.email.as_deref(), Some("alice@example.com"));
        assert!(!update.is_empty());
        assert!(AccountUpdate::from_inputs(" ", "", "").is_empty());
    }

    #[test]
    fn test_account_email_plain_and_wrapped() {
        let plain: Account = serde_json::from_str(
            r#"{"id": 1, "username": "a", "email": "a@b.c", "role": "USER", "status": "ACTIVE"}"#,
        )
        .unwrap();
        assert_eq!(plain.email, "a@b.c");

        let wrapped: Account = serde_json::from_str(
            r#"{"id": 2, "username": "b", "email": {"value": "b@c.d"}, "role": "admin"}"#,
        )
        .unwrap();
        assert_eq!(wrapped.email, "b@c.d");
        assert_eq!(wrapped.role, Role::Admin);
        assert_eq!(wrapped.status, AccountStatus::Active);
    }

    #[test]
    fn test_order_deserializes() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 9,
                "orderStatus": "SHIPPING",
                "address": {"street": "1 Main St", "city": "Springfield",
                            "state": "IL", "zipCode": "62704", "country": "US"},
                "shippingMethod": "STANDARD",
                "shippedDate": "2024-03-01T10:30:00",
                "payment": {"total": 120.50, "currency": "USD",
                            "paymentMethod": "CREDIT_CARD", "paymentStatus": "COMPLETED"},
                "listingOrders": []
            }"#,
        )
        .unwrap();
        assert_eq!(order.order_status, OrderStatus::Shipping);
        assert_eq!(order.payment.payment_status, PaymentStatus::Completed);
        assert!(order.shipped_date.is_some());
        assert_eq!(order.address.zip_code, "62704");
    }

    #[test]
    fn test_order_unshipped_date_is_none() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 10,
                "orderStatus": "PENDING",
                "address": {"street": "1 Main St", "city": "Springfield",
                            "state": "IL", "zipCode": "62704", "country": "US"},
                "payment": {"total": 5, "currency": "USD",
                            "paymentMethod": "PAYPAL", "paymentStatus": "PENDING"}
            }"#,
        )
        .unwrap();
        assert!(order.shipped_date.is_none());
        assert!(order.listing_orders.is_empty());
    }

    #[test]
    fn test_cart_total() {
        let cart: CartSnapshot = serde_json::from_str(
            r#"{"listings": [
                {"id": 1, "title": "A", "price": 10.25, "category": {"id": 1, "name": "c"}},
                {"id": 2, "title": "B", "price": 4.75, "category": {"id": 1, "name": "c"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(cart.total(), Decimal::new(1500, 2));
    }

    #[test]
    fn test_user_statistics_field_names() {
        let stats: UserStatistics = serde_json::from_str(
            r#"{"activeUsers": 10, "blockedUsers": 2, "deletedUsers": 1,
                "newUsers": 3, "loggedInLast24h": 7}"#,
        )
        .unwrap();
        assert_eq!(stats.logged_in_last_24h, 7);
    }

    #[test]
    fn test_page_default_content() {
        let page: Page<Listing> = serde_json::from_str("{}").unwrap();
        assert!(page.content.is_empty());
    }
}
