//! Role and status enums for marketplace entities.
//!
//! Every enum here mirrors a server-owned string field. Parsing is
//! case-insensitive for [`Role`] because the upstream API has emitted role
//! strings in both cases from different endpoints; the client normalizes
//! to one canonical uppercase form at this boundary so authorization
//! checks never compare raw strings.

use serde::{Deserialize, Serialize};

/// Account role claim.
///
/// `Stuff` is the platform's moderation role (the wire spelling is
/// `STUFF`; `STAFF` is accepted as an input alias).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Ordinary buyer account.
    User,
    /// Account allowed to manage its own listings.
    Seller,
    /// Moderation role: reviews flagged content, forwards to admins.
    Stuff,
    /// Full administrative access.
    Admin,
}

impl Role {
    /// Canonical uppercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Seller => "SELLER",
            Self::Stuff => "STUFF",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "SELLER" => Ok(Self::Seller),
            "STUFF" | "STAFF" => Ok(Self::Stuff),
            "ADMIN" => Ok(Self::Admin),
            other => Err(format!("invalid role: {other}")),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Listing lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    #[default]
    Active,
    /// Reported by a user, awaiting moderation.
    Flagged,
    /// Removed from sale by moderation.
    Blocked,
    /// Any status this client version does not know about.
    #[serde(other)]
    Unknown,
}

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipping,
    Delivered,
    Cancelled,
}

/// Payment status attached to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// Account status from the admin view.
///
/// The API has emitted both `BLOCKED` and `DISABLED` for suspended
/// accounts; both deserialize to [`AccountStatus::Blocked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    #[serde(alias = "DISABLED")]
    Blocked,
}
