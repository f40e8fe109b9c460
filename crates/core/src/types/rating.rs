//! Average-rating type with the API's "no reviews" sentinel.

use serde::{Deserialize, Serialize};

/// A listing's average rating as reported by the marketplace API.
///
/// The API encodes "no reviews yet" as `-1`; valid averages fall in the
/// `0.0..=5.0` range. The sentinel is kept inside this wrapper so the
/// rest of the client can ask [`Rating::value`] for an `Option<f64>` and
/// never compare against `-1` directly.
///
/// Sorting uses [`Rating::sort_key`], which places unrated listings below
/// any rated listing in both the "highest" and "lowest" directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Default for Rating {
    /// Defaults to the "no reviews yet" sentinel, so listings whose
    /// payload omits the field sort like unrated listings.
    fn default() -> Self {
        Self::none()
    }
}

impl Rating {
    /// The wire value meaning "no reviews yet".
    pub const NONE_SENTINEL: f64 = -1.0;

    /// Wrap a raw wire value.
    #[must_use]
    pub const fn new(raw: f64) -> Self {
        Self(raw)
    }

    /// A rating representing "no reviews yet".
    #[must_use]
    pub const fn none() -> Self {
        Self(Self::NONE_SENTINEL)
    }

    /// Whether this listing has no reviews.
    #[must_use]
    pub fn is_unrated(&self) -> bool {
        self.0 < 0.0
    }

    /// The average rating, or `None` when the listing is unrated.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        if self.is_unrated() { None } else { Some(self.0) }
    }

    /// Comparable key for sorting.
    ///
    /// Unrated listings map to the sentinel `-1.0`, below every valid
    /// rating, so they sort last under "highest" and first under "lowest".
    #[must_use]
    pub fn sort_key(&self) -> f64 {
        if self.is_unrated() {
            Self::NONE_SENTINEL
        } else {
            self.0
        }
    }
}

impl From<f64> for Rating {
    fn from(raw: f64) -> Self {
        Self(raw)
    }
}
