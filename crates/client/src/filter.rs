//! Client-side listing filter and sort.
//!
//! Filtering and sorting run entirely over the fetched page; the server
//! is never consulted when the user tweaks controls. Sorting is
//! single-key: when several sort controls are set at once, price wins
//! over review count, which wins over rating. Sorts are stable, so
//! equal-key listings keep their fetched order.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use tradepost_core::CategoryId;

use crate::types::Listing;

/// Filter criteria from the browse controls.
///
/// Empty/unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Case-insensitive title substring.
    pub search: String,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Exact category match.
    pub category: Option<CategoryId>,
}

impl ListingFilter {
    /// Whether a listing passes every set criterion.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let search = self.search.trim();
        if !search.is_empty()
            && !listing
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }
        if let Some(min) = self.min_price {
            if listing.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if listing.price > max {
                return false;
            }
        }
        if let Some(category) = self.category {
            if listing.category.id != category {
                return false;
            }
        }
        true
    }
}

/// Price sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceSort {
    #[default]
    Unsorted,
    LowToHigh,
    HighToLow,
}

/// Review-count sort direction. Listings without reviews count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewSort {
    #[default]
    Unsorted,
    MostFirst,
    LeastFirst,
}

/// Rating sort direction. Unrated listings carry the below-any-real
/// sentinel, so they land last under highest-first and first under
/// lowest-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingSort {
    #[default]
    Unsorted,
    HighestFirst,
    LowestFirst,
}

/// The three sort controls as the browse screen holds them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSelection {
    pub price: PriceSort,
    pub reviews: ReviewSort,
    pub rating: RatingSort,
}

impl SortSelection {
    fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self.price {
            PriceSort::LowToHigh => return a.price.cmp(&b.price),
            PriceSort::HighToLow => return b.price.cmp(&a.price),
            PriceSort::Unsorted => {}
        }
        match self.reviews {
            ReviewSort::MostFirst => return b.review_count().cmp(&a.review_count()),
            ReviewSort::LeastFirst => return a.review_count().cmp(&b.review_count()),
            ReviewSort::Unsorted => {}
        }
        match self.rating {
            RatingSort::HighestFirst => {
                return cmp_f64(b.average_rating.sort_key(), a.average_rating.sort_key());
            }
            RatingSort::LowestFirst => {
                return cmp_f64(a.average_rating.sort_key(), b.average_rating.sort_key());
            }
            RatingSort::Unsorted => {}
        }
        Ordering::Equal
    }

    /// Whether any control is set.
    #[must_use]
    pub fn is_unsorted(&self) -> bool {
        *self == Self::default()
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Filter then sort a fetched page, in place.
pub fn apply(listings: &mut Vec<Listing>, filter: &ListingFilter, sort: &SortSelection) {
    listings.retain(|listing| filter.matches(listing));
    if !sort.is_unsorted() {
        listings.sort_by(|a, b| sort.compare(a, b));
    }
}
