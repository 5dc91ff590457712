//! Product search criteria.

use super::Product;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Inclusive creation-date window; either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Creates a range from optional bounds.
    #[must_use]
    pub const fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn start(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn end(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    /// Returns `true` when `instant` lies inside the range.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| instant >= from) && self.to.is_none_or(|to| instant <= to)
    }
}

/// Optional filters applied by [`crate::product::ports::ProductRepository::search`].
///
/// Every criterion left unset matches all products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductSearch {
    name: Option<String>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    status: Option<String>,
    created: Option<DateRange>,
}

impl ProductSearch {
    /// Creates criteria matching every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by case-insensitive name substring.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filters by inclusive minimum price.
    #[must_use]
    pub const fn with_min_price(mut self, price: Decimal) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Filters by inclusive maximum price.
    #[must_use]
    pub const fn with_max_price(mut self, price: Decimal) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Filters by case-insensitive status tag.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filters by creation-date window.
    #[must_use]
    pub const fn with_created(mut self, range: DateRange) -> Self {
        self.created = Some(range);
        self
    }

    /// Returns the name filter.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the minimum price filter.
    #[must_use]
    pub const fn min_price(&self) -> Option<Decimal> {
        self.min_price
    }

    /// Returns the maximum price filter.
    #[must_use]
    pub const fn max_price(&self) -> Option<Decimal> {
        self.max_price
    }

    /// Returns the status filter.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the creation-date filter.
    #[must_use]
    pub const fn created(&self) -> Option<DateRange> {
        self.created
    }

    /// Returns `true` when `product` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let name_matches = self.name().is_none_or(|needle| {
            product
                .name()
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let min_matches = self.min_price.is_none_or(|min| product.price() >= min);
        let max_matches = self.max_price.is_none_or(|max| product.price() <= max);
        let status_matches = self.status().is_none_or(|status| {
            product.status().as_str().to_lowercase() == status.trim().to_lowercase()
        });
        let created_matches = self
            .created
            .is_none_or(|range| range.contains(product.created_at()));

        name_matches && min_matches && max_matches && status_matches && created_matches
    }
}
