//! Product record and status types.

use super::{ProductDomainError, ProductId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_PRICE_SCALE: u32 = 2;
const PRICE_LIMIT: i64 = 10_000_000_000;

/// Free-form product status tag such as `ACTIVE` or `Out of Stock`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductStatus(String);

impl ProductStatus {
    /// Tag marking a product as active.
    pub const ACTIVE: &'static str = "ACTIVE";

    /// Creates a validated status tag.
    ///
    /// # Errors
    ///
    /// Returns [`ProductDomainError::EmptyStatus`] when the tag is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ProductDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProductDomainError::EmptyStatus);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the `ACTIVE` status.
    #[must_use]
    pub fn active() -> Self {
        Self(Self::ACTIVE.to_owned())
    }

    /// Returns `true` when the tag marks the product as active.
    ///
    /// Comparison ignores ASCII case.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::ACTIVE)
    }

    /// Returns the tag as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    price: Decimal,
    status: ProductStatus,
    created_at: DateTime<Utc>,
}

impl NewProduct {
    /// Creates a validated product draft stamped with the clock's time.
    ///
    /// # Errors
    ///
    /// Returns [`ProductDomainError::EmptyProductName`] for a blank name,
    /// [`ProductDomainError::NegativePrice`] for a price below zero,
    /// [`ProductDomainError::PriceScale`] for more than two decimal places
    /// and [`ProductDomainError::PriceOutOfRange`] for a price of ten billion
    /// or more.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        status: ProductStatus,
        clock: &impl Clock,
    ) -> Result<Self, ProductDomainError> {
        let raw_name = name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(ProductDomainError::EmptyProductName);
        }
        if price < Decimal::ZERO {
            return Err(ProductDomainError::NegativePrice(price));
        }
        if price.normalize().scale() > MAX_PRICE_SCALE {
            return Err(ProductDomainError::PriceScale(price));
        }
        if price >= Decimal::from(PRICE_LIMIT) {
            return Err(ProductDomainError::PriceOutOfRange(price));
        }
        Ok(Self {
            name: trimmed.to_owned(),
            price,
            status,
            created_at: clock.utc(),
        })
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the status tag.
    #[must_use]
    pub const fn status(&self) -> &ProductStatus {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches a store-assigned identifier.
    #[must_use]
    pub fn into_persisted(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// Persisted product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    status: ProductStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProductData {
    /// Persisted identifier.
    pub id: ProductId,
    /// Persisted name.
    pub name: String,
    /// Persisted price.
    pub price: Decimal,
    /// Persisted status tag.
    pub status: ProductStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Reconstructs a product from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProductData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            price: data.price,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the product identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the status tag.
    #[must_use]
    pub const fn status(&self) -> &ProductStatus {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the product's status is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Replaces the status tag.
    pub fn set_status(&mut self, status: ProductStatus) {
        self.status = status;
    }
}
