//! Diesel row models for product catalogue persistence.

use super::schema::{approval_queue, products};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

/// Query result row for product records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Product price.
    pub price: Decimal,
    /// Status tag.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for product records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    /// Product name.
    pub name: String,
    /// Product price.
    pub price: Decimal,
    /// Status tag.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Update model for product records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = products)]
pub struct ProductChangeset {
    /// Product name.
    pub name: String,
    /// Product price.
    pub price: Decimal,
    /// Status tag.
    pub status: String,
}

/// Query result row for approval-queue records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = approval_queue)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApprovalRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Referenced product.
    pub product_id: i64,
    /// Requested action.
    pub action: String,
    /// Request timestamp.
    pub requested_at: DateTime<Utc>,
}

/// Insert model for approval-queue records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = approval_queue)]
pub struct NewApprovalRow {
    /// Referenced product.
    pub product_id: i64,
    /// Requested action.
    pub action: String,
    /// Request timestamp.
    pub requested_at: DateTime<Utc>,
}
