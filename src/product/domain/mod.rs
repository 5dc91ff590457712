//! Domain model for the product catalogue.
//!
//! Products and approval-queue entries are split into unpersisted drafts
//! (`New*`) and persisted records carrying a store-assigned identifier.

mod approval;
mod error;
mod ids;
mod product;
mod search;

pub use approval::{ApprovalAction, ApprovalEntry, NewApprovalEntry, PersistedApprovalData};
pub use error::{ParseApprovalActionError, ProductDomainError};
pub use ids::{ApprovalId, ProductId};
pub use product::{NewProduct, PersistedProductData, Product, ProductStatus};
pub use search::{DateRange, ProductSearch};
