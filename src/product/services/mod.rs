//! Application services for the product catalogue.

mod approval;
mod catalogue;
mod query;

pub use approval::{
    ApprovalWorkflowError, ApprovalWorkflowResult, ApprovalWorkflowService, DELETION_QUEUED_MESSAGE,
    PRODUCT_NOT_FOUND_MESSAGE,
};
pub use catalogue::{
    CreateProductRequest, ProductCatalogError, ProductCatalogResult, ProductCatalogService,
};
pub use query::{NO_ACTIVE_RECORD_MESSAGE, ProductQueryError, ProductQueryResult, ProductQueryService};
