//! Diesel schema for product catalogue persistence.

diesel::table! {
    /// Product catalogue records.
    products (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Product name.
        name -> Text,
        /// Non-negative price.
        price -> Numeric,
        /// Free-form status tag.
        status -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Pending actions awaiting approval.
    approval_queue (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Referenced product.
        product_id -> Int8,
        /// Requested action.
        #[max_length = 50]
        action -> Varchar,
        /// Request timestamp.
        requested_at -> Timestamptz,
    }
}

diesel::joinable!(approval_queue -> products (product_id));
diesel::allow_tables_to_appear_in_same_query!(products, approval_queue);
