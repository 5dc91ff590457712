//! Diesel schema for task tracking persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Task title.
        title -> Text,
        /// Free-text description.
        description -> Text,
        /// Calendar due date.
        due_date -> Date,
        /// Work status.
        #[max_length = 20]
        status -> Varchar,
        /// Completion percentage.
        progress -> Int2,
    }
}

diesel::table! {
    /// User records.
    users (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Username.
        username -> Text,
        /// Email address.
        email -> Text,
    }
}

diesel::table! {
    /// Task-to-user assignments.
    assigned_tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Assigned task.
        task_id -> Int8,
        /// Assignee.
        user_id -> Int8,
        /// Assignment timestamp.
        assigned_at -> Timestamptz,
    }
}

diesel::joinable!(assigned_tasks -> tasks (task_id));
diesel::joinable!(assigned_tasks -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, users, assigned_tasks);
