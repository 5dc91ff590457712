//! Application services for task tracking.

mod tracking;

pub use tracking::{
    CreateTaskRequest, CreateUserRequest, TASK_NOT_FOUND_MESSAGE, TaskService, TaskServiceError,
    TaskServiceResult, USER_NOT_FOUND_MESSAGE, UpdateTaskRequest,
};
