//! In-memory integration tests for task tracking.

use super::helpers::{MemoryTaskService, due_date, task_service};
use productsdata::{
    response::{ApiReply, ResponseStatus},
    task::{
        domain::TaskStatus,
        services::{CreateTaskRequest, CreateUserRequest, UpdateTaskRequest},
    },
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn statistics_track_completed_updates(
    task_service: MemoryTaskService,
) -> Result<(), eyre::Report> {
    let mut ids = Vec::new();
    for title in ["Design", "Build", "Test", "Release"] {
        let task = task_service
            .create_task(CreateTaskRequest::new(title, "", due_date()?))
            .await?;
        ids.push(task.id());
    }
    for id in ids.iter().take(3) {
        task_service
            .update_task(UpdateTaskRequest::new(*id).with_status("COMPLETED"))
            .await?;
    }

    let statistics = task_service.get_task_statistics().await?;

    eyre::ensure!(statistics.total_tasks() == 4, "unexpected total");
    eyre::ensure!(statistics.completed_tasks() == 3, "unexpected completed");
    eyre::ensure!(
        serde_json::to_value(statistics)?
            == serde_json::json!({
                "totalTasks": 4,
                "completedTasks": 3,
                "completedPercentage": 75.0
            }),
        "unexpected statistics payload"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_task_list_reports_zero_percent(
    task_service: MemoryTaskService,
) -> Result<(), eyre::Report> {
    let statistics = task_service.get_task_statistics().await?;
    eyre::ensure!(
        serde_json::to_value(statistics)?["completedPercentage"] == 0.0,
        "expected zero percent"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_flow_lists_user_tasks(
    task_service: MemoryTaskService,
) -> Result<(), eyre::Report> {
    let task = task_service
        .create_task(CreateTaskRequest::new("Triage", "Inbox zero", due_date()?))
        .await?;
    let user = task_service
        .create_user(CreateUserRequest::new("sam", "sam@example.com"))
        .await?;

    task_service
        .update_task(
            UpdateTaskRequest::new(task.id())
                .with_status("In Progress")
                .with_progress(20),
        )
        .await?;
    let assignment = task_service.assign_task(task.id(), user.id()).await?;
    let listed = task_service.assignments_for_user(user.id()).await?;

    eyre::ensure!(listed == vec![assignment], "unexpected assignments");
    let stored = task_service.get_all_tasks().await?;
    let [only] = stored.as_slice() else {
        return Err(eyre::eyre!("expected one task"));
    };
    eyre::ensure!(only.status() == TaskStatus::InProgress, "status not applied");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_progress_maps_to_bad_request(
    task_service: MemoryTaskService,
) -> Result<(), eyre::Report> {
    let task = task_service
        .create_task(CreateTaskRequest::new("Polish", "", due_date()?))
        .await?;

    let reply = ApiReply::from_result(
        task_service
            .update_task(UpdateTaskRequest::new(task.id()).with_progress(120))
            .await,
    );

    eyre::ensure!(
        reply.status() == ResponseStatus::BadRequest,
        "expected bad request"
    );
    Ok(())
}
