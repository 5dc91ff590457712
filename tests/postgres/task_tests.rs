//! `PostgreSQL` integration tests for task tracking persistence.

use crate::postgres::helpers::{
    BoxError, PinnedClock, PostgresCluster, TemporaryDatabase, minutes_past, postgres_cluster,
    prepare_database,
};
use chrono::NaiveDate;
use productsdata::task::{
    adapters::postgres::{
        PostgresAssignmentRepository, PostgresTaskRepository, PostgresUserRepository,
    },
    domain::{
        AssignedTask, NewAssignedTask, NewTask, NewUser, PersistedTaskData, Task, TaskId,
        TaskProgress, TaskStatus, UserId,
    },
    ports::{AssignmentRepository, TaskRepository, TaskRepositoryError, UserRepository},
    services::{CreateTaskRequest, CreateUserRequest, TaskService, UpdateTaskRequest},
};
use rstest::{fixture, rstest};
use std::sync::Arc;

type PostgresTaskService = TaskService<
    PostgresTaskRepository,
    PostgresUserRepository,
    PostgresAssignmentRepository,
    PinnedClock,
>;

struct TaskTestContext {
    tasks: Arc<PostgresTaskRepository>,
    users: Arc<PostgresUserRepository>,
    assignments: Arc<PostgresAssignmentRepository>,
    _database: TemporaryDatabase,
}

impl TaskTestContext {
    fn service(&self, minutes: u32) -> Result<PostgresTaskService, BoxError> {
        Ok(TaskService::new(
            Arc::clone(&self.tasks),
            Arc::clone(&self.users),
            Arc::clone(&self.assignments),
            Arc::new(PinnedClock::at(minutes_past(minutes)?)),
        ))
    }
}

fn due_date() -> Result<NaiveDate, BoxError> {
    NaiveDate::from_ymd_opt(2024, 7, 1).ok_or_else(|| "invalid due date".into())
}

#[fixture]
fn context(
    postgres_cluster: Option<PostgresCluster>,
) -> Result<Option<TaskTestContext>, BoxError> {
    let Some(cluster) = postgres_cluster else {
        return Ok(None);
    };
    let (database, pool) = prepare_database(cluster, "tasks")?;
    Ok(Some(TaskTestContext {
        tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        assignments: Arc::new(PostgresAssignmentRepository::new(pool)),
        _database: database,
    }))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saved_tasks_start_unstarted_and_list_in_id_order(
    context: Result<Option<TaskTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };

    let first = ctx
        .tasks
        .save(NewTask::new("Draft schema", "Tables and indexes", due_date()?)?)
        .await?;
    let second = ctx
        .tasks
        .save(NewTask::new("Write adapters", "", due_date()?)?)
        .await?;

    assert_eq!(first.status(), TaskStatus::NotStarted);
    assert_eq!(first.progress().value(), 0);
    assert_eq!(first.description(), "Tables and indexes");
    assert_eq!(first.due_date(), due_date()?);
    assert_eq!(ctx.tasks.find_all().await?, vec![first.clone(), second]);
    assert_eq!(ctx.tasks.find_by_id(first.id()).await?, Some(first));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_and_progress_updates_are_persisted(
    context: Result<Option<TaskTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };
    let service = ctx.service(0)?;

    let created = service
        .create_task(CreateTaskRequest::new("Ship release", "", due_date()?))
        .await?;
    service
        .update_task(
            UpdateTaskRequest::new(created.id())
                .with_status("in progress")
                .with_progress(100),
        )
        .await?;

    let stored = ctx
        .tasks
        .find_by_id(created.id())
        .await?
        .ok_or("updated task should be found")?;
    assert_eq!(stored.status(), TaskStatus::InProgress);
    assert_eq!(stored.progress().value(), 100);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_task_reports_not_found(
    context: Result<Option<TaskTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };

    let missing = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(5_150),
        title: "Ghost".to_owned(),
        description: String::new(),
        due_date: due_date()?,
        status: TaskStatus::Completed,
        progress: TaskProgress::new(100)?,
    });
    let result = ctx.tasks.update(&missing).await;

    let Err(TaskRepositoryError::NotFound(id)) = &result else {
        return Err(format!("expected not found, got {result:?}").into());
    };
    assert_eq!(*id, missing.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn statistics_reflect_stored_completion(
    context: Result<Option<TaskTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };
    let service = ctx.service(0)?;

    for title in ["Plan", "Build", "Verify", "Release"] {
        let task = service
            .create_task(CreateTaskRequest::new(title, "", due_date()?))
            .await?;
        if title != "Release" {
            service
                .update_task(UpdateTaskRequest::new(task.id()).with_status("COMPLETED"))
                .await?;
        }
    }

    let statistics = service.get_task_statistics().await?;
    assert_eq!(
        serde_json::to_value(statistics)?,
        serde_json::json!({
            "totalTasks": 4,
            "completedTasks": 3,
            "completedPercentage": 75.0
        })
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_round_trip_through_storage(
    context: Result<Option<TaskTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };

    let user = ctx
        .users
        .save(NewUser::new("ada", "ada@example.com")?)
        .await?;

    assert_eq!(ctx.users.find_by_id(user.id()).await?, Some(user));
    assert!(ctx.users.find_by_id(UserId::new(9_999)).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignments_are_listed_per_user_oldest_first(
    context: Result<Option<TaskTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };

    let first_task = ctx.tasks.save(NewTask::new("Review", "", due_date()?)?).await?;
    let second_task = ctx.tasks.save(NewTask::new("Deploy", "", due_date()?)?).await?;
    let ada = ctx.users.save(NewUser::new("ada", "ada@example.com")?).await?;
    let bob = ctx.users.save(NewUser::new("bob", "bob@example.com")?).await?;

    let later = ctx
        .assignments
        .save(NewAssignedTask::new(
            &second_task,
            &ada,
            &PinnedClock::at(minutes_past(40)?),
        ))
        .await?;
    ctx.assignments
        .save(NewAssignedTask::new(
            &first_task,
            &bob,
            &PinnedClock::at(minutes_past(20)?),
        ))
        .await?;
    let earlier = ctx
        .assignments
        .save(NewAssignedTask::new(
            &first_task,
            &ada,
            &PinnedClock::at(minutes_past(5)?),
        ))
        .await?;

    let listed = ctx.assignments.list_for_user(ada.id()).await?;
    assert_eq!(listed, vec![earlier.clone(), later]);
    assert_eq!(earlier.task_id(), first_task.id());
    assert_eq!(earlier.assigned_at(), minutes_past(5)?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn service_assignment_is_stamped_with_the_clock(
    context: Result<Option<TaskTestContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context? else {
        return Ok(());
    };
    let service = ctx.service(25)?;

    let task = service
        .create_task(CreateTaskRequest::new("Triage", "", due_date()?))
        .await?;
    let user = service
        .create_user(CreateUserRequest::new("carol", "carol@example.com"))
        .await?;
    let assignment = service.assign_task(task.id(), user.id()).await?;

    let listed: Vec<AssignedTask> = service.assignments_for_user(user.id()).await?;
    assert_eq!(listed, vec![assignment.clone()]);
    assert_eq!(assignment.assigned_at(), minutes_past(25)?);
    assert_eq!(assignment.user_id(), user.id());
    Ok(())
}
