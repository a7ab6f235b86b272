//! Handlers for tasks.
//!
//! Tasks are created and listed under their project
//! (`/projects/{project_id}/tasks`) and addressed directly by ID
//! (`/tasks/{id}`) afterwards. A user's assigned tasks are listed at
//! `/users/{id}/tasks`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pm_core::types::DbId;
use pm_core::validation;
use pm_db::models::task::{CreateTask, Task, UpdateTask};
use pm_db::repositories::{ProjectRepo, TaskRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/tasks
///
/// Overrides `input.project_id` with the value from the URL path to ensure
/// the task is created under the correct project.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(mut input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validation::validate_task_title(&input.title)?;
    input.project_id = project_id;

    if !ProjectRepo::exists(&state.pool, project_id).await? {
        return Err(AppError::not_found("Project", project_id));
    }
    if let Some(user_id) = input.assigned_user_id {
        ensure_user_exists(&state, user_id).await?;
    }

    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, project_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/projects/{project_id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    if !ProjectRepo::exists(&state.pool, project_id).await? {
        return Err(AppError::not_found("Project", project_id));
    }
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/users/{id}/tasks
pub async fn list_by_assignee(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    ensure_user_exists(&state, user_id).await?;
    let tasks = TaskRepo::list_by_assignee(&state.pool, user_id).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    if let Some(title) = &input.title {
        validation::validate_task_title(title)?;
    }
    // `unassign` wins over `assigned_user_id`, so only check a real assignment.
    if let (Some(user_id), false) = (input.assigned_user_id, input.unassign) {
        ensure_user_exists(&state, user_id).await?;
    }

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    tracing::info!(task_id = id, status = task.status.as_str(), "Task updated");
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
///
/// Always 204, matching project deletion.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, id).await? {
        tracing::info!(task_id = id, "Task deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_user_exists(state: &AppState, user_id: DbId) -> AppResult<()> {
    if UserRepo::exists(&state.pool, user_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found("User", user_id))
    }
}
