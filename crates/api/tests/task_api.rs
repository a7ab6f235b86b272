//! HTTP-level integration tests for tasks and their project/user relations.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_task(pool: &PgPool, project_id: i64, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/tasks"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_under_project(pool: PgPool) {
    let project_id = common::create_project(&pool, "Tasks").await;

    let task = create_task(
        &pool,
        project_id,
        serde_json::json!({"title": "Draft outline", "due_date": "2026-02-14"}),
    )
    .await;

    assert_eq!(task["title"], "Draft outline");
    assert_eq!(task["status"], "PENDING");
    assert_eq!(task["project_id"], project_id);
    assert!(task["assigned_user_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_path_project_id_overrides_body(pool: PgPool) {
    let real = common::create_project(&pool, "Real").await;
    let other = common::create_project(&pool, "Other").await;

    let task = create_task(
        &pool,
        real,
        serde_json::json!({"title": "Pinned", "due_date": "2026-02-14", "project_id": other}),
    )
    .await;
    assert_eq!(task["project_id"], real);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_under_missing_project_returns_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/projects/999999/tasks",
        serde_json::json!({"title": "Nowhere", "due_date": "2026-02-14"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Project with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_with_missing_assignee_returns_404(pool: PgPool) {
    let project_id = common::create_project(&pool, "Assign").await;
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/tasks"),
        serde_json::json!({"title": "Who?", "due_date": "2026-02-14", "assigned_user_id": 424242}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_requires_due_date(pool: PgPool) {
    let project_id = common::create_project(&pool, "Dates").await;
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/tasks"),
        serde_json::json!({"title": "Someday"}),
    )
    .await;
    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_with_blank_title_returns_400(pool: PgPool) {
    let project_id = common::create_project(&pool, "Titles").await;
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/tasks"),
        serde_json::json!({"title": "", "due_date": "2026-02-14"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_status_is_rejected(pool: PgPool) {
    let project_id = common::create_project(&pool, "Statuses").await;
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/tasks"),
        serde_json::json!({"title": "Odd", "due_date": "2026-02-14", "status": "BLOCKED"}),
    )
    .await;
    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_status_and_assignment(pool: PgPool) {
    let project_id = common::create_project(&pool, "Flow").await;
    let user_id = common::create_user(&pool, "worker").await;
    let task = create_task(
        &pool,
        project_id,
        serde_json::json!({"title": "Build", "due_date": "2026-03-01"}),
    )
    .await;
    let id = task["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/{id}"),
        serde_json::json!({"status": "IN_PROGRESS", "assigned_user_id": user_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "IN_PROGRESS");
    assert_eq!(json["assigned_user_id"], user_id);
    assert_eq!(json["title"], "Build");

    let assigned = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/users/{user_id}/tasks"),
        )
        .await,
    )
    .await;
    assert_eq!(assigned.as_array().unwrap().len(), 1);

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/tasks/{id}"),
        serde_json::json!({"status": "COMPLETED", "unassign": true}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "COMPLETED");
    assert!(json["assigned_user_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_task_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/tasks/999999",
        serde_json::json!({"status": "COMPLETED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_with_missing_assignee_returns_404(pool: PgPool) {
    let project_id = common::create_project(&pool, "Reassign").await;
    let task = create_task(
        &pool,
        project_id,
        serde_json::json!({"title": "Orphan", "due_date": "2026-03-01"}),
    )
    .await;
    let id = task["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/tasks/{id}"),
        serde_json::json!({"assigned_user_id": 424242}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "User with id 424242 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unassign_ignores_assigned_user_id(pool: PgPool) {
    let project_id = common::create_project(&pool, "Release").await;
    let user_id = common::create_user(&pool, "holder").await;
    let task = create_task(
        &pool,
        project_id,
        serde_json::json!({"title": "Hand off", "due_date": "2026-03-01", "assigned_user_id": user_id}),
    )
    .await;
    let id = task["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/tasks/{id}"),
        serde_json::json!({"assigned_user_id": 424242, "unassign": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["assigned_user_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_by_project(pool: PgPool) {
    let project_id = common::create_project(&pool, "Listing").await;
    let other_id = common::create_project(&pool, "Elsewhere").await;
    create_task(&pool, project_id, serde_json::json!({"title": "B", "due_date": "2026-05-01"})).await;
    create_task(&pool, project_id, serde_json::json!({"title": "A", "due_date": "2026-04-01"})).await;
    create_task(&pool, other_id, serde_json::json!({"title": "C", "due_date": "2026-01-01"})).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/tasks"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_for_missing_project_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/projects/999999/tasks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_task_then_get_returns_404(pool: PgPool) {
    let project_id = common::create_project(&pool, "Cleanup").await;
    let task = create_task(
        &pool,
        project_id,
        serde_json::json!({"title": "Temp", "due_date": "2026-03-01"}),
    )
    .await;
    let id = task["id"].as_i64().unwrap();

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/api/v1/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_project_removes_its_tasks(pool: PgPool) {
    let project_id = common::create_project(&pool, "Parent").await;
    let task = create_task(
        &pool,
        project_id,
        serde_json::json!({"title": "Child", "due_date": "2026-03-01"}),
    )
    .await;
    let id = task["id"].as_i64().unwrap();

    delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}"),
    )
    .await;

    let response = get(common::build_test_app(pool), &format!("/api/v1/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_task_returns_204(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/api/v1/tasks/999999").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
