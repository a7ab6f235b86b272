//! Repository for the `tasks` table.

use pm_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, due_date, status, project_id, \
                        assigned_user_id, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// If `status` is `None` in the input, the column default (`PENDING`) applies.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, due_date, status, project_id, assigned_user_id)
             VALUES ($1, $2, $3, COALESCE($4, 'PENDING'::task_status), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.status)
            .bind(input.project_id)
            .bind(input.assigned_user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks belonging to a project, earliest due date first.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY due_date, id"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List all tasks assigned to a user, earliest due date first.
    pub async fn list_by_assignee(pool: &PgPool, user_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE assigned_user_id = $1 ORDER BY due_date, id"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied;
    /// `unassign` clears the assignee and wins over `assigned_user_id`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                due_date = COALESCE($4, due_date),
                status = COALESCE($5, status),
                assigned_user_id = CASE WHEN $7 THEN NULL
                                        ELSE COALESCE($6, assigned_user_id) END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.status)
            .bind(input.assigned_user_id)
            .bind(input.unassign)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
