//! Task entity model and DTOs.

use pm_core::identity::Entity;
use pm_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::TaskStatus;

/// A task row from the `tasks` table.
///
/// Every task belongs to exactly one project and is optionally assigned
/// to one user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Date,
    pub status: TaskStatus,
    pub project_id: DbId,
    pub assigned_user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Date,
    /// Defaults to `PENDING` if omitted.
    pub status: Option<TaskStatus>,
    /// Overridden from the URL path by the handler.
    #[serde(default)]
    pub project_id: DbId,
    pub assigned_user_id: Option<DbId>,
}

/// DTO for updating an existing task. All fields are optional.
///
/// `assigned_user_id: null` leaves the assignee untouched; send
/// `unassign: true` to clear it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub status: Option<TaskStatus>,
    pub assigned_user_id: Option<DbId>,
    #[serde(default)]
    pub unassign: bool,
}

impl Entity for Task {
    const NAME: &'static str = "Task";
    fn id(&self) -> Option<DbId> {
        Some(self.id)
    }
}

impl Entity for CreateTask {
    const NAME: &'static str = "Task";
    fn id(&self) -> Option<DbId> {
        None
    }
}
