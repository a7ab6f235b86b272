//! Route definitions for the `/tasks` resource.
//!
//! Task creation and listing live under `/projects/{project_id}/tasks`;
//! see [`super::project`].

use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(task::get_by_id).put(task::update).delete(task::delete),
    )
}
