pub mod health;
pub mod project;
pub mod task;
pub mod user;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/create-test                            debug shortcut (ENABLE_DEBUG_ROUTES)
/// /projects/{id}                                   get, update, delete
/// /projects/{project_id}/tasks                     list, create
///
/// /tasks/{id}                                      get, update, delete
///
/// /users                                           list, create
/// /users/{id}                                      get, update, delete
/// /users/{id}/tasks                                assigned tasks
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router(config.enable_debug_routes))
        .nest("/tasks", task::router())
        .nest("/users", user::router())
}
