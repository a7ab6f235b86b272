//! Route definitions for the `/projects` resource.
//!
//! Also nests task routes under `/projects/{project_id}/tasks`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /create-test                       -> create_test (debug only)
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{project_id}/tasks                -> list_by_project
/// POST   /{project_id}/tasks                -> create
/// ```
pub fn router(enable_debug_routes: bool) -> Router<AppState> {
    let task_routes =
        Router::new().route("/", get(task::list_by_project).post(task::create));

    let mut router = Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{project_id}/tasks", task_routes);

    if enable_debug_routes {
        router = router.route("/create-test", get(project::create_test));
    }

    router
}
