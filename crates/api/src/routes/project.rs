//! Route definitions for the `/projects` resource.
//!
//! Also nests custom character, foreshadow, and episode routes under
//! `/projects/{project_id}/...`, plus the prompt assembly endpoint.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{character, episode, foreshadow, project, prompt};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                       -> list
/// POST   /                                       -> create
/// GET    /{id}                                   -> get_by_id
/// PUT    /{id}                                   -> update
/// DELETE /{id}                                   -> delete
/// POST   /{id}/prompt                            -> generate
///
/// GET    /{project_id}/characters                -> list_custom
/// POST   /{project_id}/characters                -> create_custom
/// GET    /{project_id}/characters/{id}           -> get_by_id
/// PUT    /{project_id}/characters/{id}           -> update
/// DELETE /{project_id}/characters/{id}           -> delete
///
/// GET    /{project_id}/foreshadows               -> list
/// POST   /{project_id}/foreshadows               -> create
/// PUT    /{project_id}/foreshadows/{id}          -> update
/// DELETE /{project_id}/foreshadows/{id}          -> delete
///
/// GET    /{project_id}/episodes                  -> list_by_project
/// POST   /{project_id}/episodes                  -> create
/// ```
pub fn router() -> Router<AppState> {
    let character_routes = Router::new()
        .route(
            "/",
            get(character::list_custom).post(character::create_custom),
        )
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        );

    let foreshadow_routes = Router::new()
        .route("/", get(foreshadow::list).post(foreshadow::create))
        .route(
            "/{id}",
            put(foreshadow::update).delete(foreshadow::delete),
        );

    let episode_routes =
        Router::new().route("/", get(episode::list_by_project).post(episode::create));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/prompt", post(prompt::generate))
        .nest("/{project_id}/characters", character_routes)
        .nest("/{project_id}/foreshadows", foreshadow_routes)
        .nest("/{project_id}/episodes", episode_routes)
}
