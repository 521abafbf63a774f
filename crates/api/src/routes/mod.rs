pub mod episode;
pub mod health;
pub mod original_work;
pub mod project;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /originals                                       list, create
/// /originals/{id}                                  get, update, delete
/// /originals/{original_id}/characters              list, create
/// /originals/{original_id}/characters/{id}         get, update, delete
/// /originals/{original_id}/world-rules             list, create
/// /originals/{original_id}/world-rules/{id}        update, delete
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/prompt                            assemble prompt (POST)
/// /projects/{project_id}/characters                list, create
/// /projects/{project_id}/characters/{id}           get, update, delete
/// /projects/{project_id}/foreshadows               list, create
/// /projects/{project_id}/foreshadows/{id}          update, delete
/// /projects/{project_id}/episodes                  list, create
///
/// /episodes/{id}                                   get, update, delete
/// /episodes/{episode_id}/notes                     list, create
/// /notes/{id}                                      update, delete
///
/// /tools/character-parse                           heuristic parser (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Original works (also nests canon characters and world rules).
        .nest("/originals", original_work::router())
        // Projects (also nests custom characters, foreshadows, episodes).
        .nest("/projects", project::router())
        // Episode item operations and note creation.
        .nest("/episodes", episode::router())
        // Note item operations.
        .nest("/notes", episode::note_router())
        // Stateless tooling (character text parser).
        .nest("/tools", tools::router())
}
