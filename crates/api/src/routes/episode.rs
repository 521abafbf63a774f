//! Route definitions for episode and note item operations.
//!
//! Project-scoped episode listing/creation lives under `/projects`; these
//! routers cover direct item access.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{episode, episode_note};
use crate::state::AppState;

/// Routes mounted at `/episodes`.
///
/// ```text
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
///
/// GET    /{episode_id}/notes      -> list_by_episode
/// POST   /{episode_id}/notes      -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(episode::get_by_id)
                .put(episode::update)
                .delete(episode::delete),
        )
        .route(
            "/{episode_id}/notes",
            get(episode_note::list_by_episode).post(episode_note::create),
        )
}

/// Routes mounted at `/notes`.
///
/// ```text
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// ```
pub fn note_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(episode_note::update).delete(episode_note::delete),
    )
}
