//! Route definitions for the `/originals` resource.
//!
//! Also nests canon character and world-rule routes under
//! `/originals/{original_id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{character, original_work, world_rule};
use crate::state::AppState;

/// Routes mounted at `/originals`.
///
/// ```text
/// GET    /                                       -> list
/// POST   /                                       -> create
/// GET    /{id}                                   -> get_by_id
/// PUT    /{id}                                   -> update
/// DELETE /{id}                                   -> delete
///
/// GET    /{original_id}/characters               -> list_canon
/// POST   /{original_id}/characters               -> create_canon
/// GET    /{original_id}/characters/{id}          -> get_by_id
/// PUT    /{original_id}/characters/{id}          -> update
/// DELETE /{original_id}/characters/{id}          -> delete
///
/// GET    /{original_id}/world-rules              -> list
/// POST   /{original_id}/world-rules              -> create
/// PUT    /{original_id}/world-rules/{id}         -> update
/// DELETE /{original_id}/world-rules/{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    let character_routes = Router::new()
        .route("/", get(character::list_canon).post(character::create_canon))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        );

    let world_rule_routes = Router::new()
        .route("/", get(world_rule::list).post(world_rule::create))
        .route(
            "/{id}",
            axum::routing::put(world_rule::update).delete(world_rule::delete),
        );

    Router::new()
        .route("/", get(original_work::list).post(original_work::create))
        .route(
            "/{id}",
            get(original_work::get_by_id)
                .put(original_work::update)
                .delete(original_work::delete),
        )
        .nest("/{original_id}/characters", character_routes)
        .nest("/{original_id}/world-rules", world_rule_routes)
}
