//! Route definitions for stateless tooling endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Routes mounted at `/tools`.
///
/// ```text
/// POST   /character-parse         -> parse
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/character-parse", post(tools::parse))
}
