//! Routes for the seasonal and event leaderboards.

use axum::routing::post;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// ```text
/// POST /season-lb    -> season_lb (payload-dispatched)
/// POST /halloween-lb -> halloween_lb (payload-dispatched)
/// POST /ghost-hunt   -> ghost_hunt (payload-dispatched)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/season-lb", post(events::season_lb))
        .route("/halloween-lb", post(events::halloween_lb))
        .route("/ghost-hunt", post(events::ghost_hunt))
}
