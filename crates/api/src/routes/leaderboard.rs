//! Routes for player records and leaderboard reads.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::leaderboard;
use crate::state::AppState;

/// ```text
/// POST /leaderboard          -> insert_player
/// GET  /leaderboard/{metric} -> get_leaderboard
/// POST /lb-lookup            -> lookup_player
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", post(leaderboard::insert_player))
        .route("/leaderboard/{metric}", get(leaderboard::get_leaderboard))
        .route("/lb-lookup", post(leaderboard::lookup_player))
}
