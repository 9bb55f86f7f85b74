//! Route definitions.

use axum::Router;

use crate::middleware::auth;
use crate::state::AppState;

pub mod auction;
pub mod events;
pub mod health;
pub mod leaderboard;
pub mod pets;

/// All game-server routes, guarded by the static-token middleware.
/// The health check is mounted separately without auth.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(leaderboard::router())
        .merge(auction::router())
        .merge(events::router())
        .merge(pets::router())
        .layer(axum::middleware::from_fn_with_state(
            state,
            auth::require_token,
        ))
}
