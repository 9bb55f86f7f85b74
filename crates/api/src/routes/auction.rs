//! Routes for the auction house.

use axum::routing::post;
use axum::Router;

use crate::handlers::auction;
use crate::state::AppState;

/// ```text
/// POST /auction -> auctions (payload-dispatched)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/auction", post(auction::auctions))
}
