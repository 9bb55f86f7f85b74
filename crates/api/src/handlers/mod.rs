//! Request handlers, one module per resource.

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub mod auction;
pub mod events;
pub mod leaderboard;
pub mod pets;

/// Fetch a published view from the cache.
///
/// `what` names the view in the 404 message when the background refresher
/// has not published it yet.
pub(crate) async fn read_cached(
    state: &AppState,
    key: &str,
    what: &str,
) -> AppResult<serde_json::Value> {
    let raw = state
        .cache
        .get_raw(key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{what} has not been published yet")))?;

    serde_json::from_str(&raw).map_err(|e| AppError::Internal(format!("Corrupt cached view: {e}")))
}
