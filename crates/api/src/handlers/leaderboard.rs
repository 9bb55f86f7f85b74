//! Handlers for player records and cached leaderboard reads.

use axum::extract::{Path, State};
use axum::Json;
use playcrate_core::metric::Metric;
use playcrate_core::types::DbId;
use playcrate_db::models::player::UpsertPlayer;
use playcrate_db::repositories::PlayerRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::read_cached;
use crate::state::AppState;

/// POST /leaderboard
///
/// Upsert a player record. Counters omitted by the game server default to
/// zero; `time_saved` is stamped server-side on every write.
pub async fn insert_player(
    State(state): State<AppState>,
    Json(body): Json<UpsertPlayer>,
) -> AppResult<Json<serde_json::Value>> {
    if body.roblox_id == 0 && body.roblox_name.is_empty() {
        return Err(AppError::BadRequest("robloxId cannot be 0".into()));
    }

    let player = PlayerRepo::upsert(&state.pool, &body).await?;
    tracing::info!(roblox_id = player.roblox_id, name = %player.roblox_name, "Player upserted");

    Ok(Json(serde_json::json!({ "success": true, "data": player })))
}

/// GET /leaderboard/{metric}
///
/// Serve the ranked view for one metric straight from the cache. The view
/// is refreshed in the background; this handler never queries the store.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(metric): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let metric: Metric = metric.parse().map_err(AppError::Core)?;

    let view = read_cached(
        &state,
        metric.cache_key(),
        &format!("Leaderboard {metric}"),
    )
    .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": view })))
}

/// Request body for `POST /lb-lookup`.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(rename = "robloxId")]
    pub roblox_id: DbId,
}

/// POST /lb-lookup
///
/// Look up a single player record by roblox id.
pub async fn lookup_player(
    State(state): State<AppState>,
    Json(body): Json<LookupRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if body.roblox_id == 0 {
        return Err(AppError::BadRequest("Missing robloxId".into()));
    }

    let player = PlayerRepo::get_by_roblox_id(&state.pool, body.roblox_id)
        .await?
        .ok_or(AppError::Core(playcrate_core::CoreError::NotFound {
            entity: "player",
            id: body.roblox_id,
        }))?;

    Ok(Json(serde_json::json!({ "success": true, "data": player })))
}
