//! Handlers for the seasonal and event leaderboards.
//!
//! Writes go straight to the store; reads are served from the views the
//! background refresher publishes alongside the main leaderboards. The
//! ghost hunt board is write-only: the response carries the finisher's
//! serial and there is no read endpoint.

use axum::extract::State;
use axum::Json;
use playcrate_cache::keys;
use playcrate_core::error::CoreError;
use playcrate_core::types::DbId;
use playcrate_db::models::event::{UpsertHalloweenScore, UpsertSeasonScore};
use playcrate_db::repositories::ghost_hunt_repo::GHOST_HUNT_CAP;
use playcrate_db::repositories::{GhostHuntRepo, HalloweenRepo, SeasonRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::read_cached;
use crate::state::AppState;

/// Request body for `POST /season-lb`, dispatched on the `payload` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "payload")]
pub enum SeasonRequest {
    #[serde(rename = "INSERT_ACCOUNT")]
    Insert {
        #[serde(rename = "robloxId")]
        roblox_id: DbId,
        #[serde(default)]
        season_main: i64,
        #[serde(default)]
        season_event: i64,
    },

    #[serde(rename = "READ_LEADERBOARD")]
    Read,
}

/// POST /season-lb
pub async fn season_lb(
    State(state): State<AppState>,
    Json(body): Json<SeasonRequest>,
) -> AppResult<Json<serde_json::Value>> {
    match body {
        SeasonRequest::Insert {
            roblox_id,
            season_main,
            season_event,
        } => {
            if roblox_id == 0 {
                return Err(AppError::BadRequest("robloxId cannot be empty".into()));
            }
            if season_main == 0 && season_event == 0 {
                return Err(AppError::BadRequest(
                    "season main and event cannot be empty".into(),
                ));
            }

            let score = UpsertSeasonScore {
                roblox_id,
                season_main,
                season_event,
            };
            SeasonRepo::upsert(&state.pool, &score).await?;

            Ok(Json(serde_json::json!({
                "success": true,
                "data": "Successfully inserted into season leaderboard"
            })))
        }

        SeasonRequest::Read => {
            let view = read_cached(&state, keys::SEASON_LB, "Season leaderboard").await?;
            Ok(Json(serde_json::json!({ "success": true, "data": view })))
        }
    }
}

/// Request body for `POST /halloween-lb`, dispatched on the `payload`
/// field.
#[derive(Debug, Deserialize)]
#[serde(tag = "payload")]
pub enum HalloweenRequest {
    #[serde(rename = "INSERT_ACCOUNT")]
    Insert {
        #[serde(rename = "robloxId")]
        roblox_id: DbId,
        #[serde(default)]
        houses: i64,
        #[serde(default)]
        candies: i64,
    },

    #[serde(rename = "READ_LEADERBOARD")]
    Read,
}

/// POST /halloween-lb
pub async fn halloween_lb(
    State(state): State<AppState>,
    Json(body): Json<HalloweenRequest>,
) -> AppResult<Json<serde_json::Value>> {
    match body {
        HalloweenRequest::Insert {
            roblox_id,
            houses,
            candies,
        } => {
            if roblox_id == 0 {
                return Err(AppError::BadRequest("robloxId cannot be empty".into()));
            }
            if houses == 0 && candies == 0 {
                return Err(AppError::BadRequest(
                    "houses and candy cannot be empty".into(),
                ));
            }

            let score = UpsertHalloweenScore {
                roblox_id,
                houses,
                candies,
            };
            HalloweenRepo::upsert(&state.pool, &score).await?;

            Ok(Json(serde_json::json!({
                "success": true,
                "data": "Successfully inserted into halloween leaderboard"
            })))
        }

        HalloweenRequest::Read => {
            let view = read_cached(&state, keys::HALLOWEEN_LB, "Halloween leaderboard").await?;
            Ok(Json(serde_json::json!({ "success": true, "data": view })))
        }
    }
}

/// Request body for `POST /ghost-hunt`, dispatched on the `payload` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "payload")]
pub enum GhostHuntRequest {
    #[serde(rename = "INSERT_ACCOUNT")]
    Insert {
        #[serde(rename = "robloxId")]
        roblox_id: DbId,
    },
}

/// POST /ghost-hunt
pub async fn ghost_hunt(
    State(state): State<AppState>,
    Json(body): Json<GhostHuntRequest>,
) -> AppResult<Json<serde_json::Value>> {
    match body {
        GhostHuntRequest::Insert { roblox_id } => {
            if roblox_id == 0 {
                return Err(AppError::BadRequest("robloxId cannot be empty".into()));
            }

            let serial = GhostHuntRepo::insert(&state.pool, roblox_id)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Conflict(format!(
                        "Ghost hunt board already has {GHOST_HUNT_CAP} finishers"
                    )))
                })?;

            tracing::info!(roblox_id, serial, "Ghost hunt finisher recorded");
            Ok(Json(
                serde_json::json!({ "success": true, "data": { "serial": serial } }),
            ))
        }
    }
}
