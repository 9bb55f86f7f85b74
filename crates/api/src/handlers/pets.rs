//! Handlers for the pet-ownership registry.
//!
//! Writes go straight to the store; reads are served from the snapshot the
//! background refresher publishes alongside the leaderboards.

use axum::extract::State;
use axum::Json;
use playcrate_cache::keys;
use playcrate_core::error::CoreError;
use playcrate_core::types::DbId;
use playcrate_db::models::pet::PetRecord;
use playcrate_db::repositories::PetRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::read_cached;
use crate::state::AppState;

/// Request body for `POST /pets-exist`, dispatched on the `payload` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "payload")]
pub enum PetsRequest {
    #[serde(rename = "INSERT_PETS_EXISTANCE")]
    Insert {
        #[serde(rename = "robloxId")]
        roblox_id: DbId,
        #[serde(rename = "petId")]
        pet_id: String,
        #[serde(rename = "petCount", default)]
        pet_count: i64,
    },

    #[serde(rename = "READ_PETS_EXISTANCE")]
    Read,

    #[serde(rename = "DELETE_PETS_EXISTANCE")]
    Delete {
        #[serde(rename = "robloxId")]
        roblox_id: DbId,
        #[serde(rename = "petId")]
        pet_id: String,
    },
}

/// POST /pets-exist
pub async fn pets_existance(
    State(state): State<AppState>,
    Json(body): Json<PetsRequest>,
) -> AppResult<Json<serde_json::Value>> {
    match body {
        PetsRequest::Insert {
            roblox_id,
            pet_id,
            pet_count,
        } => {
            if pet_id.is_empty() {
                return Err(AppError::BadRequest("petId cannot be empty".into()));
            }
            let record = PetRecord {
                roblox_id,
                pet_id,
                pet_count,
            };
            PetRepo::upsert(&state.pool, &record).await?;
            Ok(Json(
                serde_json::json!({ "success": true, "data": "Pets Inserted" }),
            ))
        }

        PetsRequest::Read => {
            let snapshot = read_cached(&state, keys::PETS_EXIST, "Pet snapshot").await?;
            Ok(Json(
                serde_json::json!({ "success": true, "data": snapshot }),
            ))
        }

        PetsRequest::Delete { roblox_id, pet_id } => {
            let removed = PetRepo::delete(&state.pool, roblox_id, &pet_id).await?;
            if removed == 0 {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "pet record",
                    id: roblox_id,
                }));
            }
            Ok(Json(
                serde_json::json!({ "success": true, "data": "Pets Removed" }),
            ))
        }
    }
}
