//! Pet-ownership registry models.

use playcrate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pets_exist` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PetRecord {
    #[serde(rename = "robloxId")]
    pub roblox_id: DbId,
    #[serde(rename = "petId")]
    pub pet_id: String,
    #[serde(rename = "petCount")]
    pub pet_count: i64,
}
