//! Player entity models and DTOs.

use playcrate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `players` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    #[serde(rename = "robloxId")]
    pub roblox_id: DbId,
    #[serde(rename = "robloxName")]
    pub roblox_name: String,
    pub secrets: i64,
    pub eggs: i64,
    pub bubbles: i64,
    pub power: i64,
    pub robux: i64,
    pub playtime: i64,
    pub time_saved: Timestamp,
}

/// DTO for upserting a player record. Counters default to zero when the
/// game server omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPlayer {
    #[serde(rename = "robloxId")]
    pub roblox_id: DbId,
    #[serde(rename = "robloxName")]
    pub roblox_name: String,
    #[serde(default)]
    pub secrets: i64,
    #[serde(default)]
    pub eggs: i64,
    #[serde(default)]
    pub bubbles: i64,
    #[serde(default)]
    pub power: i64,
    #[serde(default)]
    pub robux: i64,
    #[serde(default)]
    pub playtime: i64,
}

/// One leaderboard row: a player together with the value of the ranked
/// metric. Which metric `value` holds is decided by the query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "robloxId")]
    pub roblox_id: DbId,
    #[serde(rename = "robloxName")]
    pub roblox_name: String,
    pub value: i64,
    pub time_saved: Timestamp,
}
