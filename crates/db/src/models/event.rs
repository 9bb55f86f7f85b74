//! Seasonal and event leaderboard models.

use playcrate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// DTO for upserting a player's seasonal scores.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSeasonScore {
    pub roblox_id: DbId,
    pub season_main: i64,
    pub season_event: i64,
}

/// DTO for upserting a player's halloween scores.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertHalloweenScore {
    pub roblox_id: DbId,
    pub houses: i64,
    pub candies: i64,
}

/// One event leaderboard row: a player and their score on one counter.
/// Which counter `value` holds is decided by the query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(rename = "robloxId")]
    pub roblox_id: DbId,
    pub value: i64,
}
