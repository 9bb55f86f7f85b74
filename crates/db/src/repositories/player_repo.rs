//! Repository for the `players` table.

use playcrate_core::metric::Metric;
use playcrate_core::types::DbId;
use sqlx::PgPool;

use crate::models::player::{LeaderboardEntry, Player, UpsertPlayer};

/// Column list for `players` SELECT queries.
const COLUMNS: &str = "\
    id, roblox_id, roblox_name, \
    secrets, eggs, bubbles, power, robux, playtime, time_saved";

/// Provides query operations for player records.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a player or, if the roblox id already exists, replace every
    /// counter. `time_saved` is stamped with the current time on every
    /// write, insert and update alike.
    pub async fn upsert(pool: &PgPool, player: &UpsertPlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players \
                 (roblox_id, roblox_name, secrets, eggs, bubbles, power, robux, playtime) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (roblox_id) DO UPDATE SET \
                 roblox_name = EXCLUDED.roblox_name, \
                 secrets = EXCLUDED.secrets, \
                 eggs = EXCLUDED.eggs, \
                 bubbles = EXCLUDED.bubbles, \
                 power = EXCLUDED.power, \
                 robux = EXCLUDED.robux, \
                 playtime = EXCLUDED.playtime, \
                 time_saved = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(player.roblox_id)
            .bind(&player.roblox_name)
            .bind(player.secrets)
            .bind(player.eggs)
            .bind(player.bubbles)
            .bind(player.power)
            .bind(player.robux)
            .bind(player.playtime)
            .fetch_one(pool)
            .await
    }

    /// Look up a single player by roblox id.
    pub async fn get_by_roblox_id(
        pool: &PgPool,
        roblox_id: DbId,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE roblox_id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(roblox_id)
            .fetch_optional(pool)
            .await
    }

    /// Top players by one metric, descending, ties broken by roblox id
    /// ascending so snapshots are reproducible. With `f2p_only` the result
    /// is restricted to players whose paid-currency balance is zero.
    pub async fn top_by_metric(
        pool: &PgPool,
        metric: Metric,
        f2p_only: bool,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        // `Metric::column` is a fixed identifier, never user input.
        let column = metric.column();
        let filter = if f2p_only { "WHERE robux = 0 " } else { "" };
        let query = format!(
            "SELECT roblox_id, roblox_name, {column} AS value, time_saved \
             FROM players \
             {filter}\
             ORDER BY {column} DESC, roblox_id ASC \
             LIMIT $1"
        );
        sqlx::query_as::<_, LeaderboardEntry>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
