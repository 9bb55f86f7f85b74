//! Repository for the `halloween_lb` table.

use sqlx::PgPool;

use crate::models::event::{EventEntry, UpsertHalloweenScore};

/// Provides query operations for the halloween leaderboard.
pub struct HalloweenRepo;

impl HalloweenRepo {
    /// Insert a player's halloween scores or, if the roblox id already
    /// exists, replace both counters.
    pub async fn upsert(pool: &PgPool, score: &UpsertHalloweenScore) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO halloween_lb (roblox_id, houses, candies) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (roblox_id) DO UPDATE SET \
                 houses = EXCLUDED.houses, \
                 candies = EXCLUDED.candies",
        )
        .bind(score.roblox_id)
        .bind(score.houses)
        .bind(score.candies)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Top players by houses visited.
    pub async fn top_houses(pool: &PgPool, limit: i64) -> Result<Vec<EventEntry>, sqlx::Error> {
        Self::top(pool, "houses", limit).await
    }

    /// Top players by candies collected.
    pub async fn top_candies(pool: &PgPool, limit: i64) -> Result<Vec<EventEntry>, sqlx::Error> {
        Self::top(pool, "candies", limit).await
    }

    /// Zero scores are omitted rather than ranked last.
    async fn top(pool: &PgPool, column: &str, limit: i64) -> Result<Vec<EventEntry>, sqlx::Error> {
        let query = format!(
            "SELECT roblox_id, {column} AS value FROM halloween_lb \
             WHERE {column} != 0 \
             ORDER BY {column} DESC, roblox_id ASC \
             LIMIT $1"
        );
        sqlx::query_as::<_, EventEntry>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
