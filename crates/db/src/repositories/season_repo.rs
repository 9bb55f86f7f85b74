//! Repository for the `season_lb` table.

use sqlx::PgPool;

use crate::models::event::{EventEntry, UpsertSeasonScore};

/// Provides query operations for the seasonal leaderboard.
pub struct SeasonRepo;

impl SeasonRepo {
    /// Insert a player's seasonal scores or, if the roblox id already
    /// exists, replace both counters.
    pub async fn upsert(pool: &PgPool, score: &UpsertSeasonScore) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO season_lb (roblox_id, season_main, season_event) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (roblox_id) DO UPDATE SET \
                 season_main = EXCLUDED.season_main, \
                 season_event = EXCLUDED.season_event",
        )
        .bind(score.roblox_id)
        .bind(score.season_main)
        .bind(score.season_event)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Top players by main-season score.
    pub async fn top_main(pool: &PgPool, limit: i64) -> Result<Vec<EventEntry>, sqlx::Error> {
        Self::top(pool, "season_main", limit).await
    }

    /// Top players by event score.
    pub async fn top_event(pool: &PgPool, limit: i64) -> Result<Vec<EventEntry>, sqlx::Error> {
        Self::top(pool, "season_event", limit).await
    }

    /// Zero scores are omitted rather than ranked last.
    async fn top(pool: &PgPool, column: &str, limit: i64) -> Result<Vec<EventEntry>, sqlx::Error> {
        let query = format!(
            "SELECT roblox_id, {column} AS value FROM season_lb \
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
