//! Repository for the `ghost_hunt_top_25` table.

use playcrate_core::types::DbId;
use sqlx::PgPool;

/// The ghost hunt board records only the first finishers up to this cap.
pub const GHOST_HUNT_CAP: i64 = 25;

/// Provides query operations for the ghost hunt finisher board.
pub struct GhostHuntRepo;

impl GhostHuntRepo {
    /// Register a finisher and return their 1-based serial, or `None`
    /// once the board is full. The count check and the insert run as one
    /// statement; the `RETURNING` subquery sees the pre-statement row
    /// count, so the serial is the finisher's position.
    pub async fn insert(pool: &PgPool, roblox_id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO ghost_hunt_top_25 (roblox_id) \
             SELECT $1 WHERE (SELECT count(*) FROM ghost_hunt_top_25) < $2 \
             RETURNING (SELECT count(*) FROM ghost_hunt_top_25) + 1",
        )
        .bind(roblox_id)
        .bind(GHOST_HUNT_CAP)
        .fetch_optional(pool)
        .await
    }
}
