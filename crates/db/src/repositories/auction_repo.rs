//! Repository for the `auctions` table.

use playcrate_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::auction::{AuctionListing, CreateListing, ExpiredListing};

/// Column list for `auctions` SELECT queries.
const COLUMNS: &str = "\
    id, roblox_id, roblox_name, item_type, item_data, \
    start_price, price_type, listed, status";

/// A player may hold at most this many concurrently OPEN listings.
pub const MAX_OPEN_PER_PLAYER: i64 = 4;

/// Provides query operations for auction listings.
pub struct AuctionRepo;

impl AuctionRepo {
    /// Insert a new OPEN listing, unless the player already has
    /// [`MAX_OPEN_PER_PLAYER`] open listings. Returns `None` when the cap
    /// is hit; the check and the insert run as one statement so two
    /// concurrent inserts cannot both slip under the cap.
    pub async fn insert(
        pool: &PgPool,
        listing: &CreateListing,
    ) -> Result<Option<AuctionListing>, sqlx::Error> {
        let query = format!(
            "INSERT INTO auctions \
                 (roblox_id, roblox_name, item_type, item_data, start_price, price_type) \
             SELECT $1, $2, $3, $4, $5, $6 \
             WHERE (SELECT count(*) FROM auctions \
                    WHERE roblox_id = $1 AND status = 'OPEN') < $7 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuctionListing>(&query)
            .bind(listing.roblox_id)
            .bind(&listing.roblox_name)
            .bind(listing.item_type.as_str())
            .bind(&listing.item_data)
            .bind(listing.start_price)
            .bind(&listing.price_type)
            .bind(MAX_OPEN_PER_PLAYER)
            .fetch_optional(pool)
            .await
    }

    /// All listings, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AuctionListing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM auctions ORDER BY id DESC");
        sqlx::query_as::<_, AuctionListing>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete one listing by row id. Returns the number of rows removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM auctions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// OPEN listings listed strictly before `cutoff`, in listing order.
    /// This is the expiry batch the sweeper notifies about.
    pub async fn list_expired(
        pool: &PgPool,
        cutoff: Timestamp,
    ) -> Result<Vec<ExpiredListing>, sqlx::Error> {
        sqlx::query_as::<_, ExpiredListing>(
            "SELECT roblox_id, roblox_name, item_data FROM auctions \
             WHERE listed < $1 AND status = 'OPEN' \
             ORDER BY id",
        )
        .bind(cutoff)
        .fetch_all(pool)
        .await
    }

    /// Delete every OPEN listing listed strictly before `cutoff`.
    ///
    /// The predicate is re-evaluated here rather than deleting by an id
    /// list, so only rows still eligible at delete time are removed.
    pub async fn delete_expired(pool: &PgPool, cutoff: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM auctions WHERE listed < $1 AND status = 'OPEN'")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
