//! Integration tests for the auction repository: the per-player listing
//! cap and the expiry predicate queries.

use chrono::{Duration, Utc};
use playcrate_core::item::ItemType;
use playcrate_core::types::{DbId, Timestamp};
use playcrate_db::models::auction::CreateListing;
use playcrate_db::repositories::auction_repo::MAX_OPEN_PER_PLAYER;
use playcrate_db::repositories::AuctionRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn listing(roblox_id: i64) -> CreateListing {
    CreateListing {
        roblox_id,
        roblox_name: format!("player{roblox_id}"),
        item_type: ItemType::Pet,
        item_data: serde_json::json!({"id": "2", "nk": "Cat"}),
        start_price: 100_000,
        price_type: "COINS".to_string(),
    }
}

async fn backdate(pool: &PgPool, id: DbId, listed: Timestamp) {
    sqlx::query("UPDATE auctions SET listed = $1 WHERE id = $2")
        .bind(listed)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Listing cap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn fifth_open_listing_is_rejected(pool: PgPool) {
    for _ in 0..MAX_OPEN_PER_PLAYER {
        let inserted = AuctionRepo::insert(&pool, &listing(77)).await.unwrap();
        assert!(inserted.is_some());
    }

    let fifth = AuctionRepo::insert(&pool, &listing(77)).await.unwrap();
    assert!(fifth.is_none());

    // The cap is per player: someone else can still list.
    let other = AuctionRepo::insert(&pool, &listing(78)).await.unwrap();
    assert!(other.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn non_open_listings_do_not_count_toward_the_cap(pool: PgPool) {
    for _ in 0..MAX_OPEN_PER_PLAYER {
        AuctionRepo::insert(&pool, &listing(5)).await.unwrap();
    }
    sqlx::query("UPDATE auctions SET status = 'SOLD' WHERE roblox_id = 5")
        .execute(&pool)
        .await
        .unwrap();

    let again = AuctionRepo::insert(&pool, &listing(5)).await.unwrap();
    assert!(again.is_some());
}

// ---------------------------------------------------------------------------
// Delete by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_by_id_reports_missing_rows(pool: PgPool) {
    let inserted = AuctionRepo::insert(&pool, &listing(1)).await.unwrap().unwrap();

    assert_eq!(AuctionRepo::delete_by_id(&pool, inserted.id).await.unwrap(), 1);
    assert_eq!(AuctionRepo::delete_by_id(&pool, inserted.id).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Expiry predicate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn expiry_is_strictly_older_than_cutoff(pool: PgPool) {
    let listed_at = Utc::now() - Duration::hours(2);
    let row = AuctionRepo::insert(&pool, &listing(1)).await.unwrap().unwrap();
    backdate(&pool, row.id, listed_at).await;

    // Cutoff exactly at the listing time: not yet expired.
    let batch = AuctionRepo::list_expired(&pool, listed_at).await.unwrap();
    assert!(batch.is_empty());

    // One second past: expired, and present exactly once.
    let batch = AuctionRepo::list_expired(&pool, listed_at + Duration::seconds(1))
        .await
        .unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].roblox_id, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn expiry_ignores_non_open_listings(pool: PgPool) {
    let old = Utc::now() - Duration::hours(2);

    let open = AuctionRepo::insert(&pool, &listing(1)).await.unwrap().unwrap();
    backdate(&pool, open.id, old).await;

    let sold = AuctionRepo::insert(&pool, &listing(2)).await.unwrap().unwrap();
    backdate(&pool, sold.id, old).await;
    sqlx::query("UPDATE auctions SET status = 'SOLD' WHERE id = $1")
        .bind(sold.id)
        .execute(&pool)
        .await
        .unwrap();

    let cutoff = Utc::now() - Duration::hours(1);
    let batch = AuctionRepo::list_expired(&pool, cutoff).await.unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].roblox_id, 1);

    let deleted = AuctionRepo::delete_expired(&pool, cutoff).await.unwrap();
    assert_eq!(deleted, 1);

    // The SOLD row is untouched.
    let remaining: i64 = sqlx::query_scalar("SELECT count(*) FROM auctions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_spares_listings_newer_than_cutoff(pool: PgPool) {
    let cutoff = Utc::now() - Duration::hours(1);

    let stale = AuctionRepo::insert(&pool, &listing(1)).await.unwrap().unwrap();
    backdate(&pool, stale.id, cutoff - Duration::minutes(1)).await;

    // Freshly listed; excluded by the `< cutoff` predicate.
    AuctionRepo::insert(&pool, &listing(2)).await.unwrap().unwrap();

    let deleted = AuctionRepo::delete_expired(&pool, cutoff).await.unwrap();
    assert_eq!(deleted, 1);

    let survivors = AuctionRepo::list_all(&pool).await.unwrap();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].roblox_id, 2);
}
