//! Integration tests for the seasonal, halloween, and ghost hunt
//! repositories.

use playcrate_db::models::event::{UpsertHalloweenScore, UpsertSeasonScore};
use playcrate_db::repositories::ghost_hunt_repo::GHOST_HUNT_CAP;
use playcrate_db::repositories::{GhostHuntRepo, HalloweenRepo, SeasonRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn season_upsert_replaces_both_counters(pool: PgPool) {
    let mut score = UpsertSeasonScore {
        roblox_id: 1,
        season_main: 10,
        season_event: 2,
    };
    SeasonRepo::upsert(&pool, &score).await.unwrap();

    score.season_main = 30;
    SeasonRepo::upsert(&pool, &score).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM season_lb")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let top = SeasonRepo::top_main(&pool, 50).await.unwrap();
    assert_eq!(top[0].value, 30);
}

#[sqlx::test(migrations = "./migrations")]
async fn season_slices_rank_independently_and_skip_zeros(pool: PgPool) {
    for (id, main, event) in [(1, 100, 0), (2, 50, 5)] {
        SeasonRepo::upsert(
            &pool,
            &UpsertSeasonScore {
                roblox_id: id,
                season_main: main,
                season_event: event,
            },
        )
        .await
        .unwrap();
    }

    let main = SeasonRepo::top_main(&pool, 50).await.unwrap();
    let event = SeasonRepo::top_event(&pool, 50).await.unwrap();

    assert_eq!(main.iter().map(|r| r.roblox_id).collect::<Vec<_>>(), [1, 2]);
    // Player 1 has no event score and is absent from that slice.
    assert_eq!(event.iter().map(|r| r.roblox_id).collect::<Vec<_>>(), [2]);
}

// ---------------------------------------------------------------------------
// Halloween
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn halloween_slices_rank_independently(pool: PgPool) {
    for (id, houses, candies) in [(1, 9, 1), (2, 4, 20)] {
        HalloweenRepo::upsert(
            &pool,
            &UpsertHalloweenScore {
                roblox_id: id,
                houses,
                candies,
            },
        )
        .await
        .unwrap();
    }

    let houses = HalloweenRepo::top_houses(&pool, 50).await.unwrap();
    let candies = HalloweenRepo::top_candies(&pool, 50).await.unwrap();

    assert_eq!(
        houses.iter().map(|r| r.roblox_id).collect::<Vec<_>>(),
        [1, 2]
    );
    assert_eq!(
        candies.iter().map(|r| r.roblox_id).collect::<Vec<_>>(),
        [2, 1]
    );
}

// ---------------------------------------------------------------------------
// Ghost hunt
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn ghost_hunt_serials_count_up_from_one(pool: PgPool) {
    assert_eq!(GhostHuntRepo::insert(&pool, 10).await.unwrap(), Some(1));
    assert_eq!(GhostHuntRepo::insert(&pool, 20).await.unwrap(), Some(2));
    assert_eq!(GhostHuntRepo::insert(&pool, 30).await.unwrap(), Some(3));
}

#[sqlx::test(migrations = "./migrations")]
async fn ghost_hunt_rejects_finishers_past_the_cap(pool: PgPool) {
    for id in 1..=GHOST_HUNT_CAP {
        let serial = GhostHuntRepo::insert(&pool, id).await.unwrap();
        assert_eq!(serial, Some(id));
    }

    let overflow = GhostHuntRepo::insert(&pool, 99).await.unwrap();
    assert_eq!(overflow, None);

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM ghost_hunt_top_25")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, GHOST_HUNT_CAP);
}
