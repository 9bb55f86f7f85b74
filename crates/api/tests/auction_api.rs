//! Integration tests for the payload-dispatched auction endpoint and the
//! player lookup.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, TEST_TOKEN};
use sqlx::PgPool;

fn list_body(roblox_id: i64) -> serde_json::Value {
    serde_json::json!({
        "payload": "LIST",
        "robloxId": roblox_id,
        "robloxName": format!("player{roblox_id}"),
        "itemType": "PET",
        "startPrice": 100000,
        "itemData": {"id": "2", "nk": "Cat", "lvl": 1}
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_then_read_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app.clone(), "/auction", Some(TEST_TOKEN), list_body(1)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["itemType"], "PET");
    assert_eq!(json["data"]["status"], "OPEN");

    let response = post_json(
        app,
        "/auction",
        Some(TEST_TOKEN),
        serde_json::json!({"payload": "READ"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_with_unknown_item_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let mut body = list_body(1);
    body["itemType"] = "SWORD".into();
    let response = post_json(app, "/auction", Some(TEST_TOKEN), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_with_zero_price_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let mut body = list_body(1);
    body["startPrice"] = 0.into();
    let response = post_json(app, "/auction", Some(TEST_TOKEN), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn fifth_open_listing_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    for _ in 0..4 {
        let response = post_json(app.clone(), "/auction", Some(TEST_TOKEN), list_body(7)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = post_json(app, "/auction", Some(TEST_TOKEN), list_body(7)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unlisting_a_missing_listing_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app,
        "/auction",
        Some(TEST_TOKEN),
        serde_json::json!({"payload": "AUCTION_UNLIST", "id": 424242}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lookup_finds_upserted_player(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app.clone(),
        "/lb-lookup",
        Some(TEST_TOKEN),
        serde_json::json!({"robloxId": 9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    post_json(
        app.clone(),
        "/leaderboard",
        Some(TEST_TOKEN),
        serde_json::json!({"robloxId": 9, "robloxName": "niner", "bubbles": 12}),
    )
    .await;

    let response = post_json(
        app,
        "/lb-lookup",
        Some(TEST_TOKEN),
        serde_json::json!({"robloxId": 9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["bubbles"], 12);
}
