//! Handlers for the auction house.
//!
//! The game server drives every auction operation through a single
//! payload-dispatched POST endpoint.

use axum::extract::State;
use axum::Json;
use playcrate_core::error::CoreError;
use playcrate_core::item::ItemType;
use playcrate_core::types::DbId;
use playcrate_db::models::auction::CreateListing;
use playcrate_db::repositories::auction_repo::MAX_OPEN_PER_PLAYER;
use playcrate_db::repositories::AuctionRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auction`, dispatched on the `payload` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "payload")]
pub enum AuctionRequest {
    #[serde(rename = "LIST")]
    List {
        #[serde(rename = "robloxId")]
        roblox_id: DbId,
        #[serde(rename = "robloxName")]
        roblox_name: String,
        #[serde(rename = "itemType")]
        item_type: String,
        #[serde(rename = "itemData")]
        item_data: serde_json::Value,
        #[serde(rename = "startPrice")]
        start_price: i64,
        #[serde(rename = "priceType", default)]
        price_type: Option<String>,
    },

    #[serde(rename = "READ")]
    Read,

    #[serde(rename = "AUCTION_UNLIST")]
    Unlist {
        #[serde(rename = "id")]
        listing_id: DbId,
    },
}

/// POST /auction
pub async fn auctions(
    State(state): State<AppState>,
    Json(body): Json<AuctionRequest>,
) -> AppResult<Json<serde_json::Value>> {
    match body {
        AuctionRequest::List {
            roblox_id,
            roblox_name,
            item_type,
            item_data,
            start_price,
            price_type,
        } => {
            let item_type: ItemType = item_type.parse().map_err(AppError::Core)?;

            if item_data.is_null() {
                return Err(AppError::BadRequest("itemData cannot be empty".into()));
            }
            if start_price == 0 {
                return Err(AppError::BadRequest("price cannot be empty".into()));
            }

            let listing = CreateListing {
                roblox_id,
                roblox_name,
                item_type,
                item_data,
                start_price,
                price_type: price_type.unwrap_or_else(|| "COINS".to_string()),
            };

            let inserted = AuctionRepo::insert(&state.pool, &listing)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Conflict(format!(
                        "Player already has {MAX_OPEN_PER_PLAYER} open listings"
                    )))
                })?;

            tracing::info!(
                roblox_id = inserted.roblox_id,
                listing_id = inserted.id,
                item_type = %inserted.item_type,
                "Auction listed"
            );
            Ok(Json(
                serde_json::json!({ "success": true, "data": inserted }),
            ))
        }

        AuctionRequest::Read => {
            let listings = AuctionRepo::list_all(&state.pool).await?;
            Ok(Json(
                serde_json::json!({ "success": true, "data": listings }),
            ))
        }

        AuctionRequest::Unlist { listing_id } => {
            let removed = AuctionRepo::delete_by_id(&state.pool, listing_id).await?;
            if removed == 0 {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "auction",
                    id: listing_id,
                }));
            }
            Ok(Json(
                serde_json::json!({ "success": true, "data": "Auction Unlisted" }),
            ))
        }
    }
}
