//! Auction listing models and DTOs.

use playcrate_core::item::ItemType;
use playcrate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `auctions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuctionListing {
    pub id: DbId,
    #[serde(rename = "robloxId")]
    pub roblox_id: DbId,
    #[serde(rename = "robloxName")]
    pub roblox_name: String,
    #[serde(rename = "itemType")]
    pub item_type: String,
    #[serde(rename = "itemData")]
    pub item_data: serde_json::Value,
    #[serde(rename = "startPrice")]
    pub start_price: i64,
    #[serde(rename = "priceType")]
    pub price_type: String,
    pub listed: Timestamp,
    pub status: String,
}

/// DTO for creating a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListing {
    pub roblox_id: DbId,
    pub roblox_name: String,
    pub item_type: ItemType,
    pub item_data: serde_json::Value,
    pub start_price: i64,
    pub price_type: String,
}

/// The subset of an expired listing the sweeper needs to build a refund
/// notification.
#[derive(Debug, Clone, FromRow)]
pub struct ExpiredListing {
    pub roblox_id: DbId,
    pub roblox_name: String,
    pub item_data: serde_json::Value,
}
