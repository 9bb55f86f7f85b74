//! Auction expiry sweeper.
//!
//! On every tick the sweeper collects OPEN listings older than the cutoff,
//! sends one refund batch to the mailbox service, and deletes the matching
//! rows only after the mailbox acknowledges success.
//!
//! # Delivery semantics
//!
//! Notification is at-least-once, not exactly-once: if the mailbox
//! confirms a batch but the subsequent delete fails, the same listings are
//! re-notified on the next tick. There is no per-listing "notified"
//! marker; the duplicate-refund window is an accepted limitation of the
//! notify-then-delete design.

use std::time::Duration;

use chrono::Utc;
use playcrate_core::types::Timestamp;
use playcrate_db::models::auction::ExpiredListing;
use playcrate_db::repositories::AuctionRepo;
use playcrate_db::DbPool;
use tokio_util::sync::CancellationToken;

use crate::mailbox::{MailboxAck, MailboxClient, MailboxError, MailboxRequest};

/// Fixed sender identity injected into every refund payload.
pub const SENDER_ID: i64 = 1;
pub const SENDER_NAME: &str = "PlayCrate";

/// Human-readable message shown next to the refunded item.
pub const EXPIRY_MESSAGE: &str = "This item has expired and has been returned to your mailbox.";

/// Sweep scheduling parameters.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// How often a sweep tick fires.
    pub interval: Duration,
    /// Signed offset added to the current time to form the cutoff.
    /// Typically negative: `-3600` expires listings older than one hour.
    pub cutoff_offset_secs: i64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            cutoff_offset_secs: -3600,
        }
    }
}

/// Error type for a single sweep tick.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error(transparent)]
    Mailbox(#[from] MailboxError),
}

// ---------------------------------------------------------------------------
// AuctionSweeper
// ---------------------------------------------------------------------------

/// Background service that expires stale auction listings.
pub struct AuctionSweeper {
    pool: DbPool,
    mailbox: MailboxClient,
    config: SweepConfig,
}

impl AuctionSweeper {
    pub fn new(pool: DbPool, mailbox: MailboxClient, config: SweepConfig) -> Self {
        Self {
            pool,
            mailbox,
            config,
        }
    }

    /// Run the sweep loop until `cancel` is triggered.
    ///
    /// A failed tick is logged and retried naturally on the next firing;
    /// nothing here is fatal to the process.
    pub async fn run(&self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = self.config.interval.as_secs(),
            cutoff_offset_secs = self.config.cutoff_offset_secs,
            "Auction sweeper started"
        );

        let mut interval = tokio::time::interval(self.config.interval);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Auction sweeper stopping");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.sweep_tick().await {
                        tracing::error!(error = %e, "Auction sweep tick failed");
                    }
                }
            }
        }
    }

    /// One sweep tick: query, notify, and (on confirmed delivery) delete.
    pub async fn sweep_tick(&self) -> Result<(), SweepError> {
        let now = Utc::now();
        let cutoff = now + chrono::Duration::seconds(self.config.cutoff_offset_secs);

        let batch = AuctionRepo::list_expired(&self.pool, cutoff).await?;
        let Some(request) = build_refund_request(&batch, now) else {
            tracing::debug!("No expired listings; sweep tick is a no-op");
            return Ok(());
        };

        // Any transport or status failure aborts the tick before the
        // destructive step; the listings stay OPEN for the next tick.
        let ack = self.mailbox.send(&request).await?;

        let deleted = Self::settle(&self.pool, cutoff, ack).await?;
        if ack.success {
            tracing::info!(
                notified = batch.len(),
                deleted,
                "Expired auction batch delivered to mailbox"
            );
        }

        Ok(())
    }

    /// Apply the acknowledgment: delete every row still matching the sweep
    /// predicate iff the mailbox confirmed delivery.
    ///
    /// The delete re-evaluates `listed < cutoff AND status = 'OPEN'`
    /// rather than naming ids, so rows that became ineligible since the
    /// query are left alone, and rows inserted since that also match the
    /// predicate are permissibly removed (documented race).
    pub async fn settle(
        pool: &DbPool,
        cutoff: Timestamp,
        ack: MailboxAck,
    ) -> Result<u64, sqlx::Error> {
        if !ack.success {
            tracing::warn!("Mailbox rejected expiry batch; listings remain OPEN");
            return Ok(0);
        }
        AuctionRepo::delete_expired(pool, cutoff).await
    }
}

// ---------------------------------------------------------------------------
// Payload construction
// ---------------------------------------------------------------------------

/// Build the single mailbox request for an expiry batch, or `None` when
/// the batch is empty. The top-level name/id identify the first listing's
/// owner; per-recipient routing uses the `targetId` injected into each
/// payload item.
pub fn build_refund_request(batch: &[ExpiredListing], now: Timestamp) -> Option<MailboxRequest> {
    let first = batch.first()?;
    let payload = batch
        .iter()
        .map(|listing| refund_payload(listing, now))
        .collect();

    Some(MailboxRequest {
        roblox_name: first.roblox_name.clone(),
        roblox_id: first.roblox_id,
        kind: "ADD".into(),
        payload,
    })
}

/// The stored item JSON with the refund fields injected. Original item
/// fields are preserved; a non-object payload is wrapped under `"item"`
/// first so the injected fields always have somewhere to live.
pub fn refund_payload(listing: &ExpiredListing, now: Timestamp) -> serde_json::Value {
    let mut obj = match listing.item_data.clone() {
        serde_json::Value::Object(map) => map,
        other => {
            let mut map = serde_json::Map::new();
            map.insert("item".into(), other);
            map
        }
    };

    obj.insert("timestamp".into(), now.timestamp().into());
    obj.insert("message".into(), EXPIRY_MESSAGE.into());
    obj.insert("senderId".into(), SENDER_ID.into());
    obj.insert("senderName".into(), SENDER_NAME.into());
    obj.insert("displayName".into(), SENDER_NAME.into());
    obj.insert("targetId".into(), listing.roblox_id.into());

    serde_json::Value::Object(obj)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(roblox_id: i64, item_data: serde_json::Value) -> ExpiredListing {
        ExpiredListing {
            roblox_id,
            roblox_name: format!("player{roblox_id}"),
            item_data,
        }
    }

    #[test]
    fn refund_payload_preserves_item_fields_and_injects_refund_fields() {
        let now = Utc::now();
        let raw = serde_json::json!({"id": "2", "nk": "Cat", "lvl": 1});

        let payload = refund_payload(&listing(42, raw), now);

        assert_eq!(payload["nk"], "Cat");
        assert_eq!(payload["lvl"], 1);
        assert_eq!(payload["timestamp"], now.timestamp());
        assert_eq!(payload["message"], EXPIRY_MESSAGE);
        assert_eq!(payload["senderId"], SENDER_ID);
        assert_eq!(payload["senderName"], SENDER_NAME);
        assert_eq!(payload["displayName"], SENDER_NAME);
        assert_eq!(payload["targetId"], 42);
    }

    #[test]
    fn refund_payload_wraps_non_object_item_data() {
        let now = Utc::now();
        let payload = refund_payload(&listing(7, serde_json::json!([1, 2, 3])), now);

        assert_eq!(payload["item"], serde_json::json!([1, 2, 3]));
        assert_eq!(payload["targetId"], 7);
    }

    #[test]
    fn empty_batch_builds_no_request() {
        assert!(build_refund_request(&[], Utc::now()).is_none());
    }

    #[test]
    fn batch_aggregates_into_one_request_with_one_item_per_listing() {
        let now = Utc::now();
        let batch = vec![
            listing(1, serde_json::json!({"id": "a"})),
            listing(2, serde_json::json!({"id": "b"})),
            listing(3, serde_json::json!({"id": "c"})),
        ];

        let request = build_refund_request(&batch, now).unwrap();

        assert_eq!(request.kind, "ADD");
        assert_eq!(request.roblox_id, 1);
        assert_eq!(request.payload.len(), 3);
        // Each listing appears exactly once, addressed to its own owner.
        let targets: Vec<i64> = request
            .payload
            .iter()
            .map(|p| p["targetId"].as_i64().unwrap())
            .collect();
        assert_eq!(targets, vec![1, 2, 3]);
    }

    #[test]
    fn default_sweep_config_expires_after_one_hour() {
        let config = SweepConfig::default();
        assert_eq!(config.interval, Duration::from_secs(60));
        assert_eq!(config.cutoff_offset_secs, -3600);
    }
}
