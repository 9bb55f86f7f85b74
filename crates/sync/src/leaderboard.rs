//! Ranked view builder and the leaderboard refresh scheduler.

use std::time::Duration;

use playcrate_cache::{keys, CacheClient};
use playcrate_core::metric::Metric;
use playcrate_db::models::event::EventEntry;
use playcrate_db::models::player::LeaderboardEntry;
use playcrate_db::repositories::{HalloweenRepo, PetRepo, PlayerRepo, SeasonRepo};
use playcrate_db::DbPool;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Each leaderboard slice is capped at this many rows.
pub const VIEW_LIMIT: i64 = 100;

/// Event leaderboard slices are shorter than the main boards.
pub const EVENT_VIEW_LIMIT: i64 = 50;

/// How often a full refresh pass runs. The first pass fires immediately
/// at startup.
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// RankedView
// ---------------------------------------------------------------------------

/// The two ranked slices for one metric: players with a zero paid-currency
/// balance, and all players. Computed fresh on every pass and published
/// whole; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedView {
    /// Free-to-play slice (`robux = 0` only).
    pub f2p: Vec<LeaderboardEntry>,
    /// All players, regardless of paid-currency balance.
    #[serde(rename = "nof2p")]
    pub all: Vec<LeaderboardEntry>,
}

/// Build the ranked view for one metric.
///
/// The two slices are queried independently: if one query fails it is
/// logged and that slice stays empty, so a transient error on one side
/// never suppresses the other. Partial results beat no results for a
/// best-effort cache.
pub async fn build_view(pool: &DbPool, metric: Metric) -> RankedView {
    let f2p = match PlayerRepo::top_by_metric(pool, metric, true, VIEW_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(metric = %metric, error = %e, "Failed to query F2P slice");
            Vec::new()
        }
    };

    let all = match PlayerRepo::top_by_metric(pool, metric, false, VIEW_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(metric = %metric, error = %e, "Failed to query all-players slice");
            Vec::new()
        }
    };

    RankedView { f2p, all }
}

// ---------------------------------------------------------------------------
// Event views
// ---------------------------------------------------------------------------

/// The two ranked slices of the seasonal leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonView {
    pub season_main: Vec<EventEntry>,
    pub season_event: Vec<EventEntry>,
}

/// The two ranked slices of the halloween leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HalloweenView {
    pub houses: Vec<EventEntry>,
    pub candies: Vec<EventEntry>,
}

/// Build the seasonal view. Slice failures are isolated the same way as
/// in [`build_view`].
pub async fn build_season_view(pool: &DbPool) -> SeasonView {
    let season_main = match SeasonRepo::top_main(pool, EVENT_VIEW_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "Failed to query season_main slice");
            Vec::new()
        }
    };

    let season_event = match SeasonRepo::top_event(pool, EVENT_VIEW_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "Failed to query season_event slice");
            Vec::new()
        }
    };

    SeasonView {
        season_main,
        season_event,
    }
}

/// Build the halloween view. Slice failures are isolated the same way as
/// in [`build_view`].
pub async fn build_halloween_view(pool: &DbPool) -> HalloweenView {
    let houses = match HalloweenRepo::top_houses(pool, EVENT_VIEW_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "Failed to query houses slice");
            Vec::new()
        }
    };

    let candies = match HalloweenRepo::top_candies(pool, EVENT_VIEW_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "Failed to query candies slice");
            Vec::new()
        }
    };

    HalloweenView { houses, candies }
}

// ---------------------------------------------------------------------------
// LeaderboardRefresher
// ---------------------------------------------------------------------------

/// Background service that materializes every tracked leaderboard (and the
/// pet-ownership snapshot) into the cache.
///
/// Both triggers (the one-shot startup refresh and the fixed 60-second
/// period) drive the same single-consumer loop, so passes are serialized
/// and can never overlap with themselves.
pub struct LeaderboardRefresher {
    pool: DbPool,
    cache: CacheClient,
}

impl LeaderboardRefresher {
    pub fn new(pool: DbPool, cache: CacheClient) -> Self {
        Self { pool, cache }
    }

    /// Run the refresh loop until `cancel` is triggered.
    ///
    /// `tokio::time::interval` fires its first tick immediately, which
    /// provides the run-once-at-startup behaviour; subsequent ticks fire
    /// every [`REFRESH_INTERVAL`].
    pub async fn run(&self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = REFRESH_INTERVAL.as_secs(),
            "Leaderboard refresher started"
        );

        let mut interval = tokio::time::interval(REFRESH_INTERVAL);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Leaderboard refresher stopping");
                    break;
                }
                _ = interval.tick() => {
                    self.refresh_pass().await;
                }
            }
        }
    }

    /// One full pass: rebuild and publish every metric's view, the event
    /// leaderboards, then the pet snapshot. Failures are contained to the
    /// metric or key they occur on; the pass always visits everything.
    pub async fn refresh_pass(&self) {
        for metric in Metric::ALL {
            let view = build_view(&self.pool, metric).await;
            if let Err(e) = self.cache.put_json(metric.cache_key(), &view).await {
                tracing::error!(key = metric.cache_key(), error = %e, "Failed to publish ranked view");
            }
        }

        let season = build_season_view(&self.pool).await;
        if let Err(e) = self.cache.put_json(keys::SEASON_LB, &season).await {
            tracing::error!(key = keys::SEASON_LB, error = %e, "Failed to publish season view");
        }

        let halloween = build_halloween_view(&self.pool).await;
        if let Err(e) = self.cache.put_json(keys::HALLOWEEN_LB, &halloween).await {
            tracing::error!(key = keys::HALLOWEEN_LB, error = %e, "Failed to publish halloween view");
        }

        match PetRepo::list_all(&self.pool).await {
            Ok(pets) => {
                if let Err(e) = self.cache.put_json(keys::PETS_EXIST, &pets).await {
                    tracing::error!(key = keys::PETS_EXIST, error = %e, "Failed to publish pet snapshot");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to query pet snapshot");
            }
        }

        tracing::debug!("Leaderboard refresh pass complete");
    }
}
