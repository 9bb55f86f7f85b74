//! Periodic synchronization services.
//!
//! This crate holds the two background pipelines at the heart of the
//! backend:
//!
//! - [`LeaderboardRefresher`] materializes ranked leaderboard views
//!   (plus the pet-ownership snapshot) from PostgreSQL into the shared
//!   Redis cache, once at startup and then on a fixed period.
//! - [`AuctionSweeper`] finds stale OPEN auction listings, notifies the
//!   external mailbox service so the items are refunded, and deletes the
//!   listings only after the mailbox confirms delivery.
//!
//! Both are long-running async functions intended to be spawned via
//! `tokio::spawn` from the api binary, and both accept a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) that stops
//! future firings.

pub mod leaderboard;
pub mod mailbox;
pub mod sweeper;

pub use leaderboard::{
    build_halloween_view, build_season_view, build_view, HalloweenView, LeaderboardRefresher,
    RankedView, SeasonView,
};
pub use mailbox::{MailboxAck, MailboxClient, MailboxError, MailboxRequest};
pub use sweeper::{AuctionSweeper, SweepConfig};
