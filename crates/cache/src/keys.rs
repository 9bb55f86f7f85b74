//! Well-known cache key constants.
//!
//! The six leaderboard keys live on `playcrate_core::Metric::cache_key`;
//! only the auxiliary snapshots are named here.

/// Pet-ownership registry snapshot.
pub const PETS_EXIST: &str = "pets-exist";

/// Seasonal leaderboard view.
pub const SEASON_LB: &str = "season-lb";

/// Halloween leaderboard view.
pub const HALLOWEEN_LB: &str = "halloween-lb";
