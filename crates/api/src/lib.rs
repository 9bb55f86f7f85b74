//! HTTP surface for the PlayCrate stats and auction backend.
//!
//! Handlers are thin decode/validate/dispatch wrappers over the db
//! repositories and the shared cache; all ranked leaderboard reads are
//! served from the cache populated by `playcrate-sync`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
