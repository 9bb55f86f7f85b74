//! Shared domain types for the PlayCrate stats and auction backend.

pub mod error;
pub mod item;
pub mod metric;
pub mod types;

pub use error::CoreError;
pub use item::ItemType;
pub use metric::Metric;
