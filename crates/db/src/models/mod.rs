//! Row models and DTOs, grouped by table.

pub mod auction;
pub mod event;
pub mod pet;
pub mod player;
