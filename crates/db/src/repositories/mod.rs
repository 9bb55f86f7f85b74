//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod auction_repo;
pub mod ghost_hunt_repo;
pub mod halloween_repo;
pub mod pet_repo;
pub mod player_repo;
pub mod season_repo;

pub use auction_repo::AuctionRepo;
pub use ghost_hunt_repo::GhostHuntRepo;
pub use halloween_repo::HalloweenRepo;
pub use pet_repo::PetRepo;
pub use player_repo::PlayerRepo;
pub use season_repo::SeasonRepo;
