pub mod bombs;
pub mod cops;
pub mod pickups;
pub mod player;
pub mod score;
pub mod spawn;
