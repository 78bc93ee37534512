pub mod chase;
pub mod collision;
pub mod components;
pub mod constants;
pub mod environment;
pub mod markers;
pub mod obstacles;
pub mod systems;
