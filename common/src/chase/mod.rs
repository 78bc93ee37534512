pub mod agent;
pub mod boogie;
pub mod config;
pub mod steering;
pub mod vision;

pub use agent::{ChaseAgent, ChaseMode, Steering, Surroundings};
pub use boogie::{BoogieState, boogie_tint, boogie_velocity};
pub use config::{ChaseConfig, Personality};
pub use steering::{Side, separation_push};
pub use vision::VisionState;
