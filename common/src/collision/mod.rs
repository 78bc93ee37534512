pub mod bodies;
pub mod helpers;

pub use bodies::{overlap_bodies, slide_body_along_obstacles};
pub use helpers::{circle_overlaps_box, ray_vs_box, segment_hits_box};
