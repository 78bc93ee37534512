use bevy::prelude::*;
use common::chase::ChaseAgent;

// Chase brain attached to every cop entity
#[derive(Component, Debug, Clone)]
pub struct Cop(pub ChaseAgent);
