use bevy_math::Vec2;
use std::collections::HashMap;

use crate::components::AgentId;

// ============================================================================
// Environment Interfaces
// ============================================================================

// Where the chase target currently is; None when there is nothing to chase.
pub trait PositionProvider {
    fn position(&self) -> Option<Vec2>;
}

impl PositionProvider for Vec2 {
    fn position(&self) -> Option<Vec2> {
        Some(*self)
    }
}

impl PositionProvider for Option<Vec2> {
    fn position(&self) -> Option<Vec2> {
        *self
    }
}

// A probe that struck an obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    pub normal: Vec2,
    pub distance: f32,
}

// Line-of-sight and short-range probe queries against the solid obstacle set.
pub trait LineOfSight {
    // True when the straight segment between the two points crosses an obstacle.
    fn is_blocked(&self, from: Vec2, to: Vec2) -> bool;

    // Nearest obstacle hit along `direction` within `max_distance`, if any.
    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit>;
}

// Enumerates sibling agents for separation steering.
pub trait AgentRegistry {
    // Positions of agents within `radius` of `origin`, excluding `agent` itself.
    fn nearby(&self, agent: AgentId, origin: Vec2, radius: f32) -> Vec<Vec2>;
}

// ============================================================================
// Registries
// ============================================================================

// Flat per-tick copy of every agent position. Linear scan; fine for a handful of agents.
#[derive(Debug, Clone, Default)]
pub struct NeighborSnapshot {
    entries: Vec<(AgentId, Vec2)>,
}

impl NeighborSnapshot {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn insert(&mut self, agent: AgentId, position: Vec2) {
        self.entries.push((agent, position));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(AgentId, Vec2)> for NeighborSnapshot {
    fn from_iter<I: IntoIterator<Item = (AgentId, Vec2)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl AgentRegistry for NeighborSnapshot {
    fn nearby(&self, agent: AgentId, origin: Vec2, radius: f32) -> Vec<Vec2> {
        let radius_sq = radius * radius;
        self.entries
            .iter()
            .filter(|(id, pos)| *id != agent && origin.distance_squared(*pos) <= radius_sq)
            .map(|(_, pos)| *pos)
            .collect()
    }
}

// Uniform grid bucketing agents by cell; queries only visit cells the radius can reach.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<(AgentId, Vec2)>>,
}

impl SpatialGrid {
    #[must_use]
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(f32::EPSILON),
            cells: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.cells.values_mut().for_each(Vec::clear);
    }

    pub fn insert(&mut self, agent: AgentId, position: Vec2) {
        self.cells.entry(self.cell_of(position)).or_default().push((agent, position));
    }

    fn cell_of(&self, position: Vec2) -> (i32, i32) {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }
}

impl AgentRegistry for SpatialGrid {
    fn nearby(&self, agent: AgentId, origin: Vec2, radius: f32) -> Vec<Vec2> {
        let radius_sq = radius * radius;
        let reach = (radius / self.cell_size).ceil() as i32;
        let (cx, cy) = self.cell_of(origin);

        let mut found = Vec::new();
        for x in (cx - reach)..=(cx + reach) {
            for y in (cy - reach)..=(cy + reach) {
                let Some(bucket) = self.cells.get(&(x, y)) else {
                    continue;
                };
                found.extend(
                    bucket
                        .iter()
                        .filter(|(id, pos)| *id != agent && origin.distance_squared(*pos) <= radius_sq)
                        .map(|(_, pos)| *pos),
                );
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agents() -> Vec<(AgentId, Vec2)> {
        vec![
            (AgentId(0), Vec2::new(0.0, 0.0)),
            (AgentId(1), Vec2::new(1.0, 0.0)),
            (AgentId(2), Vec2::new(0.0, -1.4)),
            (AgentId(3), Vec2::new(5.0, 5.0)),
            (AgentId(4), Vec2::new(-2.9, 0.1)),
        ]
    }

    fn sorted(mut points: Vec<Vec2>) -> Vec<Vec2> {
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points
    }

    #[test]
    fn snapshot_excludes_self_and_far_agents() {
        let snapshot: NeighborSnapshot = agents().into_iter().collect();
        let near = sorted(snapshot.nearby(AgentId(0), Vec2::ZERO, 1.5));
        assert_eq!(near, vec![Vec2::new(0.0, -1.4), Vec2::new(1.0, 0.0)]);
    }

    #[test]
    fn grid_matches_linear_scan() {
        let snapshot: NeighborSnapshot = agents().into_iter().collect();
        let mut grid = SpatialGrid::new(1.5);
        for (id, pos) in agents() {
            grid.insert(id, pos);
        }

        for (id, pos) in agents() {
            for radius in [0.5, 1.5, 3.0, 10.0] {
                assert_eq!(
                    sorted(grid.nearby(id, pos, radius)),
                    sorted(snapshot.nearby(id, pos, radius)),
                    "agent {id:?} radius {radius}"
                );
            }
        }
    }

    #[test]
    fn optional_target_reports_absence() {
        let none: Option<Vec2> = None;
        assert_eq!(none.position(), None);
        assert_eq!(Vec2::ONE.position(), Some(Vec2::ONE));
    }
}
