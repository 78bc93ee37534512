use std::cell::RefCell;

use approx::assert_abs_diff_eq;
use bevy_math::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::rstest;

use common::{
    chase::{ChaseAgent, ChaseConfig, ChaseMode, Personality, Surroundings, boogie_velocity, separation_push},
    components::AgentId,
    environment::{LineOfSight, NeighborSnapshot, PositionProvider, RayHit},
    obstacles::{Obstacle, ObstacleField},
};

// Step sizes below are powers of two so timers land exactly on their thresholds
const DT: f32 = 0.125;

fn plain_agent(config: ChaseConfig) -> ChaseAgent {
    ChaseAgent::new(AgentId(1), config, Personality::plain(&config))
}

fn open_ground(agent: &mut ChaseAgent, position: Vec2, target: &dyn PositionProvider, elapsed: f32) -> Vec2 {
    let neighbors = NeighborSnapshot::new();
    let surroundings = Surroundings {
        target,
        obstacles: None,
        neighbors: &neighbors,
    };
    agent.tick(position, DT, elapsed, &surroundings).velocity
}

// Wall stub: the forward probe from `position` hits a wall facing +x, side
// probes report blocked only for the flanks listed
struct WallAhead {
    position: Vec2,
    left_blocked: bool,
    right_blocked: bool,
    probes: RefCell<Vec<Vec2>>,
}

impl WallAhead {
    fn new(position: Vec2, left_blocked: bool, right_blocked: bool) -> Self {
        Self {
            position,
            left_blocked,
            right_blocked,
            probes: RefCell::new(Vec::new()),
        }
    }
}

impl LineOfSight for WallAhead {
    fn is_blocked(&self, _from: Vec2, _to: Vec2) -> bool {
        false
    }

    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
        self.probes.borrow_mut().push(origin);
        let offset = origin - self.position;
        let blocked = if offset.length() < 1e-4 {
            direction.x < 0.0
        } else if offset.y < 0.0 {
            // Heading -x, the left flank (perp) is -y
            self.left_blocked
        } else {
            self.right_blocked
        };
        blocked.then(|| RayHit {
            point: origin + direction.normalize_or_zero() * max_distance,
            normal: Vec2::X,
            distance: max_distance,
        })
    }
}

// ============================================================================
// Sight Hysteresis
// ============================================================================

#[test]
fn sight_survives_exactly_lose_sight_time() {
    let config = ChaseConfig::default();
    let mut agent = plain_agent(config);

    open_ground(&mut agent, Vec2::ZERO, &Vec2::new(5.0, 0.0), 0.0);
    assert!(agent.vision().has_line_of_sight);

    // Target jumps out of range; 1.25s / 0.125s = 10 ticks of memory
    let far = Vec2::new(20.0, 0.0);
    for tick in 1..10 {
        let velocity = open_ground(&mut agent, Vec2::ZERO, &far, tick as f32 * DT);
        assert!(agent.vision().has_line_of_sight, "lost sight early on tick {tick}");
        assert_abs_diff_eq!(agent.vision().lost_sight_timer, tick as f32 * DT);
        assert!(velocity.length() > 0.0);
    }

    let velocity = open_ground(&mut agent, Vec2::ZERO, &far, 10.0 * DT);
    assert!(!agent.vision().has_line_of_sight);
    assert_eq!(velocity, Vec2::ZERO);
    assert_eq!(agent.mode(), ChaseMode::Idle);
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(9)]
fn regained_sight_resets_memory(#[case] hidden_ticks: u32) {
    let mut agent = plain_agent(ChaseConfig::default());
    let near = Vec2::new(5.0, 0.0);
    let far = Vec2::new(20.0, 0.0);

    open_ground(&mut agent, Vec2::ZERO, &near, 0.0);
    for tick in 0..hidden_ticks {
        open_ground(&mut agent, Vec2::ZERO, &far, tick as f32 * DT);
    }
    open_ground(&mut agent, Vec2::ZERO, &near, 2.0);

    assert!(agent.vision().has_line_of_sight);
    assert_eq!(agent.vision().lost_sight_timer, 0.0);
}

#[test]
fn wall_between_blocks_first_sighting() {
    let mut agent = plain_agent(ChaseConfig::default());
    let wall = ObstacleField::new(vec![Obstacle::from_corners(Vec2::new(2.0, -3.0), Vec2::new(2.5, 3.0))]);
    let neighbors = NeighborSnapshot::new();
    let target = Vec2::new(5.0, 0.0);
    let surroundings = Surroundings {
        target: &target,
        obstacles: Some(&wall),
        neighbors: &neighbors,
    };

    let steering = agent.tick(Vec2::ZERO, DT, 0.0, &surroundings);
    assert_eq!(steering.velocity, Vec2::ZERO);
    assert!(!agent.vision().has_line_of_sight);
}

// ============================================================================
// Idle Default
// ============================================================================

#[rstest]
#[case::fresh(false, false)]
#[case::tracking(true, false)]
#[case::stunned(false, true)]
fn missing_target_means_zero_velocity(#[case] tracking: bool, #[case] stunned: bool) {
    let mut agent = plain_agent(ChaseConfig::default());
    if tracking {
        open_ground(&mut agent, Vec2::ZERO, &Vec2::new(3.0, 0.0), 0.0);
    }
    if stunned {
        agent.enter_boogie(2.0);
    }

    let gone: Option<Vec2> = None;
    for tick in 0..8 {
        let velocity = open_ground(&mut agent, Vec2::ZERO, &gone, tick as f32 * DT);
        assert_eq!(velocity, Vec2::ZERO);
    }
}

// ============================================================================
// Boogie Stun
// ============================================================================

#[test]
fn dance_replaces_chase_until_expiry() {
    let config = ChaseConfig::default();
    let mut agent = plain_agent(config);
    let target = Vec2::new(4.0, 0.0);

    open_ground(&mut agent, Vec2::ZERO, &target, 0.0);
    assert_eq!(agent.mode(), ChaseMode::Tracking);

    let dt = 0.25;
    agent.enter_boogie(3.5);
    assert!(!agent.vision().has_line_of_sight);

    let neighbors = NeighborSnapshot::new();
    let surroundings = Surroundings {
        target: &target,
        obstacles: None,
        neighbors: &neighbors,
    };

    // 3.5s / 0.25s: thirteen dancing ticks, the fourteenth expires
    for tick in 1..14 {
        let elapsed = tick as f32 * dt;
        let steering = agent.tick(Vec2::ZERO, dt, elapsed, &surroundings);
        let expected = boogie_velocity(elapsed, config.boogie_amplitude, config.boogie_frequency);
        assert_abs_diff_eq!(steering.velocity.x, expected.x, epsilon = 1e-6);
        assert_abs_diff_eq!(steering.velocity.y, expected.y, epsilon = 1e-6);
        assert!(steering.tint.is_some());
        // Vision is frozen while dancing, even with the target in plain view
        assert!(!agent.vision().has_line_of_sight);
        assert_eq!(agent.mode(), ChaseMode::Stunned);
    }

    let steering = agent.tick(Vec2::ZERO, dt, 3.5, &surroundings);
    assert!(!agent.is_stunned());
    assert!(steering.tint.is_none());
    // Target still in view: reacquired on the expiry tick itself
    assert!(agent.vision().has_line_of_sight);
    assert_abs_diff_eq!(steering.velocity.length(), config.move_speed, epsilon = 1e-5);
}

#[test]
fn hidden_target_after_stun_stays_lost() {
    let config = ChaseConfig::default();
    let mut agent = plain_agent(config);

    open_ground(&mut agent, Vec2::ZERO, &Vec2::new(4.0, 0.0), 0.0);
    agent.enter_boogie(0.5);

    // Out of range for the whole stun; without the reset, memory would still be warm
    let far = Vec2::new(30.0, 0.0);
    open_ground(&mut agent, Vec2::ZERO, &far, DT);
    open_ground(&mut agent, Vec2::ZERO, &far, 2.0 * DT);
    open_ground(&mut agent, Vec2::ZERO, &far, 3.0 * DT);
    let velocity = open_ground(&mut agent, Vec2::ZERO, &far, 4.0 * DT);

    assert!(!agent.is_stunned());
    assert!(!agent.vision().has_line_of_sight);
    assert_eq!(agent.vision().lost_sight_timer, 0.0);
    assert_eq!(velocity, Vec2::ZERO);
    assert_eq!(agent.mode(), ChaseMode::Idle);
}

#[test]
fn retrigger_restarts_the_clock() {
    let mut agent = plain_agent(ChaseConfig::default());
    let target = Vec2::new(4.0, 0.0);

    agent.enter_boogie(0.5);
    open_ground(&mut agent, Vec2::ZERO, &target, DT);
    open_ground(&mut agent, Vec2::ZERO, &target, 2.0 * DT);
    agent.enter_boogie(0.5);
    assert_eq!(agent.boogie().remaining, 0.5);

    for tick in 3..6 {
        open_ground(&mut agent, Vec2::ZERO, &target, tick as f32 * DT);
        assert!(agent.is_stunned());
    }
}

// ============================================================================
// Separation
// ============================================================================

#[rstest]
#[case(0.5)]
#[case(1.0)]
#[case(1.25)]
fn pair_pushes_apart_symmetrically(#[case] distance: f32) {
    let a = Vec2::new(1.0, 2.0);
    let b = a + Vec2::new(distance, 0.0);

    let push_a = separation_push(a, &[b]);
    let push_b = separation_push(b, &[a]);

    assert_abs_diff_eq!(push_a.x, -push_b.x, epsilon = 1e-6);
    assert_abs_diff_eq!(push_a.y, -push_b.y, epsilon = 1e-6);
    assert!(push_a.x < 0.0);
    assert_abs_diff_eq!(push_a.length(), 1.0 / distance, epsilon = 1e-5);
}

#[test]
fn neighbor_bends_the_chase_path() {
    let config = ChaseConfig::default();
    let mut agent = plain_agent(config);
    let neighbors: NeighborSnapshot = [(AgentId(2), Vec2::new(0.0, 1.0))].into_iter().collect();
    let target = Vec2::new(5.0, 0.0);
    let surroundings = Surroundings {
        target: &target,
        obstacles: None,
        neighbors: &neighbors,
    };

    let steering = agent.tick(Vec2::ZERO, DT, 0.0, &surroundings);
    assert!(steering.velocity.x > 0.0);
    assert!(steering.velocity.y < 0.0);
    assert_abs_diff_eq!(steering.velocity.length(), config.move_speed, epsilon = 1e-5);
}

// ============================================================================
// Speed Bound
// ============================================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn crowded_and_walled_agents_respect_personal_speed(#[case] seed: u64) {
    use rand::Rng;

    let config = ChaseConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let walls = ObstacleField::new(vec![
        Obstacle::from_center(Vec2::new(1.0, 0.0), Vec2::new(0.2, 2.0)),
        Obstacle::from_center(Vec2::new(-1.5, 1.0), Vec2::new(1.0, 0.2)),
    ]);

    for round in 0..50 {
        let personality = Personality::roll(&config, &mut rng);
        let mut agent = ChaseAgent::new(AgentId(round), config, personality);
        let position = Vec2::new(rng.random_range(-0.5..0.5), rng.random_range(-0.5..0.5));
        let neighbors: NeighborSnapshot = (0..4)
            .map(|i| {
                let offset = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
                (AgentId(1000 + i), position + offset)
            })
            .collect();
        let target = Vec2::new(rng.random_range(-8.0..8.0), rng.random_range(-8.0..8.0));
        let surroundings = Surroundings {
            target: &target,
            obstacles: Some(&walls),
            neighbors: &neighbors,
        };

        for tick in 0..4 {
            let steering = agent.tick(position, DT, tick as f32 * DT, &surroundings);
            assert!(
                steering.velocity.length() <= personality.speed + 1e-4,
                "speed {} above personal {}",
                steering.velocity.length(),
                personality.speed
            );
        }
    }
}

// ============================================================================
// Direct Chase
// ============================================================================

#[test]
fn visible_target_is_chased_at_personal_speed() {
    let config = ChaseConfig::default();
    let personality = Personality::roll(&config, &mut ChaCha8Rng::seed_from_u64(42));
    let mut agent = ChaseAgent::new(AgentId(3), config, personality);
    let position = Vec2::new(1.0, 1.0);
    let target = position + Vec2::new(3.0, 4.0);

    let velocity = open_ground(&mut agent, position, &target, 0.0);

    let expected = (target + personality.target_offset - position).normalize() * personality.speed;
    assert!(agent.vision().has_line_of_sight);
    assert_eq!(agent.mode(), ChaseMode::Tracking);
    assert_abs_diff_eq!(velocity.x, expected.x, epsilon = 1e-5);
    assert_abs_diff_eq!(velocity.y, expected.y, epsilon = 1e-5);
}

#[test]
fn target_beyond_vision_range_is_ignored() {
    let mut agent = plain_agent(ChaseConfig::default());
    let velocity = open_ground(&mut agent, Vec2::ZERO, &Vec2::new(12.5, 0.0), 0.0);
    assert_eq!(velocity, Vec2::ZERO);
    assert_eq!(agent.mode(), ChaseMode::Idle);
}

// ============================================================================
// Wall Probes
// ============================================================================

fn head_on(left_blocked: bool, right_blocked: bool) -> (Vec2, usize) {
    let config = ChaseConfig {
        move_speed: 2.0,
        speed_variation: 0.0,
        ..ChaseConfig::default()
    };
    let mut agent = plain_agent(config);
    let wall = WallAhead::new(Vec2::ZERO, left_blocked, right_blocked);
    let neighbors = NeighborSnapshot::new();
    let target = Vec2::new(-5.0, 0.0);
    let surroundings = Surroundings {
        target: &target,
        obstacles: Some(&wall),
        neighbors: &neighbors,
    };

    let velocity = agent.tick(Vec2::ZERO, DT, 0.0, &surroundings).velocity;
    let probes = wall.probes.borrow().len();
    (velocity, probes)
}

#[test]
fn head_on_wall_falls_back_to_side_probes() {
    // Desired (-2, 0) against normal (1, 0) slides to nothing
    let (velocity, probes) = head_on(false, false);
    assert_eq!(probes, 3);
    // Both flanks open: left of the heading, which is -y
    assert_abs_diff_eq!(velocity.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(velocity.y, -2.0, epsilon = 1e-6);
}

#[rstest]
#[case::left_closed(true, false, 2.0)]
#[case::right_closed(false, true, -2.0)]
#[case::both_closed(true, true, -2.0)]
fn side_probes_pick_the_open_flank(#[case] left: bool, #[case] right: bool, #[case] expected_y: f32) {
    let (velocity, _) = head_on(left, right);
    assert_abs_diff_eq!(velocity.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(velocity.y, expected_y, epsilon = 1e-6);
}

#[test]
fn remembered_target_behind_wall_slides_along_it() {
    let config = ChaseConfig::default();
    let mut agent = plain_agent(config);
    let target = Vec2::new(3.0, 1.0);
    open_ground(&mut agent, Vec2::ZERO, &target, 0.0);

    // Wall now in the way: sight is only remembered, the probe hits the near face
    let walls = ObstacleField::new(vec![Obstacle::from_corners(Vec2::new(0.4, -2.0), Vec2::new(0.8, 0.5))]);
    let neighbors = NeighborSnapshot::new();
    let surroundings = Surroundings {
        target: &target,
        obstacles: Some(&walls),
        neighbors: &neighbors,
    };

    let steering = agent.tick(Vec2::ZERO, DT, DT, &surroundings);
    assert!(agent.vision().has_line_of_sight);
    assert_abs_diff_eq!(agent.vision().lost_sight_timer, DT);
    assert!(steering.velocity.x.abs() < 1e-5);
    assert!(steering.velocity.y > 0.0);
}
