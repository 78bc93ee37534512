use bevy_math::Vec2;

use crate::constants::PHYSICS_EPSILON;

/// Result of a ray test: surface normal and time of impact along the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub normal: Vec2,
    pub t: f32,
}

// Compute the intersection interval of a ray with a slab (used in ray-AABB tests)
#[must_use]
pub fn sweep_slab_interval(
    local_coord: f32,
    ray_dir: f32,
    half_extent: f32,
    t_min: f32,
    t_max: f32,
) -> Option<(f32, f32)> {
    if ray_dir.abs() > PHYSICS_EPSILON {
        let t1 = (-half_extent - local_coord) / ray_dir;
        let t2 = (half_extent - local_coord) / ray_dir;
        let new_min = t_min.max(t1.min(t2));
        let new_max = t_max.min(t1.max(t2));
        (new_min <= new_max).then_some((new_min, new_max))
    } else if local_coord.abs() > half_extent {
        None
    } else {
        Some((t_min, t_max))
    }
}

// Segment `from -> to` against an axis-aligned box given by its corners.
#[must_use]
pub fn segment_hits_box(from: Vec2, to: Vec2, min: Vec2, max: Vec2) -> bool {
    let center = (min + max) * 0.5;
    let half = (max - min) * 0.5;
    let local = from - center;
    let dir = to - from;

    let Some((t_min, t_max)) = sweep_slab_interval(local.x, dir.x, half.x, 0.0, 1.0) else {
        return false;
    };
    let Some((t_min, t_max)) = sweep_slab_interval(local.y, dir.y, half.y, t_min, t_max) else {
        return false;
    };

    t_min <= t_max && t_max >= 0.0 && t_min <= 1.0
}

/// Ray `origin + t * ray` for t in [0, 1] against an axis-aligned box.
///
/// Returns the entry point as a fraction of the ray plus the face normal.
/// A ray starting inside the box reports no hit, so an entity overlapping a
/// wall can always probe its way out.
#[must_use]
pub fn ray_vs_box(origin: Vec2, ray: Vec2, min: Vec2, max: Vec2) -> Option<Collision> {
    let center = (min + max) * 0.5;
    let half = (max - min) * 0.5;
    let local = origin - center;

    let mut t_enter = 0.0_f32;
    let mut t_exit = 1.0_f32;
    let mut hit_normal = Vec2::ZERO;

    for axis in 0..2 {
        let (local_c, dir_c, half_c) = (local[axis], ray[axis], half[axis]);

        if dir_c.abs() < PHYSICS_EPSILON {
            if local_c.abs() > half_c {
                return None;
            }
            continue;
        }

        let t1 = (-half_c - local_c) / dir_c;
        let t2 = (half_c - local_c) / dir_c;
        let (t_near, t_far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if t_near > t_enter {
            t_enter = t_near;
            let mut normal = Vec2::ZERO;
            normal[axis] = if dir_c > 0.0 { -1.0 } else { 1.0 };
            hit_normal = normal;
        }
        t_exit = t_exit.min(t_far);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 || t_enter > 1.0 || hit_normal == Vec2::ZERO {
        return None;
    }

    Some(Collision {
        normal: hit_normal,
        t: t_enter.clamp(0.0, 1.0),
    })
}

// Circle against an axis-aligned box (touching counts as overlap).
#[must_use]
pub fn circle_overlaps_box(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    let closest = center.clamp(min, max);
    center.distance_squared(closest) <= radius * radius
}

// Shared axis-aligned slide; the collision closure decides validity of each candidate.
pub fn slide_along_axes(current: Vec2, velocity: Vec2, delta: f32, collides: impl Fn(Vec2) -> bool) -> Vec2 {
    // Try full diagonal movement first
    let diagonal = current + velocity * delta;
    if !collides(diagonal) {
        return diagonal;
    }

    // Diagonal blocked, try axis-aligned sliding
    let x_only = Vec2::new(velocity.x.mul_add(delta, current.x), current.y);
    let y_only = Vec2::new(current.x, velocity.y.mul_add(delta, current.y));

    if !collides(x_only) {
        x_only
    } else if !collides(y_only) {
        y_only
    } else {
        current
    }
}
