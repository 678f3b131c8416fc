/*
 * Physics Module
 *
 * This module holds the steering rules of the flocking simulation:
 * - Separation, alignment and cohesion, gathered in one brute-force pass over
 *   every other boid inside the neighbor radius
 * - Seeking the pointer
 * - Collision avoidance, either as a repulsion force or as a direct
 *   positional correction of overlapping pairs
 *
 * Forces are computed from a read-only view of the flock and applied to the
 * boids' accumulators afterwards, so the flocking pass does not depend on the
 * order of the boids.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::{CollisionPolicy, SeekLimit, SeparationMode, SimulationParams};
use crate::vector::Steer;

/// The three flocking forces acting on one boid, before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockForces {
    pub separation: Vec2,
    pub alignment: Vec2,
    pub cohesion: Vec2,
    // Number of boids inside the neighbor radius
    pub neighbors: usize,
}

impl FlockForces {
    pub const NONE: FlockForces = FlockForces {
        separation: Vec2::ZERO,
        alignment: Vec2::ZERO,
        cohesion: Vec2::ZERO,
        neighbors: 0,
    };

    /// Weighted sum of the three rules, `None` when the boid had no neighbors.
    pub fn combined(&self, params: &SimulationParams) -> Option<Vec2> {
        if self.neighbors == 0 {
            return None;
        }
        Some(self.separation * params.separation_weight + self.alignment + self.cohesion)
    }
}

/// Scan the whole flock for the neighbors of `boids[index]` and derive its
/// separation, alignment and cohesion forces.
pub fn flock_forces(boids: &[Boid], index: usize, params: &SimulationParams) -> FlockForces {
    let boid = &boids[index];

    let mut separation = Vec2::ZERO;
    let mut alignment = Vec2::ZERO;
    let mut cohesion = Vec2::ZERO;
    let mut count = 0;

    for (other_index, other) in boids.iter().enumerate() {
        if other_index == index {
            continue;
        }

        let d = boid.position.distance(other.position);
        if d >= params.neighbor_radius {
            continue;
        }

        let separates = match params.separation_mode {
            SeparationMode::CollisionRange => d < params.collision_distance,
            SeparationMode::NeighborRange => true,
        };
        if separates && d > 0.0 {
            // Closer neighbors push harder
            separation += (boid.position - other.position).normalized() / d;
        }

        alignment += other.velocity;
        cohesion += other.position;
        count += 1;
    }

    if count == 0 {
        return FlockForces::NONE;
    }

    let separation = separation.with_length(params.separation_limit);

    // Steering = desired - velocity, always exactly max_force long
    let heading = alignment / count as f32;
    let alignment = (heading.with_length(params.max_speed) - boid.velocity)
        .with_length(params.max_force);

    let centroid = cohesion / count as f32;
    let cohesion = ((centroid - boid.position).with_length(params.max_speed) - boid.velocity)
        .with_length(params.max_force);

    FlockForces {
        separation,
        alignment,
        cohesion,
        neighbors: count,
    }
}

/// Flocking forces for every boid, computed against the same snapshot.
pub fn flocking_forces(boids: &[Boid], params: &SimulationParams) -> Vec<FlockForces> {
    (0..boids.len())
        .map(|index| flock_forces(boids, index, params))
        .collect()
}

// Compute and accumulate the flocking forces of the whole flock
pub fn apply_flocking_rules(boids: &mut [Boid], params: &SimulationParams) {
    let forces = flocking_forces(boids, params);
    for (boid, forces) in boids.iter_mut().zip(&forces) {
        boid.apply_force(forces.combined(params));
    }
}

/// Steering force toward `target`, `None` when the boid is already there.
pub fn seek_force(boid: &Boid, target: Point2, params: &SimulationParams) -> Option<Vec2> {
    let offset = target - boid.position;
    if offset.length_squared() == 0.0 {
        return None;
    }

    let desired = offset.with_length(params.max_speed);
    let steer = desired - boid.velocity;

    Some(match params.seek_limit {
        SeekLimit::Exact => steer.with_length(params.max_force),
        SeekLimit::Clamp => steer.limited(params.max_force),
    })
}

/// Averaged repulsion from every boid closer than `collision_distance`,
/// scaled to twice `max_force`. `None` when nothing is that close.
pub fn collision_force(boids: &[Boid], index: usize, params: &SimulationParams) -> Option<Vec2> {
    let boid = &boids[index];

    let mut repulsion = Vec2::ZERO;
    let mut count = 0;

    for (other_index, other) in boids.iter().enumerate() {
        if other_index == index {
            continue;
        }

        let d = boid.position.distance(other.position);
        if d > 0.0 && d < params.collision_distance {
            repulsion += (boid.position - other.position).normalized() / d;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    repulsion /= count as f32;
    Some(repulsion.with_length(2.0 * params.max_force))
}

/// Push `boids[index]` and every boid overlapping it apart, each moving by
/// half the overlap. Positions change immediately, so boids visited later in
/// the same pass see the corrected positions. A pushed neighbor is wrapped
/// right away since it may already have been integrated this frame.
pub fn resolve_overlaps(boids: &mut [Boid], index: usize, params: &SimulationParams) {
    for other_index in 0..boids.len() {
        if other_index == index {
            continue;
        }

        let offset = boids[index].position - boids[other_index].position;
        let d = offset.length();
        if d > 0.0 && d < params.collision_distance {
            let push = offset / d * ((params.collision_distance - d) / 2.0);
            boids[index].position += push;
            boids[other_index].position -= push;
            boids[other_index].wrap_edges(params.width, params.height);
        }
    }
}

// Run the collision step configured for this simulation on one boid
pub fn avoid_collisions(boids: &mut [Boid], index: usize, params: &SimulationParams) {
    match params.collision_policy {
        CollisionPolicy::Force => {
            let force = collision_force(boids, index, params);
            boids[index].apply_force(force);
        }
        CollisionPolicy::Positional => resolve_overlaps(boids, index, params),
    }
}
