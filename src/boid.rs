/*
 * Boid Module
 *
 * This module defines the Boid struct and its kinematics: force accumulation,
 * integration with a speed limit, and toroidal edge wrapping. The steering
 * rules that produce the forces live in the physics module.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::vector::Steer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_speed: f32,
}

impl Boid {
    pub fn new(position: Point2, velocity: Vec2, max_speed: f32) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            max_speed,
        }
    }

    /// Create a boid somewhere inside the world, flying at full speed in a
    /// random direction.
    pub fn spawn<R: Rng>(rng: &mut R, params: &SimulationParams) -> Self {
        let x = rng.gen_range(0.0..=params.width);
        let y = rng.gen_range(0.0..=params.height);

        // Random initial heading; resample the (unlikely) zero vector
        let direction = loop {
            let candidate = vec2(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            if candidate.length_squared() > 0.0 {
                break candidate;
            }
        };

        Self::new(pt2(x, y), direction.with_length(params.max_speed), params.max_speed)
    }

    // Accumulate a steering force for this frame
    pub fn apply_force(&mut self, force: impl Into<Option<Vec2>>) {
        if let Some(force) = force.into() {
            self.acceleration += force;
        }
    }

    /// Advance one frame: acceleration feeds velocity, velocity is capped at
    /// `max_speed`, velocity moves the position and the accumulator is reset.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;

        if self.velocity.length() > self.max_speed {
            self.velocity.set_length(self.max_speed);
        }

        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    // Leaving one edge puts the boid exactly on the opposite edge
    pub fn wrap_edges(&mut self, width: f32, height: f32) {
        if self.position.x < 0.0 {
            self.position.x = width;
        } else if self.position.x > width {
            self.position.x = 0.0;
        }

        if self.position.y < 0.0 {
            self.position.y = height;
        } else if self.position.y > height {
            self.position.y = 0.0;
        }
    }

    /// Direction of travel in radians, `None` while standing still.
    pub fn heading(&self) -> Option<f32> {
        if self.velocity.length_squared() > 0.0 {
            Some(self.velocity.y.atan2(self.velocity.x))
        } else {
            None
        }
    }
}
