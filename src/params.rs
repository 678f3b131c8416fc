/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds every constant
 * of the flocking simulation. The two supported behaviours ("force" and
 * "positional") are profiles of the same struct rather than separate code
 * paths; the engine only ever looks at the fields below.
 */

use nannou::prelude::*;

use crate::error::{FlockError, Result};

/// How boids closer than `collision_distance` are kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Average repulsion from every overlapping boid, applied as a force.
    Force,
    /// Push both boids of an overlapping pair apart by half the overlap each.
    Positional,
}

/// How the pointer-seeking steering force is limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekLimit {
    /// Always exactly `max_force` long.
    Exact,
    /// At most `max_force` long.
    Clamp,
}

/// Which neighbors contribute to the separation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationMode {
    /// Only neighbors closer than `collision_distance`.
    CollisionRange,
    /// Every neighbor inside `neighbor_radius`.
    NeighborRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Force,
    Positional,
}

impl Profile {
    pub fn name(self) -> &'static str {
        match self {
            Profile::Force => "force",
            Profile::Positional => "positional",
        }
    }

    pub fn params(self) -> SimulationParams {
        match self {
            Profile::Force => SimulationParams::force(),
            Profile::Positional => SimulationParams::positional(),
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = FlockError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "force" => Ok(Profile::Force),
            "positional" => Ok(Profile::Positional),
            _ => Err(FlockError::UnknownProfile(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationParams {
    pub profile: Profile,
    pub width: f32,
    pub height: f32,
    pub num_boids: usize,
    pub boid_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub collision_distance: f32,
    pub neighbor_radius: f32,
    pub separation_mode: SeparationMode,
    // Length the summed separation vector is scaled to
    pub separation_limit: f32,
    pub separation_weight: f32,
    pub seek_limit: SeekLimit,
    pub collision_policy: CollisionPolicy,
    // Angle of the two rear vertices relative to the heading, in degrees
    pub wing_angle: f32,
    pub frame_rate: f64,
    pub boid_color: Rgb<u8>,
    pub background_color: Rgb<u8>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::force()
    }
}

impl SimulationParams {
    /// Wide field of view, separation only inside collision range and
    /// force-based collision avoidance.
    pub fn force() -> Self {
        let boid_radius = 3.0;
        let max_force = 0.1;
        Self {
            profile: Profile::Force,
            width: 800.0,
            height: 600.0,
            num_boids: 100,
            boid_radius,
            max_speed: 5.0,
            max_force,
            collision_distance: 3.0 * boid_radius,
            neighbor_radius: 300.0,
            separation_mode: SeparationMode::CollisionRange,
            separation_limit: 2.0 * max_force,
            separation_weight: 1.5,
            seek_limit: SeekLimit::Exact,
            collision_policy: CollisionPolicy::Force,
            wing_angle: 140.0,
            frame_rate: 60.0,
            boid_color: rgb(255, 255, 255),
            background_color: rgb(0, 0, 0),
        }
    }

    /// Flat 50 unit neighborhood for all three rules and direct overlap
    /// correction.
    pub fn positional() -> Self {
        let boid_radius = 5.0;
        let max_force = 0.1;
        Self {
            profile: Profile::Positional,
            width: 800.0,
            height: 600.0,
            num_boids: 100,
            boid_radius,
            max_speed: 4.0,
            max_force,
            collision_distance: 3.0 * boid_radius,
            neighbor_radius: 50.0,
            separation_mode: SeparationMode::NeighborRange,
            separation_limit: max_force,
            separation_weight: 1.0,
            seek_limit: SeekLimit::Clamp,
            collision_policy: CollisionPolicy::Positional,
            wing_angle: 90.0,
            frame_rate: 60.0,
            boid_color: rgb(255, 255, 255),
            background_color: rgb(0, 0, 0),
        }
    }

    // Length of the triangle from the boid's centre to each vertex
    pub fn tip_length(&self) -> f32 {
        2.0 * self.boid_radius
    }

    pub fn validate(&self) -> Result<()> {
        fn positive(name: &'static str, value: f64) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(FlockError::InvalidParameter {
                    name,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("width", self.width as f64)?;
        positive("height", self.height as f64)?;
        positive("boid_radius", self.boid_radius as f64)?;
        positive("max_speed", self.max_speed as f64)?;
        positive("max_force", self.max_force as f64)?;
        positive("collision_distance", self.collision_distance as f64)?;
        positive("neighbor_radius", self.neighbor_radius as f64)?;
        positive("frame_rate", self.frame_rate)?;

        if self.num_boids == 0 {
            return Err(FlockError::InvalidParameter {
                name: "num_boids",
                reason: "at least one boid is required".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        assert!(SimulationParams::force().validate().is_ok());
        assert!(SimulationParams::positional().validate().is_ok());
    }

    #[test]
    fn collision_distance_is_three_radii() {
        for params in [SimulationParams::force(), SimulationParams::positional()] {
            assert_eq!(params.collision_distance, 3.0 * params.boid_radius);
        }
    }

    #[test]
    fn profiles_differ_where_expected() {
        let force = SimulationParams::force();
        let positional = SimulationParams::positional();

        assert_eq!(force.neighbor_radius, 300.0);
        assert_eq!(positional.neighbor_radius, 50.0);
        assert_eq!(force.separation_weight, 1.5);
        assert_eq!(positional.separation_weight, 1.0);
        assert_eq!(force.separation_limit, 2.0 * force.max_force);
        assert_eq!(force.seek_limit, SeekLimit::Exact);
        assert_eq!(positional.seek_limit, SeekLimit::Clamp);
        assert_eq!(force.collision_policy, CollisionPolicy::Force);
        assert_eq!(positional.collision_policy, CollisionPolicy::Positional);
    }

    #[test]
    fn profile_parses_case_insensitively() {
        assert_eq!("force".parse::<Profile>(), Ok(Profile::Force));
        assert_eq!(" Positional ".parse::<Profile>(), Ok(Profile::Positional));
        assert_eq!(
            "swarm".parse::<Profile>(),
            Err(FlockError::UnknownProfile("swarm".to_string()))
        );
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut params = SimulationParams::force();
        params.max_speed = 0.0;
        assert!(matches!(
            params.validate(),
            Err(FlockError::InvalidParameter { name: "max_speed", .. })
        ));

        let mut params = SimulationParams::positional();
        params.num_boids = 0;
        assert!(matches!(
            params.validate(),
            Err(FlockError::InvalidParameter { name: "num_boids", .. })
        ));

        let mut params = SimulationParams::force();
        params.width = f32::NAN;
        assert!(params.validate().is_err());
    }
}
