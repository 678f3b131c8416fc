/*
 * Launch Configuration Module
 *
 * Reads the two startup choices from the environment:
 * - FLOCK_PROFILE: `force` (default) or `positional`
 * - FLOCK_SEED: u64 seed for the spawn RNG (default: derived from the clock)
 *
 * Everything else is a fixed constant of the chosen profile.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{FlockError, Result};
use crate::params::{Profile, SimulationParams};

pub const PROFILE_VAR: &str = "FLOCK_PROFILE";
pub const SEED_VAR: &str = "FLOCK_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub profile: Profile,
    pub seed: u64,
}

impl LaunchConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset or blank keys fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let profile = match value(PROFILE_VAR) {
            Some(name) => name.parse::<Profile>()?,
            None => Profile::Force,
        };

        let seed = match value(SEED_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|err: std::num::ParseIntError| {
                FlockError::InvalidSeed {
                    value: raw.clone(),
                    reason: err.to_string(),
                }
            })?,
            None => clock_seed(),
        };

        Ok(Self { profile, seed })
    }

    pub fn params(&self) -> SimulationParams {
        self.profile.params()
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_force_profile() {
        let config = LaunchConfig::from_lookup(lookup(&[(SEED_VAR, "12")])).unwrap();
        assert_eq!(config.profile, Profile::Force);
        assert_eq!(config.seed, 12);
        assert_eq!(config.params().neighbor_radius, 300.0);
    }

    #[test]
    fn reads_profile_and_seed() {
        let config =
            LaunchConfig::from_lookup(lookup(&[(PROFILE_VAR, "positional"), (SEED_VAR, " 99 ")]))
                .unwrap();
        assert_eq!(config, LaunchConfig { profile: Profile::Positional, seed: 99 });
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = LaunchConfig::from_lookup(lookup(&[(PROFILE_VAR, "  ")])).unwrap();
        assert_eq!(config.profile, Profile::Force);
    }

    #[test]
    fn rejects_unknown_profile() {
        let err = LaunchConfig::from_lookup(lookup(&[(PROFILE_VAR, "murmuration")])).unwrap_err();
        assert_eq!(err, FlockError::UnknownProfile("murmuration".to_string()));
    }

    #[test]
    fn rejects_bad_seed() {
        let err = LaunchConfig::from_lookup(lookup(&[(SEED_VAR, "-3")])).unwrap_err();
        assert!(matches!(err, FlockError::InvalidSeed { value, .. } if value == "-3"));
    }
}
