/*
 * Debug Information Module
 *
 * Frame metrics shown in the stats overlay.
 */

use std::time::Duration;

use crate::simulation::Simulation;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub mean_speed: f32,
    pub boids: usize,
}

impl DebugInfo {
    // Refresh the simulation-side numbers after a tick
    pub fn observe(&mut self, simulation: &Simulation) {
        self.ticks = simulation.ticks();
        self.boids = simulation.boids().len();
        self.mean_speed = simulation.state().mean_speed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;

    #[test]
    fn observe_copies_simulation_numbers() {
        let simulation = Simulation::new(SimulationParams::positional(), 4).unwrap();
        let mut info = DebugInfo::default();
        info.observe(&simulation);

        assert_eq!(info.boids, 100);
        assert_eq!(info.ticks, 0);
        assert!((info.mean_speed - 4.0).abs() < 1e-4);
    }
}
