/*
 * Simulation Module
 *
 * The frame loop of the flocking simulation. One tick drains input, runs the
 * flocking pass over the whole flock, then steers, separates, moves and draws
 * each boid in turn before presenting the frame. The loop stops for good the
 * first time a Quit event is seen at the top of a tick.
 */

use nannou::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::boid::Boid;
use crate::error::Result;
use crate::params::SimulationParams;
use crate::physics;
use crate::renderer::{self, Canvas};
use crate::surface::{FramePacer, Surface, SurfaceEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Everything the simulation mutates from frame to frame.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub boids: Vec<Boid>,
    pub params: SimulationParams,
}

impl SimulationState {
    /// Spawn `params.num_boids` boids from the given RNG.
    pub fn spawn(params: SimulationParams, rng: &mut Pcg32) -> Self {
        let boids = (0..params.num_boids)
            .map(|_| Boid::spawn(rng, &params))
            .collect();
        Self { boids, params }
    }

    /// Advance the flock by one frame toward `pointer`, drawing each boid onto
    /// `canvas` as soon as it has moved.
    pub fn step<C: Canvas + ?Sized>(&mut self, pointer: Point2, canvas: &mut C) {
        let params = &self.params;

        physics::apply_flocking_rules(&mut self.boids, params);

        for index in 0..self.boids.len() {
            let seek = physics::seek_force(&self.boids[index], pointer, params);
            self.boids[index].apply_force(seek);

            physics::avoid_collisions(&mut self.boids, index, params);

            let boid = &mut self.boids[index];
            boid.integrate();
            boid.wrap_edges(params.width, params.height);

            renderer::draw_boid(canvas, boid, params);
        }
    }

    pub fn mean_speed(&self) -> f32 {
        if self.boids.is_empty() {
            return 0.0;
        }
        let total: f32 = self.boids.iter().map(|boid| boid.velocity.length()).sum();
        total / self.boids.len() as f32
    }
}

pub struct Simulation {
    state: SimulationState,
    loop_state: LoopState,
    seed: u64,
    ticks: u64,
}

impl Simulation {
    pub fn new(params: SimulationParams, seed: u64) -> Result<Self> {
        params.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let state = SimulationState::spawn(params, &mut rng);
        log::debug!(
            "spawned {} boids with seed {} ({} profile)",
            state.boids.len(),
            seed,
            state.params.profile.name()
        );

        Ok(Self::from_state(state, seed))
    }

    /// Start from an existing flock, e.g. a hand-placed scenario.
    pub fn from_state(state: SimulationState, seed: u64) -> Self {
        Self {
            state,
            loop_state: LoopState::Running,
            seed,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn boids(&self) -> &[Boid] {
        &self.state.boids
    }

    pub fn params(&self) -> &SimulationParams {
        &self.state.params
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one frame against `surface`. Once stopped, further ticks do nothing.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> LoopState {
        if self.loop_state == LoopState::Stopped {
            return LoopState::Stopped;
        }

        for event in surface.poll_events() {
            match event {
                SurfaceEvent::Quit => self.loop_state = LoopState::Stopped,
            }
        }
        if self.loop_state == LoopState::Stopped {
            log::info!("quit requested after {} ticks", self.ticks);
            return LoopState::Stopped;
        }

        let pointer = surface.pointer_position();

        surface.clear(self.state.params.background_color);
        self.state.step(pointer, surface);
        surface.present();

        self.ticks += 1;
        if self.ticks % 600 == 0 {
            log::trace!("tick {}: mean speed {:.3}", self.ticks, self.state.mean_speed());
        }

        LoopState::Running
    }

    /// Tick until the surface asks to quit, pacing each frame to the
    /// configured rate. Returns the number of ticks run.
    pub fn run<S, P>(&mut self, surface: &mut S, pacer: &mut P) -> u64
    where
        S: Surface + ?Sized,
        P: FramePacer + ?Sized,
    {
        let frame_rate = self.state.params.frame_rate;
        while self.tick(surface) == LoopState::Running {
            pacer.wait_next_tick(frame_rate);
        }
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ScriptedSurface;

    const EPS: f32 = 1e-4;

    fn scenario(params: SimulationParams, boids: Vec<Boid>) -> Simulation {
        Simulation::from_state(SimulationState { boids, params }, 0)
    }

    #[test]
    fn new_spawns_the_configured_flock() {
        let sim = Simulation::new(SimulationParams::force(), 42).unwrap();
        assert_eq!(sim.boids().len(), 100);
        assert_eq!(sim.loop_state(), LoopState::Running);
        assert_eq!(sim.seed(), 42);
    }

    #[test]
    fn new_rejects_invalid_params() {
        let mut params = SimulationParams::force();
        params.num_boids = 0;
        assert!(Simulation::new(params, 1).is_err());
    }

    #[test]
    fn quit_stops_before_stepping() {
        let mut sim = Simulation::new(SimulationParams::positional(), 3).unwrap();
        let before = sim.boids().to_vec();
        let mut surface = ScriptedSurface::new(Vec::<Point2>::new());

        assert_eq!(sim.tick(&mut surface), LoopState::Stopped);
        assert_eq!(sim.boids(), &before[..]);
        assert_eq!(sim.ticks(), 0);
        assert!(surface.frames().is_empty());

        // Stopped is terminal
        assert_eq!(sim.tick(&mut surface), LoopState::Stopped);
    }

    #[test]
    fn tick_draws_every_moving_boid() {
        let mut sim = Simulation::new(SimulationParams::force(), 9).unwrap();
        let mut surface = ScriptedSurface::new([pt2(400.0, 300.0)]);

        assert_eq!(sim.tick(&mut surface), LoopState::Running);
        assert_eq!(surface.frames().len(), 1);
        assert_eq!(surface.frames()[0].len(), 100);
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn run_counts_ticks_until_quit() {
        let mut sim = Simulation::new(SimulationParams::force(), 5).unwrap();
        let path: Vec<Point2> = (0..25).map(|i| pt2(i as f32 * 10.0, 300.0)).collect();
        let mut surface = ScriptedSurface::new(path);
        let mut pacer = ScriptedSurface::new(Vec::<Point2>::new());

        assert_eq!(sim.run(&mut surface, &mut pacer), 25);
        assert_eq!(sim.loop_state(), LoopState::Stopped);
        assert_eq!(surface.frames().len(), 25);
    }

    #[test]
    fn isolated_boid_only_feels_the_pointer() {
        let params = SimulationParams::force();
        let lone = Boid::new(pt2(100.0, 100.0), vec2(0.0, 2.0), params.max_speed);
        let far = Boid::new(pt2(700.0, 550.0), vec2(0.0, 2.0), params.max_speed);
        let pointer = pt2(100.0, 50.0);

        let expected = physics::seek_force(&lone, pointer, &params).unwrap();

        let mut sim = scenario(params, vec![lone, far]);
        let mut surface = ScriptedSurface::new([pointer]);
        sim.tick(&mut surface);

        let velocity = sim.boids()[0].velocity;
        assert!((velocity - (vec2(0.0, 2.0) + expected)).length() < EPS);
    }

    #[test]
    fn boid_on_pointer_keeps_its_velocity() {
        let params = SimulationParams::positional();
        let boid = Boid::new(pt2(200.0, 200.0), vec2(1.0, 1.0), params.max_speed);

        let mut sim = scenario(params, vec![boid]);
        let mut surface = ScriptedSurface::new([pt2(200.0, 200.0)]);
        sim.tick(&mut surface);

        assert_eq!(sim.boids()[0].velocity, vec2(1.0, 1.0));
        assert_eq!(sim.boids()[0].position, pt2(201.0, 201.0));
    }

    #[test]
    fn positional_step_separates_overlapping_pair() {
        let params = SimulationParams::positional();
        let a = Boid::new(pt2(300.0, 300.0), vec2(0.0, 0.1), params.max_speed);
        let b = Boid::new(pt2(304.0, 300.0), vec2(0.0, 0.1), params.max_speed);

        let mut sim = scenario(params, vec![a, b]);
        let mut surface = ScriptedSurface::new([pt2(302.0, 600.0)]);
        sim.tick(&mut surface);

        let distance = sim.boids()[0].position.distance(sim.boids()[1].position);
        assert!(distance > 4.0);
    }

    #[test]
    fn mean_speed_of_fresh_flock_is_max_speed() {
        let sim = Simulation::new(SimulationParams::force(), 11).unwrap();
        assert!((sim.state().mean_speed() - 5.0).abs() < EPS);
    }
}
