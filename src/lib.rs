/*
 * Flocking Simulation - Module Definitions
 *
 * The simulation core (vector, boid, physics, params, simulation, renderer,
 * surface) is independent of the window; app, ui, debug and viewport are the
 * nannou front end.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use config::LaunchConfig;
pub use error::{FlockError, Result};
pub use params::{CollisionPolicy, Profile, SeekLimit, SeparationMode, SimulationParams};
pub use renderer::{Canvas, FrameBuffer, Triangle};
pub use simulation::{LoopState, Simulation, SimulationState};
pub use surface::{FramePacer, ScriptedSurface, SleepPacer, Surface, SurfaceEvent};
pub use vector::Steer;

// Define modules
pub mod app;
pub mod boid;
pub mod config;
pub mod debug;
pub mod error;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod simulation;
pub mod surface;
pub mod ui;
pub mod vector;
pub mod viewport;
