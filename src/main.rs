/*
 * Flocking Simulation
 *
 * A flock of boids on a wrapping 800x600 plane. Each boid follows three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * On top of that every boid is drawn towards the mouse pointer and kept from
 * overlapping its neighbors. Set FLOCK_PROFILE=positional for the variant with
 * direct overlap correction, FLOCK_SEED for a reproducible flock and RUST_LOG
 * for log verbosity. Press D for the stats overlay and Escape to quit.
 */

use flocking::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model)
        .update(app::update)
        .exit(app::exit)
        .run();
}
