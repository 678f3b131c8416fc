/*
 * Application Module
 *
 * nannou glue for the flocking simulation. The window acts as the
 * simulation's Surface: key presses and window closing become Quit events,
 * the mouse supplies the pointer, and each tick draws into a FrameBuffer that
 * the view replays. nannou's loop mode paces updates to the frame rate.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::LaunchConfig;
use crate::debug::DebugInfo;
use crate::error::FlockError;
use crate::renderer::{self, Canvas, FrameBuffer, Triangle};
use crate::simulation::{LoopState, Simulation};
use crate::surface::{Surface, SurfaceEvent};
use crate::ui;
use crate::viewport::Viewport;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub frame: FrameBuffer,
    pub viewport: Viewport,
    pub pending_events: Vec<SurfaceEvent>,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
}

/// One update's view of the window: queued events, the pointer in world
/// space and the frame to draw into.
struct WindowSurface<'a> {
    events: &'a mut Vec<SurfaceEvent>,
    pointer: Point2,
    frame: &'a mut FrameBuffer,
}

impl Canvas for WindowSurface<'_> {
    fn clear(&mut self, color: Rgb<u8>) {
        self.frame.clear(color);
    }

    fn draw_polygon(&mut self, points: Triangle, color: Rgb<u8>) {
        self.frame.draw_polygon(points, color);
    }

    fn present(&mut self) {
        self.frame.present();
    }
}

impl Surface for WindowSurface<'_> {
    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(self.events)
    }

    fn pointer_position(&self) -> Point2 {
        self.pointer
    }
}

// Log a startup failure and leave with a non-zero status
fn fatal(err: FlockError) -> ! {
    log::error!("{}", err);
    std::process::exit(1)
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = LaunchConfig::from_env().unwrap_or_else(|err| fatal(err));
    let params = config.params();
    log::info!(
        "starting {} profile: {} boids, seed {}",
        params.profile.name(),
        params.num_boids,
        config.seed
    );

    let window_id = app
        .new_window()
        .title("Flocking Simulation")
        .size(params.width as u32, params.height as u32)
        .resizable(false)
        .view(view)
        .key_pressed(key_pressed)
        .closed(window_closed)
        .raw_event(raw_window_event)
        .build()
        .unwrap_or_else(|err| fatal(FlockError::Surface(format!("{:?}", err))));

    let egui = {
        let window = app
            .window(window_id)
            .unwrap_or_else(|| fatal(FlockError::Surface("window vanished after creation".to_string())));
        Egui::from_window(&window)
    };

    // Escape goes through the simulation's own quit handling
    app.set_exit_on_escape(false);
    app.set_loop_mode(LoopMode::rate_fps(params.frame_rate));
    log::debug!("window {}x{} at {} Hz", params.width, params.height, params.frame_rate);

    let viewport = Viewport::new(params.width, params.height);
    let frame = FrameBuffer::new(params.background_color);
    let simulation = Simulation::new(params, config.seed).unwrap_or_else(|err| fatal(err));

    Model {
        simulation,
        frame,
        viewport,
        pending_events: Vec::new(),
        egui,
        debug_info: DebugInfo::default(),
        show_debug: false,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let pointer = model.viewport.screen_to_world(pt2(app.mouse.x, app.mouse.y));
    let mut surface = WindowSurface {
        events: &mut model.pending_events,
        pointer,
        frame: &mut model.frame,
    };

    if model.simulation.tick(&mut surface) == LoopState::Stopped {
        app.quit();
        return;
    }

    model.debug_info.observe(&model.simulation);

    if model.show_debug {
        ui::update_ui(
            &mut model.egui,
            model.simulation.params(),
            model.simulation.seed(),
            &model.debug_info,
        );
    }
}

// Render the last presented frame
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    renderer::render_frame(&draw, &model.frame, &model.viewport);

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", err);
    }

    if model.show_debug {
        if let Err(err) = model.egui.draw_to_frame(&frame) {
            log::error!("failed to draw stats overlay: {:?}", err);
        }
    }
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Escape => model.pending_events.push(SurfaceEvent::Quit),
        Key::D => model.show_debug = !model.show_debug,
        _ => {}
    }
}

pub fn window_closed(_app: &App, model: &mut Model) {
    log::debug!("window closed");
    model.pending_events.push(SurfaceEvent::Quit);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

pub fn exit(_app: &App, model: Model) {
    log::info!("simulation stopped after {} ticks", model.simulation.ticks());
}
