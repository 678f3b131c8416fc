/*
 * UI Module
 *
 * Read-only stats overlay drawn with nannou_egui. It reports what the
 * simulation is doing and never changes a parameter.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

pub fn update_ui(egui: &mut Egui, params: &SimulationParams, seed: u64, debug_info: &DebugInfo) {
    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Stats")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.label(format!("Profile: {}", params.profile.name()));
            ui.label(format!("Seed: {}", seed));
            ui.label(format!("Boids: {}", debug_info.boids));
            ui.label(format!("Neighbor radius: {:.0}", params.neighbor_radius));

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Ticks: {}", debug_info.ticks));
            ui.label(format!("Mean speed: {:.2} / {:.1}", debug_info.mean_speed, params.max_speed));

            ui.separator();
            ui.label("D: toggle stats    Esc: quit");
        });
}
