/*
 * Renderer Module
 *
 * Turns boids into triangles and hands them to a Canvas. The simulation
 * draws into a FrameBuffer during each tick; the nannou view replays the
 * last presented frame through the viewport transform.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::viewport::Viewport;

pub type Triangle = [Point2; 3];

/// Anything a frame can be drawn onto.
pub trait Canvas {
    /// Erase the frame being built.
    fn clear(&mut self, color: Rgb<u8>);

    fn draw_polygon(&mut self, points: Triangle, color: Rgb<u8>);

    /// Make the frame being built the visible one.
    fn present(&mut self);
}

/// Triangle pointing along the boid's velocity: the tip lies on the heading,
/// the two rear vertices `wing_angle` degrees to either side, all of them
/// `2 * boid_radius` from the centre. `None` for a boid at rest.
pub fn boid_triangle(boid: &Boid, params: &SimulationParams) -> Option<Triangle> {
    let heading = boid.heading()?;
    let length = params.tip_length();
    let wing = params.wing_angle.to_radians();

    let vertex = |angle: f32| boid.position + vec2(angle.cos(), angle.sin()) * length;

    Some([vertex(heading), vertex(heading + wing), vertex(heading - wing)])
}

// Draw one boid, skipping it when it has no heading
pub fn draw_boid<C: Canvas + ?Sized>(canvas: &mut C, boid: &Boid, params: &SimulationParams) {
    if let Some(points) = boid_triangle(boid, params) {
        canvas.draw_polygon(points, params.boid_color);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DrawnPolygon {
    pub points: Triangle,
    pub color: Rgb<u8>,
}

/// Double-buffered list of polygons. Drawing goes to the back buffer;
/// `present` swaps it to the front where `render_frame` picks it up.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pub background: Rgb<u8>,
    front: Vec<DrawnPolygon>,
    back: Vec<DrawnPolygon>,
    presented: u64,
}

impl FrameBuffer {
    pub fn new(background: Rgb<u8>) -> Self {
        Self {
            background,
            front: Vec::new(),
            back: Vec::new(),
            presented: 0,
        }
    }

    /// Polygons of the last presented frame.
    pub fn polygons(&self) -> &[DrawnPolygon] {
        &self.front
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }
}

impl Canvas for FrameBuffer {
    fn clear(&mut self, color: Rgb<u8>) {
        self.background = color;
        self.back.clear();
    }

    fn draw_polygon(&mut self, points: Triangle, color: Rgb<u8>) {
        self.back.push(DrawnPolygon { points, color });
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
        self.back.clear();
        self.presented += 1;
    }
}

// Replay the presented frame with nannou
pub fn render_frame(draw: &Draw, frame: &FrameBuffer, viewport: &Viewport) {
    draw.background().color(frame.background);

    for polygon in frame.polygons() {
        let points = polygon.points.map(|p| viewport.world_to_screen(p));
        draw.polygon().color(polygon.color).points(points);
    }
}
