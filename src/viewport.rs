/*
 * Viewport Module
 *
 * Coordinate transformations between the simulation world and nannou's
 * window space. The world has its origin at the top-left corner with y
 * growing downwards; nannou puts the origin at the window centre with y
 * growing upwards.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Convert a point from screen space to world space
    pub fn screen_to_world(&self, point: Point2) -> Point2 {
        pt2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}
