/*
 * Surface Module
 *
 * The boundary between the simulation and whatever displays it. A Surface
 * delivers input (quit requests and the pointer position) and is a Canvas
 * for the frame; a FramePacer blocks until the next tick is due.
 *
 * Besides the nannou window (see the app module) two implementations live
 * here: ScriptedSurface, a headless surface replaying a recorded pointer
 * path, and SleepPacer, which paces a loop with the standard clock.
 */

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use nannou::prelude::*;

use crate::renderer::{Canvas, FrameBuffer, Triangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Quit,
}

pub trait Surface: Canvas {
    /// Drain the input received since the last call. Never blocks.
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;

    /// Pointer position in world coordinates.
    fn pointer_position(&self) -> Point2;
}

pub trait FramePacer {
    /// Block until the next tick of a `target_hz` loop, returning the time
    /// elapsed since the previous one.
    fn wait_next_tick(&mut self, target_hz: f64) -> Duration;
}

/// Headless surface that replays a fixed pointer path, one position per
/// tick, and asks to quit once the path is exhausted. Every presented frame
/// is kept for inspection.
#[derive(Debug, Clone)]
pub struct ScriptedSurface {
    path: VecDeque<Point2>,
    pointer: Point2,
    frame: FrameBuffer,
    frames: Vec<Vec<Triangle>>,
    record_frames: bool,
}

impl ScriptedSurface {
    pub fn new(path: impl IntoIterator<Item = Point2>) -> Self {
        Self {
            path: path.into_iter().collect(),
            pointer: Point2::ZERO,
            frame: FrameBuffer::new(rgb(0, 0, 0)),
            frames: Vec::new(),
            record_frames: true,
        }
    }

    /// Keep only the latest frame instead of the whole history.
    pub fn without_history(mut self) -> Self {
        self.record_frames = false;
        self
    }

    pub fn frames(&self) -> &[Vec<Triangle>] {
        &self.frames
    }

    pub fn current_frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

impl Canvas for ScriptedSurface {
    fn clear(&mut self, color: Rgb<u8>) {
        self.frame.clear(color);
    }

    fn draw_polygon(&mut self, points: Triangle, color: Rgb<u8>) {
        self.frame.draw_polygon(points, color);
    }

    fn present(&mut self) {
        self.frame.present();
        if self.record_frames {
            self.frames
                .push(self.frame.polygons().iter().map(|polygon| polygon.points).collect());
        }
    }
}

impl Surface for ScriptedSurface {
    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        match self.path.pop_front() {
            Some(pointer) => {
                self.pointer = pointer;
                Vec::new()
            }
            None => vec![SurfaceEvent::Quit],
        }
    }

    fn pointer_position(&self) -> Point2 {
        self.pointer
    }
}

/// Ticks instantly; for headless runs that should go as fast as possible.
impl FramePacer for ScriptedSurface {
    fn wait_next_tick(&mut self, target_hz: f64) -> Duration {
        Duration::from_secs_f64(1.0 / target_hz)
    }
}

/// Sleeps until the next tick boundary measured from the previous one.
#[derive(Debug)]
pub struct SleepPacer {
    last_tick: Instant,
}

impl SleepPacer {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePacer for SleepPacer {
    fn wait_next_tick(&mut self, target_hz: f64) -> Duration {
        let interval = Duration::from_secs_f64(1.0 / target_hz);
        let next_tick = self.last_tick + interval;

        let now = Instant::now();
        if next_tick > now {
            std::thread::sleep(next_tick - now);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}
