/*
 * Vector Module
 *
 * Steering helpers on top of nannou's Vec2. Every operation that would divide
 * by the vector's length returns the zero vector for a zero-length input, so
 * callers never normalize a degenerate vector by accident.
 */

use nannou::prelude::Vec2;

/// Length-aware operations used by the steering rules.
///
/// `normalized`, `with_length` and `limited` return new vectors; `set_length`
/// and `limit` modify the vector in place.
pub trait Steer: Sized {
    /// Unit vector in the same direction, or zero for a zero-length input.
    fn normalized(self) -> Self;

    /// Same direction scaled to exactly `length`, or zero for a zero-length input.
    fn with_length(self, length: f32) -> Self;

    /// Shortened to at most `max` if it is longer, otherwise unchanged.
    fn limited(self, max: f32) -> Self;

    fn set_length(&mut self, length: f32);

    fn limit(&mut self, max: f32);
}

impl Steer for Vec2 {
    #[inline]
    fn normalized(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            self / length
        } else {
            Vec2::ZERO
        }
    }

    #[inline]
    fn with_length(self, length: f32) -> Self {
        self.normalized() * length
    }

    #[inline]
    fn limited(self, max: f32) -> Self {
        let length_squared = self.length_squared();
        if length_squared > max * max {
            self * (max / length_squared.sqrt())
        } else {
            self
        }
    }

    #[inline]
    fn set_length(&mut self, length: f32) {
        *self = self.with_length(length);
    }

    #[inline]
    fn limit(&mut self, max: f32) {
        *self = self.limited(max);
    }
}
