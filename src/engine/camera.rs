//! Pinhole camera mapping pixel coordinates onto a fixed world-space viewport.

use super::types::{FrameSize, Ray};
use crate::math::Vec3;

/// Viewport spanned by `lower_left_corner + u * horizontal + v * vertical`,
/// seen from `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub lower_left_corner: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::new(-2.0, -1.0, -1.0),
            horizontal: Vec3::new(4.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.0, 0.0),
        }
    }
}

impl Camera {
    /// Ray through viewport coordinates `(u, v)`, both nominally in [0, 1].
    ///
    /// The direction is left un-normalized.
    #[inline]
    pub fn ray(&self, u: f64, v: f64) -> Ray {
        let direction =
            self.lower_left_corner + self.horizontal * u + self.vertical * v - self.origin;
        Ray::new(self.origin, direction)
    }

    /// Ray for pixel column `i` and world row `j` (row 0 is the bottom of the frame).
    #[inline]
    pub fn ray_for_pixel(&self, i: u32, j: u32, frame: FrameSize) -> Ray {
        let u = i as f64 / (frame.width() - 1) as f64;
        let v = j as f64 / (frame.height() - 1) as f64;
        self.ray(u, v)
    }
}
