//! Core value types shared by the camera, tracer and render loop.

use crate::error::{RenderError, Result};
use crate::math::Vec3;

/// Half-line `origin + t * direction`.
///
/// The direction is not required to be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    /// Point at parameter `t`. Negative `t` lies behind the origin.
    #[inline(always)]
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Self {
        Sphere { center, radius }
    }
}

/// The fixed scene: one sphere in front of the camera.
#[derive(Clone, Copy, Debug)]
pub struct Scene {
    pub sphere: Sphere,
}

impl Default for Scene {
    fn default() -> Self {
        Scene {
            sphere: Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5),
        }
    }
}

/// Validated output dimensions.
///
/// Both sides are at least 2 so the viewport mapping `i / (width - 1)`
/// never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    pub const MIN_SIDE: u32 = 2;

    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let frame = FrameSize { width, height };
        // RGBA byte count must be addressable on 32-bit targets
        if frame.checked_byte_len().is_none() {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(frame)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn checked_byte_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(4)
    }

    /// Size in bytes of the RGBA buffer for this frame.
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Reject a buffer that does not hold exactly one RGBA frame.
    pub fn check_buffer(&self, buf: &[u8]) -> Result<()> {
        let expected = self.byte_len();
        if buf.len() != expected {
            return Err(RenderError::BufferSize { expected, actual: buf.len() });
        }
        Ok(())
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        FrameSize { width: 200, height: 100 }
    }
}
