//! Immutable 3D vector with f64 precision.
//!
//! Serves as point, direction and RGB color. Every operation returns a
//! fresh value; nothing is mutated in place.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{RenderError, Result};

/// 3D vector value type.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Color with each channel in [0, 1]. Shares the vector representation.
pub type Color = Vec3;

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    #[inline(always)]
    pub fn scale(self, t: f64) -> Vec3 {
        Vec3::new(self.x * t, self.y * t, self.z * t)
    }

    /// Component-wise division by a scalar.
    ///
    /// A zero divisor yields non-finite components; callers that cannot
    /// tolerate that go through [`Vec3::normalize`].
    #[inline(always)]
    pub fn divide(self, t: f64) -> Vec3 {
        Vec3::new(self.x / t, self.y / t, self.z / t)
    }

    #[inline(always)]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline(always)]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline(always)]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`RenderError::DegenerateVector`] when the length is
    /// exactly zero. Non-finite inputs are passed through unchanged in
    /// kind (NaN in, NaN out).
    #[inline]
    pub fn normalize(self) -> Result<Vec3> {
        let len = self.length();
        if len == 0.0 {
            return Err(RenderError::DegenerateVector);
        }
        Ok(self.divide(len))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn mul(self, t: f64) -> Vec3 {
        self.scale(t)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline(always)]
    fn mul(self, v: Vec3) -> Vec3 {
        v.scale(self)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn div(self, t: f64) -> Vec3 {
        self.divide(t)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}
