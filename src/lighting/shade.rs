//! Per-ray shading: surface normals as pseudo-color over a sky gradient.

use super::gradient::ColorGradient;
use crate::engine::types::{Ray, Sphere};
use crate::error::Result;
use crate::math::{Color, Vec3};

/// Maps a ray against the scene sphere to a color in [0, 1]^3.
#[derive(Clone, Debug, Default)]
pub struct Shader {
    pub background: ColorGradient,
}

impl Shader {
    pub fn new(background: ColorGradient) -> Self {
        Shader { background }
    }

    /// Color seen along `ray`.
    ///
    /// Only `t > 0` counts as a hit; a root at or behind the origin falls
    /// through to the background.
    pub fn shade(&self, ray: &Ray, sphere: &Sphere) -> Result<Color> {
        let t = sphere.hit(ray);
        if t > 0.0 {
            let normal = (ray.point_at(t) - sphere.center).normalize()?;
            return Ok(normal_to_color(normal));
        }
        self.background_color(ray)
    }

    /// Sky gradient keyed on the height of the normalized direction.
    pub fn background_color(&self, ray: &Ray) -> Result<Color> {
        let unit_dir = ray.direction.normalize()?;
        Ok(self.background.sample(sky_blend(unit_dir)))
    }
}

/// Remap a unit normal from [-1, 1] to [0, 1] per channel.
#[inline]
pub fn normal_to_color(n: Vec3) -> Color {
    Vec3::new(0.5 * (n.x + 1.0), 0.5 * (n.y + 1.0), 0.5 * (n.z + 1.0))
}

#[inline]
pub fn sky_blend(unit_dir: Vec3) -> f64 {
    0.5 * (unit_dir.y + 1.0)
}
