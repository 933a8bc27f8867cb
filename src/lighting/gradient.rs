//! Color gradient used for the sky background.
//!
//! Maps a blend factor in [0, 1] to a color by linear interpolation
//! between stops. The default is the two-stop white to sky-blue ramp.

use crate::math::{utils, Color, Vec3};

/// A single color stop in the gradient.
#[derive(Clone, Copy, Debug)]
pub struct ColorStop {
    /// Position in [0, 1] range
    pub position: f64,
    pub color: Color,
}

/// Color gradient with interpolation between stops.
#[derive(Clone, Debug)]
pub struct ColorGradient {
    pub stops: Vec<ColorStop>,
}

pub const WHITE: Color = Vec3::ONE;
pub const SKY_BLUE: Color = Vec3::new(0.5, 0.7, 1.0);

impl Default for ColorGradient {
    fn default() -> Self {
        Self {
            stops: vec![
                ColorStop { position: 0.0, color: WHITE },
                ColorStop { position: 1.0, color: SKY_BLUE },
            ],
        }
    }
}

impl ColorGradient {
    /// Create a gradient from `(position, color)` pairs, sorted by position.
    pub fn from_stops(stops: &[(f64, Color)]) -> Self {
        let mut stops: Vec<ColorStop> = stops
            .iter()
            .map(|&(position, color)| ColorStop { position, color })
            .collect();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    /// Sample the gradient at `t`, clamped to [0, 1].
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Vec3::ZERO,
        };
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (s0, s1) = (&pair[0], &pair[1]);
            if t >= s0.position && t <= s1.position {
                let range = s1.position - s0.position;
                let frac = if range > 1e-10 { (t - s0.position) / range } else { 0.0 };
                return utils::lerp_color(s0.color, s1.color, frac);
            }
        }

        last.color
    }
}
