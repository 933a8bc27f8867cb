//! Shading: surface normals mapped to color, and the sky gradient behind them.

pub mod gradient;
pub mod shade;
