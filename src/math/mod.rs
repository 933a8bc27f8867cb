//! Vector math and scalar helpers.

pub mod utils;
pub mod vec3;

pub use vec3::{Color, Vec3};
