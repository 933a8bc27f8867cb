//! Ray casting engine: scene types, camera, intersection and the render loop.

pub mod camera;
pub mod render;
pub mod tracer;
pub mod types;
