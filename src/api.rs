//! Buffer-level entry points over the fixed scene.
//!
//! These return [`crate::error::Result`] and run on any target; the
//! `#[wasm_bindgen]` exports in the crate root only convert their errors
//! into JS exceptions.

use crate::engine::camera::Camera;
use crate::engine::render;
use crate::engine::types::{FrameSize, Scene};
use crate::error::Result;

/// Render the fixed scene into `rgba_out` (width * height * 4 bytes).
pub fn render_rgba(width: u32, height: u32, rgba_out: &mut [u8]) -> Result<()> {
    let frame = FrameSize::new(width, height)?;
    render::render_frame(frame, &Scene::default(), &Camera::default(), rgba_out)
}

/// Render the image rows owned by `worker_id` out of `worker_count`.
pub fn render_rgba_scanlines(
    width: u32,
    height: u32,
    rgba_out: &mut [u8],
    worker_id: u32,
    worker_count: u32,
) -> Result<u32> {
    let frame = FrameSize::new(width, height)?;
    render::render_scanlines(
        frame,
        &Scene::default(),
        &Camera::default(),
        rgba_out,
        worker_id,
        worker_count,
    )
}

/// Render with dimensions taken from a `[width, height]` parameter array.
pub fn render_with_params(params: &[f64], rgba_out: &mut [u8]) -> Result<()> {
    let frame = render::frame_size_from_buffer(params)?;
    render::render_frame(frame, &Scene::default(), &Camera::default(), rgba_out)
}
