//! Render loop: camera rays through every pixel, shaded and quantized into
//! a row-major RGBA buffer.
//!
//! Pixels are independent, so a frame can be split across workers by
//! interleaved scanlines. Each worker renders into a private buffer and
//! copies its rows out only after every row succeeded, so a failing call
//! leaves the caller's buffer untouched.

use log::{debug, warn};

use super::camera::Camera;
use super::types::{FrameSize, Scene};
use crate::error::{RenderError, Result};
use crate::lighting::shade::Shader;
use crate::math::utils;

/// Render the full frame in one pass.
pub fn render_frame(
    frame: FrameSize,
    scene: &Scene,
    camera: &Camera,
    rgba_out: &mut [u8],
) -> Result<()> {
    render_scanlines(frame, scene, camera, rgba_out, 0, 1).map(|_| ())
}

/// Render the image rows assigned to one worker.
///
/// Worker `worker_id` owns image rows `y` with `y % worker_count == worker_id`.
/// `rgba_out` is the whole frame; rows owned by other workers are not touched.
/// Returns the number of rows written.
pub fn render_scanlines(
    frame: FrameSize,
    scene: &Scene,
    camera: &Camera,
    rgba_out: &mut [u8],
    worker_id: u32,
    worker_count: u32,
) -> Result<u32> {
    if let Err(err) = frame.check_buffer(rgba_out) {
        warn!("rejecting render: {err}");
        return Err(err);
    }
    if worker_count == 0 || worker_id >= worker_count {
        let err = RenderError::InvalidWorker { worker_id, worker_count };
        warn!("rejecting render: {err}");
        return Err(err);
    }

    let shader = Shader::default();
    let h = frame.height();
    let row_bytes = frame.width() as usize * 4;

    let rows: Vec<u32> = (worker_id..h).step_by(worker_count as usize).collect();
    let mut local = vec![0u8; rows.len() * row_bytes];

    for (row, &y) in local.chunks_exact_mut(row_bytes).zip(&rows) {
        // Image row 0 is the top of the frame, world row 0 the bottom
        let j = h - 1 - y;
        for (i, texel) in row.chunks_exact_mut(4).enumerate() {
            let ray = camera.ray_for_pixel(i as u32, j, frame);
            let color = shader.shade(&ray, &scene.sphere)?;
            texel.copy_from_slice(&utils::color_to_rgba(color));
        }
    }

    for (row, &y) in local.chunks_exact(row_bytes).zip(&rows) {
        let start = y as usize * row_bytes;
        rgba_out[start..start + row_bytes].copy_from_slice(row);
    }

    debug!(
        "worker {}/{} rendered {} rows of {}x{}",
        worker_id,
        worker_count,
        rows.len(),
        frame.width(),
        h
    );
    Ok(rows.len() as u32)
}

/// Decode frame dimensions from a flat parameter array.
///
/// Layout: `[width, height]`. Arrays shorter than two entries fall back to
/// the default frame; values are truncated toward zero and validated.
pub fn frame_size_from_buffer(data: &[f64]) -> Result<FrameSize> {
    if data.len() < 2 {
        return Ok(FrameSize::default());
    }
    FrameSize::new(data[0] as u32, data[1] as u32)
}
