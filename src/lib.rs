//! Single-sphere ray caster for the browser.
//!
//! Casts one ray per pixel from a pinhole camera, colors sphere hits by
//! their surface normal and everything else with a white to sky-blue
//! gradient, and writes the result into an RGBA buffer owned by the host.

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod api;
pub mod engine;
pub mod error;
pub mod lighting;
pub mod math;
pub mod output;

/// Initialize the WASM module (call once from JS).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        if console_log::init_with_level(log::Level::Info).is_ok() {
            log::info!("sky-sphere renderer ready");
        }
    }
}

/// Render the fixed scene into `rgba_out` (width * height * 4 bytes).
#[wasm_bindgen]
pub fn render_rgba(width: u32, height: u32, rgba_out: &mut [u8]) -> Result<(), JsValue> {
    api::render_rgba(width, height, rgba_out).map_err(JsValue::from)
}

/// Render only the scanlines assigned to one Web Worker.
///
/// `rgba_out` is a Uint8Array view of the full frame, typically backed by a
/// SharedArrayBuffer. Rows are assigned by `worker_id` / `worker_count`
/// interleaving.
#[wasm_bindgen]
pub fn render_rgba_scanlines(
    width: u32,
    height: u32,
    rgba_out: &mut [u8],
    worker_id: u32,
    worker_count: u32,
) -> Result<u32, JsValue> {
    api::render_rgba_scanlines(width, height, rgba_out, worker_id, worker_count)
        .map_err(JsValue::from)
}

/// Render using a Float64Array of parameters: `[width, height]`.
#[wasm_bindgen]
pub fn render_with_params(params: &[f64], rgba_out: &mut [u8]) -> Result<(), JsValue> {
    api::render_with_params(params, rgba_out).map_err(JsValue::from)
}

/// Render into the `<canvas>` with the given id at its current size.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_to_canvas(canvas_id: &str) -> Result<(), JsValue> {
    canvas::render_into_canvas(canvas_id).map_err(JsValue::from)
}
