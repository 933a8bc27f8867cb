//! Browser tests for the exported render surface.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_render_rgba_fills_opaque_frame() {
    let mut buf = vec![0u8; 20 * 10 * 4];
    sky_sphere_wasm::render_rgba(20, 10, &mut buf).unwrap();
    assert!(buf.chunks_exact(4).all(|px| px[3] == 255));
}

#[wasm_bindgen_test]
fn test_render_rgba_rejects_single_pixel_column() {
    let mut buf = vec![0u8; 10 * 4];
    assert!(sky_sphere_wasm::render_rgba(1, 10, &mut buf).is_err());
    assert!(buf.iter().all(|&b| b == 0));
}

#[wasm_bindgen_test]
fn test_render_rgba_rejects_short_buffer() {
    let mut buf = vec![0u8; 20 * 10 * 4 - 1];
    assert!(sky_sphere_wasm::render_rgba(20, 10, &mut buf).is_err());
}

#[wasm_bindgen_test]
fn test_render_to_canvas_missing_element() {
    assert!(sky_sphere_wasm::render_to_canvas("no-such-canvas").is_err());
}
