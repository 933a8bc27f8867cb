//! Browser display hand-off: render straight into a `<canvas>` element.

use log::info;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::engine::camera::Camera;
use crate::engine::render::render_frame;
use crate::engine::types::{FrameSize, Scene};
use crate::error::{RenderError, Result};

fn js_err(value: JsValue) -> RenderError {
    RenderError::Canvas(format!("{value:?}"))
}

/// Look up `canvas_id`, render a frame at the canvas size and put it back.
///
/// The pixel buffer is read from the canvas itself so the frame matches the
/// surface exactly.
pub fn render_into_canvas(canvas_id: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| RenderError::Canvas("no document available".into()))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| RenderError::Canvas(format!("no element #{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| RenderError::Canvas(format!("#{canvas_id} is not a canvas")))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| RenderError::Canvas("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| RenderError::Canvas("unexpected context type".into()))?;

    let frame = FrameSize::new(canvas.width(), canvas.height())?;
    let image = ctx
        .get_image_data(0.0, 0.0, frame.width() as f64, frame.height() as f64)
        .map_err(js_err)?;
    let mut pixels = image.data().0;

    render_frame(frame, &Scene::default(), &Camera::default(), &mut pixels)?;

    let image = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(&pixels),
        frame.width(),
        frame.height(),
    )
    .map_err(js_err)?;
    ctx.put_image_data(&image, 0.0, 0.0).map_err(js_err)?;

    info!("rendered {}x{} into #{}", frame.width(), frame.height(), canvas_id);
    Ok(())
}
