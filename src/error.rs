//! Error taxonomy for the render pipeline.

use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum RenderError {
    /// Normalizing a vector whose length is exactly zero.
    DegenerateVector,
    /// Frame narrower or shorter than 2 pixels, or too large to address.
    InvalidDimensions { width: u32, height: u32 },
    /// Output buffer length differs from `width * height * 4`.
    BufferSize { expected: usize, actual: usize },
    /// Scanline worker assignment outside `0..worker_count`.
    InvalidWorker { worker_id: u32, worker_count: u32 },
    /// Drawing surface lookup or hand-off failed.
    Canvas(String),
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RenderError::DegenerateVector => write!(f, "cannot normalize a zero-length vector"),
            RenderError::InvalidDimensions { width, height } => {
                write!(f, "invalid frame dimensions {width}x{height}, both must be at least 2")
            }
            RenderError::BufferSize { expected, actual } => {
                write!(f, "pixel buffer holds {actual} bytes, expected {expected}")
            }
            RenderError::InvalidWorker { worker_id, worker_count } => {
                write!(f, "worker {worker_id} out of range for {worker_count} workers")
            }
            RenderError::Canvas(msg) => write!(f, "canvas error: {msg}"),
            RenderError::Io(err) => write!(f, "write failed: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

/// Builds a JS `Error`; requires a wasm32 host. Native callers use [`crate::api`].
impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = RenderError::InvalidDimensions { width: 1, height: 100 };
        assert_eq!(e.to_string(), "invalid frame dimensions 1x100, both must be at least 2");

        let e = RenderError::BufferSize { expected: 80, actual: 79 };
        assert_eq!(e.to_string(), "pixel buffer holds 79 bytes, expected 80");
    }

    #[test]
    fn test_io_error_is_source() {
        use std::error::Error;
        let e = RenderError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(e.source().is_some());
        assert!(RenderError::DegenerateVector.source().is_none());
    }
}
