//! Plain-text PPM export of a rendered RGBA frame.

use std::io::Write;

use crate::engine::types::FrameSize;
use crate::error::Result;

/// Write `rgba` as an ASCII `P3` image, one `r g b` line per pixel.
///
/// Alpha is dropped. The buffer must hold exactly one frame.
pub fn write_ppm<W: Write>(out: &mut W, rgba: &[u8], frame: FrameSize) -> Result<()> {
    frame.check_buffer(rgba)?;

    writeln!(out, "P3\n{} {}\n255", frame.width(), frame.height())?;
    for px in rgba.chunks_exact(4) {
        writeln!(out, "{} {} {}", px[0], px[1], px[2])?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::Camera;
    use crate::engine::render::render_frame;
    use crate::engine::types::Scene;
    use crate::error::RenderError;

    #[test]
    fn test_ppm_layout() {
        let frame = FrameSize::new(2, 2).unwrap();
        let rgba = [1, 2, 3, 255, 4, 5, 6, 255, 7, 8, 9, 255, 10, 11, 12, 255];
        let mut out = Vec::new();
        write_ppm(&mut out, &rgba, frame).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n1 2 3\n4 5 6\n7 8 9\n10 11 12\n");
    }

    #[test]
    fn test_ppm_of_rendered_frame() {
        let frame = FrameSize::new(20, 10).unwrap();
        let mut rgba = vec![0u8; frame.byte_len()];
        render_frame(frame, &Scene::default(), &Camera::default(), &mut rgba).unwrap();

        let mut out = Vec::new();
        write_ppm(&mut out, &rgba, frame).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3 + 200);
        assert!(text.starts_with("P3\n20 10\n255\n"));
    }

    #[test]
    fn test_ppm_rejects_wrong_size() {
        let frame = FrameSize::new(2, 2).unwrap();
        let mut out = Vec::new();
        let err = write_ppm(&mut out, &[0u8; 12], frame).unwrap_err();
        assert!(matches!(err, RenderError::BufferSize { expected: 16, actual: 12 }));
        assert!(out.is_empty());
    }
}
