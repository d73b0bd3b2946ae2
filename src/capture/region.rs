//! Pure region cropping logic — functional core.
//!
//! This module has zero infrastructure dependencies. It takes pixel data in,
//! returns pixel data out: no resampling, no filtering, a pixel-exact copy.

use image::imageops;

use super::Frame;
use crate::geom::Rect;

#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("no capture image available")]
    NoImage,

    #[error("crop rectangle is empty after clamping to the image bounds")]
    EmptyCrop,
}

/// Returns a bounds-checked crop of `frame` as a freshly allocated copy.
///
/// The rectangle is normalized (per axis) and clamped to the frame's own
/// bounds; an empty result is `CropError::EmptyCrop`. The returned frame's
/// bounds start at (0,0) with the size of the clamped rectangle.
pub fn crop(frame: Option<&Frame>, rect: Rect) -> Result<Frame, CropError> {
    let frame = frame.ok_or(CropError::NoImage)?;

    let clamped = rect.normalize().intersect(frame.bounds);
    if clamped.is_empty() {
        return Err(CropError::EmptyCrop);
    }

    // Bounds-space -> raster-space: frame.bounds.min maps to pixel (0,0).
    let local = clamped.translate(-frame.bounds.min_x, -frame.bounds.min_y);
    let pixels = imageops::crop_imm(
        &frame.pixels,
        local.min_x as u32,
        local.min_y as u32,
        clamped.width() as u32,
        clamped.height() as u32,
    )
    .to_image();

    Ok(Frame::from_pixels(pixels))
}

/// Translates a rectangle expressed in display/screen coordinates into the
/// coordinate space of a (possibly offset) captured image.
///
/// Per axis: `out = selection - display_bounds.min + image_bounds.min`.
/// Needed because some capture sources return rasters whose bounds do not
/// start at (0,0).
pub fn map_capture_rect_to_image_space(
    image_bounds: Rect,
    display_bounds: Rect,
    selection: Rect,
) -> Rect {
    let dx = image_bounds.min_x - display_bounds.min_x;
    let dy = image_bounds.min_y - display_bounds.min_y;
    selection.translate(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn frame_3x3_at_origin() -> Frame {
        let mut pixels = RgbaImage::new(3, 3);
        pixels.put_pixel(1, 1, Rgba([10, 20, 30, 255]));
        pixels.put_pixel(2, 1, Rgba([40, 50, 60, 255]));
        pixels.put_pixel(1, 2, Rgba([70, 80, 90, 255]));
        pixels.put_pixel(2, 2, Rgba([100, 110, 120, 255]));
        Frame::from_pixels(pixels)
    }

    #[test]
    fn crop_missing_image_fails() {
        let err = crop(None, Rect::new(0, 0, 10, 10)).unwrap_err();
        assert!(matches!(err, CropError::NoImage));
    }

    #[test]
    fn crop_fully_outside_bounds_fails() {
        let frame = frame_3x3_at_origin();
        let err = crop(Some(&frame), Rect::new(100, 100, 200, 200)).unwrap_err();
        assert!(matches!(err, CropError::EmptyCrop));
    }

    #[test]
    fn crop_copies_pixels_and_resets_bounds() {
        let frame = frame_3x3_at_origin();

        // Bottom-right 2x2 area.
        let out = crop(Some(&frame), Rect::new(1, 1, 3, 3)).unwrap();
        assert_eq!(out.bounds, Rect::new(0, 0, 2, 2));
        assert_eq!((out.pixels.width(), out.pixels.height()), (2, 2));

        // out(0,0) == src(1,1), etc. — exact values, no resampling.
        for (x_out, y_out, x_src, y_src) in [(0, 0, 1, 1), (1, 0, 2, 1), (0, 1, 1, 2), (1, 1, 2, 2)]
        {
            assert_eq!(
                out.pixels.get_pixel(x_out, y_out),
                frame.pixels.get_pixel(x_src, y_src),
                "pixel mismatch at out({x_out},{y_out})"
            );
        }
    }

    #[test]
    fn crop_normalizes_inverted_rect() {
        let frame = frame_3x3_at_origin();
        let out = crop(Some(&frame), Rect::new(3, 3, 1, 1)).unwrap();
        assert_eq!(out.bounds, Rect::new(0, 0, 2, 2));
        assert_eq!(out.pixels.get_pixel(0, 0), frame.pixels.get_pixel(1, 1));
    }

    #[test]
    fn crop_clamps_partial_overlap() {
        let frame = frame_3x3_at_origin();
        let out = crop(Some(&frame), Rect::new(-5, -5, 2, 2)).unwrap();
        assert_eq!(out.bounds, Rect::new(0, 0, 2, 2));
        assert_eq!(out.pixels.get_pixel(1, 1), frame.pixels.get_pixel(1, 1));
    }

    #[test]
    fn crop_is_a_copy_not_a_view() {
        let mut frame = frame_3x3_at_origin();
        let out = crop(Some(&frame), Rect::new(1, 1, 3, 3)).unwrap();
        let before = *out.pixels.get_pixel(0, 0);
        frame.pixels.put_pixel(1, 1, Rgba([1, 2, 3, 4]));
        assert_eq!(*out.pixels.get_pixel(0, 0), before);
    }

    #[test]
    fn crop_respects_offset_frame_bounds() {
        // Same raster, but anchored at (10, 20) on the desktop.
        let src = frame_3x3_at_origin();
        let frame = Frame::new(src.pixels.clone(), Rect::from_origin_size(10, 20, 3, 3));

        let out = crop(Some(&frame), Rect::new(11, 21, 13, 23)).unwrap();
        assert_eq!(out.bounds, Rect::new(0, 0, 2, 2));
        assert_eq!(out.pixels.get_pixel(0, 0), src.pixels.get_pixel(1, 1));
    }

    #[test]
    fn map_rect_image_matches_display() {
        let display = Rect::new(100, 200, 1100, 700);
        let selection = Rect::new(150, 250, 300, 400);
        let got = map_capture_rect_to_image_space(display, display, selection);
        assert_eq!(got, selection);
    }

    #[test]
    fn map_rect_image_at_origin() {
        let display = Rect::new(100, 200, 1100, 700);
        let image_bounds = Rect::new(0, 0, 1000, 500);
        let selection = Rect::new(150, 250, 300, 400);
        let got = map_capture_rect_to_image_space(image_bounds, display, selection);
        assert_eq!(got, Rect::new(50, 50, 200, 200));
    }

    #[test]
    fn map_rect_image_with_offset() {
        let display = Rect::new(100, 200, 1100, 700);
        let image_bounds = Rect::new(10, 20, 1010, 520);
        let selection = Rect::new(150, 250, 300, 400);
        let got = map_capture_rect_to_image_space(image_bounds, display, selection);
        assert_eq!(got, Rect::new(60, 70, 210, 220));
    }
}
