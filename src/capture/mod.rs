//! Screen capture domain — public API.
//!
//! This module owns all screen capture functionality. External code should
//! only use the types and functions exported here.

mod region;
mod screenshot;

pub use region::{crop, map_capture_rect_to_image_space, CropError};
pub use screenshot::{
    capture_display, clamp_display_index, display_bounds, num_active_displays, CaptureError,
};

use image::RgbaImage;

use crate::geom::Rect;

/// A captured raster together with its screen-space bounds.
///
/// Capture sources don't all report rasters anchored at the origin; `bounds`
/// records where the pixels sit on the virtual desktop. Pixel (0,0) of
/// `pixels` corresponds to `bounds` minimum corner.
#[derive(Debug, Clone)]
pub struct Frame {
    pub pixels: RgbaImage,
    pub bounds: Rect,
}

impl Frame {
    pub fn new(pixels: RgbaImage, bounds: Rect) -> Self {
        Self { pixels, bounds }
    }

    /// A frame whose bounds start at the origin, sized to the raster.
    pub fn from_pixels(pixels: RgbaImage) -> Self {
        let bounds = Rect::from_origin_size(0, 0, pixels.width() as i32, pixels.height() as i32);
        Self { pixels, bounds }
    }
}
