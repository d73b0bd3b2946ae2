//! Screen-space geometry — functional core.
//!
//! Rectangles here are integer screen-pixel coordinates across the virtual
//! desktop. Canvas positions/sizes are the logical (possibly DPI-scaled)
//! coordinates of the selection overlay surface. This module is the single
//! place where the two coordinate spaces are reconciled.

/// An axis-aligned rectangle in screen-pixel coordinates.
///
/// May be un-normalized (min > max on an axis) until [`Rect::normalize`] is
/// applied. A rectangle with zero width or height is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Reorders min/max independently per axis so min <= max. Idempotent.
    pub fn normalize(&self) -> Self {
        let (min_x, max_x) = if self.min_x > self.max_x {
            (self.max_x, self.min_x)
        } else {
            (self.min_x, self.max_x)
        };
        let (min_y, max_y) = if self.min_y > self.max_y {
            (self.max_y, self.min_y)
        } else {
            (self.min_y, self.max_y)
        };
        Self::new(min_x, min_y, max_x, max_y)
    }

    /// Intersection with `other`. Disjoint rectangles yield the zero rect.
    pub fn intersect(&self, other: Rect) -> Self {
        let out = Self::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        );
        if out.is_empty() {
            Self::default()
        } else {
            out
        }
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }
}

/// A point in the overlay's logical coordinate system (origin at the
/// overlay window's top-left, sub-pixel precision).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasPos {
    pub x: f32,
    pub y: f32,
}

impl CanvasPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The overlay's current rendered size, in the same logical units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Converts a start/end drag in canvas coordinates into a screen-space
/// rectangle clamped to `display_bounds`.
///
/// The drag positions are scaled by the ratio between the display pixel
/// bounds and the canvas logical size (the overlay may render at a
/// different size than the raw display raster under compositor or DPI
/// scaling), then offset by the display's minimum corner.
///
/// Coordinates are rounded to the nearest pixel, half away from zero
/// (`f64::round`), so the mapping is deterministic under scaling.
///
/// Degenerate layouts (non-positive canvas or display dimensions) return an
/// empty rectangle: no valid selection is possible, which is not an error.
pub fn canvas_rect_to_screen_rect(
    start: CanvasPos,
    end: CanvasPos,
    canvas_size: CanvasSize,
    display_bounds: Rect,
) -> Rect {
    if canvas_size.width <= 0.0
        || canvas_size.height <= 0.0
        || display_bounds.width() <= 0
        || display_bounds.height() <= 0
    {
        return Rect::default();
    }

    let sx = f64::from(display_bounds.width()) / f64::from(canvas_size.width);
    let sy = f64::from(display_bounds.height()) / f64::from(canvas_size.height);

    let to_screen = |p: CanvasPos| {
        let x = (f64::from(p.x) * sx).round() as i32;
        let y = (f64::from(p.y) * sy).round() as i32;
        (display_bounds.min_x + x, display_bounds.min_y + y)
    };

    let (x1, y1) = to_screen(start);
    let (x2, y2) = to_screen(end);

    Rect::new(x1, y1, x2, y2)
        .normalize()
        .intersect(display_bounds)
}
