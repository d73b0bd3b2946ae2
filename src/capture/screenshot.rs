//! Full-display capture using the `xcap` crate.
//!
//! This is the infrastructure layer — it talks to the OS. Everything that
//! can be computed without a real display (index clamping, bounds math)
//! lives in pure functions below so it stays testable.

use xcap::Monitor;

use super::Frame;
use crate::geom::Rect;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to enumerate monitors: {0}")]
    MonitorEnumeration(String),

    #[error("no active displays")]
    NoActiveDisplays,

    #[error("failed to query monitor geometry: {0}")]
    MonitorGeometry(String),

    #[error("screen capture failed: {0}")]
    CaptureFailed(String),
}

/// Number of displays currently active. Zero when enumeration fails.
pub fn num_active_displays() -> usize {
    Monitor::all().map(|monitors| monitors.len()).unwrap_or(0)
}

/// Clamps a requested display index into the valid range.
///
/// A requested index must never reach the OS capture primitive unchecked:
/// below range maps to 0, above range to the last display. With no displays
/// the answer is 0 (callers detect that case separately).
pub fn clamp_display_index(requested: i32, num_displays: i32) -> usize {
    if num_displays <= 0 || requested < 0 {
        return 0;
    }
    if requested >= num_displays {
        return (num_displays - 1) as usize;
    }
    requested as usize
}

/// Returns the global screen-pixel bounds of one display.
///
/// Queried fresh on every call; display layout can change between captures.
pub fn display_bounds(display_index: i32) -> Result<Rect, CaptureError> {
    let monitors = monitors()?;
    let i = clamp_display_index(display_index, monitors.len() as i32);
    monitor_bounds(&monitors[i])
}

/// Captures the full pixel contents of one display.
///
/// Out-of-range indices are clamped to the nearest valid display. The
/// returned frame carries the display's screen-space bounds so croppers can
/// map selections into image space.
pub fn capture_display(display_index: i32) -> Result<Frame, CaptureError> {
    let monitors = monitors()?;
    let i = clamp_display_index(display_index, monitors.len() as i32);
    let monitor = &monitors[i];

    let bounds = monitor_bounds(monitor)?;
    let pixels = monitor
        .capture_image()
        .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

    Ok(Frame::new(pixels, bounds))
}

fn monitors() -> Result<Vec<Monitor>, CaptureError> {
    let monitors =
        Monitor::all().map_err(|e| CaptureError::MonitorEnumeration(e.to_string()))?;
    if monitors.is_empty() {
        return Err(CaptureError::NoActiveDisplays);
    }
    Ok(monitors)
}

fn monitor_bounds(monitor: &Monitor) -> Result<Rect, CaptureError> {
    let geom = |e: xcap::XCapError| CaptureError::MonitorGeometry(e.to_string());
    let x = monitor.x().map_err(geom)?;
    let y = monitor.y().map_err(geom)?;
    let width = monitor.width().map_err(geom)?;
    let height = monitor.height().map_err(geom)?;
    Ok(Rect::from_origin_size(x, y, width as i32, height as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_display_index_in_range() {
        assert_eq!(clamp_display_index(0, 3), 0);
        assert_eq!(clamp_display_index(2, 3), 2);
    }

    #[test]
    fn clamp_display_index_out_of_range() {
        assert_eq!(clamp_display_index(-1, 3), 0);
        assert_eq!(clamp_display_index(3, 3), 2);
        assert_eq!(clamp_display_index(100, 3), 2);
    }

    #[test]
    fn clamp_display_index_no_displays() {
        assert_eq!(clamp_display_index(0, 0), 0);
        assert_eq!(clamp_display_index(5, -1), 0);
    }
}
