//! Area-selection overlay domain.
//!
//! The drag state machine ([`SelectionTracker`]) and the first-writer-wins
//! result handoff ([`ResultSlot`]) are pure and toolkit-independent; any
//! windowing glue drives them with pointer/key events and waits on the
//! handle. The rendering toolkit itself is an external collaborator: this
//! build ships no overlay surface, so [`select_area`] reports
//! [`SelectError::Unavailable`] and callers degrade to full capture.

mod slot;
mod tracker;

pub use slot::{result_slot, ResultHandle, ResultSlot};
pub use tracker::SelectionTracker;

use crate::geom::Rect;

/// Outcome of a selection flow. Cancellation (Escape, closing the surface,
/// or a degenerate drag) is a normal outcome, distinct from failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A non-empty region in screen coordinates, clamped to the display.
    Region(Rect),
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("area selection overlay is unavailable in this build")]
    Unavailable,

    #[error("no active displays")]
    NoActiveDisplays,
}

/// Displays a fullscreen selection overlay on the primary display and waits
/// for the user to drag out a region.
///
/// Unavailable here: the overlay surface is an external collaborator this
/// build does not bundle. The entry point exists unconditionally so callers
/// can take the documented fallback path.
pub fn select_area() -> Result<SelectionOutcome, SelectError> {
    Err(SelectError::Unavailable)
}
