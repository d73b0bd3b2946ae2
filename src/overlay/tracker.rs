//! Drag-selection state machine.
//!
//! Models the overlay's mutable drag state as a tagged variant instead of
//! scattered flags: either no drag is active, or one is, with its anchor and
//! current point. Pointer events while idle are ignored; finalizing maps the
//! drag through the canvas-to-screen transform.

use crate::geom::{canvas_rect_to_screen_rect, CanvasPos, CanvasSize, Rect};

use super::SelectionOutcome;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { start: CanvasPos, current: CanvasPos },
}

/// Tracks one drag gesture on the selection overlay.
///
/// The display bounds are fixed at construction (the overlay covers exactly
/// one display for its lifetime); the canvas size is supplied at finalize
/// time because the overlay can be resized mid-drag by the compositor.
#[derive(Debug)]
pub struct SelectionTracker {
    display_bounds: Rect,
    state: DragState,
}

impl SelectionTracker {
    pub fn new(display_bounds: Rect) -> Self {
        Self {
            display_bounds,
            state: DragState::Idle,
        }
    }

    /// Starts a drag at `pos`. A second press while dragging re-anchors.
    pub fn pointer_down(&mut self, pos: CanvasPos) {
        self.state = DragState::Dragging {
            start: pos,
            current: pos,
        };
    }

    /// Updates the live end point. Ignored while idle.
    pub fn pointer_moved(&mut self, pos: CanvasPos) {
        if let DragState::Dragging { current, .. } = &mut self.state {
            *current = pos;
        }
    }

    /// The in-progress drag as (start, current), for rendering the rubber
    /// band. `None` while idle.
    pub fn active_drag(&self) -> Option<(CanvasPos, CanvasPos)> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { start, current } => Some((start, current)),
        }
    }

    /// Releases the pointer at `pos` and finalizes. `None` when no drag was
    /// active (a stray mouse-up).
    pub fn pointer_up(&mut self, pos: CanvasPos, canvas_size: CanvasSize) -> Option<SelectionOutcome> {
        self.pointer_moved(pos);
        self.drag_end(canvas_size)
    }

    /// Finalizes the drag at its current end point (toolkit drag-end event).
    ///
    /// A drag that maps to an empty screen rectangle (degenerate click,
    /// off-display, zero-sized layout) emits `Cancelled`, not an error.
    pub fn drag_end(&mut self, canvas_size: CanvasSize) -> Option<SelectionOutcome> {
        let DragState::Dragging { start, current } = self.state else {
            return None;
        };
        self.state = DragState::Idle;

        let rect = canvas_rect_to_screen_rect(start, current, canvas_size, self.display_bounds);
        if rect.is_empty() {
            Some(SelectionOutcome::Cancelled)
        } else {
            Some(SelectionOutcome::Region(rect))
        }
    }

    /// Cancels any drag (Escape or surface close) and returns to idle.
    pub fn cancel(&mut self) -> SelectionOutcome {
        self.state = DragState::Idle;
        SelectionOutcome::Cancelled
    }
}
