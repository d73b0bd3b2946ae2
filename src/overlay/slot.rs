//! Single-assignment result handoff.
//!
//! UI surfaces can report a result from more than one path at once: an
//! Escape handler and a window-close handler both fire when a window is torn
//! down, and Save-then-close races the close callback. The slot guarantees
//! exactly one winner; late offers are dropped silently, never queued and
//! never an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;

/// Producer half. Cloneable so every callback path can hold one.
pub struct ResultSlot<T> {
    claimed: Arc<AtomicBool>,
    tx: SyncSender<T>,
}

/// Consumer half: observes at most one value.
pub struct ResultHandle<T> {
    rx: Receiver<T>,
}

/// Creates a connected slot/handle pair.
pub fn result_slot<T>() -> (ResultSlot<T>, ResultHandle<T>) {
    // Capacity 1 and the claim flag together mean the send can never block.
    let (tx, rx) = mpsc::sync_channel(1);
    (
        ResultSlot {
            claimed: Arc::new(AtomicBool::new(false)),
            tx,
        },
        ResultHandle { rx },
    )
}

impl<T> ResultSlot<T> {
    /// Offers a value. Returns true for the first caller; later offers are
    /// discarded and return false.
    pub fn offer(&self, value: T) -> bool {
        if self.claimed.swap(true, Ordering::SeqCst) {
            return false;
        }
        // The receiver may already be gone; a dropped result is fine.
        let _ = self.tx.try_send(value);
        true
    }
}

impl<T> Clone for ResultSlot<T> {
    fn clone(&self) -> Self {
        Self {
            claimed: Arc::clone(&self.claimed),
            tx: self.tx.clone(),
        }
    }
}

impl<T> ResultHandle<T> {
    /// Blocks until the winning value arrives. `None` when every producer
    /// was dropped without offering one.
    pub fn wait(&self) -> Option<T> {
        self.rx.recv().ok()
    }
}
