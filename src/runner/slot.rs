//! Single-assignment completion slot shared by a worker and its timer.

use std::sync::atomic::{AtomicU8, Ordering};
use crossbeam_channel::{Receiver, Sender, bounded};

const PENDING: u8 = 0;
const FILLED: u8 = 1;

/// A cell that accepts exactly one value.
///
/// Writers race with [`CompletionSlot::try_fill`]; the first compare-and-swap
/// from pending to filled wins and every later write is rejected. The winning
/// value is handed to the reader over a one-element channel, so readers block
/// instead of polling.
#[derive(Debug)]
pub struct CompletionSlot<T> {
    state: AtomicU8,
    tx: Sender<T>,
    rx: Receiver<T>,
}

impl<T> Default for CompletionSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CompletionSlot<T> {
    pub fn new() -> Self {
        let (tx, rx) = bounded(1);
        Self {
            state: AtomicU8::new(PENDING),
            tx,
            rx,
        }
    }

    /// Store `value` if nothing has been stored yet. Returns true if this call won.
    pub fn try_fill(&self, value: T) -> bool {
        if self
            .state
            .compare_exchange(PENDING, FILLED, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        // Capacity is one and only the winner sends, so this never blocks
        self.tx.send(value).is_ok()
    }

    #[cfg(test)]
    fn is_filled(&self) -> bool {
        self.state.load(Ordering::Acquire) == FILLED
    }

    /// Block until the slot is filled and take the value.
    ///
    /// The slot has a single reader. A second `wait` after the value was
    /// taken blocks until every sender is dropped.
    pub fn wait(&self) -> Option<T> {
        self.rx.recv().ok()
    }

    /// Like [`CompletionSlot::wait`] but gives up after `timeout`.
    #[cfg(test)]
    fn wait_timeout(&self, timeout: std::time::Duration) -> Option<T> {
        self.rx.recv_timeout(timeout).ok()
    }
}
