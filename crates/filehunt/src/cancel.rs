//! Cooperative cancellation for parallel volume workers.
//!
//! Cancellation is best-effort: a worker observes the flag between walk
//! entries and may finish its current batch before stopping.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How often walk loops check whether execution was cancelled.
/// A power of 2 so the modulo is a bitwise AND.
pub const CANCEL_CHECK_INTERVAL: usize = 0x400;

/// Shared stop flag handed to every worker of one search.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    stop: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that workers stop the next time they observe the flag.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Sparse check for tight walk loops: only reads the atomic every
    /// `CANCEL_CHECK_INTERVAL` iterations.
    pub fn is_cancelled_sparse(&self, counter: usize) -> bool {
        counter & (CANCEL_CHECK_INTERVAL - 1) == 0 && self.is_cancelled()
    }
}
