//! Keystroke debouncer for autocomplete requests
//!
//! Delays the request until input stabilizes. Each `schedule()` restarts the
//! timer, so only the last of a burst of keystrokes produces a request.

use std::time::{Duration, Instant};

/// Manages debounced request timing.
#[derive(Debug)]
pub struct Debouncer {
    /// Debounce delay in milliseconds
    delay_ms: u64,
    /// Timestamp of the last input that triggered a debounce
    last_input_time: Option<Instant>,
    /// Whether there's a pending request waiting for debounce to expire
    pending: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_input_time: None,
            pending: false,
        }
    }

    /// Records the current time and marks a request as pending.
    pub fn schedule(&mut self) {
        self.last_input_time = Some(Instant::now());
        self.pending = true;
    }

    pub fn cancel(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    /// True once `delay_ms` has elapsed since the last `schedule()`.
    pub fn is_ready(&self) -> bool {
        if !self.pending {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => last_time.elapsed() >= Duration::from_millis(self.delay_ms),
            None => false,
        }
    }

    pub fn mark_complete(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    #[cfg(test)]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(250)
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
