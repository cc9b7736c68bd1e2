//! Debounced "return to home" timer for an empty tab strip.
//!
//! The watch is driven by observations of the tab count. The first
//! observation is the mount and never arms it, so a workspace that starts
//! with no tabs stays put. Afterwards, the strip going empty arms a
//! deadline; any non-empty observation before it passes disarms it.

use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmptyWatch {
    delay: Duration,
    last_len: Option<usize>,
    deadline: Option<Instant>,
}

impl EmptyWatch {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_len: None,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a notification is scheduled.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Record the current tab count.
    pub fn observe(&mut self, now: Instant, tab_count: usize) {
        let previous = self.last_len.replace(tab_count);
        let Some(previous) = previous else {
            return;
        };

        if tab_count > 0 {
            if self.deadline.take().is_some() {
                debug!("tab opened before home redirect, cancelled");
            }
        } else if previous > 0 {
            self.deadline = Some(now + self.delay);
            debug!(delay_ms = self.delay.as_millis() as u64, "tab strip empty, home redirect armed");
        }
    }

    /// Returns `true` exactly once per armed deadline, when it has passed
    /// and the strip is still empty.
    pub fn poll(&mut self, now: Instant, tab_count: usize) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                tab_count == 0
            }
            _ => false,
        }
    }
}
