//! Debounce: fire once after a quiet period.

use super::Millis;

/// Trailing-edge debounce.
///
/// Every `trigger` cancels the pending deadline and restarts it `delay`
/// after the new trigger, so `poll` fires once, `delay` after the last one.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Millis,
    deadline: Option<Millis>,
}

impl Debounce {
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an event at `now`, restarting the quiet period.
    pub fn trigger(&mut self, now: Millis) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            },
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }
}
