//! One-shot delay.

use super::Millis;

/// Fires once, a fixed delay after `start`.
#[derive(Debug, Clone)]
pub struct OneShot {
    delay: Millis,
    deadline: Option<Millis>,
}

impl OneShot {
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Start the delay at `now`. Starting while pending replaces the deadline.
    pub fn start(&mut self, now: Millis) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once when the delay has elapsed.
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
