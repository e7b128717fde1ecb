//! Throttle: at most one admitted call per interval.

use super::Millis;

/// Leading-edge throttle.
///
/// The first call is admitted and arms a token; further calls are rejected
/// until `interval` has elapsed since the admitted one, at which point the
/// token is cleared and the next call is admitted again.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Millis,
    armed_at: Option<Millis>,
}

impl Throttle {
    pub fn new(interval: Millis) -> Self {
        Self {
            interval,
            armed_at: None,
        }
    }

    /// Try to pass the throttle at `now`. Returns true if the call is admitted.
    pub fn try_acquire(&mut self, now: Millis) -> bool {
        if self.is_blocked(now) {
            return false;
        }
        self.armed_at = Some(now);
        true
    }

    /// Whether a call at `now` would be rejected.
    pub fn is_blocked(&self, now: Millis) -> bool {
        matches!(self.armed_at, Some(at) if now < at + self.interval)
    }

    /// Clear the token so the next call is admitted.
    pub fn reset(&mut self) {
        self.armed_at = None;
    }
}
