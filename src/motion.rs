//! Outline easing.
//!
//! The outline follows the pointer with per-frame exponential smoothing:
//! each frame it covers a fixed fraction of the remaining distance,
//! independently per axis. With the default factor of 0.1 the gap shrinks
//! by 10% per frame, so it converges asymptotically and never overshoots.

use crate::geometry::XY;

/// Position that eases toward a target by a fixed fraction per step.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialFollower {
    position: XY,
    factor: f64,
}

impl ExponentialFollower {
    pub fn new(start: XY, factor: f64) -> Self {
        Self {
            position: start,
            factor,
        }
    }

    /// Advance one frame toward `target` and return the new position.
    pub fn step(&mut self, target: XY) -> XY {
        self.position += (target - self.position) * self.factor;
        self.position
    }

    pub fn position(&self) -> XY {
        self.position
    }
}
