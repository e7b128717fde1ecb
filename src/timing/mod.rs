//! Rate-limiting and delay primitives on a millisecond clock.
//!
//! None of these own a real timer. The caller passes the current time
//! (`performance.now()` in the browser) and the host arranges to call
//! `poll` once a deadline may have passed, so the same code runs under
//! browser timers and in plain unit tests.
//!
//! - `Throttle`: admit at most one call per interval
//! - `Debounce`: fire once after a quiet period, restarted by each trigger
//! - `OneShot`: fire once a fixed delay after being started

pub mod debounce;
pub mod one_shot;
pub mod throttle;

pub use debounce::Debounce;
pub use one_shot::OneShot;
pub use throttle::Throttle;

/// Milliseconds on the host's monotonic clock.
pub type Millis = f64;

/// Earliest of two optional deadlines.
pub fn earliest(a: Option<Millis>, b: Option<Millis>) -> Option<Millis> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
