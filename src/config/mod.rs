//! Effect configuration.
//!
//! Every tunable of the pointer effect lives in one typed struct that the
//! page can override from JavaScript (camelCase keys, omitted keys keep
//! their defaults).
//!
//! - `EffectConfig`: selectors, outline easing, scroll/load transforms
//! - `TrailConfig`: particle spawn rate, palette and decay

pub mod effect;
pub mod trail;

pub use effect::EffectConfig;
pub use trail::{TrailConfig, DEFAULT_PALETTE};
