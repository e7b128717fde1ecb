//! Custom pointer effect for desktop web pages.
//!
//! Draws a dot that tracks the pointer exactly, an outline ring that eases
//! toward it, a fading particle trail, and hover/click/scroll/load styling.
//!
//! The effect logic lives in [`controller::PointerEffectController`], which
//! writes to any [`surface::CursorSurface`]. In the browser the `web` module
//! binds it to the DOM; everywhere else it can be driven directly, which is
//! how the tests exercise it.

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod lifecycle;
pub mod motion;
pub mod style;
pub mod surface;
pub mod timing;
pub mod trail;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{EffectConfig, TrailConfig};
pub use controller::PointerEffectController;
pub use error::{CursorFxError, CursorFxResult};
pub use geometry::XY;
pub use hover::{ElementKind, HoverState, OutlineClass};
pub use surface::CursorSurface;
