//! Top-level effect configuration.

use serde::{Deserialize, Serialize};

use super::trail::{finite_or, TrailConfig};
use crate::error::CursorFxResult;

/// Media query that must match for the effect to install.
pub const DEFAULT_ACTIVATION_QUERY: &str = "(hover: hover) and (pointer: fine)";

/// Elements that get hover/click feedback on the outline.
pub const DEFAULT_INTERACTIVE_SELECTOR: &str =
    "a, button, input, select, textarea, [role=\"button\"], .hover-effect, .cursor-interactive";

/// Complete pointer effect configuration.
///
/// Deserializes from a partial object: every omitted key takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectConfig {
    /// Capability query gating installation.
    pub activation_query: String,

    /// Selector of the dot element.
    pub dot_selector: String,

    /// Selector of the outline element.
    pub outline_selector: String,

    /// Selector of the elements that toggle hover/click classes.
    pub interactive_selector: String,

    /// Fraction of the remaining distance the outline covers each frame.
    pub smoothing_factor: f64,

    /// Outline scale while the page is scrolling.
    pub scroll_scale: f64,

    /// Quiet time after the last scroll before the outline scale is restored.
    pub scroll_settle_ms: f64,

    /// Outline scale of the entrance animation on page load.
    pub entrance_scale: f64,

    /// How long the entrance scale is held.
    pub entrance_duration_ms: f64,

    /// Particle trail settings.
    pub trail: TrailConfig,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            activation_query: DEFAULT_ACTIVATION_QUERY.to_string(),
            dot_selector: ".cursor-dot".to_string(),
            outline_selector: ".cursor-dot-outline".to_string(),
            interactive_selector: DEFAULT_INTERACTIVE_SELECTOR.to_string(),
            smoothing_factor: 0.1,
            scroll_scale: 0.8,
            scroll_settle_ms: 100.0,
            entrance_scale: 1.5,
            entrance_duration_ms: 500.0,
            trail: TrailConfig::default(),
        }
    }
}

impl EffectConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> CursorFxResult<Self> {
        let mut config: EffectConfig = serde_json::from_str(json)?;
        config.validate();
        Ok(config)
    }

    /// Validate and clamp settings to acceptable ranges.
    pub fn validate(&mut self) {
        self.smoothing_factor = finite_or(self.smoothing_factor, 0.1).clamp(0.001, 1.0);
        self.scroll_scale = finite_or(self.scroll_scale, 0.8).max(0.0);
        self.scroll_settle_ms = finite_or(self.scroll_settle_ms, 100.0).max(1.0);
        self.entrance_scale = finite_or(self.entrance_scale, 1.5).max(0.0);
        self.entrance_duration_ms = finite_or(self.entrance_duration_ms, 500.0).max(1.0);

        let defaults = Self::default();
        for (field, fallback) in [
            (&mut self.activation_query, defaults.activation_query),
            (&mut self.dot_selector, defaults.dot_selector),
            (&mut self.outline_selector, defaults.outline_selector),
            (&mut self.interactive_selector, defaults.interactive_selector),
        ] {
            if field.trim().is_empty() {
                *field = fallback;
            }
        }

        self.trail.validate();
    }

    /// Reset all settings to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
