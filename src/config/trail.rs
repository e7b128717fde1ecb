//! Trail particle configuration.

use serde::{Deserialize, Serialize};

/// Colors a trail particle may take, picked uniformly at random.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#3b82f6", "#8b5cf6", "#ec4899", "#ef4444", "#f59e0b", "#10b981",
];

/// Particle trail settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailConfig {
    /// Spawn particles on pointer movement at all.
    pub enabled: bool,

    /// Minimum time between two spawned particles (~60/s at 16ms).
    pub spawn_interval_ms: f64,

    /// CSS colors used for the particle gradient.
    pub palette: Vec<String>,

    /// Opacity a particle starts at.
    pub initial_opacity: f64,

    /// Diameter in CSS px a particle starts at.
    pub initial_size: f64,

    /// Opacity lost per frame.
    pub opacity_decay: f64,

    /// Diameter gained per frame.
    pub size_growth: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spawn_interval_ms: 16.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            initial_opacity: 0.6,
            initial_size: 6.0,
            opacity_decay: 0.02,
            size_growth: 0.5,
        }
    }
}

impl TrailConfig {
    /// Clamp settings to acceptable ranges.
    pub fn validate(&mut self) {
        self.spawn_interval_ms = finite_or(self.spawn_interval_ms, 16.0).max(1.0);
        self.initial_opacity = finite_or(self.initial_opacity, 0.6).clamp(0.01, 1.0);
        self.initial_size = finite_or(self.initial_size, 6.0).max(0.0);
        self.opacity_decay = finite_or(self.opacity_decay, 0.02).clamp(0.001, 1.0);
        self.size_growth = finite_or(self.size_growth, 0.5);

        self.palette.retain(|c| !c.trim().is_empty());
        if self.palette.is_empty() {
            self.palette = DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect();
        }
    }
}

pub(crate) fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
