//! Particle trail left behind by the pointer.
//!
//! Particles start small and fairly opaque, then every frame lose a fixed
//! amount of opacity and grow by a fixed amount until they vanish. Decay is
//! counted in frames, not wall time, so a particle always lives exactly
//! `initial_opacity / opacity_decay` frames (30 with the defaults).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::{TrailConfig, DEFAULT_PALETTE};
use crate::geometry::XY;

/// Absorbs float rounding in `initial - decay * age`.
const SPENT_EPSILON: f64 = 1e-9;

/// Identifier the render surface uses to address a particle's element.
pub type ParticleId = u64;

/// A single trail particle.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailParticle {
    pub id: ParticleId,
    pub position: XY,
    pub color: String,
    pub opacity: f64,
    pub size: f64,
    /// Frames elapsed since spawn.
    pub age: u32,
}

/// Per-frame change to a live particle.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleUpdate {
    /// Still visible with new opacity and size.
    Faded { id: ParticleId, opacity: f64, size: f64 },
    /// Opacity reached zero; the element must be removed.
    Expired { id: ParticleId },
}

/// Owns every live particle.
pub struct TrailSystem {
    config: TrailConfig,
    particles: Vec<TrailParticle>,
    next_id: ParticleId,
    rng: StdRng,
}

impl TrailSystem {
    pub fn new(config: TrailConfig, rng: StdRng) -> Self {
        Self {
            config,
            particles: Vec::new(),
            next_id: 0,
            rng,
        }
    }

    /// Create a particle at `position` with a random palette color.
    pub fn spawn(&mut self, position: XY) -> &TrailParticle {
        let color = self
            .config
            .palette
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_PALETTE[0].to_string());

        let id = self.next_id;
        self.next_id += 1;

        self.particles.push(TrailParticle {
            id,
            position,
            color,
            opacity: self.config.initial_opacity,
            size: self.config.initial_size,
            age: 0,
        });

        &self.particles[self.particles.len() - 1]
    }

    /// Advance every particle by one frame, dropping the spent ones.
    pub fn advance(&mut self) -> Vec<ParticleUpdate> {
        let config = &self.config;
        let mut updates = Vec::with_capacity(self.particles.len());

        self.particles.retain_mut(|p| {
            p.age += 1;
            p.opacity = config.initial_opacity - config.opacity_decay * p.age as f64;
            p.size = config.initial_size + config.size_growth * p.age as f64;

            if p.opacity <= SPENT_EPSILON {
                updates.push(ParticleUpdate::Expired { id: p.id });
                false
            } else {
                updates.push(ParticleUpdate::Faded {
                    id: p.id,
                    opacity: p.opacity,
                    size: p.size,
                });
                true
            }
        });

        updates
    }

    /// Drop every particle, returning their ids.
    pub fn clear(&mut self) -> Vec<ParticleId> {
        self.particles.drain(..).map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
