//! Pointer effect controller.
//!
//! Owns the whole effect state for one page session: the true pointer
//! position, the eased outline, hover/press state, outline scale and
//! visibility, the particle trail and the three timers (trail throttle,
//! scroll settle debounce, entrance one-shot).
//!
//! The host feeds it events and animation-frame ticks; every visible change
//! goes out through the [`CursorSurface`] it owns.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EffectConfig;
use crate::geometry::XY;
use crate::hover::{outline_classes, ElementKind, HoverState};
use crate::motion::ExponentialFollower;
use crate::surface::CursorSurface;
use crate::timing::{earliest, Debounce, Millis, OneShot, Throttle};
use crate::trail::{ParticleId, ParticleUpdate, TrailSystem};

#[cfg(test)]
mod tests;

/// Outline scale at rest.
const REST_SCALE: f64 = 1.0;

/// The pointer effect state machine.
pub struct PointerEffectController<S: CursorSurface> {
    config: EffectConfig,
    surface: S,

    pointer: XY,
    outline: ExponentialFollower,

    hover: HoverState,
    pressed: bool,
    scale: f64,
    visible: bool,

    trail: TrailSystem,
    trail_throttle: Throttle,
    scroll_settle: Debounce,
    entrance: OneShot,

    frames: u64,
}

impl<S: CursorSurface> PointerEffectController<S> {
    /// Create a controller with an entropy-seeded trail palette picker.
    pub fn new(config: EffectConfig, surface: S) -> Self {
        Self::with_rng(config, surface, StdRng::from_entropy())
    }

    /// Create a controller with an explicit random source.
    pub fn with_rng(mut config: EffectConfig, surface: S, rng: StdRng) -> Self {
        config.validate();

        let outline = ExponentialFollower::new(XY::default(), config.smoothing_factor);
        let trail_throttle = Throttle::new(config.trail.spawn_interval_ms);
        let scroll_settle = Debounce::new(config.scroll_settle_ms);
        let entrance = OneShot::new(config.entrance_duration_ms);
        let trail = TrailSystem::new(config.trail.clone(), rng);

        Self {
            config,
            surface,
            pointer: XY::default(),
            outline,
            hover: HoverState::None,
            pressed: false,
            scale: REST_SCALE,
            visible: true,
            trail,
            trail_throttle,
            scroll_settle,
            entrance,
            frames: 0,
        }
    }

    // ========================================================================
    // Pointer tracking
    // ========================================================================

    /// Record the true pointer position, then offer the move to the trail.
    pub fn pointer_moved(&mut self, x: f64, y: f64, now: Millis) {
        self.pointer = XY::new(x, y);
        if self.config.trail.enabled {
            self.spawn_trail_particle(now);
        }
    }

    /// One animation-frame tick.
    ///
    /// The dot lands exactly on the pointer, the outline covers a fixed
    /// fraction of its remaining distance, and every particle decays one step.
    pub fn render_frame(&mut self) {
        self.frames += 1;

        self.surface.place_dot(self.pointer);
        let outline = self.outline.step(self.pointer);
        self.surface.place_outline(outline);

        for update in self.trail.advance() {
            match update {
                ParticleUpdate::Faded { id, opacity, size } => {
                    self.surface.update_particle(id, opacity, size)
                },
                ParticleUpdate::Expired { id } => self.surface.remove_particle(id),
            }
        }
    }

    // ========================================================================
    // Trail
    // ========================================================================

    /// Spawn a particle at the pointer unless the throttle window is still open.
    pub fn spawn_trail_particle(&mut self, now: Millis) -> Option<ParticleId> {
        if !self.trail_throttle.try_acquire(now) {
            return None;
        }
        let particle = self.trail.spawn(self.pointer);
        self.surface.add_particle(particle);
        Some(particle.id)
    }

    // ========================================================================
    // Interactive elements
    // ========================================================================

    pub fn element_entered(&mut self, kind: ElementKind) {
        self.hover = HoverState::from(kind);
        self.apply_classes();
    }

    /// Leaving clears hover and press state together.
    pub fn element_left(&mut self) {
        self.hover = HoverState::None;
        self.pressed = false;
        self.apply_classes();
    }

    pub fn element_pressed(&mut self) {
        self.pressed = true;
        self.apply_classes();
    }

    pub fn element_released(&mut self) {
        self.pressed = false;
        self.apply_classes();
    }

    fn apply_classes(&mut self) {
        let classes = outline_classes(self.hover, self.pressed);
        self.surface.set_outline_classes(&classes);
    }

    // ========================================================================
    // Scroll / load transforms
    // ========================================================================

    /// Shrink the outline; it is restored once scrolling has settled.
    pub fn scrolled(&mut self, now: Millis) {
        self.set_scale(self.config.scroll_scale);
        self.scroll_settle.trigger(now);
    }

    /// Entrance animation: grow the outline, restore after a fixed delay.
    pub fn page_loaded(&mut self, now: Millis) {
        log::debug!("[CursorFx] Entrance animation started");
        self.set_scale(self.config.entrance_scale);
        self.entrance.start(now);
    }

    /// Fire every restore whose deadline has passed.
    pub fn poll_timers(&mut self, now: Millis) {
        if self.scroll_settle.poll(now) {
            self.set_scale(REST_SCALE);
        }
        if self.entrance.poll(now) {
            self.set_scale(REST_SCALE);
        }
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        earliest(self.scroll_settle.deadline(), self.entrance.deadline())
    }

    /// Time from `now` until the next deadline, never negative.
    pub fn next_delay(&self, now: Millis) -> Option<Millis> {
        self.next_deadline().map(|deadline| (deadline - now).max(0.0))
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.surface.set_outline_scale(scale);
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    pub fn pointer_left_viewport(&mut self) {
        self.visible = false;
        self.surface.set_visible(false);
    }

    pub fn pointer_entered_viewport(&mut self) {
        self.visible = true;
        self.surface.set_visible(true);
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Remove every particle, disarm all timers and put the cursor elements
    /// back in their resting state.
    ///
    /// Cancelled restores are applied here, so the outline never stays
    /// shrunk, grown, hidden or hover-styled after teardown.
    pub fn teardown(&mut self) {
        let removed = self.trail.clear();
        for id in &removed {
            self.surface.remove_particle(*id);
        }
        self.trail_throttle.reset();
        self.scroll_settle.cancel();
        self.entrance.cancel();

        self.set_scale(REST_SCALE);
        self.hover = HoverState::None;
        self.pressed = false;
        self.apply_classes();
        self.pointer_entered_viewport();

        log::debug!(
            "[CursorFx] Controller torn down after {} frames ({} particles removed)",
            self.frames,
            removed.len()
        );
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn pointer(&self) -> XY {
        self.pointer
    }

    pub fn outline_position(&self) -> XY {
        self.outline.position()
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn particle_count(&self) -> usize {
        self.trail.len()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
