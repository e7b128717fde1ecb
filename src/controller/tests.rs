//! Behavioral tests for the pointer effect controller.
//!
//! Tests are organized by concern:
//! - Dot and outline tracking
//! - Particle trail
//! - Hover and press classes
//! - Scroll and load transforms
//! - Viewport visibility and teardown

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::PointerEffectController;
use crate::config::{EffectConfig, DEFAULT_PALETTE};
use crate::geometry::XY;
use crate::hover::{ElementKind, HoverState, OutlineClass};
use crate::surface::CursorSurface;
use crate::trail::{ParticleId, TrailParticle};

#[derive(Debug, Clone, PartialEq)]
struct ParticleView {
    position: XY,
    color: String,
    opacity: f64,
    size: f64,
}

/// Surface that records the latest state of every visual element.
#[derive(Debug, Default)]
struct RecordingSurface {
    dot: Option<XY>,
    outline: Option<XY>,
    classes: Vec<OutlineClass>,
    scales: Vec<f64>,
    visible: Option<bool>,
    particles: HashMap<ParticleId, ParticleView>,
    removed: Vec<ParticleId>,
}

impl RecordingSurface {
    fn scale(&self) -> Option<f64> {
        self.scales.last().copied()
    }
}

impl CursorSurface for RecordingSurface {
    fn place_dot(&mut self, position: XY) {
        self.dot = Some(position);
    }

    fn place_outline(&mut self, position: XY) {
        self.outline = Some(position);
    }

    fn set_outline_classes(&mut self, active: &[OutlineClass]) {
        self.classes = active.to_vec();
    }

    fn set_outline_scale(&mut self, scale: f64) {
        self.scales.push(scale);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn add_particle(&mut self, particle: &TrailParticle) {
        self.particles.insert(
            particle.id,
            ParticleView {
                position: particle.position,
                color: particle.color.clone(),
                opacity: particle.opacity,
                size: particle.size,
            },
        );
    }

    fn update_particle(&mut self, id: ParticleId, opacity: f64, size: f64) {
        if let Some(view) = self.particles.get_mut(&id) {
            view.opacity = opacity;
            view.size = size;
        }
    }

    fn remove_particle(&mut self, id: ParticleId) {
        self.particles.remove(&id);
        self.removed.push(id);
    }
}

fn controller() -> PointerEffectController<RecordingSurface> {
    PointerEffectController::with_rng(
        EffectConfig::default(),
        RecordingSurface::default(),
        StdRng::seed_from_u64(42),
    )
}

fn controller_without_trail() -> PointerEffectController<RecordingSurface> {
    let mut config = EffectConfig::default();
    config.trail.enabled = false;
    PointerEffectController::with_rng(config, RecordingSurface::default(), StdRng::seed_from_u64(42))
}

// ============================================================================
// Tracking
// ============================================================================

mod tracking_tests {
    use super::*;

    #[test]
    fn dot_lands_exactly_on_pointer() {
        let mut fx = controller_without_trail();
        for &(x, y) in &[(0.0, 0.0), (13.25, 700.5), (-4.0, 1e4), (1919.0, 1079.0)] {
            fx.pointer_moved(x, y, 0.0);
            fx.render_frame();
            assert_eq!(fx.surface().dot, Some(XY::new(x, y)));
        }
    }

    #[test]
    fn outline_moves_ten_percent_per_frame() {
        let mut fx = controller_without_trail();
        fx.pointer_moved(200.0, 100.0, 0.0);
        fx.render_frame();

        let outline = fx.surface().outline.unwrap();
        assert!((outline.x - 20.0).abs() < 1e-9);
        assert!((outline.y - 10.0).abs() < 1e-9);
        assert_eq!(outline, fx.outline_position());
    }

    #[test]
    fn outline_converges_monotonically() {
        let mut fx = controller_without_trail();
        let target = XY::new(500.0, 300.0);
        fx.pointer_moved(target.x, target.y, 0.0);

        let initial_gap = XY::default().distance(target);
        for n in 1..=50 {
            fx.render_frame();
            let gap = fx.outline_position().distance(target);
            assert!(gap <= initial_gap * 0.9f64.powi(n) + 1e-9);
            assert!(gap > 0.0);
        }
        assert_eq!(fx.frames(), 50);
    }

    #[test]
    fn pointer_updates_without_frame() {
        let mut fx = controller_without_trail();
        fx.pointer_moved(5.0, 6.0, 0.0);
        assert_eq!(fx.pointer(), XY::new(5.0, 6.0));
        assert_eq!(fx.surface().dot, None);
    }
}

// ============================================================================
// Trail
// ============================================================================

mod trail_tests {
    use super::*;

    #[test]
    fn particle_spawns_at_pointer_with_initial_style() {
        let mut fx = controller();
        fx.pointer_moved(40.0, 50.0, 0.0);

        assert_eq!(fx.particle_count(), 1);
        let view = &fx.surface().particles[&0];
        assert_eq!(view.position, XY::new(40.0, 50.0));
        assert_eq!(view.opacity, 0.6);
        assert_eq!(view.size, 6.0);
        assert!(DEFAULT_PALETTE.contains(&view.color.as_str()));
    }

    #[test]
    fn spawns_at_most_one_per_window() {
        let mut fx = controller();
        // Moves every 2ms for 64ms
        for i in 0..32 {
            fx.pointer_moved(i as f64, 0.0, i as f64 * 2.0);
        }
        // Admitted at 0, 16, 32, 48
        assert_eq!(fx.particle_count(), 4);
        let mut xs: Vec<f64> = fx.surface().particles.values().map(|p| p.position.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, vec![0.0, 8.0, 16.0, 24.0]);
    }

    #[test]
    fn particle_removed_after_thirty_frames() {
        let mut fx = controller();
        fx.pointer_moved(1.0, 1.0, 0.0);

        for frame in 1..=29 {
            fx.render_frame();
            let view = &fx.surface().particles[&0];
            assert!((view.opacity - (0.6 - 0.02 * frame as f64)).abs() < 1e-9);
            assert!((view.size - (6.0 + 0.5 * frame as f64)).abs() < 1e-9);
        }
        assert!(fx.surface().removed.is_empty());

        fx.render_frame();
        assert_eq!(fx.surface().removed, vec![0]);
        assert_eq!(fx.particle_count(), 0);
    }

    #[test]
    fn disabled_trail_spawns_nothing() {
        let mut fx = controller_without_trail();
        for i in 0..10 {
            fx.pointer_moved(0.0, 0.0, i as f64 * 50.0);
        }
        assert_eq!(fx.particle_count(), 0);
        assert!(fx.surface().particles.is_empty());
    }
}

// ============================================================================
// Hover / press
// ============================================================================

mod hover_tests {
    use super::*;

    #[test]
    fn anchor_sets_only_link() {
        let mut fx = controller();
        fx.element_entered(ElementKind::from_tag_name("A"));
        assert_eq!(fx.surface().classes, vec![OutlineClass::Link]);
        assert_eq!(fx.hover_state(), HoverState::Link);
    }

    #[test]
    fn button_and_text_entry() {
        let mut fx = controller();
        fx.element_entered(ElementKind::Button);
        assert_eq!(fx.surface().classes, vec![OutlineClass::Hover]);

        fx.element_left();
        fx.element_entered(ElementKind::TextEntry);
        assert_eq!(fx.surface().classes, vec![OutlineClass::Text]);
    }

    #[test]
    fn marker_element_gets_no_hover_class() {
        let mut fx = controller();
        fx.element_entered(ElementKind::from_tag_name("DIV"));
        assert!(fx.surface().classes.is_empty());

        fx.element_pressed();
        assert_eq!(fx.surface().classes, vec![OutlineClass::Click]);
    }

    #[test]
    fn press_and_release() {
        let mut fx = controller();
        fx.element_entered(ElementKind::Button);
        fx.element_pressed();
        assert_eq!(
            fx.surface().classes,
            vec![OutlineClass::Hover, OutlineClass::Click]
        );
        assert!(fx.is_pressed());

        fx.element_released();
        assert_eq!(fx.surface().classes, vec![OutlineClass::Hover]);
    }

    #[test]
    fn leave_clears_everything() {
        let mut fx = controller();
        fx.element_entered(ElementKind::Anchor);
        fx.element_pressed();
        fx.element_left();

        assert!(fx.surface().classes.is_empty());
        assert_eq!(fx.hover_state(), HoverState::None);
        assert!(!fx.is_pressed());
    }
}

// ============================================================================
// Scroll / load
// ============================================================================

mod transform_tests {
    use super::*;

    #[test]
    fn scroll_shrinks_then_restores() {
        let mut fx = controller();
        fx.scrolled(1_000.0);
        assert_eq!(fx.surface().scale(), Some(0.8));
        assert_eq!(fx.next_deadline(), Some(1_100.0));

        fx.poll_timers(1_099.0);
        assert_eq!(fx.scale(), 0.8);

        fx.poll_timers(1_100.0);
        assert_eq!(fx.scale(), 1.0);
        assert_eq!(fx.surface().scale(), Some(1.0));
        assert_eq!(fx.next_deadline(), None);
    }

    #[test]
    fn second_scroll_restarts_settle_timer() {
        let mut fx = controller();
        fx.scrolled(0.0);
        fx.scrolled(70.0);

        fx.poll_timers(100.0);
        assert_eq!(fx.scale(), 0.8);

        fx.poll_timers(169.0);
        assert_eq!(fx.scale(), 0.8);

        fx.poll_timers(170.0);
        assert_eq!(fx.scale(), 1.0);
        assert_eq!(fx.surface().scales, vec![0.8, 0.8, 1.0]);
    }

    #[test]
    fn load_grows_then_restores_after_500ms() {
        let mut fx = controller();
        fx.page_loaded(250.0);
        assert_eq!(fx.surface().scale(), Some(1.5));

        fx.poll_timers(749.0);
        assert_eq!(fx.scale(), 1.5);

        fx.poll_timers(750.0);
        assert_eq!(fx.scale(), 1.0);

        fx.poll_timers(2_000.0);
        assert_eq!(fx.surface().scales, vec![1.5, 1.0]);
    }

    #[test]
    fn next_deadline_is_earliest() {
        let mut fx = controller();
        fx.page_loaded(0.0);
        fx.scrolled(10.0);
        assert_eq!(fx.next_deadline(), Some(110.0));
    }

    #[test]
    fn next_delay_counts_down_and_clamps() {
        let mut fx = controller();
        assert_eq!(fx.next_delay(0.0), None);

        fx.scrolled(1_000.0);
        assert_eq!(fx.next_delay(1_000.0), Some(100.0));
        assert_eq!(fx.next_delay(1_060.0), Some(40.0));
        // A late timer callback gets a zero delay, never a negative one
        assert_eq!(fx.next_delay(1_250.0), Some(0.0));

        fx.poll_timers(1_250.0);
        assert_eq!(fx.next_delay(1_250.0), None);
    }
}

// ============================================================================
// Viewport / lifecycle
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn viewport_leave_and_enter() {
        let mut fx = controller();
        assert!(fx.is_visible());

        fx.pointer_left_viewport();
        assert_eq!(fx.surface().visible, Some(false));
        assert!(!fx.is_visible());

        fx.pointer_entered_viewport();
        assert_eq!(fx.surface().visible, Some(true));
        assert!(fx.is_visible());
    }

    #[test]
    fn teardown_removes_particles_and_timers() {
        let mut fx = controller();
        fx.pointer_moved(0.0, 0.0, 0.0);
        fx.pointer_moved(0.0, 0.0, 20.0);
        fx.scrolled(20.0);
        fx.page_loaded(20.0);

        fx.teardown();

        assert_eq!(fx.particle_count(), 0);
        assert!(fx.surface().particles.is_empty());
        assert_eq!(fx.surface().removed.len(), 2);
        assert_eq!(fx.next_deadline(), None);
    }

    #[test]
    fn teardown_restores_resting_look() {
        let mut fx = controller();
        fx.element_entered(ElementKind::Button);
        fx.element_pressed();
        fx.pointer_left_viewport();
        fx.scrolled(0.0);

        fx.teardown();
        fx.poll_timers(10_000.0);

        assert_eq!(fx.surface().scale(), Some(1.0));
        assert!(fx.surface().classes.is_empty());
        assert_eq!(fx.surface().visible, Some(true));
        assert_eq!(fx.hover_state(), HoverState::None);
        assert!(!fx.is_pressed());
        assert!(fx.is_visible());
        assert_eq!(fx.next_deadline(), None);
    }

    #[test]
    fn teardown_during_entrance_restores_scale() {
        let mut fx = controller();
        fx.page_loaded(0.0);
        assert_eq!(fx.scale(), 1.5);

        fx.teardown();
        assert_eq!(fx.scale(), 1.0);
        assert_eq!(fx.surface().scales, vec![1.5, 1.0]);
    }

    #[test]
    fn config_is_validated_on_construction() {
        let config = EffectConfig {
            smoothing_factor: 5.0,
            ..Default::default()
        };
        let fx = PointerEffectController::with_rng(
            config,
            RecordingSurface::default(),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(fx.config().smoothing_factor, 1.0);
    }
}
