//! Render sink for the pointer effect.
//!
//! The controller never touches the DOM directly; it describes what the
//! cursor should look like through this trait. The browser binding
//! implements it over real elements, tests implement it with a recorder.

use crate::geometry::XY;
use crate::hover::OutlineClass;
use crate::trail::{ParticleId, TrailParticle};

/// Everything the controller needs to draw the cursor.
///
/// Implementations are fire-and-forget: a failed write is the surface's
/// concern (logged and dropped), never the controller's.
pub trait CursorSurface {
    /// Place the dot at an exact viewport position.
    fn place_dot(&mut self, position: XY);

    /// Place the outline at its eased viewport position.
    fn place_outline(&mut self, position: XY);

    /// Replace the outline's conditional classes with `active`.
    ///
    /// Classes in [`OutlineClass::ALL`] that are not in `active` must be removed.
    fn set_outline_classes(&mut self, active: &[OutlineClass]);

    /// Set the outline's transform scale.
    fn set_outline_scale(&mut self, scale: f64);

    /// Show or hide both the dot and the outline.
    fn set_visible(&mut self, visible: bool);

    /// Create the visual element of a freshly spawned particle.
    fn add_particle(&mut self, particle: &TrailParticle);

    /// Apply a particle's per-frame opacity and size.
    fn update_particle(&mut self, id: ParticleId, opacity: f64, size: f64);

    /// Detach a particle's element.
    fn remove_particle(&mut self, id: ParticleId);
}
