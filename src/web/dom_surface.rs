//! [`CursorSurface`] over real DOM elements.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::EffectConfig;
use crate::error::{CursorFxError, CursorFxResult};
use crate::geometry::XY;
use crate::hover::OutlineClass;
use crate::style::{self, CLASS_TRAIL};
use crate::surface::CursorSurface;
use crate::trail::{ParticleId, TrailParticle};

/// The page's dot and outline elements plus one element per live particle.
pub struct DomSurface {
    document: Document,
    trail_parent: HtmlElement,
    dot: HtmlElement,
    outline: HtmlElement,
    particles: HashMap<ParticleId, HtmlElement>,
}

impl DomSurface {
    /// Look up the cursor elements. Both must exist.
    pub fn attach(document: &Document, config: &EffectConfig) -> CursorFxResult<Self> {
        let dot = find_element(document, &config.dot_selector)?;
        let outline = find_element(document, &config.outline_selector)?;
        let trail_parent = document
            .body()
            .ok_or_else(|| CursorFxError::ElementNotFound {
                selector: "body".to_string(),
            })?;

        Ok(Self {
            document: document.clone(),
            trail_parent,
            dot,
            outline,
            particles: HashMap::new(),
        })
    }

    fn create_particle_element(&self, particle: &TrailParticle) -> CursorFxResult<HtmlElement> {
        let element: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| CursorFxError::Dom("created element is not an HtmlElement".to_string()))?;

        element.set_class_name(CLASS_TRAIL);
        set_style(&element, "background", &style::trail_background(&particle.color));
        set_style(&element, "left", &style::px(particle.position.x));
        set_style(&element, "top", &style::px(particle.position.y));
        apply_particle_look(&element, particle.opacity, particle.size);

        self.trail_parent.append_child(&element)?;
        Ok(element)
    }
}

impl CursorSurface for DomSurface {
    fn place_dot(&mut self, position: XY) {
        place(&self.dot, position);
    }

    fn place_outline(&mut self, position: XY) {
        place(&self.outline, position);
    }

    fn set_outline_classes(&mut self, active: &[OutlineClass]) {
        let classes = self.outline.class_list();
        for class in OutlineClass::ALL {
            let result = if active.contains(&class) {
                classes.add_1(class.class_name())
            } else {
                classes.remove_1(class.class_name())
            };
            if let Err(e) = result {
                log::warn!("[CursorFx] Failed to toggle {}: {:?}", class.class_name(), e);
            }
        }
    }

    fn set_outline_scale(&mut self, scale: f64) {
        set_style(&self.outline, "transform", &style::outline_transform(scale));
    }

    fn set_visible(&mut self, visible: bool) {
        let opacity = style::opacity(if visible { 1.0 } else { 0.0 });
        set_style(&self.dot, "opacity", &opacity);
        set_style(&self.outline, "opacity", &opacity);
    }

    fn add_particle(&mut self, particle: &TrailParticle) {
        match self.create_particle_element(particle) {
            Ok(element) => {
                self.particles.insert(particle.id, element);
            },
            Err(e) => log::warn!("[CursorFx] Failed to create trail particle: {}", e),
        }
    }

    fn update_particle(&mut self, id: ParticleId, opacity: f64, size: f64) {
        if let Some(element) = self.particles.get(&id) {
            apply_particle_look(element, opacity, size);
        }
    }

    fn remove_particle(&mut self, id: ParticleId) {
        if let Some(element) = self.particles.remove(&id) {
            element.remove();
        }
    }
}

fn find_element(document: &Document, selector: &str) -> CursorFxResult<HtmlElement> {
    document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| CursorFxError::ElementNotFound {
            selector: selector.to_string(),
        })
}

fn place(element: &HtmlElement, position: XY) {
    set_style(element, "left", &style::px(position.x));
    set_style(element, "top", &style::px(position.y));
}

fn apply_particle_look(element: &HtmlElement, opacity: f64, size: f64) {
    let size = style::px(size);
    set_style(element, "opacity", &style::opacity(opacity));
    set_style(element, "width", &size);
    set_style(element, "height", &size);
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("[CursorFx] Failed to set {}: {:?}", property, e);
    }
}
