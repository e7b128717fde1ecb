//! Inline style values and class names shared with the page stylesheet.
//!
//! The stylesheet owns how these classes look; this crate only toggles
//! them and writes position/opacity/transform values.

/// Class on the outline over a button.
pub const CLASS_HOVER: &str = "cursor-hover";
/// Class on the outline while an interactive element is pressed.
pub const CLASS_CLICK: &str = "cursor-click";
/// Class on the outline over a text-entry control.
pub const CLASS_TEXT: &str = "cursor-text";
/// Class on the outline over an anchor.
pub const CLASS_LINK: &str = "cursor-link";
/// Class of every trail particle element.
pub const CLASS_TRAIL: &str = "cursor-trail";

/// Format a length in CSS pixels.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Outline transform keeping the ring centered on its position.
pub fn outline_transform(scale: f64) -> String {
    format!("translate(-50%, -50%) scale({})", scale)
}

/// Background of a trail particle in the given color.
pub fn trail_background(color: &str) -> String {
    format!("radial-gradient(circle, {}, transparent)", color)
}

/// Format an opacity value.
pub fn opacity(value: f64) -> String {
    format!("{}", value)
}
