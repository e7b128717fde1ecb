//! Hover and press state of the outline.
//!
//! Interactive elements are classified once by tag name. Entering one sets
//! a [`HoverState`]; leaving clears it together with the pressed flag. The
//! outline's class list is always derived from `(HoverState, pressed)` by
//! [`outline_classes`], so at most one hover class can be present.

use crate::style::{CLASS_CLICK, CLASS_HOVER, CLASS_LINK, CLASS_TEXT};

/// Kind of interactive element, derived from its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<a>`
    Anchor,
    /// `<button>`
    Button,
    /// `<input>`, `<textarea>`, `<select>`
    TextEntry,
    /// Matched by role or marker class only (e.g. a `div` with `role="button"`)
    Other,
}

impl ElementKind {
    /// Classify an element from its tag name (case-insensitive).
    pub fn from_tag_name(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "A" => ElementKind::Anchor,
            "BUTTON" => ElementKind::Button,
            "INPUT" | "TEXTAREA" | "SELECT" => ElementKind::TextEntry,
            _ => ElementKind::Other,
        }
    }
}

/// Which hover style the outline shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    None,
    Link,
    Hover,
    Text,
}

impl From<ElementKind> for HoverState {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Anchor => HoverState::Link,
            ElementKind::Button => HoverState::Hover,
            ElementKind::TextEntry => HoverState::Text,
            ElementKind::Other => HoverState::None,
        }
    }
}

/// Conditional classes the outline can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineClass {
    Hover,
    Click,
    Text,
    Link,
}

impl OutlineClass {
    /// Every conditional class, in the order they are stripped.
    pub const ALL: [OutlineClass; 4] = [
        OutlineClass::Hover,
        OutlineClass::Click,
        OutlineClass::Text,
        OutlineClass::Link,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            OutlineClass::Hover => CLASS_HOVER,
            OutlineClass::Click => CLASS_CLICK,
            OutlineClass::Text => CLASS_TEXT,
            OutlineClass::Link => CLASS_LINK,
        }
    }
}

/// Classes the outline should carry for the given state.
pub fn outline_classes(hover: HoverState, pressed: bool) -> Vec<OutlineClass> {
    let mut classes = Vec::with_capacity(2);
    match hover {
        HoverState::None => {},
        HoverState::Link => classes.push(OutlineClass::Link),
        HoverState::Hover => classes.push(OutlineClass::Hover),
        HoverState::Text => classes.push(OutlineClass::Text),
    }
    if pressed {
        classes.push(OutlineClass::Click);
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tags() {
        assert_eq!(ElementKind::from_tag_name("A"), ElementKind::Anchor);
        assert_eq!(ElementKind::from_tag_name("a"), ElementKind::Anchor);
        assert_eq!(ElementKind::from_tag_name("BUTTON"), ElementKind::Button);
        assert_eq!(ElementKind::from_tag_name("INPUT"), ElementKind::TextEntry);
        assert_eq!(ElementKind::from_tag_name("TEXTAREA"), ElementKind::TextEntry);
        assert_eq!(ElementKind::from_tag_name("SELECT"), ElementKind::TextEntry);
        assert_eq!(ElementKind::from_tag_name("DIV"), ElementKind::Other);
    }

    #[test]
    fn test_hover_state_from_kind() {
        assert_eq!(HoverState::from(ElementKind::Anchor), HoverState::Link);
        assert_eq!(HoverState::from(ElementKind::Button), HoverState::Hover);
        assert_eq!(HoverState::from(ElementKind::TextEntry), HoverState::Text);
        assert_eq!(HoverState::from(ElementKind::Other), HoverState::None);
    }

    #[test]
    fn test_outline_classes() {
        assert!(outline_classes(HoverState::None, false).is_empty());
        assert_eq!(
            outline_classes(HoverState::Link, false),
            vec![OutlineClass::Link]
        );
        assert_eq!(
            outline_classes(HoverState::Text, true),
            vec![OutlineClass::Text, OutlineClass::Click]
        );
        assert_eq!(
            outline_classes(HoverState::None, true),
            vec![OutlineClass::Click]
        );
    }

    #[test]
    fn test_class_names() {
        let names: Vec<_> = OutlineClass::ALL.iter().map(|c| c.class_name()).collect();
        assert_eq!(
            names,
            vec!["cursor-hover", "cursor-click", "cursor-text", "cursor-link"]
        );
    }
}
