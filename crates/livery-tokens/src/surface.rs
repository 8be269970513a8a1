//! Style surfaces: where applied tokens become CSS custom properties.
//!
//! The engine never talks to a document directly. It writes through a
//! [`StyleSurface`], which is either [`Headless`] (no document, writes are
//! skipped) or [`RootStyle`], an in-memory `:root` declaration block that can
//! be rendered as stylesheet text.

use std::collections::BTreeMap;

use crate::css;

/// A document root that accepts custom property writes.
pub trait StyleSurface {
    /// Whether a document exists to write to. The engine skips property
    /// writes entirely when this is false.
    fn is_available(&self) -> bool {
        true
    }

    /// Sets a custom property. `name` includes the `--` prefix.
    fn set_property(&mut self, name: &str, value: &str);

    /// Removes a custom property if present.
    fn remove_property(&mut self, name: &str);

    /// Reads back a custom property.
    fn property(&self, name: &str) -> Option<&str>;
}

/// No document attached. Every write is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headless;

impl StyleSurface for Headless {
    fn is_available(&self) -> bool {
        false
    }

    fn set_property(&mut self, _name: &str, _value: &str) {}

    fn remove_property(&mut self, _name: &str) {}

    fn property(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// An in-memory style declaration for the document root.
///
/// ```rust
/// use livery_tokens::{RootStyle, StyleSurface};
///
/// let mut root = RootStyle::new();
/// root.set_property("--color-primary", "#7c3aed");
/// assert_eq!(root.property("--color-primary"), Some("#7c3aed"));
/// assert_eq!(root.to_css(), ":root {\n  --color-primary: #7c3aed;\n}\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootStyle {
    properties: BTreeMap<String, String>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates `(property, value)` pairs in property-name order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the declarations as a `:root { ... }` block.
    pub fn to_css(&self) -> String {
        let body = self
            .properties()
            .map(|(name, value)| css::declaration(name, value))
            .collect::<Vec<_>>()
            .join("\n");
        css::wrap_root(&body)
    }
}

impl StyleSurface for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_is_unavailable_and_inert() {
        let mut surface = Headless;
        surface.set_property("--color-primary", "red");
        assert!(!surface.is_available());
        assert_eq!(surface.property("--color-primary"), None);
    }

    #[test]
    fn test_root_style_set_and_remove() {
        let mut root = RootStyle::new();
        root.set_property("--spacing-1", "0.25rem");
        root.set_property("--spacing-1", "0.5rem");
        assert_eq!(root.len(), 1);
        assert_eq!(root.property("--spacing-1"), Some("0.5rem"));

        root.remove_property("--spacing-1");
        assert!(root.is_empty());
        root.remove_property("--missing");
    }

    #[test]
    fn test_root_style_empty_css() {
        assert_eq!(RootStyle::new().to_css(), ":root {\n}\n");
    }
}
