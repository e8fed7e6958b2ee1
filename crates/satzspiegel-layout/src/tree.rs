// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Minimal attributed document tree used as the persistence interchange
// format: named elements with string attributes and ordered children.
// Backend-agnostic — a project writer may render it as XML, JSON, or
// anything else that preserves names, attributes, and child order.

use serde::{Deserialize, Serialize};

/// One node of the attributed tree.
///
/// Attributes keep insertion order; setting an existing attribute replaces
/// its value in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set (or replace) an attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Parse an attribute as an `f64`, `None` if absent or unparseable.
    pub fn attribute_f64(&self, name: &str) -> Option<f64> {
        self.attribute(name)?.parse().ok()
    }

    /// Parse an attribute as an `i32`, `None` if absent or unparseable.
    pub fn attribute_i32(&self, name: &str) -> Option<i32> {
        self.attribute(name)?.parse().ok()
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Iterate the element's children in document order.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// First child with the given name, if any.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }
}
