// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Project-wide guide lines shown over every page in the layout editor.

use serde::{Deserialize, Serialize};

use crate::tree::Element;

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuideOrientation {
    Horizontal,
    Vertical,
}

impl GuideOrientation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// A single guide line: orientation plus offset from the page center, in
/// millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub orientation: GuideOrientation,
    pub position: f64,
}

impl Guide {
    pub fn new(orientation: GuideOrientation, position: f64) -> Self {
        Self {
            orientation,
            position,
        }
    }

    /// Serialize to a self-describing element with the given tag name.
    pub fn to_element(&self, name: &str) -> Element {
        let mut el = Element::new(name);
        el.set_attribute("orientation", self.orientation.as_str());
        el.set_attribute("position", format!("{}", self.position));
        el
    }

    /// Read a guide back from its element form, `None` if malformed.
    pub fn from_element(el: &Element) -> Option<Self> {
        let orientation = GuideOrientation::parse(el.attribute("orientation")?)?;
        let position = el.attribute_f64("position")?;
        Some(Self {
            orientation,
            position,
        })
    }
}
