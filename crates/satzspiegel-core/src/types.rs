// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Satzspiegel page-layout stage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a project page.
///
/// Stable across edits; remapped only by an explicit relinking pass. The
/// project reader/writer collaborators own the mapping between these keys
/// and the numeric ids used in persisted project files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageId(pub Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis-aligned rectangle in page-local coordinates.
///
/// An *absent* rectangle (content not yet detected, page rect not yet
/// computed) is expressed as `Option<Rect>` at use sites rather than a
/// sentinel empty value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Width/height pair, unit given by context (millimetres for content sizes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Four margin distances around a page, in millimetres once stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Uniform margins on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

/// Horizontal anchor for positioning page content within the output area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical anchor for positioning page content within the output area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Content alignment policy for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alignment {
    pub vertical: VAlign,
    pub horizontal: HAlign,
}

impl Alignment {
    pub fn new(vertical: VAlign, horizontal: HAlign) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

/// Physical resolution of a scanned page, dots per inch per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dpi {
    pub horizontal: u32,
    pub vertical: u32,
}

impl Dpi {
    pub fn new(horizontal: u32, vertical: u32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Square resolution, same dpi on both axes.
    pub fn square(dpi: u32) -> Self {
        Self::new(dpi, dpi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_are_unique() {
        let a = PageId::new();
        let b = PageId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_margins() {
        let m = Margins::uniform(12.5);
        assert_eq!(m, Margins::new(12.5, 12.5, 12.5, 12.5));
    }

    #[test]
    fn default_alignment_is_centered() {
        let a = Alignment::default();
        assert_eq!(a.vertical, VAlign::Center);
        assert_eq!(a.horizontal, HAlign::Center);
    }
}
