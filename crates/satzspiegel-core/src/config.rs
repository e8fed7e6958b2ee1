// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global layout defaults, applied when a page is first encountered.

use serde::{Deserialize, Serialize};

use crate::types::{Alignment, Margins};
use crate::units::Unit;

/// Default layout parameters for pages that have not been edited yet.
///
/// Passed to the layout stage at construction and read-only afterwards.
/// Margins are expressed in `units` and converted to millimetres per page
/// using that page's resolution when defaults are seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDefaults {
    /// Default hard margins, in `units`.
    pub margins: Margins,
    /// Unit the default margins are expressed in.
    pub units: Unit,
    /// Default content alignment.
    pub alignment: Alignment,
    /// Whether new pages start with automatically computed margins.
    pub auto_margins: bool,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            margins: Margins::uniform(10.0),
            units: Unit::Millimetres,
            alignment: Alignment::default(),
            auto_margins: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margins_are_metric() {
        let defaults = LayoutDefaults::default();
        assert_eq!(defaults.units, Unit::Millimetres);
        assert_eq!(defaults.margins, Margins::uniform(10.0));
        assert!(!defaults.auto_margins);
    }

    #[test]
    fn serde_round_trip() {
        let defaults = LayoutDefaults {
            margins: Margins::new(5.0, 5.0, 5.0, 15.0),
            units: Unit::Inches,
            alignment: Alignment::default(),
            auto_margins: true,
        };
        let json = serde_json::to_string(&defaults).expect("serialize");
        let back: LayoutDefaults = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, defaults);
    }
}
