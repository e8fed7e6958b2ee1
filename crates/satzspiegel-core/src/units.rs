// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Linear unit conversion between pixels and physical lengths, parameterized
// by a page's scan resolution. Millimetres are the canonical storage unit.

use serde::{Deserialize, Serialize};

use crate::types::Dpi;

const MM_PER_INCH: f64 = 25.4;
const MM_PER_CM: f64 = 10.0;

/// Measurement units understood by the layout stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Pixels,
    Millimetres,
    Centimetres,
    Inches,
}

/// Converts paired horizontal/vertical measurements between units.
///
/// Pixel conversions depend on the page's resolution, so a converter is
/// constructed per page. Conversion is pure and linear: the horizontal value
/// uses the horizontal dpi, the vertical value the vertical dpi.
#[derive(Debug, Clone, Copy)]
pub struct UnitsConverter {
    dpi: Dpi,
}

impl UnitsConverter {
    pub fn new(dpi: Dpi) -> Self {
        Self { dpi }
    }

    /// Convert a (horizontal, vertical) value pair from one unit to another.
    pub fn convert(&self, horizontal: f64, vertical: f64, from: Unit, to: Unit) -> (f64, f64) {
        if from == to {
            return (horizontal, vertical);
        }
        let h_mm = to_mm(horizontal, from, self.dpi.horizontal);
        let v_mm = to_mm(vertical, from, self.dpi.vertical);
        (from_mm(h_mm, to, self.dpi.horizontal), from_mm(v_mm, to, self.dpi.vertical))
    }
}

fn to_mm(value: f64, from: Unit, dpi: u32) -> f64 {
    match from {
        Unit::Pixels => value * MM_PER_INCH / f64::from(dpi),
        Unit::Millimetres => value,
        Unit::Centimetres => value * MM_PER_CM,
        Unit::Inches => value * MM_PER_INCH,
    }
}

fn from_mm(value: f64, to: Unit, dpi: u32) -> f64 {
    match to {
        Unit::Pixels => value * f64::from(dpi) / MM_PER_INCH,
        Unit::Millimetres => value,
        Unit::Centimetres => value / MM_PER_CM,
        Unit::Inches => value / MM_PER_INCH,
    }
}
