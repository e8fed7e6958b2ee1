// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Default-parameter seeding for pages the store has not seen yet.

use tracing::debug;

use satzspiegel_core::{Dpi, LayoutDefaults, PageId, Unit, UnitsConverter};

use crate::params::Params;
use crate::store::ParamStore;

/// Seed an initial record for a page that has none.
///
/// A no-op when the page already has a record, so calling this on every
/// page-selection event never overwrites user edits. The configured default
/// margins are converted to millimetres using the page's own resolution;
/// rects and content size start undefined.
pub fn seed_page_defaults(
    store: &ParamStore,
    page_id: PageId,
    dpi: Dpi,
    defaults: &LayoutDefaults,
) {
    if !store.is_params_null(&page_id) {
        return;
    }

    let converter = UnitsConverter::new(dpi);
    let mut margins = defaults.margins;
    (margins.left, margins.top) =
        converter.convert(margins.left, margins.top, defaults.units, Unit::Millimetres);
    (margins.right, margins.bottom) =
        converter.convert(margins.right, margins.bottom, defaults.units, Unit::Millimetres);

    debug!(page = %page_id, "seeding default layout parameters");
    store.set_params(
        page_id,
        Params::new(margins, None, None, None, defaults.alignment, defaults.auto_margins),
    );
}
