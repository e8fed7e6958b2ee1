// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Persistence codec: maps the parameter store to and from its element-tree
// form inside a project document. Loading is deliberately forgiving — any
// single malformed or unresolvable page entry is skipped so a partially
// corrupt or version-skewed project file still loads everything else.

use std::path::Path;

use tracing::{debug, instrument, warn};

use satzspiegel_core::{PageId, Result};

use crate::guide::Guide;
use crate::params::Params;
use crate::store::ParamStore;
use crate::tree::Element;

/// Tag of the stage's container element in a project document.
pub const STAGE_TAG: &str = "page-layout";

/// Serialize the store into its container element.
///
/// `enum_pages` is the project writer's stable (page key, numeric id)
/// enumeration; only pages that actually have a record produce a `page`
/// child. An empty guide list writes no `guides` child at all.
#[instrument(skip_all, fields(pages = enum_pages.len()))]
pub fn save_stage(store: &ParamStore, enum_pages: &[(PageId, i32)]) -> Element {
    let mut stage_el = Element::new(STAGE_TAG);
    stage_el.set_attribute(
        "showMiddleRect",
        if store.show_middle_rect() { "1" } else { "0" },
    );

    let guides = store.guides();
    if !guides.is_empty() {
        let mut guides_el = Element::new("guides");
        for guide in &guides {
            guides_el.append_child(guide.to_element("guide"));
        }
        stage_el.append_child(guides_el);
    }

    let mut written = 0usize;
    for (page_id, numeric_id) in enum_pages {
        let Some(params) = store.get_params(page_id) else {
            continue;
        };
        let mut page_el = Element::new("page");
        page_el.set_attribute("id", numeric_id.to_string());
        page_el.append_child(params.to_element("params"));
        stage_el.append_child(page_el);
        written += 1;
    }

    debug!(written, guides = guides.len(), "stage state serialized");
    stage_el
}

/// Replace the store's state with what the container element holds.
///
/// The store is cleared first, so loading never merges with pre-existing
/// in-memory state. `resolve` maps a persisted numeric page id back to a
/// live page key; entries that fail to resolve or to parse are skipped
/// without aborting the rest of the load.
#[instrument(skip_all)]
pub fn load_stage(
    store: &ParamStore,
    stage_el: &Element,
    resolve: impl Fn(i32) -> Option<PageId>,
) {
    store.clear();

    store.enable_show_middle_rect(stage_el.attribute("showMiddleRect") == Some("1"));

    if let Some(guides_el) = stage_el.find_child("guides") {
        for child in guides_el.children() {
            if child.name != "guide" {
                continue;
            }
            match Guide::from_element(child) {
                Some(guide) => store.add_guide(guide),
                None => warn!("skipping malformed guide entry"),
            }
        }
    }

    let mut loaded = 0usize;
    for child in stage_el.children() {
        if child.name != "page" {
            continue;
        }
        let Some(numeric_id) = child.attribute_i32("id") else {
            warn!("skipping page entry with missing or unparseable id");
            continue;
        };
        let Some(page_id) = resolve(numeric_id) else {
            // The file may reference pages from a larger project state;
            // not an error.
            debug!(numeric_id, "skipping page entry with unresolvable id");
            continue;
        };
        let Some(params) = child.find_child("params").and_then(Params::from_element) else {
            warn!(numeric_id, "skipping page entry with missing or malformed params");
            continue;
        };
        store.set_params(page_id, params);
        loaded += 1;
    }

    debug!(loaded, "stage state loaded");
}

/// Write an element tree to disk as JSON.
pub fn write_project_tree(path: impl AsRef<Path>, tree: &Element) -> Result<()> {
    let json = serde_json::to_vec_pretty(tree)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read an element tree back from a JSON file.
pub fn read_project_tree(path: impl AsRef<Path>) -> Result<Element> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
