// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The per-page parameter store — system of record for layout parameters
// across the lifetime of a project. Shared as `Arc<ParamStore>` between the
// stage, outstanding tasks, and the persistence codec; an interior lock
// keeps the "one logical writer, any readers" discipline safe even when
// batch tasks run off the UI thread.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use tracing::debug;

use satzspiegel_core::{Alignment, Margins, PageId, Size};

use crate::guide::Guide;
use crate::params::Params;
use crate::relink::Relinker;

#[derive(Debug, Default)]
struct StoreState {
    records: BTreeMap<PageId, Params>,
    guides: Vec<Guide>,
    show_middle_rect: bool,
}

/// Owns the mapping from page key to layout parameters, plus the
/// project-wide guide list and middle-rect display toggle.
///
/// All lookups on missing keys yield `None`; all mutations are total. The
/// store hands out clones of its records — callers mutate their copy and
/// write it back with [`set_params`](Self::set_params).
#[derive(Debug, Default)]
pub struct ParamStore {
    state: RwLock<StoreState>,
}

impl ParamStore {
    /// Create an empty store: no records, no guides, toggle off.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Per-page records -----------------------------------------------------

    /// Copy of the page's record, `None` when the page was never seeded.
    pub fn get_params(&self, page_id: &PageId) -> Option<Params> {
        self.read().records.get(page_id).cloned()
    }

    /// Insert or overwrite the page's record unconditionally.
    pub fn set_params(&self, page_id: PageId, params: Params) {
        self.write().records.insert(page_id, params);
    }

    /// True iff no record exists for the page. Gates default seeding so
    /// seeding never overwrites user edits.
    pub fn is_params_null(&self, page_id: &PageId) -> bool {
        !self.read().records.contains_key(page_id)
    }

    /// The page's hard margins, `None` when the page has no record.
    pub fn get_hard_margins_mm(&self, page_id: &PageId) -> Option<Margins> {
        self.read().records.get(page_id).map(|p| p.hard_margins_mm)
    }

    /// The page's alignment policy, `None` when the page has no record.
    pub fn get_page_alignment(&self, page_id: &PageId) -> Option<Alignment> {
        self.read().records.get(page_id).map(|p| p.alignment)
    }

    /// Update only the content-size field. A page with no record gets one
    /// built from the stock layout defaults (`Params::default()`), not from
    /// any stage-configured defaults; the stage seeds configured defaults
    /// on page selection, before content detection can report a size. Other
    /// fields of an existing record are untouched.
    pub fn set_content_size_mm(&self, page_id: PageId, size: Size) {
        let mut state = self.write();
        state.records.entry(page_id).or_default().content_size_mm = Some(size);
    }

    /// Clear the content-size field back to undefined, signaling that
    /// content detection must re-run. Margins and alignment are preserved.
    pub fn invalidate_content_size(&self, page_id: &PageId) {
        let mut state = self.write();
        if let Some(params) = state.records.get_mut(page_id) {
            params.content_size_mm = None;
        }
    }

    /// Drop every record whose key is absent from the authoritative page
    /// sequence.
    pub fn remove_pages_missing_from(&self, pages: &[PageId]) {
        let keep: BTreeSet<&PageId> = pages.iter().collect();
        let mut state = self.write();
        let before = state.records.len();
        state.records.retain(|key, _| keep.contains(key));
        let dropped = before - state.records.len();
        if dropped > 0 {
            debug!(dropped, "pruned records for pages no longer in the project");
        }
    }

    /// True iff every page in the sequence (except `ignore`) is ready for
    /// output: auto-margin pages need a defined content size, fixed-margin
    /// pages a defined content rectangle. Failing pages are not reported
    /// individually — re-query per page when detail is needed.
    pub fn check_everything_defined(&self, pages: &[PageId], ignore: Option<&PageId>) -> bool {
        let state = self.read();
        pages
            .iter()
            .filter(|page_id| Some(*page_id) != ignore)
            .all(|page_id| match state.records.get(page_id) {
                Some(params) if params.auto_margins => params.content_size_mm.is_some(),
                Some(params) => params.content_rect.is_some(),
                None => false,
            })
    }

    /// Re-key every record through the relinker. Records mapping to `None`
    /// are dropped; collisions resolve last-write-wins in key order.
    pub fn perform_relinking(&self, relinker: &dyn Relinker) {
        let mut state = self.write();
        let old = std::mem::take(&mut state.records);
        let before = old.len();
        for (old_key, params) in old {
            match relinker.remap(&old_key) {
                Some(new_key) => {
                    state.records.insert(new_key, params);
                }
                None => {
                    debug!(page = %old_key, "record dropped during relinking");
                }
            }
        }
        debug!(before, after = state.records.len(), "relinking complete");
    }

    /// Empty the store: records and guides gone, toggle back to default.
    /// Called before loading persisted state so nothing stale survives.
    pub fn clear(&self) {
        let mut state = self.write();
        state.records.clear();
        state.guides.clear();
        state.show_middle_rect = false;
    }

    /// Keys of all stored records, in key order.
    pub fn tracked_pages(&self) -> Vec<PageId> {
        self.read().records.keys().copied().collect()
    }

    // -- Project-wide state ---------------------------------------------------

    /// Snapshot of the project-wide guide lines.
    pub fn guides(&self) -> Vec<Guide> {
        self.read().guides.clone()
    }

    /// Replace the guide list wholesale.
    pub fn set_guides(&self, guides: Vec<Guide>) {
        self.write().guides = guides;
    }

    pub fn add_guide(&self, guide: Guide) {
        self.write().guides.push(guide);
    }

    pub fn show_middle_rect(&self) -> bool {
        self.read().show_middle_rect
    }

    pub fn enable_show_middle_rect(&self, enabled: bool) {
        self.write().show_middle_rect = enabled;
    }

    // -- Lock plumbing --------------------------------------------------------

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreState> {
        // Lock poisoning would require a panic while holding the guard;
        // no operation here can panic mid-write, so propagate the inner
        // state regardless.
        match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreState> {
        match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
