// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The page-layout stage object: owns the parameter store, the fixed list of
// page-ordering options, and the currently selected ordering; wires
// relinking, persistence, default seeding, and task creation for the
// surrounding pipeline.

use std::sync::Arc;

use tracing::{debug, instrument};

use satzspiegel_core::{Dpi, LayoutDefaults, PageId, Size};

use crate::codec::{self, STAGE_TAG};
use crate::defaults::seed_page_defaults;
use crate::order::{DeviationProvider, OrderProvider, PageOrderOption};
use crate::relink::Relinker;
use crate::store::ParamStore;
use crate::task::{CacheDrivenTask, NextCacheDrivenTask, NextTask, Task};
use crate::tree::Element;

/// One stage of the scanned-document pipeline: margins and page layout.
///
/// Created per project; the store lives exactly as long as the stage. The
/// ordering-option list is fixed at construction — only the selected index
/// changes afterwards.
pub struct PageLayoutStage {
    store: Arc<ParamStore>,
    defaults: LayoutDefaults,
    page_order_options: Vec<PageOrderOption>,
    selected_page_order: usize,
}

impl PageLayoutStage {
    pub fn new(defaults: LayoutDefaults, deviation_provider: Arc<dyn DeviationProvider>) -> Self {
        let store = Arc::new(ParamStore::new());
        let page_order_options = vec![
            PageOrderOption::new("Natural order", None),
            PageOrderOption::new(
                "Order by increasing width",
                Some(OrderProvider::ByWidth(Arc::clone(&store))),
            ),
            PageOrderOption::new(
                "Order by increasing height",
                Some(OrderProvider::ByHeight(Arc::clone(&store))),
            ),
            PageOrderOption::new(
                "Order by decreasing deviation",
                Some(OrderProvider::ByDeviation(deviation_provider)),
            ),
        ];
        Self {
            store,
            defaults,
            page_order_options,
            selected_page_order: 0,
        }
    }

    /// Display name of this stage.
    pub fn name(&self) -> &'static str {
        "Margins"
    }

    /// The shared parameter store. Tasks and UI hold clones of this `Arc`.
    pub fn store(&self) -> &Arc<ParamStore> {
        &self.store
    }

    pub fn defaults(&self) -> &LayoutDefaults {
        &self.defaults
    }

    // -- Page ordering --------------------------------------------------------

    /// The fixed list of selectable orderings, natural order first.
    pub fn page_order_options(&self) -> &[PageOrderOption] {
        &self.page_order_options
    }

    pub fn selected_page_order(&self) -> usize {
        self.selected_page_order
    }

    pub fn select_page_order(&mut self, option: usize) {
        assert!(option < self.page_order_options.len());
        self.selected_page_order = option;
    }

    // -- Pipeline events ------------------------------------------------------

    /// Called when the user switches to this stage: drop records for pages
    /// no longer in the project.
    pub fn stage_selected(&self, pages: &[PageId]) {
        self.store.remove_pages_missing_from(pages);
    }

    /// Seed defaults for a newly selected page; no-op if the page already
    /// has a record.
    pub fn load_default_settings(&self, page_id: PageId, dpi: Dpi) {
        seed_page_defaults(&self.store, page_id, dpi, &self.defaults);
    }

    /// Record the physical size of a freshly detected content box.
    pub fn set_content_box(&self, page_id: PageId, content_size_mm: Size) {
        self.store.set_content_size_mm(page_id, content_size_mm);
    }

    /// Discard a page's content-detection result.
    pub fn invalidate_content_box(&self, page_id: &PageId) {
        self.store.invalidate_content_size(page_id);
    }

    /// Gate for the pipeline's "ready for output" check.
    pub fn check_ready_for_output(&self, pages: &[PageId], ignore: Option<&PageId>) -> bool {
        self.store.check_everything_defined(pages, ignore)
    }

    /// Re-key all stored records after a project restructuring.
    pub fn perform_relinking(&self, relinker: &dyn Relinker) {
        self.store.perform_relinking(relinker);
    }

    // -- Persistence ----------------------------------------------------------

    /// Serialize this stage's state for the project writer.
    pub fn save_settings(&self, enum_pages: &[(PageId, i32)]) -> Element {
        codec::save_stage(&self.store, enum_pages)
    }

    /// Restore this stage's state from the project document's filters
    /// element. The store is fully replaced, never merged; a document
    /// without the stage container loads as empty state, and per-entry
    /// anomalies are skipped.
    #[instrument(skip_all)]
    pub fn load_settings(&self, filters_el: &Element, resolve: impl Fn(i32) -> Option<PageId>) {
        match filters_el.find_child(STAGE_TAG) {
            Some(stage_el) => codec::load_stage(&self.store, stage_el, resolve),
            None => {
                debug!("project document has no stage container, loading empty state");
                self.store.clear();
            }
        }
    }

    // -- Task creation --------------------------------------------------------

    /// Forward-processing task for one page, bound to the live store.
    pub fn create_task(
        &self,
        page_id: PageId,
        next: Option<Arc<dyn NextTask>>,
        batch: bool,
    ) -> Task {
        Task::new(Arc::clone(&self.store), page_id, next, batch)
    }

    /// Cache-consistency-check task, bound to the live store.
    pub fn create_cache_driven_task(
        &self,
        next: Option<Arc<dyn NextCacheDrivenTask>>,
    ) -> CacheDrivenTask {
        CacheDrivenTask::new(Arc::clone(&self.store), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::sort_pages;
    use satzspiegel_core::Margins;
    use std::collections::HashMap;

    struct NoDeviations;

    impl DeviationProvider for NoDeviations {
        fn deviation(&self, _page_id: &PageId) -> Option<f64> {
            None
        }
    }

    fn stage() -> PageLayoutStage {
        PageLayoutStage::new(LayoutDefaults::default(), Arc::new(NoDeviations))
    }

    #[test]
    fn order_options_are_fixed_with_natural_first() {
        let stage = stage();
        let labels: Vec<&str> = stage
            .page_order_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Natural order",
                "Order by increasing width",
                "Order by increasing height",
                "Order by decreasing deviation",
            ]
        );
        assert!(stage.page_order_options()[0].provider.is_none());
        assert_eq!(stage.selected_page_order(), 0);
    }

    #[test]
    fn selecting_an_order_updates_the_index() {
        let mut stage = stage();
        stage.select_page_order(2);
        assert_eq!(stage.selected_page_order(), 2);
    }

    #[test]
    #[should_panic]
    fn selecting_an_out_of_range_order_panics() {
        let mut stage = stage();
        stage.select_page_order(4);
    }

    #[test]
    fn width_option_orders_through_the_stage_store() {
        let stage = stage();
        let narrow = PageId::new();
        let wide = PageId::new();
        stage.set_content_box(narrow, Size::new(100.0, 200.0));
        stage.set_content_box(wide, Size::new(300.0, 200.0));

        let mut pages = vec![wide, narrow];
        sort_pages(&mut pages, &stage.page_order_options()[1]);
        assert_eq!(pages, vec![narrow, wide]);
    }

    #[test]
    fn stage_selected_prunes_departed_pages() {
        let stage = stage();
        let kept = PageId::new();
        let departed = PageId::new();
        stage.load_default_settings(kept, Dpi::square(300));
        stage.load_default_settings(departed, Dpi::square(300));

        stage.stage_selected(&[kept]);
        assert!(!stage.store().is_params_null(&kept));
        assert!(stage.store().is_params_null(&departed));
    }

    #[test]
    fn settings_round_trip_through_a_filters_element() {
        let stage = stage();
        let page = PageId::new();
        stage.load_default_settings(page, Dpi::square(300));

        let mut filters_el = Element::new("filters");
        filters_el.append_child(stage.save_settings(&[(page, 4)]));

        let restored = self::stage();
        let ids: HashMap<i32, PageId> = HashMap::from([(4, page)]);
        restored.load_settings(&filters_el, |id| ids.get(&id).copied());

        assert_eq!(
            restored.store().get_hard_margins_mm(&page),
            Some(Margins::uniform(10.0))
        );
    }

    #[test]
    fn loading_without_the_stage_container_replaces_state() {
        let stage = stage();
        let stale = PageId::new();
        stage.load_default_settings(stale, Dpi::square(300));
        stage.store().enable_show_middle_rect(true);

        // A document from before this stage existed simply has no
        // container; loading it must still yield a fully empty stage.
        stage.load_settings(&Element::new("filters"), |_| None);

        assert!(stage.store().is_params_null(&stale));
        assert!(stage.store().tracked_pages().is_empty());
        assert!(!stage.store().show_middle_rect());
        assert!(stage.store().guides().is_empty());
    }

    #[test]
    fn ready_for_output_flows_through_the_stage() {
        let stage = stage();
        let page = PageId::new();
        stage.load_default_settings(page, Dpi::square(300));
        assert!(!stage.check_ready_for_output(&[page], None));

        let mut params = stage.store().get_params(&page).expect("record");
        params.content_rect = Some(satzspiegel_core::Rect::new(0.0, 0.0, 100.0, 100.0));
        stage.store().set_params(page, params);
        assert!(stage.check_ready_for_output(&[page], None));

        stage.invalidate_content_box(&page);
        assert!(stage.check_ready_for_output(&[page], None));
    }
}
