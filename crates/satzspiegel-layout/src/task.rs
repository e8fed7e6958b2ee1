// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Task facade binding a page to the next pipeline stage. Both task kinds
// hold a shared reference to the live parameter store, not a snapshot:
// store edits made after task construction are visible at execution time.

use std::sync::Arc;

use tracing::debug;

use satzspiegel_core::{PageId, Size};

use crate::params::Params;
use crate::store::ParamStore;

/// The next stage's forward-processing task. Receives the page's current
/// layout parameters when this stage finishes with the page.
pub trait NextTask: Send + Sync {
    fn process(&self, page_id: &PageId, params: &Params);
}

/// The next stage's cache-consistency-check task. Receives the content size
/// this stage has on record, if any.
pub trait NextCacheDrivenTask: Send + Sync {
    fn process(&self, page_id: &PageId, content_size_mm: Option<Size>);
}

/// Forward-processing unit for one page.
pub struct Task {
    store: Arc<ParamStore>,
    page_id: PageId,
    next: Option<Arc<dyn NextTask>>,
    batch: bool,
}

impl Task {
    pub fn new(
        store: Arc<ParamStore>,
        page_id: PageId,
        next: Option<Arc<dyn NextTask>>,
        batch: bool,
    ) -> Self {
        Self {
            store,
            page_id,
            next,
            batch,
        }
    }

    /// True when this task runs as part of a batch pass rather than an
    /// interactive page selection.
    pub fn is_batch(&self) -> bool {
        self.batch
    }

    /// Read the page's parameters from the live store and hand them to the
    /// next stage. Pages never seeded process with the fallback record.
    pub fn process(&self) -> Params {
        let params = self.store.get_params(&self.page_id).unwrap_or_default();
        debug!(page = %self.page_id, batch = self.batch, "page-layout task processed");
        if let Some(next) = &self.next {
            next.process(&self.page_id, &params);
        }
        params
    }
}

/// Cache-validity-check unit: decides whether previously produced output
/// for a page is still usable without rerunning the stage.
pub struct CacheDrivenTask {
    store: Arc<ParamStore>,
    next: Option<Arc<dyn NextCacheDrivenTask>>,
}

impl CacheDrivenTask {
    pub fn new(store: Arc<ParamStore>, next: Option<Arc<dyn NextCacheDrivenTask>>) -> Self {
        Self { store, next }
    }

    /// True when the page's cached output is still valid, i.e. its content
    /// size is on record. Valid pages are forwarded to the next stage's
    /// check.
    pub fn process(&self, page_id: &PageId) -> bool {
        let content_size = self
            .store
            .get_params(page_id)
            .and_then(|p| p.content_size_mm);
        match content_size {
            Some(size) => {
                if let Some(next) = &self.next {
                    next.process(page_id, Some(size));
                }
                true
            }
            None => false,
        }
    }
}
