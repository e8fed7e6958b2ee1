// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page-ordering strategies: natural order, increasing width, increasing
// height, and decreasing measured deviation. Each is a total preorder; the
// sort itself is stable, so tied pages keep their natural relative order.

use std::cmp::Ordering;
use std::sync::Arc;

use satzspiegel_core::PageId;

use crate::store::ParamStore;

/// Supplies the externally computed per-page outlier score used by the
/// deviation ordering. `None` means no score is known for the page.
pub trait DeviationProvider: Send + Sync {
    fn deviation(&self, page_id: &PageId) -> Option<f64>;
}

/// One of the measured ordering strategies.
///
/// Natural order is deliberately *not* a variant: it is represented as the
/// absence of a provider (see [`PageOrderOption`]), so "don't sort" never
/// costs a sort pass.
#[derive(Clone)]
pub enum OrderProvider {
    /// Increasing content width, in millimetres.
    ByWidth(Arc<ParamStore>),
    /// Increasing content height, in millimetres.
    ByHeight(Arc<ParamStore>),
    /// Decreasing deviation score, so the pages most needing review come
    /// first.
    ByDeviation(Arc<dyn DeviationProvider>),
}

impl OrderProvider {
    /// Compare two pages under this strategy. Read-only; safe to apply
    /// repeatedly.
    pub fn compare(&self, lhs: &PageId, rhs: &PageId) -> Ordering {
        match self {
            Self::ByWidth(store) => {
                measured_width(store, lhs).total_cmp(&measured_width(store, rhs))
            }
            Self::ByHeight(store) => {
                measured_height(store, lhs).total_cmp(&measured_height(store, rhs))
            }
            Self::ByDeviation(provider) => {
                let lhs_dev = provider.deviation(lhs).unwrap_or(0.0);
                let rhs_dev = provider.deviation(rhs).unwrap_or(0.0);
                // Descending: the worst outlier sorts first.
                rhs_dev.total_cmp(&lhs_dev)
            }
        }
    }
}

impl std::fmt::Debug for OrderProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByWidth(_) => f.write_str("OrderProvider::ByWidth"),
            Self::ByHeight(_) => f.write_str("OrderProvider::ByHeight"),
            Self::ByDeviation(_) => f.write_str("OrderProvider::ByDeviation"),
        }
    }
}

// Pages with no record or no detected size measure as zero and sort first.

fn measured_width(store: &ParamStore, page_id: &PageId) -> f64 {
    store
        .get_params(page_id)
        .and_then(|p| p.content_size_mm)
        .map_or(0.0, |size| size.width)
}

fn measured_height(store: &ParamStore, page_id: &PageId) -> f64 {
    store
        .get_params(page_id)
        .and_then(|p| p.content_size_mm)
        .map_or(0.0, |size| size.height)
}

/// A selectable ordering: display label plus strategy. `provider: None` is
/// the natural order.
#[derive(Debug, Clone)]
pub struct PageOrderOption {
    pub label: String,
    pub provider: Option<OrderProvider>,
}

impl PageOrderOption {
    pub fn new(label: impl Into<String>, provider: Option<OrderProvider>) -> Self {
        Self {
            label: label.into(),
            provider,
        }
    }
}

/// Sort a page sequence in place under the given option.
///
/// Natural order leaves the slice untouched. The underlying sort is stable:
/// pages comparing equal keep their pre-sort relative order.
pub fn sort_pages(pages: &mut [PageId], option: &PageOrderOption) {
    if let Some(provider) = &option.provider {
        pages.sort_by(|a, b| provider.compare(a, b));
    }
}
