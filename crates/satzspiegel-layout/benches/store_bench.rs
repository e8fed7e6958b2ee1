// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the parameter store: default seeding over a
// project-sized page set, and a full relinking pass.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use satzspiegel_core::{Dpi, LayoutDefaults, PageId};
use satzspiegel_layout::defaults::seed_page_defaults;
use satzspiegel_layout::store::ParamStore;

/// Benchmark seeding defaults for 500 pages — the cost of the first pass
/// through a mid-sized scanned book.
fn bench_seed_defaults(c: &mut Criterion) {
    let pages: Vec<PageId> = (0..500).map(|_| PageId::new()).collect();
    let defaults = LayoutDefaults::default();

    c.bench_function("seed_defaults (500 pages)", |b| {
        b.iter(|| {
            let store = ParamStore::new();
            for page in &pages {
                seed_page_defaults(&store, *page, Dpi::square(300), black_box(&defaults));
            }
            black_box(store.tracked_pages().len());
        });
    });
}

/// Benchmark an identity relinking pass over 500 seeded records.
fn bench_relinking(c: &mut Criterion) {
    let pages: Vec<PageId> = (0..500).map(|_| PageId::new()).collect();
    let defaults = LayoutDefaults::default();
    let store = ParamStore::new();
    for page in &pages {
        seed_page_defaults(&store, *page, Dpi::square(300), &defaults);
    }

    c.bench_function("perform_relinking (500 pages, identity)", |b| {
        b.iter(|| {
            store.perform_relinking(&satzspiegel_layout::relink::IdentityRelinker);
            black_box(store.tracked_pages().len());
        });
    });
}

criterion_group!(benches, bench_seed_defaults, bench_relinking);
criterion_main!(benches);
