// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// satzspiegel-layout — The page-layout ("Margins") stage of the Satzspiegel
// scanned-document pipeline.
//
// Provides the per-page parameter store that downstream stages read when
// cropping and positioning page content, default-parameter seeding, the four
// page-ordering strategies, the project-document persistence codec, and the
// task facade that binds a page to the next pipeline stage.

pub mod codec;
pub mod defaults;
pub mod guide;
pub mod order;
pub mod params;
pub mod relink;
pub mod stage;
pub mod store;
pub mod task;
pub mod tree;

// Re-export the primary types so callers can use `satzspiegel_layout::ParamStore` etc.
pub use guide::{Guide, GuideOrientation};
pub use order::{DeviationProvider, OrderProvider, PageOrderOption};
pub use params::Params;
pub use relink::Relinker;
pub use stage::PageLayoutStage;
pub use store::ParamStore;
pub use task::{CacheDrivenTask, NextCacheDrivenTask, NextTask, Task};
pub use tree::Element;
