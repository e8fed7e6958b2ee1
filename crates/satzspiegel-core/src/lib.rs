// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// satzspiegel-core — Shared primitives for the Satzspiegel page-layout stage.
//
// Provides the opaque page identifier, page-local geometry values (rects,
// sizes, margins), alignment policies, physical-unit conversion, the global
// layout-defaults configuration, and the project-wide error type.

pub mod config;
pub mod error;
pub mod types;
pub mod units;

pub use config::LayoutDefaults;
pub use error::{Result, SatzspiegelError};
pub use types::{Alignment, Dpi, HAlign, Margins, PageId, Rect, Size, VAlign};
pub use units::{Unit, UnitsConverter};
