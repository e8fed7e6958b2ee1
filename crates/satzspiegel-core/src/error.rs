// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for Satzspiegel.
//
// The parameter store itself never fails: missing records are `None`, and
// anomalies during project load are absorbed per entry. Errors here cover
// only reading and writing project-tree files.

use thiserror::Error;

/// Top-level error type for all Satzspiegel operations.
#[derive(Debug, Error)]
pub enum SatzspiegelError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SatzspiegelError>;
