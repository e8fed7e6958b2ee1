// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Key-remapping contract used when the project's page identifiers are
// reorganized (pages added, removed, reordered, or merged in from another
// project).

use satzspiegel_core::PageId;

/// Supplies the remapping applied to every stored page key during a
/// relinking pass.
///
/// Returning `None` means the page left the project; its record is dropped.
pub trait Relinker {
    fn remap(&self, old: &PageId) -> Option<PageId>;
}

/// Relinker that keeps every key as-is. A relinking pass with this is a
/// no-op.
#[derive(Debug, Default)]
pub struct IdentityRelinker;

impl Relinker for IdentityRelinker {
    fn remap(&self, old: &PageId) -> Option<PageId> {
        Some(*old)
    }
}

impl<F> Relinker for F
where
    F: Fn(&PageId) -> Option<PageId>,
{
    fn remap(&self, old: &PageId) -> Option<PageId> {
        self(old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_keys() {
        let key = PageId::new();
        assert_eq!(IdentityRelinker.remap(&key), Some(key));
    }

    #[test]
    fn closures_are_relinkers() {
        let from = PageId::new();
        let to = PageId::new();
        let relinker = move |old: &PageId| if *old == from { Some(to) } else { None };

        assert_eq!(relinker.remap(&from), Some(to));
        assert_eq!(relinker.remap(&PageId::new()), None);
    }
}
