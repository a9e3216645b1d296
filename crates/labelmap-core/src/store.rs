//! Label store
//!
//! The canonical label → region association. Keys are unique, iteration
//! runs in ascending label order, and the reserved background value is
//! never stored as a key. The ordering is load-bearing: the allocator's
//! first/last rules and the positional accessors depend on it.
//!
//! The store is pure data. The modified signal lives in the container,
//! which raises it around these calls, so the signaling policy stays in
//! one place.

use crate::error::{Error, Result};
use crate::region::{Region, RegionHandle};
use std::collections::BTreeMap;

/// Ordered mapping from label to shared region handle.
pub struct LabelStore<R: Region> {
    entries: BTreeMap<R::Label, RegionHandle<R>>,
}

impl<R: Region> LabelStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Look up the handle registered under `label`.
    pub fn find(&self, label: R::Label) -> Option<&RegionHandle<R>> {
        self.entries.get(&label)
    }

    /// Check whether `label` is registered.
    pub fn contains(&self, label: R::Label) -> bool {
        self.entries.contains_key(&label)
    }

    /// Register `handle` under `label`, returning any displaced handle.
    pub fn insert_or_replace(
        &mut self,
        label: R::Label,
        handle: RegionHandle<R>,
    ) -> Option<RegionHandle<R>> {
        self.entries.insert(label, handle)
    }

    /// Remove the entry for `label`, returning it if present.
    pub fn erase(&mut self, label: R::Label) -> Option<RegionHandle<R>> {
        self.entries.remove(&label)
    }

    /// Number of registered regions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no region is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = R::Label> + '_ {
        self.entries.keys().copied()
    }

    /// Region handles in ascending label order.
    pub fn handles(&self) -> impl Iterator<Item = &RegionHandle<R>> {
        self.entries.values()
    }

    /// `(label, handle)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (R::Label, &RegionHandle<R>)> {
        self.entries.iter().map(|(label, handle)| (*label, handle))
    }

    /// Smallest stored label, or `None` if empty.
    pub fn first_label(&self) -> Option<R::Label> {
        self.entries.keys().next().copied()
    }

    /// Largest stored label, or `None` if empty.
    pub fn last_label(&self) -> Option<R::Label> {
        self.entries.keys().next_back().copied()
    }

    /// Entry at 0-based `position` in ascending label order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `position >= len()`.
    pub fn nth(&self, position: usize) -> Result<&RegionHandle<R>, R::Label> {
        self.entries
            .values()
            .nth(position)
            .ok_or(Error::IndexOutOfBounds {
                index: position,
                len: self.entries.len(),
            })
    }
}

impl<R: Region> Default for LabelStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: a derive would demand R: Clone, but only the handles are
// cloned, never the regions behind them.
impl<R: Region> Clone for LabelStore<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}
