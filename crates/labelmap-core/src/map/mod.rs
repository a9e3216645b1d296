//! LabelMap - the sparse segmentation container
//!
//! Associates integer labels with shared region handles. Most positions of
//! the underlying domain belong to the implicit background label; the rest
//! are partitioned among the registered regions. Two invariants hold at
//! every observable point:
//!
//! - the background value is never stored as a key, and every stored
//!   region's own label matches its key;
//! - a position belongs to at most one region (enforced by the
//!   position-keyed operations in [`pixel`]).
//!
//! # Change notification
//!
//! The enclosing object observes mutations through a monotonically
//! increasing counter, [`LabelMap::modification_count`], rather than an
//! ambient signal. Every structural or membership change increments it
//! exactly once per reported event.

mod pixel;

use crate::alloc::allocate_label;
use crate::error::{Error, Result};
use crate::label::LabelValue;
use crate::region::{Region, RegionHandle};
use crate::store::LabelStore;
use std::any::Any;

/// Sparse, label-indexed segmentation container.
///
/// Generic over the region type `R`; the label and position types are
/// `R`'s associated types. Handles returned from accessors stay valid
/// after the region is removed from the container (shared ownership).
pub struct LabelMap<R: Region> {
    store: LabelStore<R>,
    background: R::Label,
    modifications: u64,
}

impl<R: Region> LabelMap<R> {
    /// Create an empty map with the default background value (zero).
    pub fn new() -> Self {
        Self::with_background(R::Label::ZERO)
    }

    /// Create an empty map with the given background value.
    pub fn with_background(background: R::Label) -> Self {
        Self {
            store: LabelStore::new(),
            background,
            modifications: 0,
        }
    }

    /// The reserved background value.
    #[inline]
    pub fn background(&self) -> R::Label {
        self.background
    }

    /// Change the background value. Counts as a modification when the
    /// value actually changes.
    pub fn set_background(&mut self, background: R::Label) {
        if self.background != background {
            self.background = background;
            self.modified();
        }
    }

    /// Number of mutations observed so far.
    ///
    /// Consumed by the enclosing object in place of a change signal.
    #[inline]
    pub fn modification_count(&self) -> u64 {
        self.modifications
    }

    pub(crate) fn modified(&mut self) {
        self.modifications += 1;
    }

    /// Reject the reserved background value for label-keyed operations.
    fn check_not_background(&self, label: R::Label) -> Result<(), R::Label> {
        if label == self.background {
            Err(Error::BackgroundLabel(label))
        } else {
            Ok(())
        }
    }

    /// Read-only view of the underlying store.
    pub fn store(&self) -> &LabelStore<R> {
        &self.store
    }

    /// Number of registered regions. The background is not counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check whether no region is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Handle of the region registered under `label`.
    ///
    /// The handle grants both shared and mutable access through its
    /// `RefCell`.
    ///
    /// # Errors
    ///
    /// [`Error::BackgroundLabel`] for the background value,
    /// [`Error::LabelNotFound`] if no region carries `label`.
    pub fn get_region(&self, label: R::Label) -> Result<RegionHandle<R>, R::Label> {
        self.check_not_background(label)?;
        self.store
            .find(label)
            .cloned()
            .ok_or(Error::LabelNotFound(label))
    }

    /// Check whether `label` is in use.
    ///
    /// The background label is trivially present: every unmapped position
    /// carries it.
    pub fn has_label(&self, label: R::Label) -> bool {
        label == self.background || self.store.contains(label)
    }

    /// Register a region under its current label.
    ///
    /// Overwrites any region already keyed by that label; there are no
    /// merge semantics. Counts as a modification.
    ///
    /// # Errors
    ///
    /// [`Error::BackgroundLabel`] if the region carries the background
    /// value, which can never be stored.
    pub fn add_region(&mut self, region: RegionHandle<R>) -> Result<(), R::Label> {
        let label = region.borrow().label();
        self.check_not_background(label)?;
        self.store.insert_or_replace(label, region);
        self.modified();
        Ok(())
    }

    /// Register a region under an automatically allocated label.
    ///
    /// The chosen label is assigned to the region and returned.
    ///
    /// # Errors
    ///
    /// [`Error::MapFull`] when no unused label exists.
    pub fn push_region(&mut self, region: RegionHandle<R>) -> Result<R::Label, R::Label> {
        let label = allocate_label(&self.store, self.background)?;
        region.borrow_mut().set_label(label);
        self.add_region(region)?;
        Ok(label)
    }

    /// Register a region under an explicit label, relabeling it first.
    ///
    /// # Errors
    ///
    /// [`Error::BackgroundLabel`] for the background value.
    pub fn push_region_as(
        &mut self,
        region: RegionHandle<R>,
        label: R::Label,
    ) -> Result<(), R::Label> {
        self.check_not_background(label)?;
        region.borrow_mut().set_label(label);
        self.add_region(region)
    }

    /// Remove the region behind `region` from the container.
    ///
    /// The handle itself stays valid. Equivalent to
    /// [`remove_label`](Self::remove_label) on the region's label.
    pub fn remove_region(&mut self, region: &RegionHandle<R>) -> Result<(), R::Label> {
        let label = region.borrow().label();
        self.remove_label(label)
    }

    /// Remove the entry for `label`.
    ///
    /// Counts as a modification whether or not the label was present;
    /// callers wanting a conditional signal check
    /// [`has_label`](Self::has_label) first.
    ///
    /// # Errors
    ///
    /// [`Error::BackgroundLabel`] for the background value, regardless of
    /// store contents.
    pub fn remove_label(&mut self, label: R::Label) -> Result<(), R::Label> {
        self.check_not_background(label)?;
        self.store.erase(label);
        self.modified();
        Ok(())
    }

    /// Drop every region. Counts as a modification only if the container
    /// held any.
    pub fn clear(&mut self) {
        if !self.store.is_empty() {
            self.store.clear();
            self.modified();
        }
    }

    /// Handle of the region at 0-based `position` in ascending label order.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `position >= len()`.
    pub fn nth_region(&self, position: usize) -> Result<RegionHandle<R>, R::Label> {
        self.store.nth(position).cloned()
    }

    /// All stored labels, ascending.
    pub fn labels(&self) -> Vec<R::Label> {
        self.store.labels().collect()
    }

    /// Handles to all stored regions, in ascending label order.
    pub fn regions(&self) -> Vec<RegionHandle<R>> {
        self.store.handles().cloned().collect()
    }

    /// Compact every region's extent, in ascending label order.
    ///
    /// Always counts as a modification.
    pub fn optimize_all(&mut self) {
        for handle in self.store.handles() {
            handle.borrow_mut().optimize();
        }
        self.modified();
    }

    /// Take over another map's store and background value.
    ///
    /// The store mapping is copied; the regions behind it are shared, not
    /// duplicated. On failure the map is left unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if `source` is not a `LabelMap` of the same
    /// concrete region type.
    pub fn graft(&mut self, source: &dyn Any) -> Result<(), R::Label>
    where
        R: 'static,
    {
        let Some(source) = source.downcast_ref::<Self>() else {
            return Err(Error::TypeMismatch);
        };
        self.store = source.store.clone();
        self.background = source.background;
        self.modified();
        Ok(())
    }
}

impl<R: Region> Default for LabelMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

