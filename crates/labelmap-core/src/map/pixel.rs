//! Point mutation engine
//!
//! Position-keyed operations on the container. Exclusivity — a position
//! belongs to at most one region — is enforced here: assigning a label
//! corrects every region, not just the target, and a region emptied as a
//! side effect is dropped from the store.
//!
//! Assigning the background value is always a legal no-op or implicit
//! removal at this level; only label-keyed operations reject it.

use crate::error::{Error, Result};
use crate::map::LabelMap;
use crate::region::{Region, RegionHandle, new_handle};

impl<R: Region> LabelMap<R> {
    /// Assign `label` to `index`, clearing the position from every other
    /// region.
    ///
    /// Assigning the background value clears the position outright. A
    /// region left empty by the reassignment is dropped from the
    /// container.
    pub fn set_pixel(&mut self, index: R::Index, label: R::Label) {
        let mut new_label = true;
        // snapshot the keys: removal can delete entries mid-walk
        let stored: Vec<R::Label> = self.store.labels().collect();
        for stored_label in stored {
            if stored_label == label {
                new_label = false;
                self.add_pixel(index, label);
            } else {
                // clearing to background is the reported event itself; when
                // assigning a real label, the add reports once and the
                // side-effect removals stay silent
                let emit = label == self.background;
                self.remove_pixel_from(stored_label, index, emit);
            }
        }
        if new_label {
            self.add_pixel(index, label);
        }
    }

    /// Add `index` to the region labeled `label`, creating the region if
    /// it does not exist yet.
    ///
    /// No-op for the background value. Counts as one modification, whether
    /// through the insertion or through the registration of a fresh
    /// region.
    pub fn add_pixel(&mut self, index: R::Index, label: R::Label) {
        if label == self.background {
            return;
        }
        if let Some(handle) = self.store.find(label).cloned() {
            handle.borrow_mut().add_index(index);
            self.modified();
        } else {
            let handle = new_handle::<R>(label);
            handle.borrow_mut().add_index(index);
            // registration reports the change once
            self.store.insert_or_replace(label, handle);
            self.modified();
        }
    }

    /// Remove `index` from the region labeled `label`.
    ///
    /// No-op for the background value or an unknown label. A region left
    /// empty is dropped from the container, which counts as a modification
    /// regardless of `emit_modified`; a successful removal additionally
    /// counts one when `emit_modified` is set. The flag distinguishes
    /// tracked direct calls from the untracked bulk removals
    /// [`set_pixel`](Self::set_pixel) performs.
    pub fn remove_pixel(&mut self, index: R::Index, label: R::Label, emit_modified: bool) {
        if label == self.background {
            return;
        }
        self.remove_pixel_from(label, index, emit_modified);
    }

    fn remove_pixel_from(&mut self, label: R::Label, index: R::Index, emit_modified: bool) {
        let Some(handle) = self.store.find(label).cloned() else {
            return;
        };
        let removed = handle.borrow_mut().remove_index(index);
        if removed {
            if handle.borrow().is_empty() {
                self.store.erase(label);
                self.modified();
            }
            if emit_modified {
                self.modified();
            }
        }
    }

    /// Add a run of `length` positions starting at `index` to the region
    /// labeled `label`, creating the region if needed.
    ///
    /// No-op for the background value or a zero length.
    pub fn set_line(&mut self, index: R::Index, length: usize, label: R::Label) {
        if label == self.background || length == 0 {
            return;
        }
        if let Some(handle) = self.store.find(label).cloned() {
            handle.borrow_mut().add_line(index, length);
            self.modified();
        } else {
            let handle = new_handle::<R>(label);
            handle.borrow_mut().add_line(index, length);
            self.store.insert_or_replace(label, handle);
            self.modified();
        }
    }

    /// Label of the region containing `index`, or the background value.
    ///
    /// Linear scan in ascending label order; no inverse index is
    /// maintained, so this is O(regions). Callers needing a fast inverse
    /// lookup must build their own index.
    pub fn label_at(&self, index: R::Index) -> R::Label {
        for (label, handle) in self.store.iter() {
            if handle.borrow().has_index(index) {
                return label;
            }
        }
        self.background
    }

    /// Handle of the region containing `index`.
    ///
    /// Same scan as [`label_at`](Self::label_at), but a miss is an error
    /// here: call sites using this accessor require the position to be
    /// mapped.
    ///
    /// # Errors
    ///
    /// [`Error::NoRegionAtIndex`] if no region contains the position.
    pub fn region_at(&self, index: R::Index) -> Result<RegionHandle<R>, R::Label> {
        for (_, handle) in self.store.iter() {
            if handle.borrow().has_index(index) {
                return Ok(handle.clone());
            }
        }
        Err(Error::NoRegionAtIndex)
    }
}

