//! Region capability contract
//!
//! The container treats each region as an opaque extent keyed by its
//! label: it asks for membership tests, single-position insertion and
//! removal, emptiness, and compaction, and never inspects how the extent
//! stores its positions. A concrete run-length implementation lives in
//! the `labelmap-region` crate.

use crate::label::LabelValue;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a region.
///
/// Regions are shared between the container and external holders; removing
/// a region from the container drops the container's reference but leaves
/// any outstanding handle valid. The container is single-threaded, so the
/// handle is `Rc<RefCell<_>>` rather than an atomic variant; callers
/// needing cross-thread access must serialize externally.
pub type RegionHandle<R> = Rc<RefCell<R>>;

/// Capability contract consumed by [`LabelMap`](crate::LabelMap).
pub trait Region {
    /// Label type keying this region in the container.
    type Label: LabelValue;

    /// Position type; opaque to the container.
    type Index: Copy + Eq + fmt::Debug;

    /// Construct an empty region carrying `label`.
    fn new(label: Self::Label) -> Self
    where
        Self: Sized;

    /// The region's label.
    fn label(&self) -> Self::Label;

    /// Change the region's label.
    ///
    /// The container keeps its store key synchronized when it relabels a
    /// region; external callers relabeling a registered region must
    /// re-register it themselves.
    fn set_label(&mut self, label: Self::Label);

    /// Membership test for a single position.
    fn has_index(&self, index: Self::Index) -> bool;

    /// Add a single position to the extent.
    fn add_index(&mut self, index: Self::Index);

    /// Add a run of `length` positions starting at `index`.
    ///
    /// Returns `false` if nothing was added (zero length).
    fn add_line(&mut self, index: Self::Index, length: usize) -> bool;

    /// Remove a single position. Returns `true` if it was present.
    fn remove_index(&mut self, index: Self::Index) -> bool;

    /// True if the extent holds no position.
    fn is_empty(&self) -> bool;

    /// Compact the internal representation. Membership is unchanged.
    fn optimize(&mut self);
}

/// Construct a fresh shared handle to an empty region labeled `label`.
pub fn new_handle<R: Region>(label: R::Label) -> RegionHandle<R> {
    Rc::new(RefCell::new(R::new(label)))
}
