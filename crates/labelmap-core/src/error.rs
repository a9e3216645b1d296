//! Error types for labelmap-core
//!
//! One unified error type for container operations, generic over the label
//! type so messages can carry the offending label. All failures are
//! reported synchronously; validation happens before any mutation, so a
//! failed operation never leaves the container partially updated.

use crate::label::LabelValue;
use thiserror::Error;

/// Label map error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error<L: LabelValue> {
    /// A label-keyed operation was given the reserved background value
    #[error("label {0} is the background label")]
    BackgroundLabel(L),

    /// No region is registered under the requested label
    #[error("no region with label {0}")]
    LabelNotFound(L),

    /// No region contains the requested position
    #[error("no region at the given index")]
    NoRegionAtIndex,

    /// Positional accessor past the end of the container
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Label space exhausted during automatic allocation
    #[error("label map is full: no unused label available")]
    MapFull,

    /// Graft source is not the same concrete container type
    #[error("graft source is not the same label map type")]
    TypeMismatch,
}

/// Result type alias for label map operations, `L` being the label type
pub type Result<T, L> = std::result::Result<T, Error<L>>;
