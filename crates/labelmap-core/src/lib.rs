//! labelmap-core - Sparse, label-indexed segmentation container
//!
//! A [`LabelMap`] represents a segmented spatial domain: most positions
//! belong to one implicit background label, and the rest are partitioned
//! among a small number of regions, each keyed by an integer label.
//! Storage is sparse — the container holds one extent object per region
//! instead of a dense per-position buffer.
//!
//! - [`LabelMap`] - the container: label-keyed and position-keyed CRUD,
//!   automatic label allocation, grafting
//! - [`LabelStore`] - the ordered label → region association
//! - [`Region`] - the capability contract an extent type implements
//! - [`LabelValue`] - the integer contract label types implement
//!
//! Regions are handed out as [`RegionHandle`]s: shared, single-threaded
//! handles that survive removal from the container.
//!
//! # Examples
//!
//! ```
//! use labelmap_core::LabelMap;
//! use labelmap_region::{Point, RunRegion};
//!
//! let mut map: LabelMap<RunRegion<u32>> = LabelMap::new();
//!
//! map.set_pixel(Point::new(3, 4), 7);
//! assert_eq!(map.label_at(Point::new(3, 4)), 7);
//!
//! // reassignment moves the position between regions
//! map.set_pixel(Point::new(3, 4), 9);
//! assert_eq!(map.label_at(Point::new(3, 4)), 9);
//! assert!(!map.has_label(7)); // the emptied region is dropped
//! ```

pub mod alloc;
pub mod error;
pub mod label;
pub mod map;
pub mod region;
pub mod store;

pub use error::{Error, Result};
pub use label::LabelValue;
pub use map::LabelMap;
pub use region::{Region, RegionHandle, new_handle};
pub use store::LabelStore;
