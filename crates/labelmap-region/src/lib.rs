//! labelmap-region - Run-length region extent
//!
//! A concrete [`Region`](labelmap_core::Region) implementation for 2-D
//! domains. Positions are stored as horizontal runs, so large coherent
//! regions cost a handful of runs rather than one entry per position.
//!
//! # Examples
//!
//! ```
//! use labelmap_core::Region;
//! use labelmap_region::{Point, RunRegion};
//!
//! let mut region: RunRegion<u32> = RunRegion::new(3);
//! region.add_line(Point::new(0, 0), 4);
//! assert!(region.has_index(Point::new(2, 0)));
//! assert!(region.remove_index(Point::new(2, 0)));
//! assert_eq!(region.runs().len(), 2); // the run was split
//! ```

mod run;

pub use run::{Point, Run, RunRegion};
