//! Run region regression test
//!
//! Randomized membership check: a RunRegion and a naive position set must
//! agree through arbitrary add/remove/optimize interleavings.

use std::collections::HashSet;

use labelmap_core::Region;
use labelmap_region::{Point, RunRegion};
use rand::RngExt;

#[test]
fn run_region_matches_naive_set() {
    let mut rng = rand::rng();
    let mut region: RunRegion<u32> = RunRegion::new(1);
    let mut model: HashSet<(i32, i32)> = HashSet::new();

    for step in 0..3000 {
        let x = rng.random_range(0..24);
        let y = rng.random_range(0..8);
        let point = Point::new(x, y);

        match rng.random_range(0..10) {
            0..6 => {
                region.add_index(point);
                model.insert((x, y));
            }
            6..9 => {
                let removed = region.remove_index(point);
                assert_eq!(removed, model.remove(&(x, y)), "step {step} at {point:?}");
            }
            _ => region.optimize(),
        }

        assert_eq!(region.index_count(), model.len(), "step {step}");
        assert_eq!(region.is_empty(), model.is_empty());
    }

    region.optimize();
    eprintln!(
        "final region: {} positions in {} runs",
        region.index_count(),
        region.runs().len()
    );
    for y in 0..8 {
        for x in 0..24 {
            assert_eq!(
                region.has_index(Point::new(x, y)),
                model.contains(&(x, y)),
                "mismatch at ({x}, {y})"
            );
        }
    }
}
