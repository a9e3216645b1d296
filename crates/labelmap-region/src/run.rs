//! Run-length extent storage
//!
//! A region's positions are kept as horizontal runs. Single-position
//! edits extend, shrink, or split runs in place; `optimize()` re-sorts
//! and merges whatever fragmentation the edits left behind.

use labelmap_core::{LabelValue, Region};

/// 2-D position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Horizontal run of positions: `length` consecutive columns starting at
/// `start`, all on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: Point,
    pub length: usize,
}

impl Run {
    /// Create a run.
    pub const fn new(start: Point, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last column, in widened arithmetic so runs may touch
    /// the top of the coordinate range.
    #[inline]
    fn end_x(&self) -> i64 {
        self.start.x as i64 + self.length as i64
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.y == self.start.y && point.x >= self.start.x && (point.x as i64) < self.end_x()
    }
}

/// Run-length region: a label plus a list of horizontal runs.
///
/// Runs are appended in call order; they are only guaranteed sorted and
/// non-overlapping after [`optimize`](Region::optimize). Membership
/// queries are correct either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRegion<L: LabelValue> {
    label: L,
    runs: Vec<Run>,
}

impl<L: LabelValue> RunRegion<L> {
    /// Create an empty region labeled `label`.
    pub fn new(label: L) -> Self {
        Self {
            label,
            runs: Vec::new(),
        }
    }

    /// The stored runs, in insertion order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Total number of positions.
    pub fn index_count(&self) -> usize {
        self.runs.iter().map(|run| run.length).sum()
    }

    /// Iterate every position, run by run.
    pub fn indices(&self) -> impl Iterator<Item = Point> + '_ {
        self.runs.iter().flat_map(|run| {
            let run = *run;
            (0..run.length).map(move |i| Point::new(run.start.x + i as i32, run.start.y))
        })
    }
}

impl<L: LabelValue> Region for RunRegion<L> {
    type Label = L;
    type Index = Point;

    fn new(label: L) -> Self {
        RunRegion::new(label)
    }

    fn label(&self) -> L {
        self.label
    }

    fn set_label(&mut self, label: L) {
        self.label = label;
    }

    fn has_index(&self, index: Point) -> bool {
        self.runs.iter().any(|run| run.contains(index))
    }

    fn add_index(&mut self, index: Point) {
        if self.has_index(index) {
            return;
        }
        // the common caller feeds consecutive positions; extend the
        // trailing run when they touch
        if let Some(last) = self.runs.last_mut()
            && last.start.y == index.y
            && last.end_x() == index.x as i64
        {
            last.length += 1;
            return;
        }
        self.runs.push(Run::new(index, 1));
    }

    fn add_line(&mut self, index: Point, length: usize) -> bool {
        if length == 0 {
            return false;
        }
        self.runs.push(Run::new(index, length));
        true
    }

    fn remove_index(&mut self, index: Point) -> bool {
        for i in 0..self.runs.len() {
            let run = self.runs[i];
            if !run.contains(index) {
                continue;
            }
            if run.length == 1 {
                self.runs.remove(i);
            } else if index.x == run.start.x {
                let kept = &mut self.runs[i];
                kept.start.x += 1;
                kept.length -= 1;
            } else if (index.x as i64) == run.end_x() - 1 {
                self.runs[i].length -= 1;
            } else {
                // interior removal splits the run in two
                let left_length = (index.x - run.start.x) as usize;
                let right = Run::new(
                    Point::new(index.x + 1, index.y),
                    run.length - left_length - 1,
                );
                self.runs[i] = Run::new(run.start, left_length);
                self.runs.insert(i + 1, right);
            }
            return true;
        }
        false
    }

    fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn optimize(&mut self) {
        self.runs
            .sort_by_key(|run| (run.start.y, run.start.x));
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if let Some(last) = merged.last_mut()
                && last.start.y == run.start.y
                && (run.start.x as i64) <= last.end_x()
            {
                let end = last.end_x().max(run.end_x());
                last.length = (end - last.start.x as i64) as usize;
                continue;
            }
            merged.push(run);
        }
        self.runs = merged;
    }
}
