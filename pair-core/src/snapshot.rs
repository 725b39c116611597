//! The externally visible state of a search at one checkpoint.

use crate::{
    geometry::{Pair, Point},
    types::{Checkpoint, Side},
};

/// One open recursive call: the point it splits at and the phase it is in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partition {
    pub point: Point,
    pub side: Side,
}

impl Partition {
    pub fn new(point: Point, side: Side) -> Self {
        Self { point, side }
    }

    /// x coordinate of the dividing line.
    pub fn median_x(&self) -> f64 {
        self.point.x
    }
}

/// State of the search at a checkpoint.
///
/// A snapshot is owned by the [`crate::engine::Engine`] and mutated in place
/// between checkpoints; callers see it read-only and clone it if they need
/// it to outlive the next `advance()`.
///
/// ### Fields
/// - `index` - Position of this checkpoint in the run, starting at `0`.
/// - `checkpoint` - Which kind of checkpoint produced the snapshot.
/// - `partition_stack` - One entry per open call with three or more points,
///   outermost first.
/// - `best_pairs` - The sub-results the innermost such call is choosing
///   between; at most two, exactly one once a combine step commits.
/// - `combining` - `true` while the innermost call runs its strip sweep.
/// - `base_point` - Left-strip point being swept.
/// - `candidate_point` - Right-strip point being compared with `base_point`.
/// - `current_best` - Last cross-median pair that improved the sweep.
/// - `strip_width` - Half width of the strip; the best distance known to
///   the combining call.
/// - `result` - What the call that just returned handed to its parent.
///   Only set on [`Checkpoint::BaseCase`] and [`Checkpoint::Return`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutionSnapshot {
    pub index: usize,
    pub checkpoint: Checkpoint,
    pub partition_stack: Vec<Partition>,
    pub best_pairs: Vec<Pair>,
    pub combining: bool,
    pub base_point: Option<Point>,
    pub candidate_point: Option<Point>,
    pub current_best: Option<Pair>,
    pub strip_width: Option<f64>,
    pub result: Option<Pair>,
}

impl ExecutionSnapshot {
    /// Number of open calls with three or more points.
    pub fn depth(&self) -> usize {
        self.partition_stack.len()
    }

    /// The partition of the innermost open call, if any.
    pub fn median(&self) -> Option<&Partition> {
        self.partition_stack.last()
    }

    /// The x interval the innermost call works on.
    ///
    /// Each ancestor descending left bounds the interval from above at its
    /// median, and each ancestor descending right bounds it from below.
    /// Entries combining at their median do not narrow it. `None` means
    /// unbounded on that side.
    pub fn active_bounds(&self) -> (Option<f64>, Option<f64>) {
        let mut min_x = None;
        let mut max_x = None;
        for part in &self.partition_stack {
            match part.side {
                Side::Left => max_x = Some(part.median_x()),
                Side::Right => min_x = Some(part.median_x()),
                Side::AtMedian => {}
            }
        }
        (min_x, max_x)
    }

    /// Clears the per-sweep fields.
    pub(crate) fn clear_sweep(&mut self) {
        self.base_point = None;
        self.candidate_point = None;
        self.current_best = None;
        self.strip_width = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_empty() {
        let s = ExecutionSnapshot::default();
        assert_eq!(s.depth(), 0);
        assert!(s.median().is_none());
        assert_eq!(s.active_bounds(), (None, None));
        assert!(!s.combining);
        assert!(s.result.is_none());
    }

    #[test]
    fn active_bounds_follow_the_innermost_sides() {
        let mut s = ExecutionSnapshot::default();
        s.partition_stack = vec![
            Partition::new(Point::new(50.0, 0.0), Side::Left),
            Partition::new(Point::new(20.0, 0.0), Side::Right),
            Partition::new(Point::new(35.0, 0.0), Side::Left),
        ];
        assert_eq!(s.active_bounds(), (Some(20.0), Some(35.0)));
        assert_eq!(s.median().map(Partition::median_x), Some(35.0));

        s.partition_stack[2].side = Side::AtMedian;
        assert_eq!(s.active_bounds(), (Some(20.0), Some(50.0)));
    }

    #[test]
    fn clear_sweep_resets_sweep_fields_only() {
        let p = Point::new(1.0, 1.0);
        let q = Point::new(2.0, 2.0);
        let mut s = ExecutionSnapshot {
            combining: true,
            base_point: Some(p),
            candidate_point: Some(q),
            current_best: Some(Pair::new(p, q)),
            strip_width: Some(1.5),
            best_pairs: vec![Pair::new(p, q)],
            ..Default::default()
        };
        s.clear_sweep();
        assert!(s.base_point.is_none());
        assert!(s.candidate_point.is_none());
        assert!(s.current_best.is_none());
        assert!(s.strip_width.is_none());
        assert!(s.combining);
        assert_eq!(s.best_pairs.len(), 1);
    }
}
