//! The band of points around the median line checked by the combine step.
//!
//! The combine step of a call checks only pairs that straddle the median
//! and lie within the current best distance of it:
//! 1. [`MergeStrip::build`] keeps the left-half points with
//!    `x >= median_x - width` and the right-half points with
//!    `x <= median_x + width`, each sorted by ascending y.
//! 2. For every left-strip point, [`YWindow::slide`] yields the right-strip
//!    points whose y lies within `width` of it. The window start only moves
//!    forward, so a whole sweep costs linear time in the strip size.

use crate::geometry::Point;
use std::ops::Range;

/// Left and right strip points, each ordered by ascending y.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergeStrip {
    pub left: Vec<Point>,
    pub right: Vec<Point>,
}

impl MergeStrip {
    /// Builds the strip for one combine step.
    ///
    /// ### Parameters
    /// - `left` - Points of the left half, in x order.
    /// - `right` - Points of the right half, in x order.
    /// - `median_x` - x coordinate of the dividing line.
    /// - `width` - Current best distance; the half width of the band.
    ///
    /// ### Returns
    /// A [`MergeStrip`] whose halves are sorted by y. Points with equal y
    /// keep their x order.
    pub fn build(left: &[Point], right: &[Point], median_x: f64, width: f64) -> Self {
        let mut left: Vec<Point> = left
            .iter()
            .copied()
            .filter(|p| p.x >= median_x - width)
            .collect();
        let mut right: Vec<Point> = right
            .iter()
            .copied()
            .filter(|p| p.x <= median_x + width)
            .collect();

        left.sort_by(|a, b| a.y.total_cmp(&b.y));
        right.sort_by(|a, b| a.y.total_cmp(&b.y));

        Self { left, right }
    }
}

/// Forward-only cursor over the y-sorted right strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YWindow {
    start: usize,
}

impl YWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the window to be centred on `y` and returns its index range.
    ///
    /// Points below `y - width` are skipped permanently; the range ends at
    /// the first point above `y + width`. Callers must slide with
    /// non-decreasing `y - width` for the skipped prefix to stay valid.
    pub fn slide(&mut self, right: &[Point], y: f64, width: f64) -> Range<usize> {
        while self.start < right.len() && right[self.start].y < y - width {
            self.start += 1;
        }
        let mut end = self.start;
        while end < right.len() && right[end].y <= y + width {
            end += 1;
        }
        self.start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filters_by_band_and_sorts_by_y() {
        let left = [
            Point::new(0.0, 5.0),
            Point::new(8.0, 3.0),
            Point::new(9.0, -1.0),
        ];
        let right = [
            Point::new(10.0, 7.0),
            Point::new(11.0, 0.0),
            Point::new(20.0, 1.0),
        ];

        let strip = MergeStrip::build(&left, &right, 9.0, 2.0);

        assert_eq!(strip.left, vec![Point::new(9.0, -1.0), Point::new(8.0, 3.0)]);
        assert_eq!(strip.right, vec![Point::new(11.0, 0.0), Point::new(10.0, 7.0)]);
    }

    #[test]
    fn band_edges_are_inclusive() {
        let left = [Point::new(3.0, 0.0)];
        let right = [Point::new(7.0, 0.0)];
        let strip = MergeStrip::build(&left, &right, 5.0, 2.0);
        assert_eq!(strip.left.len(), 1);
        assert_eq!(strip.right.len(), 1);
    }

    #[test]
    fn equal_y_keeps_x_order() {
        let right = [Point::new(1.0, 2.0), Point::new(2.0, 2.0), Point::new(3.0, 1.0)];
        let strip = MergeStrip::build(&[], &right, 0.0, 10.0);
        assert_eq!(
            strip.right,
            vec![Point::new(3.0, 1.0), Point::new(1.0, 2.0), Point::new(2.0, 2.0)]
        );
    }

    #[test]
    fn window_slides_forward_only() {
        let right: Vec<Point> = [0.0, 1.0, 2.0, 3.0, 10.0]
            .iter()
            .map(|&y| Point::new(0.0, y))
            .collect();
        let mut w = YWindow::new();

        assert_eq!(w.slide(&right, 0.5, 1.0), 0..2);
        assert_eq!(w.slide(&right, 2.5, 1.0), 2..4);
        // Empty window beyond the last point below the range.
        assert_eq!(w.slide(&right, 6.0, 1.0), 4..4);
        assert_eq!(w.slide(&right, 10.0, 0.0), 4..5);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let right = [Point::new(0.0, 1.0), Point::new(0.0, 3.0)];
        let mut w = YWindow::new();
        assert_eq!(w.slide(&right, 2.0, 1.0), 0..2);
    }
}
