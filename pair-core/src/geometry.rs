//! Planar points and candidate pairs.

use glam::DVec2;
use std::fmt;

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to `other`. Zero for coincident points.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.as_dvec2().is_finite()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An unordered pair of points, the unit the search reasons about.
///
/// Two pairs compare equal if they hold the same two points in either order.
#[derive(Clone, Copy, Debug)]
pub struct Pair {
    pub a: Point,
    pub b: Point,
}

impl Pair {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Returns `true` if this pair is strictly closer than `other`.
    #[inline]
    pub fn closer_than(&self, other: &Pair) -> bool {
        self.distance() < other.distance()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Picks the closest pair among `candidates`, skipping `None`s.
///
/// Comparison is strict, so on a tie the candidate that comes first wins.
pub fn closest_of<I>(candidates: I) -> Option<Pair>
where
    I: IntoIterator<Item = Option<Pair>>,
{
    candidates
        .into_iter()
        .flatten()
        .fold(None, |best: Option<Pair>, p| match best {
            Some(b) if !p.closer_than(&b) => Some(b),
            _ => Some(p),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn distance_of_coincident_points_is_zero() {
        let p = Point::new(-2.5, 7.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pairs_are_unordered() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(Pair::new(a, b), Pair::new(b, a));
        assert_ne!(Pair::new(a, b), Pair::new(a, Point::new(3.0, 6.0)));
    }

    #[test]
    fn closest_of_keeps_first_on_tie() {
        let first = Pair::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let second = Pair::new(Point::new(5.0, 0.0), Point::new(6.0, 0.0));
        assert_eq!(closest_of([Some(first), Some(second)]), Some(first));
        assert_eq!(closest_of([Some(second), Some(first)]), Some(second));
    }

    #[test]
    fn closest_of_skips_missing_candidates() {
        let far = Pair::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let near = Pair::new(Point::new(0.0, 0.0), Point::new(0.0, 2.0));
        assert_eq!(closest_of([None, Some(far), Some(near)]), Some(near));
        assert_eq!(closest_of([None, None]), None);
    }

    #[test]
    fn display_formats() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(5.5, 5.0);
        assert_eq!(a.to_string(), "(3, 4)");
        assert_eq!(Pair::new(a, b).to_string(), "(3, 4)-(5.5, 5)");
    }
}
