use crate::geometry::Pair;
use crate::geometry::Point;

/// Finds the closest pair by checking every pair of points.
///
/// Pairs are visited in index order `(0, 1), (0, 2), ..., (1, 2), ...` and
/// only a strictly closer pair replaces the current best. Returns `None`
/// for fewer than two points.
pub fn brute_force(points: &[Point]) -> Option<Pair> {
    let mut best: Option<Pair> = None;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let candidate = Pair::new(a, b);
            if best.is_none_or(|p| candidate.closer_than(&p)) {
                best = Some(candidate);
            }
        }
    }
    best
}
