use crate::geometry::Point;
use glam::DVec2;
use rand::Rng;

/// A collection of points that is always ordered by ascending x.
///
/// Points with equal x keep their insertion order, so a set built from the
/// same sequence always produces the same engine run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from arbitrary points, sorting them by x.
    pub fn from_points(mut points: Vec<Point>) -> Self {
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { points }
    }

    /// Spawns `count` uniformly random points inside an axis-aligned rectangle.
    ///
    /// ### Parameters
    /// - `center` - Center of the rectangle.
    /// - `half_extents` - Half width and half height of the rectangle.
    /// - `count` - Number of points to generate.
    /// - `rng` - Random source.
    pub fn random_in_rect(
        center: DVec2,
        half_extents: DVec2,
        count: usize,
        rng: &mut impl Rng,
    ) -> Self {
        let hx = half_extents.x.abs();
        let hy = half_extents.y.abs();
        let points = (0..count)
            .map(|_| {
                let off = DVec2::new(rng.random_range(-hx..=hx), rng.random_range(-hy..=hy));
                Point::from(center + off)
            })
            .collect();
        Self::from_points(points)
    }

    /// The sixteen-point layout the interactive demo starts with.
    pub fn demo() -> Self {
        const DEMO: [(f64, f64); 16] = [
            (122.0, 135.0),
            (235.0, 248.0),
            (305.0, 414.0),
            (417.0, 78.0),
            (444.0, 258.0),
            (509.0, 474.0),
            (533.0, 169.0),
            (604.0, 309.0),
            (608.0, 277.0),
            (643.0, 118.0),
            (773.0, 81.0),
            (774.0, 372.0),
            (809.0, 216.0),
            (940.0, 486.0),
            (995.0, 198.0),
            (1080.0, 348.0),
        ];
        Self::from_points(DEMO.iter().copied().map(Point::from).collect())
    }

    /// Inserts a point after every existing point with the same or smaller x.
    pub fn insert(&mut self, p: Point) {
        let at = self.points.partition_point(|q| q.x <= p.x);
        self.points.insert(at, p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}
