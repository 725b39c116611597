use crate::geometry::Point;
use thiserror::Error;

/// Reasons a point sequence cannot be handed to the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("no points to search")]
    Empty,

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("points are not sorted by x: {current} at index {index} comes after {previous}")]
    Unsorted {
        index: usize,
        previous: Point,
        current: Point,
    },
}

/// Checks that `points` is non-empty, finite and ordered by ascending x.
pub fn validate(points: &[Point]) -> Result<(), InputError> {
    if points.is_empty() {
        return Err(InputError::Empty);
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(InputError::NonFinite { index });
    }
    if let Some(i) = points.windows(2).position(|w| w[1].x < w[0].x) {
        return Err(InputError::Unsorted {
            index: i + 1,
            previous: points[i],
            current: points[i + 1],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(validate(&[]), Err(InputError::Empty));
    }

    #[test]
    fn single_point_is_valid() {
        assert_eq!(validate(&[Point::new(4.0, 2.0)]), Ok(()));
    }

    #[test]
    fn equal_x_is_sorted() {
        let pts = [Point::new(1.0, 5.0), Point::new(1.0, -5.0), Point::new(2.0, 0.0)];
        assert_eq!(validate(&pts), Ok(()));
    }

    #[test]
    fn unsorted_reports_first_offender() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        match validate(&pts) {
            Err(InputError::Unsorted {
                index,
                previous,
                current,
            }) => {
                assert_eq!(index, 2);
                assert_eq!(previous, pts[1]);
                assert_eq!(current, pts[2]);
            }
            other => panic!("expected Unsorted, got {other:?}"),
        }
    }

    #[test]
    fn nan_is_rejected_before_ordering() {
        let pts = [Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        assert_eq!(validate(&pts), Err(InputError::NonFinite { index: 1 }));
    }
}
