// src/collections/polyline.rs
// Polyline queries over a borrowed sequence of points.

use crate::numerics::types::point::Point3d;

/// At least two points, all valid, with no two consecutive points equal.
pub fn is_valid(points: &[Point3d]) -> bool {
    points.len() > 1
        && points.iter().all(Point3d::is_valid)
        && points.windows(2).all(|pair| pair[0] != pair[1])
}

/// More than two points and the last equals the first.
pub fn is_closed(points: &[Point3d]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 2 => first == last,
        _ => false,
    }
}

/// Like `is_closed`, but the endpoints only need to be within `tolerance`.
/// A negative tolerance is treated as zero.
pub fn is_closed_within_tolerance(points: &[Point3d], tolerance: f64) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 2 => last.distance_to(first) <= tolerance.max(0.0),
        _ => false,
    }
}

/// Sum of the segment lengths.
pub fn length(points: &[Point3d]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::point_list::Point3dList;

    fn square() -> Point3dList {
        let mut list = Point3dList::new();
        list.push_xyz(0.0, 0.0, 0.0);
        list.push_xyz(1.0, 0.0, 0.0);
        list.push_xyz(1.0, 1.0, 0.0);
        list.push_xyz(0.0, 1.0, 0.0);
        list.push_xyz(0.0, 0.0, 0.0);
        list
    }

    #[test]
    fn test_closed_square() {
        let points = square();
        assert!(is_valid(&points));
        assert!(is_closed(&points));
        assert_eq!(length(&points), 4.0);
    }

    #[test]
    fn test_validity_rules() {
        assert!(!is_valid(&[]));
        assert!(!is_valid(&[Point3d::origin()]));
        assert!(!is_valid(&[Point3d::origin(), Point3d::origin()]));
        assert!(!is_valid(&[Point3d::origin(), Point3d::new(f64::NAN, 0.0, 0.0)]));
        assert!(is_valid(&[Point3d::origin(), Point3d::new(1.0, 0.0, 0.0)]));
    }

    #[test]
    fn test_two_points_are_never_closed() {
        let pair = [Point3d::origin(), Point3d::origin()];
        assert!(!is_closed(&pair));
        assert!(!is_closed_within_tolerance(&pair, 1.0));
    }

    #[test]
    fn test_closed_within_tolerance() {
        let mut points = square();
        points.remove(4);
        points.push_xyz(0.0, 0.001, 0.0);
        assert!(!is_closed(&points));
        assert!(is_closed_within_tolerance(&points, 0.01));
        assert!(!is_closed_within_tolerance(&points, 0.0001));
        assert!(!is_closed_within_tolerance(&points, -1.0));
    }
}
