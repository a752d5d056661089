use super::{Point3, TOLERANCE};

/// Signed area of a closed loop projected onto XY (shoelace formula).
///
/// Counter-clockwise loops give a positive area. The loop is closed
/// implicitly; a repeated closing point adds a zero-area term.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let next = points.iter().cycle().skip(1);
    points
        .iter()
        .zip(next)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        / 2.0
}

/// Returns the vertex average of a polygon, ignoring a repeated closing point.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn vertex_centroid(points: &[Point3]) -> Option<Point3> {
    let open = match points {
        [] => return None,
        [first, .., last] if (first - last).norm() < TOLERANCE => &points[..points.len() - 1],
        _ => points,
    };
    #[allow(clippy::cast_precision_loss)]
    let n = open.len() as f64;
    let sum = open
        .iter()
        .fold(Point3::origin().coords, |acc, p| acc + p.coords);
    Some(Point3::from(sum / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(ccw: bool) -> Vec<Point3> {
        let mut pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        if !ccw {
            pts.reverse();
        }
        pts
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area_2d(&square(true)) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        assert!((signed_area_2d(&square(false)) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point3::new(0.0, 0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn closing_point_is_ignored_by_centroid() {
        let mut pts = square(true);
        pts.push(pts[0]);
        let c = vertex_centroid(&pts);
        assert_eq!(c, Some(Point3::new(0.5, 0.5, 0.0)));
        assert_eq!(vertex_centroid(&[]), None);
    }
}
