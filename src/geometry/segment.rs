use crate::error::{GeometryError, Result};
use crate::math::{midpoint, Point3, Vector3, TOLERANCE};

/// A bounded straight segment from `start` to `end`.
///
/// Construction rejects zero-length segments, so every `Segment` has a
/// well-defined direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point3,
    end: Point3,
}

impl Segment {
    /// Creates a new segment between two points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points coincide or any
    /// coordinate is not finite.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        if !start.iter().chain(end.iter()).all(|c| c.is_finite()) {
            return Err(GeometryError::Degenerate(format!(
                "segment endpoints must be finite: {start} -> {end}"
            ))
            .into());
        }
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "zero-length segment at {start}"
            ))
            .into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the point halfway along the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        midpoint(&self.start, &self.end)
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns the unit direction from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        (self.end - self.start) / self.length()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn length_and_direction_3_4_5() {
        let s = Segment::new(p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0)).unwrap();
        assert_relative_eq!(s.length(), 5.0);
        assert_relative_eq!(s.direction(), Vector3::new(0.6, 0.8, 0.0));
        assert_eq!(s.midpoint(), p(1.5, 2.0, 0.0));
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(Segment::new(p(1.0, 1.0, 0.0), p(1.0, 1.0, 0.0)).is_err());
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(Segment::new(p(f64::NAN, 0.0, 0.0), p(1.0, 1.0, 0.0)).is_err());
        assert!(Segment::new(p(0.0, 0.0, 0.0), p(f64::INFINITY, 1.0, 0.0)).is_err());
    }
}
