use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An oriented reference plane used to place a sketch profile.
///
/// Defined by an origin, a normal and an "up" direction lying in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePlane {
    origin: Point3,
    normal: Vector3,
    up: Vector3,
}

impl ReferencePlane {
    /// Creates a new reference plane.
    ///
    /// The `up` vector is projected onto the plane before normalisation.
    ///
    /// # Errors
    ///
    /// Returns an error if either vector is zero-length or `up` is parallel
    /// to `normal`.
    pub fn new(origin: Point3, normal: Vector3, up: Vector3) -> Result<Self> {
        let n_len = normal.norm();
        if n_len < TOLERANCE || up.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / n_len;

        let up = up - normal * up.dot(&normal);
        let up_len = up.norm();
        if up_len < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "plane up direction is parallel to its normal".into(),
            )
            .into());
        }

        Ok(Self {
            origin,
            normal,
            up: up / up_len,
        })
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the unit up direction.
    #[must_use]
    pub fn up(&self) -> &Vector3 {
        &self.up
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn axes_are_normalised() {
        let plane =
            ReferencePlane::new(Point3::origin(), Vector3::z() * 3.0, Vector3::y() * 0.5).unwrap();
        assert_eq!(*plane.normal(), Vector3::z());
        assert_eq!(*plane.up(), Vector3::y());
    }

    #[test]
    fn tilted_up_is_projected_into_plane() {
        let plane =
            ReferencePlane::new(Point3::origin(), Vector3::z(), Vector3::new(0.0, 1.0, 1.0))
                .unwrap();
        assert_relative_eq!(*plane.up(), Vector3::y());
    }

    #[test]
    fn parallel_up_is_rejected() {
        let result = ReferencePlane::new(Point3::origin(), Vector3::z(), Vector3::z() * 2.0);
        assert!(result.is_err());
        assert!(ReferencePlane::new(Point3::origin(), Vector3::zeros(), Vector3::y()).is_err());
    }
}
