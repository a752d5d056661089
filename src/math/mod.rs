pub mod polygon;
pub mod units;

pub use units::LengthUnit;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the point halfway between `a` and `b`.
///
/// Computed as `(a + b) / 2` per coordinate so repeated calls on the same
/// inputs are bit-identical.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    Point3::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_symmetric() {
        let a = Point3::new(-1.5, 2.0, 0.0);
        let b = Point3::new(3.5, -4.0, 1.0);
        assert_eq!(midpoint(&a, &b), midpoint(&b, &a));
        assert_eq!(midpoint(&a, &b), Point3::new(1.0, -1.0, 0.5));
    }
}
