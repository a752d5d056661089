use crate::error::{Result, TessellationError};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::model::RoofProfile;

use super::TriangleMesh;

/// Tessellates the two sloped surfaces of an extruded gable roof.
///
/// Each profile point is moved onto the plane through the origin
/// orthogonal to the extrusion axis, then swept from `extrusion_start` to
/// `extrusion_end`. Every slope becomes one quad (two triangles) with its
/// own upward-facing normal.
pub struct TessellateRoof<'a> {
    profile: &'a RoofProfile,
}

impl<'a> TessellateRoof<'a> {
    /// Creates a new `TessellateRoof` operation.
    #[must_use]
    pub fn new(profile: &'a RoofProfile) -> Self {
        Self { profile }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidInput`] if the extrusion span is
    /// empty or a slope is degenerate.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let p = self.profile;
        if (p.extrusion_start - p.extrusion_end).abs() < TOLERANCE {
            return Err(TessellationError::InvalidInput("empty extrusion span".into()).into());
        }

        let axis = p.axis;
        let centred = |pt: &Point3| pt - axis * pt.coords.dot(&axis);
        let profile = [centred(&p.eave_start), centred(&p.ridge), centred(&p.eave_end)];

        let mut mesh = TriangleMesh::default();
        for pair in profile.windows(2) {
            let slope = slope_quad(pair[0], pair[1], axis, p.extrusion_start, p.extrusion_end)?;
            mesh.merge(&slope);
        }
        Ok(mesh)
    }
}

fn slope_quad(
    from: Point3,
    to: Point3,
    axis: Vector3,
    start: f64,
    end: f64,
) -> Result<TriangleMesh> {
    let corners = [
        from + axis * start,
        to + axis * start,
        to + axis * end,
        from + axis * end,
    ];
    let normal = (corners[1] - corners[0]).cross(&(corners[3] - corners[0]));
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(TessellationError::InvalidInput("degenerate roof slope".into()).into());
    }
    let mut normal = normal / len;

    let mut indices = vec![[0, 1, 2], [0, 2, 3]];
    if normal.z < 0.0 {
        normal = -normal;
        for tri in &mut indices {
            tri.swap(1, 2);
        }
    }

    Ok(TriangleMesh {
        vertices: corners.to_vec(),
        normals: vec![normal; 4],
        uvs: vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ],
        indices,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Segment;
    use crate::math::LengthUnit;
    use crate::operations::footprint::RectangularFootprint;
    use crate::operations::roof::{gable_profile, RoofParams};

    fn profile() -> RoofProfile {
        let segments: Vec<Segment> = RectangularFootprint::new(8.0, 4.0, LengthUnit::Feet)
            .execute()
            .unwrap()
            .segments()
            .to_vec();
        let params = RoofParams {
            eave_rise: 1.0,
            ridge_rise: 3.0,
        };
        gable_profile(&segments, 10.0, 1.0, &params).unwrap()
    }

    #[test]
    fn gable_has_two_quads() {
        let mesh = TessellateRoof::new(&profile()).execute().unwrap();
        assert_eq!(mesh.indices.len(), 4);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
        assert_eq!(mesh.vertices.len(), mesh.uvs.len());
    }

    #[test]
    fn normals_point_up_and_are_unit() {
        let mesh = TessellateRoof::new(&profile()).execute().unwrap();
        for n in &mesh.normals {
            assert!(n.z > 0.0, "normal {n:?} should face up");
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        }
        for &[a, b, c] in &mesh.indices {
            let (pa, pb, pc) = (
                mesh.vertices[a as usize],
                mesh.vertices[b as usize],
                mesh.vertices[c as usize],
            );
            assert!((pb - pa).cross(&(pc - pa)).z > 0.0);
        }
    }

    #[test]
    fn surface_area_matches_slopes() {
        // Eaves 3 ft either side of the ridge, rising 3 ft; span 2 * (4 + 1).
        let mesh = TessellateRoof::new(&profile()).execute().unwrap();
        let slope = (3.0_f64 * 3.0 + 3.0 * 3.0).sqrt();
        assert_relative_eq!(mesh.area(), 2.0 * slope * 10.0, epsilon = 1e-9);
    }

    #[test]
    fn swept_points_are_centred_on_the_axis() {
        let mesh = TessellateRoof::new(&profile()).execute().unwrap();
        let xs: Vec<f64> = mesh.vertices.iter().map(|v| v.x).collect();
        let max = xs.iter().copied().fold(f64::MIN, f64::max);
        let min = xs.iter().copied().fold(f64::MAX, f64::min);
        assert_relative_eq!(max, 5.0);
        assert_relative_eq!(min, -5.0);
    }

    #[test]
    fn empty_span_is_rejected() {
        let mut p = profile();
        p.extrusion_end = p.extrusion_start;
        assert!(TessellateRoof::new(&p).execute().is_err());
    }
}
