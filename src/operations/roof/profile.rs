use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{ReferencePlane, Segment};
use crate::math::polygon::{signed_area_2d, vertex_centroid};
use crate::math::{midpoint, Point3, Vector3, TOLERANCE};
use crate::model::{Document, LevelId, RoofProfile, WallId};
use crate::operations::footprint::{classify_axes, WallAxis};

use super::RoofParams;

/// Derives the gable cross-section and extrusion span from a set of walls.
#[derive(Debug, Clone)]
pub struct GableProfile {
    walls: Vec<WallId>,
    level: LevelId,
    params: RoofParams,
}

impl GableProfile {
    /// Creates a new `GableProfile` query over the four walls of a
    /// rectangular footprint, in footprint order, for a roof based on `level`.
    #[must_use]
    pub fn new(walls: Vec<WallId>, level: LevelId) -> Self {
        Self {
            walls,
            level,
            params: RoofParams::default(),
        }
    }

    /// Overrides the eave and ridge rises.
    #[must_use]
    pub fn with_params(mut self, params: RoofParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query. Wall thickness is read from the first wall.
    ///
    /// # Errors
    ///
    /// Returns an error if a wall or the level is missing, if the roof
    /// level is not above every wall's base level, or if the walls do not
    /// form an axis-aligned closed rectangle.
    pub fn execute(&self, doc: &Document) -> Result<RoofProfile> {
        let elevation = doc.level(self.level)?.elevation;
        let mut centerlines = Vec::with_capacity(self.walls.len());
        let mut thicknesses = Vec::with_capacity(self.walls.len());
        for &id in &self.walls {
            let wall = doc.wall(id)?;
            let base = doc.level(wall.base_level)?.elevation;
            if elevation <= base {
                return Err(GeometryError::InvertedLevels {
                    base,
                    top: elevation,
                }
                .into());
            }
            centerlines.push(wall.centerline);
            thicknesses.push(wall.thickness);
        }

        let Some(&thickness) = thicknesses.first() else {
            return Err(OperationError::InvalidInput("no walls given for the roof".into()).into());
        };
        if thicknesses.iter().any(|t| (t - thickness).abs() > TOLERANCE) {
            tracing::warn!(thickness, "walls have differing thickness, using the first");
        }

        gable_profile(&centerlines, elevation, thickness, &self.params)
    }
}

/// Computes a gable profile from wall centerlines.
///
/// The first short-axis wall carries the cross-section. Its endpoints are
/// pushed outward along the wall by one full `thickness` and lifted to
/// `elevation + eave_rise` to form the eaves; the ridge sits above their
/// midpoint by `ridge_rise`. The first long-axis wall gives the extrusion
/// axis, and the span covers half its length plus one thickness on each
/// side of the origin.
///
/// # Errors
///
/// Returns [`GeometryError`] if the centerlines are not a closed,
/// axis-aligned rectangle of four walls, or if `thickness` is not positive.
pub fn gable_profile(
    centerlines: &[Segment],
    elevation: f64,
    thickness: f64,
    params: &RoofParams,
) -> Result<RoofProfile> {
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(GeometryError::NonPositive {
            parameter: "wall thickness",
            value: thickness,
        }
        .into());
    }
    if !elevation.is_finite() {
        return Err(GeometryError::Degenerate("roof level elevation is not finite".into()).into());
    }
    params.validate()?;
    check_rectangle(centerlines)?;

    let axes = classify_axes(centerlines)?;
    let pick = |axis: WallAxis| {
        axes.iter()
            .position(|&a| a == axis)
            .map(|i| centerlines[i])
            .ok_or_else(|| GeometryError::Degenerate(format!("no {axis:?} wall")))
    };
    let cross = pick(WallAxis::Short)?;
    let long = pick(WallAxis::Long)?;

    let dt = thickness / 2.0;
    let overhang = 2.0 * dt;

    let lateral = cross.direction();
    let p1 = cross.start();
    let p2 = cross.end();
    let eave_start = Point3::new(
        p1.x - lateral.x * overhang,
        p1.y - lateral.y * overhang,
        p1.z + elevation + params.eave_rise,
    );
    let eave_end = Point3::new(
        p2.x + lateral.x * overhang,
        p2.y + lateral.y * overhang,
        p2.z + elevation + params.eave_rise,
    );
    let mut ridge = midpoint(&eave_start, &eave_end);
    ridge.z += params.ridge_rise;

    let axis = long.direction();
    let extrusion_start = (long.end() - long.start()).dot(&axis) / 2.0 + overhang;
    let extrusion_end = -extrusion_start;

    let plane = ReferencePlane::new(Point3::origin(), Vector3::z(), Vector3::y())?;

    tracing::debug!(
        eave_z = eave_start.z,
        ridge_z = ridge.z,
        extrusion_start,
        extrusion_end,
        "gable profile computed"
    );

    Ok(RoofProfile {
        eave_start,
        ridge,
        eave_end,
        axis,
        extrusion_start,
        extrusion_end,
        plane,
    })
}

/// Rejects anything but four connected, mutually perpendicular, horizontal
/// edges running counter-clockwise around the origin.
///
/// The extrusion span is symmetric about the origin, so an off-centre
/// rectangle would leave part of the footprint uncovered.
fn check_rectangle(centerlines: &[Segment]) -> Result<()> {
    if centerlines.len() != 4 {
        return Err(GeometryError::Degenerate(format!(
            "a gable roof needs 4 walls, got {}",
            centerlines.len()
        ))
        .into());
    }
    for (i, seg) in centerlines.iter().enumerate() {
        let next = &centerlines[(i + 1) % 4];
        if (next.start() - seg.end()).norm() > TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "wall {i} does not connect to wall {}",
                (i + 1) % 4
            ))
            .into());
        }
        if seg.direction().z.abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(format!("wall {i} is not horizontal")).into());
        }
        if seg.direction().dot(&next.direction()).abs() > 1e-9 {
            return Err(GeometryError::Degenerate(format!(
                "walls {i} and {} are not perpendicular",
                (i + 1) % 4
            ))
            .into());
        }
    }

    let corners: Vec<Point3> = centerlines.iter().map(|seg| *seg.start()).collect();
    if signed_area_2d(&corners) <= 0.0 {
        return Err(GeometryError::Degenerate("walls must run counter-clockwise".into()).into());
    }
    if let Some(centre) = vertex_centroid(&corners) {
        if centre.x.abs() > 1e-9 || centre.y.abs() > 1e-9 {
            return Err(GeometryError::Degenerate(format!(
                "footprint is centred on {centre}, not on the origin"
            ))
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::GablehouseError;
    use crate::math::LengthUnit;
    use crate::operations::footprint::RectangularFootprint;

    const MM: f64 = 1.0 / 304.8;

    fn centerlines(width: f64, depth: f64) -> Vec<Segment> {
        RectangularFootprint::new(width, depth, LengthUnit::Millimeters)
            .execute()
            .unwrap()
            .segments()
            .to_vec()
    }

    fn default_profile(thickness: f64) -> RoofProfile {
        gable_profile(
            &centerlines(10_000.0, 5_000.0),
            4000.0 * MM,
            thickness,
            &RoofParams::default(),
        )
        .unwrap()
    }

    // ── Default footprint ──────────────────────────────────────

    #[test]
    fn eaves_follow_the_right_wall_exactly() {
        let thickness = 200.0 * MM;
        let dt = thickness / 2.0;
        let segs = centerlines(10_000.0, 5_000.0);
        let p1 = *segs[1].start();
        let p2 = *segs[1].end();
        let elevation = 4000.0 * MM;

        let profile = default_profile(thickness);
        assert_eq!(
            profile.eave_start,
            Point3::new(p1.x, p1.y - 2.0 * dt, p1.z + elevation + 1.3)
        );
        assert_eq!(
            profile.eave_end,
            Point3::new(p2.x, p2.y + 2.0 * dt, p2.z + elevation + 1.3)
        );
    }

    #[test]
    fn extrusion_spans_the_front_wall() {
        let thickness = 200.0 * MM;
        let segs = centerlines(10_000.0, 5_000.0);
        let expected = (segs[0].end().x - segs[0].start().x) / 2.0 + thickness;

        let profile = default_profile(thickness);
        assert_eq!(profile.extrusion_start, expected);
        assert_eq!(profile.extrusion_end, -profile.extrusion_start);
        assert_eq!(profile.axis, Vector3::x());
    }

    #[test]
    fn reference_plane_is_world_xy_with_y_up() {
        let profile = default_profile(200.0 * MM);
        assert_eq!(*profile.plane.origin(), Point3::origin());
        assert_eq!(*profile.plane.normal(), Vector3::z());
        assert_eq!(*profile.plane.up(), Vector3::y());
    }

    #[test]
    fn ridge_is_three_units_above_the_eaves() {
        for thickness_mm in [100.0, 200.0, 365.0, 500.0] {
            let profile = default_profile(thickness_mm * MM);
            assert_relative_eq!(profile.ridge.z - profile.eave_start.z, 3.0, epsilon = 1e-12);
            assert_relative_eq!(profile.ridge.z - profile.eave_end.z, 3.0, epsilon = 1e-12);
            assert!(profile.ridge.z > profile.eave_start.z);
        }
    }

    #[test]
    fn eaves_are_symmetric_about_the_ridge() {
        let thickness = 250.0 * MM;
        let profile = default_profile(thickness);
        let dy = 5_000.0 * MM / 2.0;
        assert_relative_eq!(profile.eave_start.y, -dy - thickness, epsilon = 1e-12);
        assert_relative_eq!(profile.eave_end.y, dy + thickness, epsilon = 1e-12);
        assert_relative_eq!(profile.ridge.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(profile.ridge.x, profile.eave_start.x);
    }

    #[test]
    fn profile_has_two_open_segments() {
        let profile = default_profile(200.0 * MM);
        let [up, down] = profile.segments().unwrap();
        assert_eq!(*up.end(), *down.start());
        assert_ne!(*up.start(), *down.end());
    }

    // ── Classification ─────────────────────────────────────────

    #[test]
    fn deep_footprint_turns_the_roof() {
        let thickness = 200.0 * MM;
        let profile = gable_profile(
            &centerlines(4_000.0, 9_000.0),
            0.0,
            thickness,
            &RoofParams::default(),
        )
        .unwrap();
        assert_eq!(profile.axis, Vector3::y());
        assert_eq!(*profile.plane.up(), Vector3::y());
        assert_eq!(*profile.plane.normal(), Vector3::z());
        assert_relative_eq!(
            profile.extrusion_start,
            9_000.0 * MM / 2.0 + thickness,
            epsilon = 1e-12
        );
        assert_relative_eq!(profile.eave_start.x, -4_000.0 * MM / 2.0 - thickness, epsilon = 1e-12);
        assert_relative_eq!(profile.eave_end.x, 4_000.0 * MM / 2.0 + thickness, epsilon = 1e-12);
    }

    #[test]
    fn custom_rises_are_applied() {
        let params = RoofParams {
            eave_rise: 0.5,
            ridge_rise: 6.0,
        };
        let profile = gable_profile(&centerlines(8_000.0, 6_000.0), 10.0, 0.5, &params).unwrap();
        assert_relative_eq!(profile.eave_start.z, 10.5);
        assert_relative_eq!(profile.ridge.z, 16.5);
    }

    // ── Error cases ────────────────────────────────────────────

    #[test]
    fn non_positive_thickness_is_rejected() {
        for t in [0.0, -0.2, f64::NAN] {
            let err = gable_profile(&centerlines(10_000.0, 5_000.0), 0.0, t, &RoofParams::default())
                .unwrap_err();
            assert!(matches!(err, GablehouseError::Geometry(_)));
        }
    }

    #[test]
    fn open_or_short_wall_lists_are_rejected() {
        let segs = centerlines(10_000.0, 5_000.0);
        assert!(gable_profile(&segs[..3], 0.0, 0.5, &RoofParams::default()).is_err());
        let mut swapped = segs.clone();
        swapped.swap(0, 2);
        assert!(gable_profile(&swapped, 0.0, 0.5, &RoofParams::default()).is_err());
    }

    #[test]
    fn skewed_walls_are_rejected() {
        let p = |x: f64, y: f64| Point3::new(x, y, 0.0);
        let quad = [p(0.0, 0.0), p(10.0, 0.0), p(12.0, 5.0), p(2.0, 5.0)];
        let segs: Vec<Segment> = (0..4)
            .map(|i| Segment::new(quad[i], quad[(i + 1) % 4]).unwrap())
            .collect();
        assert!(gable_profile(&segs, 0.0, 0.5, &RoofParams::default()).is_err());
    }

    #[test]
    fn clockwise_walls_are_rejected() {
        let segs: Vec<Segment> = centerlines(10_000.0, 5_000.0)
            .iter()
            .rev()
            .map(|seg| Segment::new(*seg.end(), *seg.start()).unwrap())
            .collect();
        let err = gable_profile(&segs, 0.0, 0.5, &RoofParams::default()).unwrap_err();
        assert!(err.to_string().contains("counter-clockwise"));
    }

    #[test]
    fn off_centre_footprint_is_rejected() {
        let shift = Vector3::new(3.0, 0.0, 0.0);
        let segs: Vec<Segment> = centerlines(10_000.0, 5_000.0)
            .iter()
            .map(|seg| Segment::new(seg.start() + shift, seg.end() + shift).unwrap())
            .collect();
        let err = gable_profile(&segs, 0.0, 0.5, &RoofParams::default()).unwrap_err();
        assert!(matches!(err, GablehouseError::Geometry(GeometryError::Degenerate(_))));
    }
}
