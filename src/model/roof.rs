use crate::error::Result;
use crate::geometry::{ReferencePlane, Segment};
use crate::math::{Point3, Vector3};

use super::catalog::CatalogTypeId;
use super::level::LevelId;

slotmap::new_key_type! {
    /// Unique identifier for a roof in the document.
    pub struct RoofId;
}

/// Open two-segment gable cross-section plus its extrusion span.
///
/// The profile runs `eave_start -> ridge -> eave_end` in a vertical plane
/// orthogonal to `axis`, and is swept along `axis` from `extrusion_start`
/// to `extrusion_end` (both measured from the world origin).
#[derive(Debug, Clone, PartialEq)]
pub struct RoofProfile {
    pub eave_start: Point3,
    pub ridge: Point3,
    pub eave_end: Point3,
    /// Unit extrusion direction (the long-wall axis).
    pub axis: Vector3,
    pub extrusion_start: f64,
    pub extrusion_end: f64,
    /// Plane used to place the sketch.
    pub plane: ReferencePlane,
}

impl RoofProfile {
    /// Returns the two profile segments, eave to ridge and ridge to eave.
    ///
    /// # Errors
    ///
    /// Returns an error if the ridge coincides with an eave point.
    pub fn segments(&self) -> Result<[Segment; 2]> {
        Ok([
            Segment::new(self.eave_start, self.ridge)?,
            Segment::new(self.ridge, self.eave_end)?,
        ])
    }
}

/// A roof created by extruding a [`RoofProfile`].
#[derive(Debug, Clone, PartialEq)]
pub struct Roof {
    pub profile: RoofProfile,
    /// The level the roof is anchored to.
    pub level: LevelId,
    pub roof_type: CatalogTypeId,
}
