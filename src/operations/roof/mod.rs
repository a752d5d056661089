mod profile;

pub use profile::{gable_profile, GableProfile};

use crate::error::{GeometryError, Result};
use crate::model::{CatalogTypeId, Category, Document, LevelId, Roof, RoofId, WallId};

/// Vertical rises of a gable roof, in internal units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofParams {
    /// Height of the eaves above the roof level.
    pub eave_rise: f64,
    /// Height of the ridge above the eaves.
    pub ridge_rise: f64,
}

impl Default for RoofParams {
    fn default() -> Self {
        Self {
            eave_rise: 1.3,
            ridge_rise: 3.0,
        }
    }
}

impl RoofParams {
    /// Checks that both rises are finite and the ridge rises above the eaves.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] describing the offending value.
    pub fn validate(&self) -> Result<()> {
        if !self.eave_rise.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "eave rise {} is not finite",
                self.eave_rise
            ))
            .into());
        }
        if !self.ridge_rise.is_finite() || self.ridge_rise <= 0.0 {
            return Err(GeometryError::NonPositive {
                parameter: "ridge rise",
                value: self.ridge_rise,
            }
            .into());
        }
        Ok(())
    }
}

/// Builds a gable roof by extruding the profile derived from the walls.
#[derive(Debug, Clone)]
pub struct ExtrusionRoof {
    profile: GableProfile,
    level: LevelId,
    roof_type: CatalogTypeId,
}

impl ExtrusionRoof {
    /// Creates a new `ExtrusionRoof` operation over the four footprint walls.
    #[must_use]
    pub fn new(walls: Vec<WallId>, level: LevelId, roof_type: CatalogTypeId) -> Self {
        Self {
            profile: GableProfile::new(walls, level),
            level,
            roof_type,
        }
    }

    /// Overrides the eave and ridge rises.
    #[must_use]
    pub fn with_params(mut self, params: RoofParams) -> Self {
        self.profile = self.profile.with_params(params);
        self
    }

    /// Executes the operation as its own unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error if the roof type is missing or not a roof type, or
    /// the profile cannot be derived. Nothing is committed on error.
    pub fn execute(&self, doc: &mut Document) -> Result<RoofId> {
        doc.transact("Create extrusion roof", |doc| {
            doc.catalog().get_in(self.roof_type, Category::Roof)?;
            let profile = self.profile.execute(doc)?;
            Ok(doc.add_roof(Roof {
                profile,
                level: self.level,
                roof_type: self.roof_type,
            }))
        })
    }
}
