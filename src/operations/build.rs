use crate::error::{OperationError, Result};
use crate::math::LengthUnit;
use crate::model::{CatalogTypeId, Category, Document, OpeningId, RoofId, WallId};

use super::footprint::RectangularFootprint;
use super::openings::PlaceOpening;
use super::roof::{ExtrusionRoof, RoofParams};
use super::walls::CreateWalls;

/// A catalog type named by family and type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub family: String,
    pub name: String,
}

impl TypeRef {
    /// Creates a new type reference.
    #[must_use]
    pub fn new(family: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            name: name.into(),
        }
    }

    fn resolve(&self, doc: &Document, category: Category) -> Result<CatalogTypeId> {
        doc.catalog().find(category, &self.family, &self.name)
    }
}

/// Inputs of a building generation run.
#[derive(Debug, Clone)]
pub struct BuildingConfig {
    /// Footprint extent along X, in `unit`.
    pub width: f64,
    /// Footprint extent along Y, in `unit`.
    pub depth: f64,
    /// Window sill height above the base level, in `unit`.
    pub sill_height: f64,
    /// Display unit of the lengths above.
    pub unit: LengthUnit,
    /// Name of the level the walls stand on.
    pub base_level: String,
    /// Name of the level that bounds the walls and carries the roof.
    pub top_level: String,
    /// Wall type; `None` uses the catalog's default wall type.
    pub wall_type: Option<TypeRef>,
    pub door_type: TypeRef,
    pub window_type: TypeRef,
    pub roof_type: TypeRef,
    pub roof: RoofParams,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            width: 10_000.0,
            depth: 5_000.0,
            sill_height: 900.0,
            unit: LengthUnit::Millimeters,
            base_level: "Level 1".into(),
            top_level: "Level 2".into(),
            wall_type: None,
            door_type: TypeRef::new("Single-Flush", "0915 x 2134mm"),
            window_type: TypeRef::new("Fixed", "0915 x 1830mm"),
            roof_type: TypeRef::new("Basic Roof", "Generic - 400mm"),
            roof: RoofParams::default(),
        }
    }
}

/// The elements created by one [`BuildHouse`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    /// Front, right, back and left walls.
    pub walls: Vec<WallId>,
    pub door: OpeningId,
    /// One window per wall after the first.
    pub windows: Vec<OpeningId>,
    pub roof: RoofId,
}

/// Generates a four-wall house with a door, windows and a gable roof.
///
/// Runs: resolve levels and types, build walls, place the door on the
/// first wall, place a window on each other wall, build the roof. Each
/// step is its own unit of work; the first failure aborts the run.
#[derive(Debug, Clone)]
pub struct BuildHouse {
    config: BuildingConfig,
}

impl BuildHouse {
    /// Creates a new `BuildHouse` command.
    #[must_use]
    pub fn new(config: BuildingConfig) -> Self {
        Self { config }
    }

    /// Executes the command against `doc`.
    ///
    /// # Errors
    ///
    /// Returns the first lookup, validation or geometry error encountered.
    /// Steps committed before the failure stay in the document.
    pub fn execute(&self, doc: &mut Document) -> Result<House> {
        let cfg = &self.config;
        tracing::info!(
            width = cfg.width,
            depth = cfg.depth,
            unit = %cfg.unit,
            "building house"
        );

        let base = doc.find_level(&cfg.base_level)?;
        let top = doc.find_level(&cfg.top_level)?;
        let wall_type = match &cfg.wall_type {
            Some(ty) => ty.resolve(doc, Category::Wall)?,
            None => doc.catalog().default_type(Category::Wall)?,
        };
        let door_type = cfg.door_type.resolve(doc, Category::Door)?;
        let window_type = cfg.window_type.resolve(doc, Category::Window)?;
        let roof_type = cfg.roof_type.resolve(doc, Category::Roof)?;

        let footprint = RectangularFootprint::new(cfg.width, cfg.depth, cfg.unit).execute()?;
        let walls = CreateWalls::new(footprint.segments().to_vec(), base, top)
            .with_wall_type(wall_type)
            .execute(doc)?;

        let (&front, rest) = walls
            .split_first()
            .ok_or_else(|| OperationError::Failed("no walls were created".into()))?;
        let door = PlaceOpening::door(front, door_type, base).execute(doc)?;
        let windows = rest
            .iter()
            .map(|&wall| {
                PlaceOpening::window(wall, window_type, base, cfg.sill_height, cfg.unit)
                    .execute(doc)
            })
            .collect::<Result<Vec<_>>>()?;

        let roof = ExtrusionRoof::new(walls.clone(), top, roof_type)
            .with_params(cfg.roof)
            .execute(doc)?;

        tracing::info!(walls = walls.len(), windows = windows.len(), "house built");
        Ok(House {
            walls,
            door,
            windows,
            roof,
        })
    }
}
