use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Segment;
use crate::model::{CatalogTypeId, Category, Document, LevelId, Wall, WallId};

/// Creates one wall per centerline segment between a base and a top level.
///
/// All walls are created in a single unit of work: either every wall is
/// committed or none is.
#[derive(Debug, Clone)]
pub struct CreateWalls {
    segments: Vec<Segment>,
    base_level: LevelId,
    top_level: LevelId,
    wall_type: Option<CatalogTypeId>,
}

impl CreateWalls {
    /// Creates a new `CreateWalls` operation using the catalog's default
    /// wall type.
    #[must_use]
    pub fn new(segments: Vec<Segment>, base_level: LevelId, top_level: LevelId) -> Self {
        Self {
            segments,
            base_level,
            top_level,
            wall_type: None,
        }
    }

    /// Uses an explicit wall type instead of the catalog default.
    #[must_use]
    pub fn with_wall_type(mut self, wall_type: CatalogTypeId) -> Self {
        self.wall_type = Some(wall_type);
        self
    }

    /// Executes the operation, returning the wall IDs in segment order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no segments, a level is missing, the
    /// top level is not above the base level, or the wall type cannot be
    /// resolved to a positive thickness. Nothing is committed on error.
    pub fn execute(&self, doc: &mut Document) -> Result<Vec<WallId>> {
        if self.segments.is_empty() {
            return Err(OperationError::InvalidInput("no wall segments given".into()).into());
        }
        let base = doc.level(self.base_level)?.elevation;
        let top = doc.level(self.top_level)?.elevation;
        if top <= base {
            return Err(GeometryError::InvertedLevels { base, top }.into());
        }

        let wall_type = match self.wall_type {
            Some(id) => id,
            None => doc.catalog().default_type(Category::Wall)?,
        };
        let thickness = doc
            .catalog()
            .get_in(wall_type, Category::Wall)?
            .width
            .unwrap_or(0.0);
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(GeometryError::NonPositive {
                parameter: "wall thickness",
                value: thickness,
            }
            .into());
        }

        doc.transact("Create walls", |doc| {
            let mut walls = Vec::with_capacity(self.segments.len());
            for segment in &self.segments {
                let id = doc.add_wall(Wall {
                    centerline: *segment,
                    base_level: self.base_level,
                    top_level: None,
                    wall_type,
                    thickness,
                });
                doc.set_wall_top_level(id, self.top_level)?;
                walls.push(id);
            }
            tracing::debug!(count = walls.len(), thickness, height = top - base, "walls created");
            Ok(walls)
        })
    }
}
