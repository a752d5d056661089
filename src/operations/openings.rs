use crate::error::{OperationError, Result};
use crate::math::{LengthUnit, Point3};
use crate::model::{CatalogTypeId, Category, Document, LevelId, Opening, OpeningId, WallId};

/// Computes where a hosted instance is inserted on a wall: the midpoint of
/// the wall's centerline, optionally raised by a vertical offset.
#[derive(Debug, Clone, Copy)]
pub struct InsertionPoint {
    wall: WallId,
    offset: Option<(f64, LengthUnit)>,
}

impl InsertionPoint {
    /// Creates a new query with no vertical offset.
    #[must_use]
    pub fn new(wall: WallId) -> Self {
        Self { wall, offset: None }
    }

    /// Raises the point by `offset`, given in `unit`.
    #[must_use]
    pub fn with_offset(mut self, offset: f64, unit: LengthUnit) -> Self {
        self.offset = Some((offset, unit));
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is missing or the offset cannot be
    /// converted to internal units.
    pub fn execute(&self, doc: &Document) -> Result<Point3> {
        let mut point = doc.wall(self.wall)?.centerline.midpoint();
        if let Some((offset, unit)) = self.offset {
            point.z += unit.to_internal(offset)?;
        }
        Ok(point)
    }
}

/// Everything needed to insert one door or window.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningPlacement {
    pub wall: WallId,
    pub opening_type: CatalogTypeId,
    pub category: Category,
    pub level: LevelId,
    pub point: Point3,
}

/// Inserts a door or window at the middle of a wall.
#[derive(Debug, Clone, Copy)]
pub struct PlaceOpening {
    category: Category,
    wall: WallId,
    opening_type: CatalogTypeId,
    level: LevelId,
    sill: Option<(f64, LengthUnit)>,
}

impl PlaceOpening {
    /// A door, inserted at the wall's base.
    #[must_use]
    pub fn door(wall: WallId, door_type: CatalogTypeId, level: LevelId) -> Self {
        Self {
            category: Category::Door,
            wall,
            opening_type: door_type,
            level,
            sill: None,
        }
    }

    /// A window whose insertion point is raised by `sill_height` in `unit`.
    #[must_use]
    pub fn window(
        wall: WallId,
        window_type: CatalogTypeId,
        level: LevelId,
        sill_height: f64,
        unit: LengthUnit,
    ) -> Self {
        Self {
            category: Category::Window,
            wall,
            opening_type: window_type,
            level,
            sill: Some((sill_height, unit)),
        }
    }

    /// Resolves the placement without modifying the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall, level or type is missing, or the type
    /// belongs to another category.
    pub fn placement(&self, doc: &Document) -> Result<OpeningPlacement> {
        doc.catalog().get_in(self.opening_type, self.category)?;
        doc.level(self.level)?;

        let mut query = InsertionPoint::new(self.wall);
        if let Some((height, unit)) = self.sill {
            query = query.with_offset(height, unit);
        }
        let point = query.execute(doc)?;

        Ok(OpeningPlacement {
            wall: self.wall,
            opening_type: self.opening_type,
            category: self.category,
            level: self.level,
            point,
        })
    }

    /// Executes the operation as its own unit of work. The type is
    /// activated first if it is inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the placement cannot be resolved. Nothing is
    /// committed on error.
    pub fn execute(&self, doc: &mut Document) -> Result<OpeningId> {
        let name = match self.category {
            Category::Door => "Insert door",
            Category::Window => "Insert window",
            other => {
                return Err(OperationError::InvalidInput(format!(
                    "a {other} cannot be hosted as an opening"
                ))
                .into())
            }
        };

        doc.transact(name, |doc| {
            let placement = self.placement(doc)?;
            if doc.catalog_mut().activate(placement.opening_type)? {
                tracing::debug!(category = %placement.category, "type activated");
            }
            tracing::debug!(
                category = %placement.category,
                x = placement.point.x,
                y = placement.point.y,
                z = placement.point.z,
                "opening placed"
            );
            Ok(doc.add_opening(Opening {
                host: placement.wall,
                opening_type: placement.opening_type,
                category: placement.category,
                level: placement.level,
                point: placement.point,
            }))
        })
    }
}
