pub mod catalog;
pub mod level;
pub mod opening;
pub mod roof;
pub mod wall;

pub use catalog::{Catalog, CatalogType, CatalogTypeId, Category};
pub use level::{Level, LevelId};
pub use opening::{Opening, OpeningId};
pub use roof::{Roof, RoofId, RoofProfile};
pub use wall::{Wall, WallId};

use slotmap::SlotMap;

use crate::error::{GeometryError, LookupError, ModelError, Result};

/// The building model being edited.
///
/// Owns every level, wall, opening and roof, plus the type catalog.
/// Elements reference each other via typed IDs. All edits made by the
/// building operations go through [`Document::transact`], so a failing
/// step never leaves a partial element behind.
#[derive(Debug, Clone, Default)]
pub struct Document {
    levels: SlotMap<LevelId, Level>,
    level_order: Vec<LevelId>,
    walls: SlotMap<WallId, Wall>,
    openings: SlotMap<OpeningId, Opening>,
    roofs: SlotMap<RoofId, Roof>,
    catalog: Catalog,
    journal: Vec<String>,
}

impl Document {
    /// Creates a new, empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Transactions ---

    /// Runs `edit` as one atomic unit of work named `name`.
    ///
    /// If `edit` fails the document is restored to its state before the call
    /// and the error is returned. On success the name is appended to the
    /// commit journal.
    ///
    /// # Errors
    ///
    /// Returns whatever error `edit` returns.
    pub fn transact<T>(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let snapshot = self.clone();
        match edit(self) {
            Ok(value) => {
                self.journal.push(name.to_owned());
                tracing::info!(transaction = name, "committed");
                Ok(value)
            }
            Err(err) => {
                *self = snapshot;
                tracing::warn!(transaction = name, error = %err, "rolled back");
                Err(err)
            }
        }
    }

    /// Names of the committed units of work, oldest first.
    #[must_use]
    pub fn committed(&self) -> &[String] {
        &self.journal
    }

    // --- Catalog ---

    /// Returns the type catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the type catalog for editing.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    // --- Levels ---

    /// Inserts a level and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the elevation is not finite.
    pub fn add_level(&mut self, level: Level) -> Result<LevelId> {
        if !level.elevation.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "level {:?} has non-finite elevation",
                level.name
            ))
            .into());
        }
        let id = self.levels.insert(level);
        self.level_order.push(id);
        Ok(id)
    }

    /// Returns the level data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not in the document.
    pub fn level(&self, id: LevelId) -> Result<&Level> {
        self.levels
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("level").into())
    }

    /// Iterates over all levels in insertion order.
    pub fn levels(&self) -> impl Iterator<Item = (LevelId, &Level)> {
        self.level_order
            .iter()
            .filter_map(|&id| self.levels.get(id).map(|level| (id, level)))
    }

    /// Finds a level by exact, case-sensitive name. The first match wins.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Level`] if no level has that name.
    pub fn find_level(&self, name: &str) -> Result<LevelId> {
        self.levels()
            .find(|(_, level)| level.name == name)
            .map(|(id, _)| id)
            .ok_or_else(|| LookupError::Level(name.to_owned()).into())
    }

    // --- Walls ---

    /// Inserts a wall and returns its ID.
    pub fn add_wall(&mut self, wall: Wall) -> WallId {
        self.walls.insert(wall)
    }

    /// Returns the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the document.
    pub fn wall(&self, id: WallId) -> Result<&Wall> {
        self.walls
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("wall").into())
    }

    /// Associates a wall's top with `level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall or level is not in the document.
    pub fn set_wall_top_level(&mut self, id: WallId, level: LevelId) -> Result<()> {
        self.level(level)?;
        let wall = self
            .walls
            .get_mut(id)
            .ok_or(ModelError::EntityNotFound("wall"))?;
        wall.top_level = Some(level);
        Ok(())
    }

    /// Resolves a wall's height as the elevation difference between its top
    /// and base levels.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall has no top level association.
    pub fn wall_height(&self, id: WallId) -> Result<f64> {
        let wall = self.wall(id)?;
        let top = wall
            .top_level
            .ok_or_else(|| ModelError::EntityNotFound("wall top level"))?;
        Ok(self.level(top)?.elevation - self.level(wall.base_level)?.elevation)
    }

    /// Returns the number of walls.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    // --- Openings ---

    /// Inserts a door or window instance and returns its ID.
    pub fn add_opening(&mut self, opening: Opening) -> OpeningId {
        self.openings.insert(opening)
    }

    /// Returns the opening data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening is not in the document.
    pub fn opening(&self, id: OpeningId) -> Result<&Opening> {
        self.openings
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening").into())
    }

    /// Returns the number of door and window instances.
    #[must_use]
    pub fn opening_count(&self) -> usize {
        self.openings.len()
    }

    // --- Roofs ---

    /// Inserts a roof and returns its ID.
    pub fn add_roof(&mut self, roof: Roof) -> RoofId {
        self.roofs.insert(roof)
    }

    /// Returns the roof data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the roof is not in the document.
    pub fn roof(&self, id: RoofId) -> Result<&Roof> {
        self.roofs
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("roof").into())
    }

    /// Returns the number of roofs.
    #[must_use]
    pub fn roof_count(&self) -> usize {
        self.roofs.len()
    }
}
