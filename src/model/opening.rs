use crate::math::Point3;

use super::catalog::{CatalogTypeId, Category};
use super::level::LevelId;
use super::wall::WallId;

slotmap::new_key_type! {
    /// Unique identifier for a door or window instance in the document.
    pub struct OpeningId;
}

/// A door or window instance hosted by a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Opening {
    /// The hosting wall.
    pub host: WallId,
    /// The placed catalog type.
    pub opening_type: CatalogTypeId,
    /// Door or window.
    pub category: Category,
    /// The level the instance is associated with.
    pub level: LevelId,
    /// Insertion point in internal units.
    pub point: Point3,
}
