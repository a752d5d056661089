use crate::geometry::Segment;

use super::catalog::CatalogTypeId;
use super::level::LevelId;

slotmap::new_key_type! {
    /// Unique identifier for a wall in the document.
    pub struct WallId;
}

/// A straight wall placed along a centerline.
///
/// Thickness extends symmetrically on both sides of the centerline.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    /// The wall's location line.
    pub centerline: Segment,
    /// The level the wall is anchored to.
    pub base_level: LevelId,
    /// The level that bounds the wall's top, once associated.
    pub top_level: Option<LevelId>,
    /// The wall type the wall was created with.
    pub wall_type: CatalogTypeId,
    /// Wall thickness in internal units, resolved from the wall type.
    pub thickness: f64,
}
