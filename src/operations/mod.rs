pub mod build;
pub mod footprint;
pub mod openings;
pub mod roof;
pub mod walls;

pub use build::{BuildHouse, BuildingConfig, House, TypeRef};
pub use footprint::{classify_axes, Footprint, RectangularFootprint, WallAxis};
pub use openings::{InsertionPoint, OpeningPlacement, PlaceOpening};
pub use roof::{gable_profile, ExtrusionRoof, GableProfile, RoofParams};
pub use walls::CreateWalls;
