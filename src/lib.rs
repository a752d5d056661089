//! Parametric generation of a four-wall house with a door, windows and a
//! gable roof.
//!
//! The building is constructed in an explicit [`model::Document`]:
//!
//! ```text
//! RectangularFootprint -> CreateWalls -> PlaceOpening (door, windows)
//!                                     -> ExtrusionRoof (GableProfile)
//! ```
//!
//! [`operations::BuildHouse`] runs the whole sequence from a
//! [`operations::BuildingConfig`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod tessellation;

pub use error::{GablehouseError, Result};
