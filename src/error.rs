use thiserror::Error;

use crate::model::Category;

/// Top-level error type for building generation.
#[derive(Debug, Error)]
pub enum GablehouseError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("top level elevation {top} must be above base level elevation {base}")]
    InvertedLevels { base: f64, top: f64 },
}

/// A named level or catalog type could not be resolved.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("level not found: {0:?}")]
    Level(String),

    #[error("{category} type not found: family {family:?}, type {name:?}")]
    CatalogType {
        category: Category,
        family: String,
        name: String,
    },

    #[error("no default {0} type is set")]
    NoDefaultType(Category),
}

/// Errors related to document entities.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("catalog type is a {actual}, expected a {expected}")]
    WrongCategory { expected: Category, actual: Category },
}

/// Errors raised while converting between display and internal units.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("value {0} is not finite")]
    NonFinite(f64),

    #[error("value {value} exceeds the supported magnitude {limit}")]
    OutOfRange { value: f64, limit: f64 },
}

/// Errors related to building operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`GablehouseError`].
pub type Result<T> = std::result::Result<T, GablehouseError>;
