//! Conversion between display length units and internal units.
//!
//! Internal lengths are decimal feet. Display values (millimetres by default)
//! are converted at the boundary of every operation that accepts them.

use std::fmt;

use crate::error::{Result, UnitError};

/// Largest internal length (in feet) accepted by a conversion.
pub const MAX_INTERNAL_LENGTH: f64 = 1.0e6;

/// A display unit for lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    Millimeters,
    Centimeters,
    Meters,
    Inches,
    Feet,
}

impl LengthUnit {
    /// Number of display units in one internal unit (one foot).
    #[must_use]
    pub fn per_foot(self) -> f64 {
        match self {
            Self::Millimeters => 304.8,
            Self::Centimeters => 30.48,
            Self::Meters => 0.3048,
            Self::Inches => 12.0,
            Self::Feet => 1.0,
        }
    }

    /// Converts a display value to internal units.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::NonFinite`] for NaN or infinite input and
    /// [`UnitError::OutOfRange`] when the result exceeds [`MAX_INTERNAL_LENGTH`].
    pub fn to_internal(self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(UnitError::NonFinite(value).into());
        }
        let internal = value / self.per_foot();
        if internal.abs() > MAX_INTERNAL_LENGTH {
            return Err(UnitError::OutOfRange {
                value,
                limit: MAX_INTERNAL_LENGTH * self.per_foot(),
            }
            .into());
        }
        Ok(internal)
    }

    /// Converts an internal value back to this display unit.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::NonFinite`] for NaN or infinite input.
    pub fn from_internal(self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(UnitError::NonFinite(value).into());
        }
        Ok(value * self.per_foot())
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Inches => "in",
            Self::Feet => "ft",
        };
        f.write_str(symbol)
    }
}
