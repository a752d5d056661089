slotmap::new_key_type! {
    /// Unique identifier for a level in the document.
    pub struct LevelId;
}

/// A named horizontal elevation reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// The level name. Lookups match it exactly.
    pub name: String,
    /// Elevation in internal units.
    pub elevation: f64,
}

impl Level {
    /// Creates a new level.
    #[must_use]
    pub fn new(name: impl Into<String>, elevation: f64) -> Self {
        Self {
            name: name.into(),
            elevation,
        }
    }
}
