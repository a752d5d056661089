use std::collections::HashMap;
use std::fmt;

use slotmap::SlotMap;

use crate::error::{LookupError, ModelError, Result};

slotmap::new_key_type! {
    /// Unique identifier for a catalog type.
    pub struct CatalogTypeId;
}

/// The kind of element a catalog type describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Wall,
    Door,
    Window,
    Roof,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
            Self::Roof => "roof",
        };
        f.write_str(name)
    }
}

/// A named, reusable element definition.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogType {
    pub category: Category,
    /// Family name, e.g. `"Basic Wall"`.
    pub family: String,
    /// Type name within the family, e.g. `"Generic - 200mm"`.
    pub name: String,
    /// Whether instances of this type can be placed without activation.
    pub active: bool,
    /// Type width in internal units. Wall types use it as their thickness.
    pub width: Option<f64>,
}

impl CatalogType {
    /// Creates an inactive type with no width.
    #[must_use]
    pub fn new(category: Category, family: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category,
            family: family.into(),
            name: name.into(),
            active: false,
            width: None,
        }
    }

    /// Sets the type width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Marks the type as already active.
    #[must_use]
    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }
}

/// Library of catalog types, searchable by category, family and name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: SlotMap<CatalogTypeId, CatalogType>,
    order: Vec<CatalogTypeId>,
    defaults: HashMap<Category, CatalogTypeId>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a type and returns its ID.
    pub fn add(&mut self, ty: CatalogType) -> CatalogTypeId {
        let id = self.types.insert(ty);
        self.order.push(id);
        id
    }

    /// Returns a reference to the type, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is not in the catalog.
    pub fn get(&self, id: CatalogTypeId) -> Result<&CatalogType> {
        self.types
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("catalog type").into())
    }

    /// Returns the type if it belongs to `category`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::WrongCategory`] for a type of another category.
    pub fn get_in(&self, id: CatalogTypeId, category: Category) -> Result<&CatalogType> {
        let ty = self.get(id)?;
        if ty.category != category {
            return Err(ModelError::WrongCategory {
                expected: category,
                actual: ty.category,
            }
            .into());
        }
        Ok(ty)
    }

    /// Finds a type by exact category, family and type name.
    ///
    /// The first match in insertion order wins.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::CatalogType`] if nothing matches.
    pub fn find(&self, category: Category, family: &str, name: &str) -> Result<CatalogTypeId> {
        self.order
            .iter()
            .copied()
            .find(|&id| {
                self.types.get(id).is_some_and(|ty| {
                    ty.category == category && ty.family == family && ty.name == name
                })
            })
            .ok_or_else(|| {
                LookupError::CatalogType {
                    category,
                    family: family.to_owned(),
                    name: name.to_owned(),
                }
                .into()
            })
    }

    /// Makes the type placeable. Activating an active type is a no-op.
    ///
    /// Returns `true` if the type was inactive before the call.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is not in the catalog.
    pub fn activate(&mut self, id: CatalogTypeId) -> Result<bool> {
        let ty = self
            .types
            .get_mut(id)
            .ok_or(ModelError::EntityNotFound("catalog type"))?;
        let was_inactive = !ty.active;
        ty.active = true;
        Ok(was_inactive)
    }

    /// Sets the default type used for `category` when none is named.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is missing or belongs to another category.
    pub fn set_default(&mut self, category: Category, id: CatalogTypeId) -> Result<()> {
        self.get_in(id, category)?;
        self.defaults.insert(category, id);
        Ok(())
    }

    /// Returns the default type for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NoDefaultType`] if none was set.
    pub fn default_type(&self, category: Category) -> Result<CatalogTypeId> {
        self.defaults
            .get(&category)
            .copied()
            .ok_or_else(|| LookupError::NoDefaultType(category).into())
    }
}
