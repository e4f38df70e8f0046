//! Registry of value type prototypes keyed by `TypeId`.

use std::collections::BTreeMap;

use crate::error::{ColtypeError, Result};
use crate::types::{IntegerValue, TypeId, TypedValue};

/// Central registry of the value types known to an engine.
///
/// Each entry holds a prototype; [`instantiate`](TypeCatalog::instantiate)
/// hands out fresh default-valued instances through
/// [`TypedValue::clone_type`], so callers never name the concrete type.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    prototypes: BTreeMap<TypeId, Box<dyn TypedValue>>,
}

impl TypeCatalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        TypeCatalog {
            prototypes: BTreeMap::new(),
        }
    }

    /// Creates a catalog holding every type shipped with the crate.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut catalog = TypeCatalog::new();
        catalog
            .prototypes
            .insert(TypeId::Integer, Box::new(IntegerValue::default()));
        catalog
    }

    /// Registers a prototype under its reported type.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The prototype reports [`TypeId::Unknown`]
    /// - A prototype with the same type is already registered
    pub fn register(&mut self, prototype: Box<dyn TypedValue>) -> Result<()> {
        let type_id = prototype.type_id();
        if !type_id.is_known() {
            return Err(ColtypeError::UnknownType(type_id));
        }
        if self.prototypes.contains_key(&type_id) {
            return Err(ColtypeError::DuplicateType(type_id));
        }
        tracing::debug!(
            target: "coltype::catalog",
            type_id = %type_id,
            fixed_length = ?prototype.fixed_length(),
            "Registered value type"
        );
        self.prototypes.insert(type_id, prototype);
        Ok(())
    }

    /// Creates a new default-valued instance of `type_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::UnknownType`] if the type is not registered.
    pub fn instantiate(&self, type_id: TypeId) -> Result<Box<dyn TypedValue>> {
        self.prototypes
            .get(&type_id)
            .map(|prototype| prototype.clone_type())
            .ok_or(ColtypeError::UnknownType(type_id))
    }

    /// Checks if a type is registered.
    #[must_use]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.prototypes.contains_key(&type_id)
    }

    /// Returns all registered types in tag order.
    #[must_use]
    pub fn type_ids(&self) -> Vec<TypeId> {
        self.prototypes.keys().copied().collect()
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}
