//! Catalog of registered value types.

mod registry;

pub use registry::TypeCatalog;
