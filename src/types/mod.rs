//! Runtime value types.
//!
//! [`TypedValue`] is the capability interface every scalar type implements.
//! The crate ships [`IntegerValue`]; further types plug in by implementing
//! the trait and registering a prototype in a
//! [`TypeCatalog`](crate::catalog::TypeCatalog).

pub mod compare;
mod integer;
mod value;

pub use compare::CompareOp;
pub use integer::{IntegerValue, INTEGER_WIDTH};
pub use value::{same_type, TypeId, TypedValue};
