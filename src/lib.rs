//! coltype - runtime value types for columnar storage
//!
//! A uniform [`TypedValue`] interface over differently represented scalar
//! values: decode from raw payloads, compare, add, render, and evaluate
//! predicates over packed columnar batches.
//!
//! ```
//! use coltype::types::{IntegerValue, TypedValue};
//! use coltype::vectorized::{encode_integers, PackedBatch};
//!
//! let column = encode_integers(&[4, 13, 7]);
//! let batch = PackedBatch::new(&column, 8).unwrap();
//! let mut hits = vec![false; batch.len()];
//!
//! IntegerValue::default()
//!     .vectorized_equal(&batch, &IntegerValue::encode(13), &mut hits)
//!     .unwrap();
//! assert_eq!(hits, vec![false, true, false]);
//! ```

pub mod catalog;
pub mod error;
pub mod types;
pub mod vectorized;

pub use catalog::TypeCatalog;
pub use error::{ColtypeError, Result};
pub use types::{CompareOp, IntegerValue, TypeId, TypedValue};
pub use vectorized::{EvaluatorConfig, PackedBatch, VectorizedEvaluator};
