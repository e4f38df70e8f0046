//! Vectorized execution module.
//!
//! This module evaluates a predicate between one literal payload and a
//! dense packed array of same-typed payloads, producing one boolean per
//! row. Only fixed-width types are supported.

pub mod batch;
pub mod evaluator;
pub mod kernel;

pub use batch::{encode_integers, PackedBatch};
pub use evaluator::{check_batch, generic_compare, VectorizedEvaluator};
pub use kernel::{check_slots, CompareKernel, GenericKernel};

/// Default number of rows handed to a kernel per run.
pub const DEFAULT_BATCH_SIZE: usize = 2048;

/// Configuration for the vectorized evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Rows per kernel invocation (0 = the whole batch in one pass).
    pub batch_size: usize,
    /// Use a type's own kernel when it provides one.
    pub specialized_kernels: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            specialized_kernels: true,
        }
    }
}

impl EvaluatorConfig {
    /// Creates a new evaluator configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Enables or disables type-specialized kernels.
    #[must_use]
    pub fn with_specialized_kernels(mut self, enabled: bool) -> Self {
        self.specialized_kernels = enabled;
        self
    }
}
