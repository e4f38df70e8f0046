//! Batch predicate evaluation over packed payloads.

use crate::error::{ColtypeError, Result};
use crate::types::compare::CompareOp;
use crate::types::TypedValue;

use super::batch::PackedBatch;
use super::kernel::{check_slots, fill_or_clear, CompareKernel, GenericKernel};
use super::EvaluatorConfig;

/// Validates that `batch`, `literal` and `out` fit the prototype's type.
///
/// # Errors
///
/// - [`ColtypeError::UnsupportedForType`] if the type is variable length
/// - [`ColtypeError::MalformedPayload`] if the row width or literal length
///   differ from the type's fixed width
/// - [`ColtypeError::InvalidBatch`] if `out` is not one slot per row
pub fn check_batch<V: TypedValue + ?Sized>(
    prototype: &V,
    batch: &PackedBatch<'_>,
    literal: &[u8],
    out: &[bool],
) -> Result<()> {
    let type_id = prototype.type_id();
    let Some(width) = prototype.fixed_length() else {
        return Err(ColtypeError::UnsupportedForType {
            type_id,
            operation: "vectorized comparison",
        });
    };
    if batch.element_length() != width {
        return Err(ColtypeError::MalformedPayload {
            type_id,
            expected: width,
            actual: batch.element_length(),
        });
    }
    if literal.len() != width {
        return Err(ColtypeError::MalformedPayload {
            type_id,
            expected: width,
            actual: literal.len(),
        });
    }
    check_slots(batch, out)
}

/// Compares a whole batch through a [`GenericKernel`], bypassing any
/// specialized kernel the type provides.
///
/// The two scratch instances the kernel clones are dropped when the call
/// returns.
///
/// # Errors
///
/// Returns the errors of [`check_batch`], plus any decode or comparison
/// failure reported by the concrete type. On error every slot of `out` is
/// `false`.
pub fn generic_compare<V: TypedValue + ?Sized>(
    prototype: &V,
    op: CompareOp,
    batch: &PackedBatch<'_>,
    literal: &[u8],
    out: &mut [bool],
) -> Result<()> {
    fill_or_clear(out, |out| {
        check_batch(prototype, batch, literal, out)?;
        GenericKernel::prepare(prototype, op, literal)?.run(batch, out)
    })
}

/// Vectorized predicate evaluator.
///
/// Prepares one kernel per call, either the type's own or the generic one,
/// and runs it over chunks of [`EvaluatorConfig::batch_size`] rows.
#[derive(Debug, Clone, Default)]
pub struct VectorizedEvaluator {
    config: EvaluatorConfig,
}

impl VectorizedEvaluator {
    /// Creates an evaluator with the given configuration.
    #[must_use]
    pub fn new(config: EvaluatorConfig) -> Self {
        VectorizedEvaluator { config }
    }

    /// Returns the evaluator configuration.
    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates `row op literal` for every row of `batch` into `out`.
    ///
    /// `prototype` only identifies the type; its own value is not read. The
    /// literal is decoded once per call, however many chunks the batch is
    /// split into.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`check_batch`], plus any decode or comparison
    /// failure reported by the concrete type. On error every slot of `out`
    /// is `false`.
    pub fn evaluate(
        &self,
        prototype: &dyn TypedValue,
        op: CompareOp,
        batch: &PackedBatch<'_>,
        literal: &[u8],
        out: &mut [bool],
    ) -> Result<()> {
        fill_or_clear(out, |out| self.run_chunks(prototype, op, batch, literal, out))
    }

    fn run_chunks(
        &self,
        prototype: &dyn TypedValue,
        op: CompareOp,
        batch: &PackedBatch<'_>,
        literal: &[u8],
        out: &mut [bool],
    ) -> Result<()> {
        check_batch(prototype, batch, literal, out)?;

        let rows = batch.len();
        let chunk_size = match self.config.batch_size {
            0 => rows.max(1),
            n => n,
        };
        tracing::trace!(
            target: "coltype::vectorized",
            type_id = %prototype.type_id(),
            op = %op,
            rows,
            chunk_size,
            specialized = self.config.specialized_kernels,
            "Evaluating batch predicate"
        );

        let mut kernel: Box<dyn CompareKernel> = if self.config.specialized_kernels {
            prototype.prepare_kernel(op, literal)?
        } else {
            Box::new(GenericKernel::prepare(prototype, op, literal)?)
        };

        for (index, slots) in out.chunks_mut(chunk_size).enumerate() {
            let start = index * chunk_size;
            let chunk = batch.slice(start, start + slots.len()).ok_or_else(|| {
                ColtypeError::InvalidBatch(format!("Chunk at row {start} runs past {rows} rows"))
            })?;
            kernel.run(&chunk, slots)?;
        }
        Ok(())
    }

    /// Equality form of [`evaluate`](VectorizedEvaluator::evaluate).
    ///
    /// # Errors
    ///
    /// See [`evaluate`](VectorizedEvaluator::evaluate).
    pub fn equal(
        &self,
        prototype: &dyn TypedValue,
        batch: &PackedBatch<'_>,
        literal: &[u8],
        out: &mut [bool],
    ) -> Result<()> {
        self.evaluate(prototype, CompareOp::Eq, batch, literal, out)
    }

    /// Like [`evaluate`](VectorizedEvaluator::evaluate), allocating the
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::ResourceExhausted`] if the output cannot be
    /// allocated, otherwise the errors of
    /// [`evaluate`](VectorizedEvaluator::evaluate).
    pub fn evaluate_to_vec(
        &self,
        prototype: &dyn TypedValue,
        op: CompareOp,
        batch: &PackedBatch<'_>,
        literal: &[u8],
    ) -> Result<Vec<bool>> {
        let mut out = Vec::new();
        out.try_reserve_exact(batch.len()).map_err(|e| {
            ColtypeError::ResourceExhausted(format!(
                "Cannot allocate {} result slots: {e}",
                batch.len()
            ))
        })?;
        out.resize(batch.len(), false);
        self.evaluate(prototype, op, batch, literal, &mut out)?;
        Ok(out)
    }
}
