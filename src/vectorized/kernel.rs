//! Prepared comparison kernels.
//!
//! Preparing a kernel decodes the literal and allocates any scratch state.
//! Running it compares a run of rows against that literal. The evaluator
//! prepares once per call and runs once per chunk.

use crate::error::{ColtypeError, Result};
use crate::types::compare::{compare, CompareOp};
use crate::types::TypedValue;

use super::batch::PackedBatch;

/// A comparison against one decoded literal, ready to run over rows.
pub trait CompareKernel {
    /// Writes `row op literal` for every row of `rows` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::InvalidBatch`] if `out` is not one slot per
    /// row, plus any decode or comparison failure of the concrete type.
    fn run(&mut self, rows: &PackedBatch<'_>, out: &mut [bool]) -> Result<()>;
}

/// Type-agnostic kernel working through [`TypedValue`].
///
/// Holds two scratch instances cloned from the prototype: the decoded
/// literal and a row buffer reused for every row.
#[derive(Debug)]
pub struct GenericKernel {
    op: CompareOp,
    literal: Box<dyn TypedValue>,
    row: Box<dyn TypedValue>,
}

impl GenericKernel {
    /// Clones the scratch instances and decodes `literal` into one of them.
    ///
    /// # Errors
    ///
    /// Returns the decode failure of the concrete type.
    pub fn prepare<V: TypedValue + ?Sized>(
        prototype: &V,
        op: CompareOp,
        literal: &[u8],
    ) -> Result<Self> {
        let mut literal_value = prototype.clone_type();
        literal_value.unmarshall(literal)?;
        Ok(GenericKernel {
            op,
            literal: literal_value,
            row: prototype.clone_type(),
        })
    }
}

impl CompareKernel for GenericKernel {
    fn run(&mut self, rows: &PackedBatch<'_>, out: &mut [bool]) -> Result<()> {
        check_slots(rows, out)?;
        for (row, slot) in rows.rows().zip(out.iter_mut()) {
            self.row.unmarshall(row)?;
            *slot = compare(self.row.as_ref(), self.op, self.literal.as_ref())?;
        }
        Ok(())
    }
}

/// Fails unless `out` holds exactly one slot per row.
///
/// # Errors
///
/// Returns [`ColtypeError::InvalidBatch`] on a length mismatch.
pub fn check_slots(rows: &PackedBatch<'_>, out: &[bool]) -> Result<()> {
    if out.len() != rows.len() {
        return Err(ColtypeError::InvalidBatch(format!(
            "Output has {} slots for {} rows",
            out.len(),
            rows.len()
        )));
    }
    Ok(())
}

/// Runs `fill` over `out`. If it fails, every slot of `out` is reset to
/// `false` before the error is returned.
pub(crate) fn fill_or_clear<F>(out: &mut [bool], fill: F) -> Result<()>
where
    F: FnOnce(&mut [bool]) -> Result<()>,
{
    let result = fill(&mut *out);
    if result.is_err() {
        out.fill(false);
    }
    result
}
