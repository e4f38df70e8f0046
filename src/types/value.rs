//! `TypeId` and the `TypedValue` capability trait.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ColtypeError, Result};
use crate::types::compare::CompareOp;
use crate::vectorized::kernel::fill_or_clear;
use crate::vectorized::{check_batch, CompareKernel, GenericKernel, PackedBatch};

/// Identity tag of a concrete value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TypeId {
    /// Identity not reported. Values carrying this tag cannot take part
    /// in binary operations.
    Unknown,
    /// 64-bit unsigned integer.
    Integer,
    /// Type defined outside this crate, identified by a number chosen by
    /// its author.
    Custom(u32),
}

impl TypeId {
    /// Returns the display name of the type family.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TypeId::Unknown => "UNKNOWN",
            TypeId::Integer => "INTEGER",
            TypeId::Custom(_) => "CUSTOM",
        }
    }

    /// Returns true unless this is [`TypeId::Unknown`].
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, TypeId::Unknown)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeId::Custom(id) => write!(f, "{}({id})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Uniform interface over differently represented scalar values.
///
/// Each implementation owns exactly one in-memory representation of its
/// value. Binary operations accept any `&dyn TypedValue` and fail with
/// [`ColtypeError::TypeMismatch`] when the operand's [`TypeId`] differs
/// from the receiver's.
///
/// Only [`equal`](TypedValue::equal) and [`less_than`](TypedValue::less_than)
/// are comparison primitives. The remaining relations are the free
/// functions in [`crate::types::compare`], so every type derives them the
/// same way.
pub trait TypedValue: fmt::Debug {
    /// Creates a new default-valued instance of the same concrete type.
    fn clone_type(&self) -> Box<dyn TypedValue>;

    /// Returns the identity of the concrete type.
    fn type_id(&self) -> TypeId {
        TypeId::Unknown
    }

    /// Returns the serialized width in bytes, or `None` for variable-length
    /// types.
    fn fixed_length(&self) -> Option<usize>;

    /// Overwrites the value by decoding `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::MalformedPayload`] if the payload length does
    /// not fit the type's encoding. The value is left unchanged.
    fn unmarshall(&mut self, payload: &[u8]) -> Result<()>;

    /// Appends the canonical encoding of the value to `out`.
    fn marshall(&self, out: &mut Vec<u8>);

    /// Tests `self == other`.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::TypeMismatch`] if `other` is of another type.
    fn equal(&self, other: &dyn TypedValue) -> Result<bool>;

    /// Tests `self < other`.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::TypeMismatch`] if `other` is of another type.
    fn less_than(&self, other: &dyn TypedValue) -> Result<bool>;

    /// Adds `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::TypeMismatch`] if `other` is of another type,
    /// in which case `self` is not modified.
    fn add_to_left(&mut self, other: &dyn TypedValue) -> Result<()>;

    /// Writes a human-readable rendering of the value.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    fn print(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns `self` as `Any`, for [`same_type`].
    fn as_any(&self) -> &dyn std::any::Any;

    /// Decodes `literal` into a kernel that compares rows of this type
    /// against it.
    ///
    /// The default is a [`GenericKernel`]. Types may return a specialized
    /// kernel, which must produce the same results.
    ///
    /// # Errors
    ///
    /// Returns the decode failure of the concrete type.
    fn prepare_kernel(&self, op: CompareOp, literal: &[u8]) -> Result<Box<dyn CompareKernel>> {
        Ok(Box::new(GenericKernel::prepare(self, op, literal)?))
    }

    /// Compares every row of `batch` against `literal`, writing one result
    /// per row into `out`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`check_batch`], plus any decode or comparison
    /// failure reported by the kernel. On error every slot of `out` is
    /// `false`.
    fn vectorized_compare(
        &self,
        op: CompareOp,
        batch: &PackedBatch<'_>,
        literal: &[u8],
        out: &mut [bool],
    ) -> Result<()> {
        fill_or_clear(out, |out| {
            check_batch(self, batch, literal, out)?;
            self.prepare_kernel(op, literal)?.run(batch, out)
        })
    }

    /// Equality form of [`vectorized_compare`](TypedValue::vectorized_compare).
    ///
    /// # Errors
    ///
    /// See [`vectorized_compare`](TypedValue::vectorized_compare).
    fn vectorized_equal(
        &self,
        batch: &PackedBatch<'_>,
        literal: &[u8],
        out: &mut [bool],
    ) -> Result<()> {
        self.vectorized_compare(CompareOp::Eq, batch, literal, out)
    }
}

impl fmt::Display for dyn TypedValue + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

/// Resolves `other` to the concrete type `T` identified by `expected`.
///
/// The tag is checked first; the downcast only confirms that the operand's
/// reported identity matches its representation.
///
/// # Errors
///
/// - [`ColtypeError::UnknownType`] if `expected` is [`TypeId::Unknown`]
/// - [`ColtypeError::TypeMismatch`] if the operand's tag differs, or its
///   representation is not `T`
pub fn same_type<'a, T: TypedValue + 'static>(
    expected: TypeId,
    other: &'a dyn TypedValue,
) -> Result<&'a T> {
    let actual = other.type_id();
    if !expected.is_known() {
        return Err(ColtypeError::UnknownType(expected));
    }
    if actual != expected {
        return Err(ColtypeError::TypeMismatch { expected, actual });
    }
    other
        .as_any()
        .downcast_ref::<T>()
        .ok_or(ColtypeError::TypeMismatch { expected, actual })
}
