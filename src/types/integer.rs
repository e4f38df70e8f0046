//! 64-bit unsigned integer value type.

use std::fmt;

use crate::error::{ColtypeError, Result};
use crate::types::compare::CompareOp;
use crate::types::value::{same_type, TypeId, TypedValue};
use crate::vectorized::{check_slots, CompareKernel, PackedBatch};

/// Serialized width of an [`IntegerValue`] in bytes.
pub const INTEGER_WIDTH: usize = 8;

/// 64-bit unsigned integer.
///
/// Encoded as exactly [`INTEGER_WIDTH`] little-endian bytes on every host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntegerValue {
    value: u64,
}

impl IntegerValue {
    /// Creates an integer holding `value`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    /// Returns the native value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Adds one, wrapping at `u64::MAX`.
    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
    }

    /// Returns the canonical encoding of `value`.
    #[must_use]
    pub const fn encode(value: u64) -> [u8; INTEGER_WIDTH] {
        value.to_le_bytes()
    }

    /// Decodes one canonical payload.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::MalformedPayload`] unless `payload` is exactly
    /// [`INTEGER_WIDTH`] bytes.
    pub fn decode(payload: &[u8]) -> Result<u64> {
        let bytes = <[u8; INTEGER_WIDTH]>::try_from(payload).map_err(|_| {
            ColtypeError::MalformedPayload {
                type_id: TypeId::Integer,
                expected: INTEGER_WIDTH,
                actual: payload.len(),
            }
        })?;
        Ok(u64::from_le_bytes(bytes))
    }

    fn operand(other: &dyn TypedValue) -> Result<u64> {
        same_type::<IntegerValue>(TypeId::Integer, other).map(|v| v.value)
    }
}

impl From<u64> for IntegerValue {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl TypedValue for IntegerValue {
    fn clone_type(&self) -> Box<dyn TypedValue> {
        Box::new(IntegerValue::default())
    }

    fn type_id(&self) -> TypeId {
        TypeId::Integer
    }

    fn fixed_length(&self) -> Option<usize> {
        Some(INTEGER_WIDTH)
    }

    fn unmarshall(&mut self, payload: &[u8]) -> Result<()> {
        self.value = Self::decode(payload)?;
        Ok(())
    }

    fn marshall(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&Self::encode(self.value));
    }

    fn equal(&self, other: &dyn TypedValue) -> Result<bool> {
        Ok(self.value == Self::operand(other)?)
    }

    fn less_than(&self, other: &dyn TypedValue) -> Result<bool> {
        Ok(self.value < Self::operand(other)?)
    }

    fn add_to_left(&mut self, other: &dyn TypedValue) -> Result<()> {
        let rhs = Self::operand(other)?;
        self.value = self.value.wrapping_add(rhs);
        Ok(())
    }

    fn print(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn prepare_kernel(&self, op: CompareOp, literal: &[u8]) -> Result<Box<dyn CompareKernel>> {
        Ok(Box::new(IntegerKernel {
            op,
            literal: Self::decode(literal)?,
        }))
    }
}

/// Compares raw `u64`s against a decoded literal, with no scratch instances
/// and no per-row dispatch.
#[derive(Debug)]
struct IntegerKernel {
    op: CompareOp,
    literal: u64,
}

impl CompareKernel for IntegerKernel {
    fn run(&mut self, rows: &PackedBatch<'_>, out: &mut [bool]) -> Result<()> {
        check_slots(rows, out)?;
        for (row, slot) in rows.rows().zip(out.iter_mut()) {
            *slot = self.op.matches(IntegerValue::decode(row)?.cmp(&self.literal));
        }
        Ok(())
    }
}
