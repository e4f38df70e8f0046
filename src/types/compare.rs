//! Comparison operators derived from the `equal` / `less_than` primitives.
//!
//! These are free functions rather than overridable trait methods so that
//! no concrete type can define them inconsistently with its primitives.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::types::TypedValue;

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// All operators, in declaration order.
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Eq,
        CompareOp::Ne,
        CompareOp::Lt,
        CompareOp::Le,
        CompareOp::Gt,
        CompareOp::Ge,
    ];

    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    /// Evaluates the operator given the ordering of `left` relative to
    /// `right`.
    #[must_use]
    pub fn matches(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `left <> right`.
///
/// # Errors
///
/// Propagates the type mismatch from [`TypedValue::equal`].
pub fn not_equal(left: &dyn TypedValue, right: &dyn TypedValue) -> Result<bool> {
    Ok(!left.equal(right)?)
}

/// `left <= right`.
///
/// # Errors
///
/// Propagates the type mismatch from the primitives.
pub fn less_than_or_equal(left: &dyn TypedValue, right: &dyn TypedValue) -> Result<bool> {
    if left.less_than(right)? {
        return Ok(true);
    }
    left.equal(right)
}

/// `left > right`.
///
/// # Errors
///
/// Propagates the type mismatch from the primitives.
pub fn greater_than(left: &dyn TypedValue, right: &dyn TypedValue) -> Result<bool> {
    Ok(!less_than_or_equal(left, right)?)
}

/// `left >= right`.
///
/// # Errors
///
/// Propagates the type mismatch from [`TypedValue::less_than`].
pub fn greater_than_or_equal(left: &dyn TypedValue, right: &dyn TypedValue) -> Result<bool> {
    Ok(!left.less_than(right)?)
}

/// Evaluates `left op right`.
///
/// # Errors
///
/// Returns a type mismatch if the operands are of different types.
pub fn compare(left: &dyn TypedValue, op: CompareOp, right: &dyn TypedValue) -> Result<bool> {
    match op {
        CompareOp::Eq => left.equal(right),
        CompareOp::Ne => not_equal(left, right),
        CompareOp::Lt => left.less_than(right),
        CompareOp::Le => less_than_or_equal(left, right),
        CompareOp::Gt => greater_than(left, right),
        CompareOp::Ge => greater_than_or_equal(left, right),
    }
}
