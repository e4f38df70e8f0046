//! Dense packed batches of fixed-width payloads.

use std::slice::ChunksExact;

use crate::error::{ColtypeError, Result};
use crate::types::IntegerValue;

/// Borrowed view over `N` serialized values of equal width, packed with unit
/// stride.
#[derive(Debug, Clone, Copy)]
pub struct PackedBatch<'a> {
    data: &'a [u8],
    element_length: usize,
}

impl<'a> PackedBatch<'a> {
    /// Wraps `data` as a batch of `element_length`-byte rows.
    ///
    /// # Errors
    ///
    /// Returns [`ColtypeError::InvalidBatch`] if `element_length` is zero or
    /// does not evenly divide `data`.
    pub fn new(data: &'a [u8], element_length: usize) -> Result<Self> {
        if element_length == 0 {
            return Err(ColtypeError::InvalidBatch(
                "Element length must be non-zero".into(),
            ));
        }
        if data.len() % element_length != 0 {
            return Err(ColtypeError::InvalidBatch(format!(
                "{} bytes is not a whole number of {element_length}-byte rows",
                data.len()
            )));
        }
        Ok(PackedBatch {
            data,
            element_length,
        })
    }

    /// Returns the width of each row in bytes.
    #[must_use]
    pub fn element_length(&self) -> usize {
        self.element_length
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() / self.element_length
    }

    /// Returns true if the batch has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw packed bytes.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the payload of row `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&'a [u8]> {
        let start = index.checked_mul(self.element_length)?;
        self.data.get(start..start.checked_add(self.element_length)?)
    }

    /// Returns an iterator over row payloads.
    #[must_use]
    pub fn rows(&self) -> ChunksExact<'a, u8> {
        self.data.chunks_exact(self.element_length)
    }

    /// Returns the rows `start..end` as a batch, or `None` if the range is
    /// reversed or runs past the last row.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Option<Self> {
        let from = start.checked_mul(self.element_length)?;
        let to = end.checked_mul(self.element_length)?;
        Some(PackedBatch {
            data: self.data.get(from..to)?,
            element_length: self.element_length,
        })
    }
}

/// Packs `values` in the canonical integer encoding.
#[must_use]
pub fn encode_integers(values: &[u64]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|v| IntegerValue::encode(*v))
        .collect()
}
