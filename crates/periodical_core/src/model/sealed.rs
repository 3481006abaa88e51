//! Write-once field storage.

use crate::model::error::{ModelError, ModelResult};
use once_cell::sync::OnceCell;

/// Field that accepts exactly one assignment.
///
/// Later assignments fail with `ModelError::ImmutableField` and leave the
/// stored value untouched.
#[derive(Debug)]
pub struct SealedField<T> {
    field: &'static str,
    cell: OnceCell<T>,
}

impl<T> SealedField<T> {
    /// Creates a field already sealed with `value`.
    pub fn sealed(field: &'static str, value: T) -> Self {
        Self {
            field,
            cell: OnceCell::with_value(value),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Stores `value` if the field is still unset.
    pub fn set(&self, value: T) -> ModelResult<()> {
        self.cell
            .set(value)
            .map_err(|_| ModelError::ImmutableField { field: self.field })
    }
}
