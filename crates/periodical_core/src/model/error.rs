//! Model-level error contract.
//!
//! # Invariants
//! - `InvalidArgument` is returned before any state changes.
//! - `ImmutableField` means the value may be fine but the field is sealed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by entity construction and mutators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A value failed its stated constraint.
    InvalidArgument {
        field: &'static str,
        reason: String,
    },
    /// A write-once field was assigned a second time.
    ImmutableField { field: &'static str },
}

impl ModelError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } => field,
            Self::ImmutableField { field } => field,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_immutable_field(&self) -> bool {
        matches!(self, Self::ImmutableField { .. })
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { field, reason } => {
                write!(f, "invalid `{field}`: {reason}")
            }
            Self::ImmutableField { field } => {
                write!(f, "`{field}` cannot be changed after instantiation")
            }
        }
    }
}

impl Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::ModelError;

    #[test]
    fn display_names_the_field() {
        let err = ModelError::invalid("title", "must be between 5 and 50 characters");
        assert_eq!(
            err.to_string(),
            "invalid `title`: must be between 5 and 50 characters"
        );

        let err = ModelError::ImmutableField { field: "name" };
        assert_eq!(err.to_string(), "`name` cannot be changed after instantiation");
    }

    #[test]
    fn kind_helpers_are_exclusive() {
        let invalid = ModelError::invalid("category", "must not be empty");
        assert!(invalid.is_invalid_argument());
        assert!(!invalid.is_immutable_field());
        assert_eq!(invalid.field(), "category");

        let sealed = ModelError::ImmutableField { field: "title" };
        assert!(sealed.is_immutable_field());
        assert!(!sealed.is_invalid_argument());
        assert_eq!(sealed.field(), "title");
    }
}
