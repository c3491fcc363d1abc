//! Session error model.

use thiserror::Error;

use stocktrack_core::DomainError;

use crate::input::Field;

/// Fatal session failure: the console itself is unusable.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Operator input that could not be accepted for a field.
///
/// Never fatal: the session prints the field's rejection message and returns
/// to the menu.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line is not a number of the expected type.
    #[error("{field}: cannot parse {raw:?}")]
    Malformed { field: Field, raw: String },

    /// The number parsed but the domain refused it (e.g. negative quantity).
    #[error("{field}: {source}")]
    Rejected {
        field: Field,
        #[source]
        source: DomainError,
    },
}

impl InputError {
    pub fn malformed(field: Field, raw: &str) -> Self {
        Self::Malformed {
            field,
            raw: raw.to_string(),
        }
    }

    pub fn rejected(field: Field, source: DomainError) -> Self {
        Self::Rejected { field, source }
    }

    pub fn field(&self) -> Field {
        match self {
            InputError::Malformed { field, .. } | InputError::Rejected { field, .. } => *field,
        }
    }
}
