//! Error types for character-table generation and symmetrization
//!
//! This module provides `SymmetryError`, the single error enum returned by
//! every fallible entry point in the crate. Each variant carries a
//! human-readable detail string in place of the diagnostic sink described
//! informally by upstream tooling (`msymSetErrorDetails`); callers that want
//! the detail routed elsewhere can match on the variant and forward
//! [`fmt::Display`] output to their own sink.

use std::fmt;

/// Errors that can occur while generating a character table or symmetrizing
/// a geometry/wave function.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymmetryError {
    /// Internal inconsistency in table generation or verification: a
    /// row-orthogonality failure, a missing predefined class, an
    /// unsupported operation reaching the character formula, an invalid
    /// irrep dimension, or an unrecognized descriptor.
    InvalidCharacterTable {
        /// Description of what failed.
        detail: String,
    },
    /// The point-group type is not covered by any parametric generator or
    /// predefined table.
    PointGroupError {
        /// Description of the unsupported group type.
        detail: String,
    },
    /// Symmetrization could not proceed: an equivalence set larger than the
    /// group order, a missing C∞ axis for a linear group, an irrep span
    /// mismatch, or a partner-function resolution failure.
    SymmetrizationError {
        /// Description of what failed.
        detail: String,
    },
}

impl SymmetryError {
    /// Build an [`SymmetryError::InvalidCharacterTable`] from a formatted detail.
    pub fn invalid_table(detail: impl Into<String>) -> Self {
        SymmetryError::InvalidCharacterTable {
            detail: detail.into(),
        }
    }

    /// Build a [`SymmetryError::PointGroupError`] from a formatted detail.
    pub fn point_group(detail: impl Into<String>) -> Self {
        SymmetryError::PointGroupError {
            detail: detail.into(),
        }
    }

    /// Build a [`SymmetryError::SymmetrizationError`] from a formatted detail.
    pub fn symmetrization(detail: impl Into<String>) -> Self {
        SymmetryError::SymmetrizationError {
            detail: detail.into(),
        }
    }

    /// The human-readable detail carried by any variant.
    pub fn detail(&self) -> &str {
        match self {
            SymmetryError::InvalidCharacterTable { detail }
            | SymmetryError::PointGroupError { detail }
            | SymmetryError::SymmetrizationError { detail } => detail,
        }
    }
}

impl fmt::Display for SymmetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymmetryError::InvalidCharacterTable { detail } => {
                write!(f, "invalid character table: {detail}")
            }
            SymmetryError::PointGroupError { detail } => {
                write!(f, "unsupported point group: {detail}")
            }
            SymmetryError::SymmetrizationError { detail } => {
                write!(f, "symmetrization failed: {detail}")
            }
        }
    }
}

impl std::error::Error for SymmetryError {}

/// Convenience alias used throughout the crate.
pub type SymmetryResult<T> = Result<T, SymmetryError>;
