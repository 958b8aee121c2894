//! Error types for snapshot ingestion.

use thiserror::Error;

/// A snapshot that breaks the producer's data contract.
///
/// These are upstream data-integrity bugs, not recoverable conditions:
/// ingestion stops at the first one. Tuples that merely point at nodes
/// missing from the current snapshot are *not* contract violations; the
/// renderer skips them.
#[derive(Debug, Error)]
pub enum ContractViolation {
    /// The snapshot is not valid JSON or does not have the expected shape
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A tuple does not have `arity + 1` entries
    #[error("tuple #{tuple} of '{relation}' has {found} entries, expected {expected}")]
    ArityMismatch {
        relation: String,
        tuple: usize,
        expected: usize,
        found: usize,
    },

    /// An argument slot does not hold a non-negative integer node index
    #[error("tuple #{tuple} of '{relation}' has invalid node index {found} at position {position}")]
    InvalidArgument {
        relation: String,
        tuple: usize,
        position: usize,
        found: String,
    },

    /// The value slot does not hold a truth value (or a label for counts)
    #[error("tuple #{tuple} of '{relation}' has invalid value {found}")]
    InvalidValue {
        relation: String,
        tuple: usize,
        found: String,
    },

    /// Tuples are not strictly ascending by their argument indices
    #[error("tuples of '{relation}' are not sorted: #{tuple} does not come after its predecessor")]
    Unsorted { relation: String, tuple: usize },

    /// A builtin relation is declared with an arity other than its own
    #[error("builtin relation '{name}' declared with arity {found}, expected {expected}")]
    BuiltinArity {
        name: String,
        expected: usize,
        found: usize,
    },

    /// Two relations share a name
    #[error("duplicate relation '{name}'")]
    DuplicateRelation { name: String },
}

impl ContractViolation {
    /// The relation whose tuples broke the contract, if any.
    pub fn relation(&self) -> Option<&str> {
        match self {
            ContractViolation::ArityMismatch { relation, .. }
            | ContractViolation::InvalidArgument { relation, .. }
            | ContractViolation::InvalidValue { relation, .. }
            | ContractViolation::Unsorted { relation, .. } => Some(relation),
            ContractViolation::BuiltinArity { name, .. }
            | ContractViolation::DuplicateRelation { name } => Some(name),
            ContractViolation::Malformed(_) => None,
        }
    }
}
