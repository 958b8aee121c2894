//! Error types for rendering from serialized inputs.

use partial_dot_semantics::ContractViolation;
use thiserror::Error;

/// Errors that can occur when rendering from JSON documents.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The snapshot broke the tuple contract
    #[error("Invalid snapshot: {0}")]
    Contract(#[from] ContractViolation),

    /// The visibility policy document could not be read
    #[error("Invalid visibility policy: {0}")]
    Policy(#[source] serde_json::Error),
}
