//! Common error types used across the workspace.

/// Top-level error returned by panel operations.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// The request referenced something outside the domain's closed sets.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Input rejected by a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The light name is not one of the fixed panel lights.
    #[error("Invalid LED color")]
    UnknownLight {
        /// The name as received.
        name: String,
    },
}
