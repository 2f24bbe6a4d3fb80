//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DevicesError`] via `#[from]`.

use std::fmt;

/// Top-level error for every device catalog operation.
#[derive(Debug, thiserror::Error)]
pub enum DevicesError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    #[error("{0}")]
    Conflict(#[from] ConflictError),

    /// Opaque failure from the persistence layer, propagated unmodified.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input failed a structural constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is empty or blank.
    #[error("{field}: must not be blank")]
    EmptyField { field: &'static str },

    /// A required field was not provided.
    #[error("{field}: must not be null")]
    MissingField { field: &'static str },

    /// A value could not be interpreted.
    #[error("{field}: invalid value {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

/// A referenced record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The requested mutation violates the in-use policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("cannot {0} of a device that is in use")]
    DeviceInUse(InUseAction),
}

/// What was attempted on an in-use device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InUseAction {
    UpdateNameOrBrand,
    Delete,
}

impl fmt::Display for InUseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateNameOrBrand => f.write_str("update name or brand"),
            Self::Delete => f.write_str("delete"),
        }
    }
}
