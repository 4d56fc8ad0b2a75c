//! Common error types used across the workspace.
//!
//! Each failure category is its own typed error and converts into
//! [`SmartHomeError`] via `#[from]`, so callers can match on the category
//! without parsing strings.

/// Top-level error for every fallible domain operation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SmartHomeError {
    /// A caller passed a value the operation cannot accept.
    #[error("invalid argument")]
    InvalidArgument(#[from] InvalidArgumentError),

    /// The addressed item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Rejected input values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgumentError {
    /// The device type tag matches none of the known kinds.
    #[error("invalid device type {0:?}")]
    UnknownDeviceType(String),
}

/// Lookup failure for an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of item that was looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// The identifier that did not resolve.
    pub id: String,
}
