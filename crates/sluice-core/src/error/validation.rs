use super::Error;

/// Error when a graph definition breaks a structural rule.
///
/// This occurs when:
/// - A required collection is empty (no nodes, no relations, no streams)
/// - A node id referenced by a relation or a field cannot be resolved
/// - A relation has the wrong number of inputs or outputs for its kind
/// - A transform or load node has no field relationships
/// - A joined input has no join conditions
///
/// Validation errors are fatal: recompiling the same graph fails the same way.
#[derive(Debug)]
pub(super) struct ValidationError {
    message: Box<str>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid graph: {}", self.message)
    }
}

impl Error {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a validation error.
    pub fn is_validation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Validation(_)))
    }
}
