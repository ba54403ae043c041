use super::Error;

/// Error when the graph asks for something the compiler does not implement.
///
/// This occurs when:
/// - A union relation is compiled
/// - A metadata field is declared on a node whose connector has no metadata mapping
#[derive(Debug)]
pub(super) struct UnsupportedOperation {
    message: Box<str>,
}

impl std::error::Error for UnsupportedOperation {}

impl core::fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operation: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported operation error.
    pub fn unsupported_operation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(UnsupportedOperation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an unsupported operation error.
    pub fn is_unsupported_operation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedOperation(_)))
    }
}
