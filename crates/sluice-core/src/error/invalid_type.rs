use super::Error;

/// Error when a data type string cannot be parsed.
#[derive(Debug)]
pub(super) struct InvalidType {
    message: Box<str>,
}

impl std::error::Error for InvalidType {}

impl core::fmt::Display for InvalidType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid data type: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid data type error.
    pub fn invalid_type(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidType(InvalidType {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid data type error.
    pub fn is_invalid_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidType(_)))
    }
}
