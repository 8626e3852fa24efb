use super::Error;

/// Error when a record passed to the projector is not struct-like.
///
/// Typed records are always struct-like; this surfaces for dynamic records
/// whose backing value is a scalar, list or null.
#[derive(Debug)]
pub(super) struct InvalidInputKind {
    pub(super) message: Box<str>,
}

impl Error {
    pub fn invalid_input_kind(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidInputKind(InvalidInputKind {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_input_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidInputKind(_))
    }
}

impl std::fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid input kind: {}", self.message)
    }
}
