use super::Error;

/// Error when the records argument of a batch operation is not a collection.
#[derive(Debug)]
pub(super) struct NotASequence {
    pub(super) found: Box<str>,
}

impl Error {
    /// `found` names the kind of value received instead of a sequence.
    pub fn not_a_sequence(found: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotASequence(NotASequence {
            found: found.into().into(),
        }))
    }

    pub fn is_not_a_sequence(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotASequence(_))
    }
}

impl std::fmt::Display for NotASequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "records argument is not a sequence; found {}", self.found)
    }
}
