use super::Error;

/// Error when a projected row does not supply exactly the columns planned
/// from the first record of the batch.
#[derive(Debug)]
pub(super) struct SchemaMismatch {
    /// Position of the offending record within its batch.
    pub(super) index: usize,
    pub(super) message: Box<str>,
}

impl Error {
    pub fn schema_mismatch(index: usize, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaMismatch(SchemaMismatch {
            index,
            message: message.into().into(),
        }))
    }

    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaMismatch(_))
    }
}

impl std::fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "schema mismatch at record {}: {}",
            self.index, self.message
        )
    }
}
