use super::Error;

#[derive(Debug)]
pub(super) struct InvalidChunkSize {
    pub(super) size: usize,
}

impl Error {
    pub fn invalid_chunk_size(size: usize) -> Error {
        Error::from(super::ErrorKind::InvalidChunkSize(InvalidChunkSize { size }))
    }

    pub fn is_invalid_chunk_size(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidChunkSize(_))
    }
}

impl std::fmt::Display for InvalidChunkSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid chunk size {}; must be at least 1", self.size)
    }
}
