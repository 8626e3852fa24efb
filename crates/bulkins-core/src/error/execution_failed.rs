use super::Error;

/// Error when the execution collaborator fails to run a statement.
///
/// This wraps errors from underlying database driver libraries:
/// - Connection errors
/// - Statement preparation and execution errors
/// - Parameter binding errors
#[derive(Debug)]
pub(super) struct ExecutionFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ExecutionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ExecutionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("execution failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver failure.
    ///
    /// This is the preferred way to convert driver-specific errors (rusqlite
    /// and friends) into bulkins errors.
    pub fn execution_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ExecutionFailed(ExecutionFailed {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a driver execution failure.
    pub fn is_execution_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExecutionFailed(_))
    }
}
