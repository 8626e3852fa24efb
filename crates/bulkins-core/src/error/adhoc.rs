/// Error built from a formatted message, used where no structured kind fits.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<Box<str>>) -> Self {
        AdhocError {
            message: message.into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl super::Error {
    /// Creates an ad hoc error from format arguments. Prefer the `err!` and
    /// `bail!` macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> super::Error {
        let message = match args.as_str() {
            Some(s) => Box::from(s),
            None => args.to_string().into_boxed_str(),
        };
        super::Error::from(super::ErrorKind::Adhoc(AdhocError::new(message)))
    }
}
