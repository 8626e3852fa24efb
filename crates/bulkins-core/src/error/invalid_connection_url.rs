use super::Error;

/// Error when a connection URL cannot be resolved to a driver.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    url: Box<str>,
    reason: Box<str>,
}

impl Error {
    pub fn invalid_connection_url(url: &str, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            url: url.into(),
            reason: reason.into().into(),
        }))
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}

impl std::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot connect to `{}`: {}", self.url, self.reason)
    }
}
