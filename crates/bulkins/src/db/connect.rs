use crate::{driver::Driver, Error, Result};

use url::Url;

/// Resolves a connection URL to one of the built-in drivers.
#[derive(Debug)]
pub struct Connect {
    url: Url,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(url, err.to_string()))?;
        Ok(Self { url })
    }

    pub fn driver(&self) -> Result<Box<dyn Driver>> {
        match self.url.scheme() {
            "sqlite" => connect_sqlite(&self.url),
            scheme => Err(Error::invalid_connection_url(
                self.url.as_str(),
                format!("unsupported database `{scheme}`"),
            )),
        }
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Driver>> {
    Ok(Box::new(bulkins_driver_sqlite::Sqlite::new(url.as_str())?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url(
        url.as_str(),
        "`sqlite` feature not enabled",
    ))
}
