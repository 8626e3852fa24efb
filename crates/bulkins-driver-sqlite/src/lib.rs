mod value;
pub(crate) use value::Value;

use bulkins_core::{
    async_trait,
    driver::{Capability, Driver},
    stmt::Statement,
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(&url_str, err.to_string()))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(
                &url_str,
                "expected a `sqlite` scheme",
            ));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn bulkins_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::execution_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::execution_failed)?;
        Ok(Self { connection })
    }

    /// Runs parameterless SQL, such as schema setup, one statement after
    /// another.
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.connection
            .execute_batch(sql)
            .map_err(Error::execution_failed)
    }
}

#[async_trait]
impl bulkins_core::driver::Connection for Connection {
    async fn exec(&mut self, stmt: &Statement) -> Result<u64> {
        tracing::trace!(sql = %stmt.text, params = stmt.params.len(), "sqlite exec");

        let mut prepared = self
            .connection
            .prepare_cached(&stmt.text)
            .map_err(Error::execution_failed)?;

        let params = stmt.params.iter().map(Value::from).collect::<Vec<_>>();

        let count = prepared
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::execution_failed)?;

        Ok(count as u64)
    }
}
