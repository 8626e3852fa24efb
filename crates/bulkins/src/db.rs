mod builder;
mod connect;

pub use builder::Builder;
pub use connect::Connect;

use crate::{
    batch::{self, Assembler},
    driver::{Capability, Connection, Driver},
    dynamic::DynamicRecord,
    stmt::Statement,
    Clock, Error, Model, Record, Result,
};

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    pub(crate) driver: Box<dyn Driver>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) connection: Mutex<Box<dyn Connection>>,
}

/// A database handle.
///
/// Clones share one connection; statements from different clones run one at
/// a time. Every insert call assembles with its own batch timestamp.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,

    /// Suffix appended to every INSERT issued through this handle
    insert_option: Option<Arc<str>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn capability(&self) -> &'static Capability {
        self.shared.driver.capability()
    }

    /// Returns a handle that appends `insert_option` to its statements.
    pub fn with_insert_option(&self, insert_option: impl Into<String>) -> Db {
        Db {
            shared: self.shared.clone(),
            insert_option: Some(insert_option.into().into()),
        }
    }

    /// Returns a handle that issues plain INSERT statements.
    pub fn without_insert_option(&self) -> Db {
        Db {
            shared: self.shared.clone(),
            insert_option: None,
        }
    }

    pub fn insert_option(&self) -> Option<&str> {
        self.insert_option.as_deref()
    }

    /// A fresh assembler for this handle's store and settings.
    pub fn assembler(&self) -> Assembler {
        Assembler::for_capability(self.capability())
            .with_clock(self.shared.clock.clone())
            .with_insert_option(self.insert_option.as_deref().map(str::to_string))
    }

    /// Builds the statement that [`Db::insert`] would execute, without
    /// executing it.
    pub fn prepare<R: Record>(&self, records: &[R]) -> Result<Option<Statement>> {
        self.assembler().assemble(records)
    }

    /// Inserts every record with a single statement, returning the number of
    /// rows inserted.
    #[instrument(name = "bulkins::insert", level = "debug", skip_all, fields(records = records.len()))]
    pub async fn insert<R: Record>(&self, records: &[R]) -> Result<u64> {
        let mut assembler = self.assembler();
        let mut connection = self.shared.connection.lock().await;
        batch::exec_batch(&mut **connection, &mut assembler, records).await
    }

    /// Inserts records in chunks of at most `chunk_size`, one statement per
    /// chunk, and returns the error of every chunk that failed.
    #[instrument(name = "bulkins::insert_chunked", level = "debug", skip_all, fields(records = records.len(), chunk_size = chunk_size))]
    pub async fn insert_chunked<R: Record>(&self, records: &[R], chunk_size: usize) -> Vec<Error> {
        let mut assembler = self.assembler();
        let mut connection = self.shared.connection.lock().await;
        batch::exec_chunked(&mut **connection, &mut assembler, records, chunk_size).await
    }

    /// Inserts a JSON array of objects described by `model`.
    pub async fn insert_json(&self, model: &Model, records: &serde_json::Value) -> Result<u64> {
        let records = DynamicRecord::from_json_array(model, records)?;
        self.insert(&records).await
    }

    /// Chunked variant of [`Db::insert_json`]. A `records` value that is not
    /// an array fails as a whole, before any chunk runs.
    pub async fn insert_json_chunked(
        &self,
        model: &Model,
        records: &serde_json::Value,
        chunk_size: usize,
    ) -> Vec<Error> {
        match DynamicRecord::from_json_array(model, records) {
            Ok(records) => self.insert_chunked(&records, chunk_size).await,
            Err(err) => vec![err],
        }
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.shared.driver)
            .field("insert_option", &self.insert_option)
            .finish()
    }
}
