mod capability;
pub use capability::{Capability, SqlFlavor};

use crate::{async_trait, stmt::Statement, Result};

use std::{borrow::Cow, fmt::Debug};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the URL this driver is connecting to.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the driver's capability, which informs the serializer.
    fn capability(&self) -> &'static Capability;

    /// Creates a new connection to the database.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// The execution collaborator: runs one serialized statement against the
/// store.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Executes a statement, returning the number of rows affected.
    ///
    /// Driver failures are reported as [`Error::execution_failed`].
    ///
    /// [`Error::execution_failed`]: crate::Error::execution_failed
    async fn exec(&mut self, stmt: &Statement) -> Result<u64>;
}
