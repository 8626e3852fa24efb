use super::{Connect, Db, Shared};
use crate::{driver::Driver, Clock, Result, SystemClock};

use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct Builder {
    /// Clock used for created/updated timestamps. Defaults to the system
    /// clock.
    clock: Option<Arc<dyn Clock>>,

    /// Suffix appended to every INSERT, unless overridden per handle
    insert_option: Option<String>,
}

impl Builder {
    pub fn clock(&mut self, clock: impl Clock + 'static) -> &mut Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Set a store-specific suffix for every INSERT, e.g.
    /// `ON CONFLICT DO NOTHING`.
    pub fn insert_option(&mut self, insert_option: impl Into<String>) -> &mut Self {
        self.insert_option = Some(insert_option.into());
        self
    }

    /// Connect using a URL such as `sqlite::memory:`.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = Connect::new(url)?.driver()?;
        self.build_boxed(driver).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_boxed(Box::new(driver)).await
    }

    async fn build_boxed(&mut self, driver: Box<dyn Driver>) -> Result<Db> {
        let connection = driver.connect().await?;

        tracing::debug!(url = %driver.url(), "connected");

        let clock = self
            .clock
            .clone()
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);

        Ok(Db {
            shared: Arc::new(Shared {
                driver,
                clock,
                connection: Mutex::new(connection),
            }),
            insert_option: self.insert_option.as_deref().map(Arc::from),
        })
    }
}
