use super::{project, BatchNow, ColumnPlan};
use crate::{driver::Capability, stmt::Statement, Clock, Error, Record, Result, SystemClock};

use bulkins_sql::{Insert, Serializer};
use jiff::Timestamp;
use std::sync::Arc;

/// Builds one multi-row INSERT from a batch of records.
///
/// Each assembler owns its batch timestamp slot, so assemblers used from
/// different tasks never observe each other's timestamp.
pub struct Assembler {
    serializer: Serializer,

    clock: Arc<dyn Clock>,

    /// Suffix appended to every statement, e.g. `ON CONFLICT DO NOTHING`
    insert_option: Option<String>,

    /// Statements binding more parameters than this are logged before they
    /// reach the store.
    max_params: usize,

    /// Set while a batch is being assembled.
    now: Option<Timestamp>,
}

impl Assembler {
    pub fn new(serializer: Serializer) -> Self {
        Self {
            serializer,
            clock: Arc::new(SystemClock),
            insert_option: None,
            max_params: usize::MAX,
            now: None,
        }
    }

    pub fn for_capability(capability: &Capability) -> Self {
        Self {
            max_params: capability.max_params,
            ..Self::new(Serializer::for_capability(capability))
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_insert_option(mut self, insert_option: Option<String>) -> Self {
        self.insert_option = insert_option;
        self
    }

    /// The timestamp of the batch currently being assembled, if any.
    pub fn batch_now(&self) -> Option<Timestamp> {
        self.now
    }

    /// Assembles `records` into a single statement.
    ///
    /// Returns `Ok(None)` when there is nothing to insert. The column plan
    /// comes from the first record; every record, the first included, must
    /// project to exactly the planned columns.
    pub fn assemble<R: Record>(&mut self, records: &[R]) -> Result<Option<Statement>> {
        let Some(first) = records.first() else {
            return Ok(None);
        };

        let clock = &*self.clock;
        let now = BatchNow::enter(&mut self.now, clock);

        let plan = ColumnPlan::from_row(&project(first, Some(now.get()), clock)?);

        let mut insert = Insert::new(first.table_name(), plan.columns.clone())
            .with_placeholders(plan.placeholders.clone());
        insert.option = self.insert_option.clone();

        for (index, record) in records.iter().enumerate() {
            if record.table_name() != insert.table {
                return Err(Error::schema_mismatch(
                    index,
                    format!(
                        "record targets table `{}`, batch targets `{}`",
                        record.table_name(),
                        insert.table
                    ),
                ));
            }

            let row = project(record, Some(now.get()), clock)?;
            insert.push_row(plan.values(index, row)?);
        }

        if insert.num_params() > self.max_params {
            tracing::warn!(
                table = %insert.table,
                params = insert.num_params(),
                max_params = self.max_params,
                "statement exceeds the store's parameter limit; use a smaller chunk size"
            );
        }

        let mut params = Vec::with_capacity(insert.num_params());
        let text = self.serializer.serialize(&insert, &mut params);

        tracing::debug!(
            table = %insert.table,
            rows = insert.rows.len(),
            params = params.len(),
            "assembled batch insert"
        );

        Ok(Some(Statement::new(text, params)))
    }
}

impl std::fmt::Debug for Assembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assembler")
            .field("serializer", &self.serializer)
            .field("insert_option", &self.insert_option)
            .field("max_params", &self.max_params)
            .field("now", &self.now)
            .finish()
    }
}
