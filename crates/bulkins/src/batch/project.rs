use crate::{stmt::Row, Clock, Record, Result, Value};

use jiff::Timestamp;

/// Projects a record to a row of storage columns.
///
/// Fields are visited in declaration order and skipped when:
/// - they are a foreign-key association, a relation or ignored;
/// - they are blank and have a declared default, which the store fills in;
/// - they are the blank `id` primary key, which the store generates.
///
/// A blank created/updated timestamp takes `now`, or the clock's current time
/// when no batch timestamp was captured. Every other field is copied as is.
pub fn project<R: Record + ?Sized>(
    record: &R,
    now: Option<Timestamp>,
    clock: &dyn Clock,
) -> Result<Row> {
    let fields = record.describe()?;
    let mut row = Row::with_capacity(fields.len());

    for field in fields {
        let def = field.def;

        if def.is_foreign_key() || def.is_relation() || def.ignored {
            continue;
        }

        if def.has_declared_default() && field.is_blank() {
            continue;
        }

        let column = field.storage_name().to_string();

        if def.primary_key && column == "id" && field.is_blank() {
            continue;
        }

        if def.is_timestamp() && field.is_blank() {
            let now = now.unwrap_or_else(|| clock.now());
            row.insert(column, Value::Timestamp(now));
            continue;
        }

        row.insert(column, field.value);
    }

    Ok(row)
}
