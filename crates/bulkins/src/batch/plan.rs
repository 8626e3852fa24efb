use crate::{stmt::Row, Error, Result, Value};

use bulkins_sql::Placeholder;

/// Column order and placeholder template shared by every row of a batch.
///
/// Built once, from the first record's row. Columns are sorted so the order
/// does not depend on how the row was assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    /// Unquoted column names, ascending.
    pub columns: Vec<String>,

    /// One slot per column, numbered from 1 within a VALUES group. Every
    /// group of the statement is rendered from this template, shifted past
    /// the slots of the groups before it.
    pub placeholders: Vec<Placeholder>,
}

impl ColumnPlan {
    pub fn from_row(row: &Row) -> ColumnPlan {
        let mut columns: Vec<String> = row.columns().map(str::to_string).collect();
        columns.sort();

        let placeholders = (1..=columns.len()).map(Placeholder).collect();

        ColumnPlan {
            columns,
            placeholders,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Pulls the row's values in plan order.
    ///
    /// `index` is the record's position in the batch, reported when the row
    /// lacks a planned column or carries one the plan does not have.
    pub fn values(&self, index: usize, mut row: Row) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(self.columns.len());

        for column in &self.columns {
            match row.take(column) {
                Some(value) => values.push(value),
                None => {
                    return Err(Error::schema_mismatch(
                        index,
                        format!("missing column `{column}`"),
                    ))
                }
            }
        }

        if let Some(extra) = row.columns().next() {
            return Err(Error::schema_mismatch(
                index,
                format!("unexpected column `{extra}`"),
            ));
        }

        Ok(values)
    }
}
