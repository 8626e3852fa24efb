use crate::Placeholder;

use bulkins_core::stmt::Value;

/// A multi-row INSERT statement.
///
/// Each entry of `rows` is one parenthesized VALUES group and must hold
/// exactly one value per entry of `columns`, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Unquoted target table name
    pub table: String,

    /// Unquoted column names
    pub columns: Vec<String>,

    /// Placeholder slots of a single VALUES group, one per column. Every
    /// group is rendered from this template, shifted past the slots of the
    /// groups before it.
    pub placeholders: Vec<Placeholder>,

    /// One value group per inserted record
    pub rows: Vec<Vec<Value>>,

    /// Store-specific suffix appended verbatim, e.g. a conflict clause
    pub option: Option<String>,
}

impl Insert {
    /// Creates an insert whose template numbers the columns 1 through n.
    pub fn new(table: impl Into<String>, columns: Vec<String>) -> Self {
        let placeholders = (1..=columns.len()).map(Placeholder).collect();

        Self {
            table: table.into(),
            columns,
            placeholders,
            rows: vec![],
            option: None,
        }
    }

    /// Replaces the per-group placeholder template.
    pub fn with_placeholders(mut self, placeholders: Vec<Placeholder>) -> Self {
        debug_assert_eq!(placeholders.len(), self.columns.len());
        self.placeholders = placeholders;
        self
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Number of bind parameters the serialized statement carries.
    pub fn num_params(&self) -> usize {
        self.columns.len() * self.rows.len()
    }
}
