use super::{Formatter, ToSql};

use bulkins_core::{driver::SqlFlavor, stmt};

/// Collects bound values in the order their placeholders are written.
pub trait Params {
    fn push(&mut self, param: &stmt::Value);
}

/// A 1-based positional parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) {
        self.push(value.clone());
    }
}

/// Used when serializing fragments that never bind values.
pub(super) struct NoParams;

impl Params for NoParams {
    fn push(&mut self, _: &stmt::Value) {}
}

impl Placeholder {
    /// Renders the placeholder token for a flavor: `?N` for SQLite, `$N` for
    /// PostgreSQL and a bare `?` for MySQL.
    pub fn render(self, flavor: SqlFlavor) -> String {
        match flavor {
            SqlFlavor::Mysql => "?".to_string(),
            SqlFlavor::Postgresql => format!("${}", self.0),
            SqlFlavor::Sqlite => format!("?{}", self.0),
        }
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        let token = self.render(f.serializer.flavor);
        f.dst.push_str(&token);
    }
}
