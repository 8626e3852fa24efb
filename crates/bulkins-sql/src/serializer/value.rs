use super::{Params, Placeholder, ToSql};

use bulkins_core::stmt;

/// A bound value and the placeholder it is written as.
pub(super) struct Bind<'a> {
    pub(super) placeholder: Placeholder,
    pub(super) value: &'a stmt::Value,
}

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.params.push(self.value);
        fmt!(f, self.placeholder);
    }
}
