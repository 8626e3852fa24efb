use super::{value::Bind, Comma, Ident, Paren, Params, Placeholder, ToSql};

use crate::stmt::Insert;

use bulkins_core::stmt::Value;

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);
        let columns = Paren(Comma(self.columns.iter().map(Ident)));
        let width = self.placeholders.len();
        let rows = Comma(self.rows.iter().enumerate().map(|(i, values)| {
            Paren(Group {
                template: &self.placeholders,
                offset: i * width,
                values,
            })
        }));

        fmt!(f, "INSERT INTO " table " " columns " VALUES " rows);

        if let Some(option) = &self.option {
            fmt!(f, " " option.as_str());
        }
    }
}

/// One VALUES group, rendered from the statement's placeholder template.
struct Group<'a> {
    template: &'a [Placeholder],
    offset: usize,
    values: &'a [Value],
}

impl ToSql for Group<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let offset = self.offset;
        let binds = self.template.iter().zip(self.values).map(|(slot, value)| Bind {
            placeholder: Placeholder(offset + slot.0),
            value,
        });

        fmt!(f, Comma(binds));
    }
}
