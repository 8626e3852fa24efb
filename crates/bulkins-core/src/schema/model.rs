use super::FieldDef;

use std::borrow::Cow;

/// Registration-time description of a record type: the table it is stored in
/// and its persistable fields, in declaration order.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the record type
    pub name: Cow<'static, str>,

    /// Table the records are inserted into
    pub table_name: Cow<'static, str>,

    /// Fields, in declaration order
    pub fields: Vec<FieldDef>,
}

impl Model {
    pub fn new(name: impl Into<Cow<'static, str>>, table_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            fields: vec![],
        }
    }

    /// Appends a field definition.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }
}
