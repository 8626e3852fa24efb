use crate::stmt::Value;

use std::borrow::Cow;

/// Static description of one field of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// The field name, as declared on the record type
    pub name: Cow<'static, str>,

    /// The column name in the database
    pub storage_name: Cow<'static, str>,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// How the store populates the column when the insert omits it
    pub default: Option<FieldDefault>,

    /// Column, foreign key or relation
    pub ty: FieldTy,

    /// True if the field is never persisted
    pub ignored: bool,

    /// Timestamp role, if any
    pub role: FieldRole,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// An explicitly declared default expression, e.g. `CURRENT_TIMESTAMP`.
    Declared(Cow<'static, str>),

    /// The column is auto-incremented by the store.
    AutoIncrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTy {
    /// A plain column
    Column,

    /// A foreign-key association. The key column itself is a separate plain
    /// field.
    ForeignKey,

    /// An association, not stored in this table
    Relation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldRole {
    #[default]
    Plain,
    CreatedAt,
    UpdatedAt,
}

impl FieldDef {
    /// A plain column whose storage name is the field name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self {
            storage_name: name.clone(),
            name,
            primary_key: false,
            default: None,
            ty: FieldTy::Column,
            ignored: false,
            role: FieldRole::Plain,
        }
    }

    pub fn storage_name(mut self, storage_name: impl Into<Cow<'static, str>>) -> Self {
        self.storage_name = storage_name.into();
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.default = Some(FieldDefault::AutoIncrement);
        self
    }

    pub fn default_expr(mut self, expr: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(FieldDefault::Declared(expr.into()));
        self
    }

    pub fn foreign_key(mut self) -> Self {
        self.ty = FieldTy::ForeignKey;
        self
    }

    pub fn relation(mut self) -> Self {
        self.ty = FieldTy::Relation;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn role(mut self, role: FieldRole) -> Self {
        self.role = role;
        self
    }

    /// True only when a default expression was declared. Auto-increment
    /// columns also get a store-side value but do not count.
    pub fn has_declared_default(&self) -> bool {
        matches!(self.default, Some(FieldDefault::Declared(_)))
    }

    pub fn is_foreign_key(&self) -> bool {
        matches!(self.ty, FieldTy::ForeignKey)
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.ty, FieldTy::Relation)
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self.role, FieldRole::CreatedAt | FieldRole::UpdatedAt)
    }
}

impl FieldRole {
    /// Role implied by a field name alone.
    pub fn from_field_name(name: &str) -> FieldRole {
        match name {
            "created_at" => FieldRole::CreatedAt,
            "updated_at" => FieldRole::UpdatedAt,
            _ => FieldRole::Plain,
        }
    }
}

/// A field of one record instance: its definition plus the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    pub def: &'a FieldDef,
    pub value: Value,
}

impl Field<'_> {
    /// True when the field holds its zero value.
    pub fn is_blank(&self) -> bool {
        self.value.is_zero()
    }

    pub fn storage_name(&self) -> &str {
        &self.def.storage_name
    }
}
