use bulkins_core::stmt::Value as CoreValue;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Binds a core value as a SQLite parameter.
#[derive(Debug)]
pub struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use CoreValue::*;

        match self.0 {
            Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            U32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            // RFC 3339 text, which SQLite's date functions understand
            Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
