use crate::{stmt::Value, Result};

impl Value {
    /// Converts a JSON scalar into a value.
    ///
    /// Integers that fit `i64` become `I64`, other numbers `F64`. Arrays and
    /// objects are not scalars and are rejected.
    pub fn from_json(json: &serde_json::Value) -> Result<Value> {
        use serde_json::Value as Json;

        Ok(match json {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Bool(*v),
            Json::Number(n) => match n.as_i64() {
                Some(v) => Value::I64(v),
                None => match n.as_f64() {
                    Some(v) => Value::F64(v),
                    None => crate::bail!("JSON number {n} is out of range"),
                },
            },
            Json::String(v) => Value::String(v.clone()),
            Json::Array(_) => crate::bail!("cannot convert a JSON array to a scalar value"),
            Json::Object(_) => crate::bail!("cannot convert a JSON object to a scalar value"),
        })
    }

    /// Like [`Value::from_json`], but parses strings as RFC 3339 timestamps.
    /// An empty string is blank and becomes `Null`.
    pub fn timestamp_from_json(json: &serde_json::Value) -> Result<Value> {
        match json {
            serde_json::Value::String(s) if s.is_empty() => Ok(Value::Null),
            serde_json::Value::String(s) => Ok(Value::Timestamp(s.parse::<jiff::Timestamp>()?)),
            other => Value::from_json(other),
        }
    }
}
