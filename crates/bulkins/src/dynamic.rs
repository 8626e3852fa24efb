//! Records whose shape is only known at run time.
//!
//! A [`DynamicRecord`] pairs a hand-built [`Model`] with a JSON value. This
//! is the path that receives untyped input, so it is also where malformed
//! input is detected: a record that is not a JSON object, or a records
//! argument that is not a JSON array.

use crate::{Error, Model, Record, Result, Value};

use serde_json::Value as Json;

#[derive(Debug, Clone, Copy)]
pub struct DynamicRecord<'a> {
    model: &'a Model,
    value: &'a Json,
}

impl<'a> DynamicRecord<'a> {
    pub fn new(model: &'a Model, value: &'a Json) -> Self {
        Self { model, value }
    }

    /// Wraps every element of a JSON array.
    ///
    /// Fails with `NotASequence` when `records` is not an array. Elements are
    /// not inspected here; a non-object element fails later, when it is
    /// projected.
    pub fn from_json_array(model: &'a Model, records: &'a Json) -> Result<Vec<Self>> {
        match records {
            Json::Array(items) => Ok(items.iter().map(|value| Self::new(model, value)).collect()),
            other => Err(Error::not_a_sequence(json_kind(other))),
        }
    }

    pub fn value(&self) -> &'a Json {
        self.value
    }
}

impl Record for DynamicRecord<'_> {
    fn model(&self) -> &Model {
        self.model
    }

    fn field_values(&self) -> Result<Vec<Option<Value>>> {
        let Json::Object(object) = self.value else {
            return Err(Error::invalid_input_kind(format!(
                "{} record must be a JSON object, found {}",
                self.model.name,
                json_kind(self.value)
            )));
        };

        self.model
            .fields
            .iter()
            .map(|def| {
                let Some(json) = object.get(&*def.name) else {
                    return Ok(None);
                };

                if def.is_relation() || def.is_foreign_key() || def.ignored {
                    // Never projected; the payload may be nested.
                    return Ok(Some(Value::Null));
                }

                let value = if def.is_timestamp() {
                    Value::timestamp_from_json(json)
                } else {
                    Value::from_json(json)
                };

                value
                    .map(Some)
                    .map_err(|err| err.context(crate::err!("field `{}`", def.name)))
            })
            .collect()
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
