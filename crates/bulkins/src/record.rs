use crate::{schema::Field, stmt::Value, Model, Result};

use std::sync::Arc;

/// A value that can be inserted as one row.
///
/// Implementations expose a registration-time field table ([`Model`]) plus
/// the current value of each field. Usually implemented with
/// `#[derive(Record)]`; [`DynamicRecord`] covers records only known at run
/// time.
///
/// [`DynamicRecord`]: crate::DynamicRecord
pub trait Record {
    /// Field table for this record.
    fn model(&self) -> &Model;

    /// Current value of every field of [`Record::model`], in field order.
    ///
    /// `None` marks a field this instance does not carry at all, which is
    /// different from a field holding null.
    fn field_values(&self) -> Result<Vec<Option<Value>>>;

    /// Table the record is inserted into.
    fn table_name(&self) -> &str {
        &self.model().table_name
    }

    /// Pairs each carried field with its definition, in declaration order.
    fn describe(&self) -> Result<Vec<Field<'_>>> {
        let model = self.model();
        let values = self.field_values()?;

        if values.len() != model.fields.len() {
            return Err(crate::err!(
                "{} produced {} field values for {} fields",
                model.name,
                values.len(),
                model.fields.len()
            ));
        }

        Ok(model
            .fields
            .iter()
            .zip(values)
            .filter_map(|(def, value)| value.map(|value| Field { def, value }))
            .collect())
    }
}

macro_rules! impl_record_deref {
    ( $($ty:ty),+ ) => {
        $(
            impl<T: Record + ?Sized> Record for $ty {
                fn model(&self) -> &Model {
                    (**self).model()
                }

                fn field_values(&self) -> Result<Vec<Option<Value>>> {
                    (**self).field_values()
                }

                fn table_name(&self) -> &str {
                    (**self).table_name()
                }

                fn describe(&self) -> Result<Vec<Field<'_>>> {
                    (**self).describe()
                }
            }
        )+
    };
}

impl_record_deref!(&T, Box<T>, Arc<T>);
