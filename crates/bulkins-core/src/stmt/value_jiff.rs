use crate::stmt::Value;

impl From<jiff::Timestamp> for Value {
    fn from(value: jiff::Timestamp) -> Self {
        Self::Timestamp(value)
    }
}
