/// A scalar bound as a statement parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 32-bit integer
    U32(u32),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),

    /// An instant in time, UTC
    Timestamp(jiff::Timestamp),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Returns `true` when the value is the zero value of its type.
    ///
    /// A field holding its zero value is considered blank: unset by the
    /// caller, and therefore eligible for store-side defaults, key
    /// generation or the batch timestamp.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(v) => !v,
            Self::I32(v) => *v == 0,
            Self::I64(v) => *v == 0,
            Self::U32(v) => *v == 0,
            Self::F64(v) => *v == 0.0,
            Self::String(v) => v.is_empty(),
            Self::Bytes(v) => v.is_empty(),
            Self::Timestamp(v) => *v == jiff::Timestamp::UNIX_EPOCH,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::U32(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
