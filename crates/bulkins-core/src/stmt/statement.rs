use super::Value;

/// A serialized statement ready for execution.
///
/// `params` binds, in order, every placeholder that appears in `text`.
/// Values are never inlined into the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub text: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(text: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            text: text.into(),
            params,
        }
    }
}
