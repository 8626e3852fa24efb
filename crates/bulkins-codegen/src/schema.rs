mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Auto, Field, FieldKind, Role};

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;

mod name;
pub(crate) use name::Name;
