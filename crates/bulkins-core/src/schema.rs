mod field;
pub use field::{Field, FieldDef, FieldDefault, FieldRole, FieldTy};

mod model;
pub use model::Model;
