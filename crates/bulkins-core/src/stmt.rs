mod row;
pub use row::Row;

mod statement;
pub use statement::Statement;

mod value;
pub use value::Value;

mod value_jiff;

mod value_json;
