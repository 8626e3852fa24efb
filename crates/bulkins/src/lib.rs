pub mod batch;
pub use batch::{Assembler, ColumnPlan};

pub mod clock;
pub use clock::{Clock, SystemClock};

pub mod db;
pub use db::Db;

pub mod dynamic;
pub use dynamic::DynamicRecord;

mod record;
pub use record::Record;

pub use bulkins_core::{
    driver::{self, Capability, Connection, Driver},
    err,
    schema::{self, Field, FieldDef, FieldDefault, FieldRole, FieldTy, Model},
    stmt::{self, Row, Statement, Value},
    Error, Result,
};

pub use bulkins_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Record, Result};
    pub use bulkins_core::{
        schema::{FieldDef, FieldRole, Model},
        stmt::Value,
    };
    pub use std::{option::Option, sync::OnceLock, vec::Vec};
}
