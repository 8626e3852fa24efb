#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Paren};

mod flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod insert;
mod value;

use crate::stmt::Insert;

use bulkins_core::driver::SqlFlavor;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects:
    /// identifier quoting and placeholder syntax.
    flavor: SqlFlavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Serializes an INSERT, pushing every bound value onto `params` in
    /// placeholder order.
    pub fn serialize(&self, stmt: &Insert, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    pub fn flavor(&self) -> SqlFlavor {
        self.flavor
    }

    /// Quotes a single identifier for this flavor.
    pub fn quote_ident(&self, name: &str) -> String {
        let mut ret = String::with_capacity(name.len() + 2);
        let mut no_params = params::NoParams;
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: &mut no_params,
        };
        Ident(name).to_sql(&mut fmt);
        ret
    }
}
