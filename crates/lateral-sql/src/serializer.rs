#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod expr;
mod name;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// When true, values are written as SQL literals instead of being pushed
    /// as parameters.
    inline: bool,
}

impl Serializer {
    /// Serializes `stmt`, replacing every non-boolean value with a placeholder
    /// and pushing it onto `params`.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        self.serialize_with(stmt, params, false)
    }

    /// Serializes `stmt` with every value written as a SQL literal.
    ///
    /// The output is meant for display and logs; executed statements go
    /// through [`Serializer::serialize`].
    pub fn serialize_inline(&self, stmt: &Statement) -> String {
        let mut params = Vec::new();
        self.serialize_with(stmt, &mut params, true)
    }

    fn serialize_with<T: Params>(&self, stmt: &Statement, params: &mut T, inline: bool) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            inline,
        };

        stmt.to_sql(&mut fmt);
        ret
    }
}
