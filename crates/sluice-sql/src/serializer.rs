#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

// Fragment serializers
mod expr;
mod query;
mod statement;
mod ty;

use crate::stmt::{Statement, TableAliases};

/// Serialize a statement to a single-line SQL string
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Aliases of the select currently being serialized
    aliases: TableAliases,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    /// Renders the statement without a trailing terminator.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            aliases: TableAliases::default(),
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}
