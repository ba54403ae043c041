use super::{Formatter, ToSql};

use crate::stmt::ColumnType;

use sluice_core::graph::FieldType;
use std::fmt::Write;

impl ToSql for &FieldType {
    fn to_sql(self, f: &mut Formatter<'_>) {
        // Writing to a `String` never fails
        let _ = write!(f.dst, "{self}");
    }
}

impl ToSql for &ColumnType {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            ColumnType::Type(ty) => fmt!(f, " ", ty),
            ColumnType::Metadata(clause) => fmt!(f, " ", *clause),
            ColumnType::ProcTime => fmt!(f, " AS PROCTIME()"),
        }
    }
}
