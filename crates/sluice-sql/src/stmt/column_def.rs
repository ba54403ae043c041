use sluice_core::{
    graph::{Field, FieldType, Node},
    Result,
};

use crate::metadata;

/// A column of a `CREATE TABLE` statement.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: ColumnType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    /// A physical column of the given type
    Type(FieldType),

    /// A connector metadata column, `<TYPE> METADATA FROM '<key>' [VIRTUAL]`
    Metadata(&'static str),

    /// A computed processing-time attribute
    ProcTime,
}

impl ColumnDef {
    pub(crate) fn from_node(node: &Node, field: &Field) -> Result<ColumnDef> {
        Ok(ColumnDef {
            name: field.name.clone(),
            ty: metadata::column_type(node, field)?,
        })
    }
}
