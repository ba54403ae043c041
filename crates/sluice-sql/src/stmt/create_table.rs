use super::{ColumnDef, Statement};

use sluice_core::{
    graph::{node::Watermark, Node},
    Result,
};
use std::collections::BTreeMap;

/// `CREATE TABLE` for an extract or load node.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key column names, empty when the table has none
    pub primary_key: Vec<String>,

    pub watermark: Option<Watermark>,

    /// Partition column names
    pub partitioned_by: Vec<String>,

    /// Connector options for the `WITH` clause
    pub options: BTreeMap<String, String>,
}

impl Statement {
    pub fn create_table(node: &Node) -> Result<Statement> {
        let columns = node
            .fields
            .iter()
            .map(|field| ColumnDef::from_node(node, field))
            .collect::<Result<Vec<_>>>()?;

        let primary_key = node
            .primary_key()
            .map(|pk| {
                pk.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(CreateTable {
            name: node.table_name(),
            columns,
            primary_key,
            watermark: node.watermark().cloned(),
            partitioned_by: node
                .partition_fields()
                .iter()
                .map(|field| field.name.clone())
                .collect(),
            options: node.table_options(),
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
