use super::{Query, Statement};

use sluice_core::graph::Node;

/// `CREATE VIEW name (columns) AS query` for a transform node.
#[derive(Debug, Clone)]
pub struct CreateView {
    pub name: String,
    pub columns: Vec<String>,
    pub query: Query,
}

impl Statement {
    pub fn create_view(node: &Node, query: Query) -> Statement {
        CreateView {
            name: node.table_name(),
            columns: node.fields.iter().map(|field| field.name.clone()).collect(),
            query,
        }
        .into()
    }
}

impl From<CreateView> for Statement {
    fn from(value: CreateView) -> Self {
        Self::CreateView(value)
    }
}
