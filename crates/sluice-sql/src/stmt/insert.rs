use super::{Query, Statement};

use sluice_core::graph::Node;

/// `INSERT INTO target query` feeding a load node.
#[derive(Debug, Clone)]
pub struct Insert {
    pub target: String,
    pub query: Query,
}

impl Statement {
    pub fn insert(node: &Node, query: Query) -> Statement {
        Insert {
            target: node.table_name(),
            query,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
