use super::{Expr, Field, FieldType, Filter};

use indexmap::IndexMap;
use sluice_core::graph::node::OrderDirection;

/// The body of a view or an insert.
#[derive(Debug, Clone)]
pub enum Query {
    Select(Select),

    /// Keeps the first row of every partition of `inner`, ranked by its
    /// trailing `ROW_NUMBER()` item, and projects `columns` out of it.
    Deduplicate { columns: Vec<String>, inner: Select },
}

#[derive(Debug, Clone)]
pub struct Select {
    /// Projection, one item per declared output field. A deduplicating
    /// select carries one extra trailing rank item.
    pub items: Vec<SelectItem>,

    pub source: Source,

    /// `WHERE` filters; empty when there are none
    pub filter: Vec<Filter>,

    /// Aliases of the tables in `source`, keyed by node id. Empty unless the
    /// select reads more than one table.
    pub aliases: TableAliases,
}

#[derive(Debug, Clone)]
pub enum SelectItem {
    /// `<expr> AS <alias>`
    Expr { expr: Expr, alias: String },

    /// `CAST(NULL AS <ty>) AS <alias>` for a field nothing maps onto
    Null { ty: FieldType, alias: String },

    /// `ROW_NUMBER() OVER (...) AS row_num`
    RowNumber(WindowRank),
}

#[derive(Debug, Clone)]
pub struct WindowRank {
    pub partition_by: Vec<Field>,
    pub order_by: Field,
    pub direction: OrderDirection,
}

/// `FROM` clause: the primary table followed by the tables joined to it.
#[derive(Debug, Clone)]
pub struct Source {
    pub table: TableRef,
    pub joins: Vec<Join>,
}

#[derive(Debug, Clone)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Join {
    /// `INNER JOIN`, `LEFT OUTER JOIN`, ...
    pub keyword: &'static str,
    pub table: TableRef,
    pub on: Vec<Filter>,
}

/// Generated table aliases for a multi-table select.
///
/// Field references are qualified through this table at render time, so the
/// graph definitions themselves are never annotated.
#[derive(Debug, Clone, Default)]
pub struct TableAliases {
    by_node: IndexMap<String, String>,
}

impl Query {
    /// Name of the column ranking duplicate rows.
    pub const ROW_NUMBER: &'static str = "row_num";
}

impl Select {
    pub fn new(items: Vec<SelectItem>, source: Source) -> Select {
        Select {
            items,
            source,
            filter: vec![],
            aliases: TableAliases::default(),
        }
    }
}

impl Source {
    pub fn table(name: impl Into<String>) -> Source {
        Source {
            table: TableRef {
                name: name.into(),
                alias: None,
            },
            joins: vec![],
        }
    }
}

impl TableAliases {
    /// Assigns `t<id>` to the node, returning the alias.
    pub fn assign(&mut self, node_id: &str) -> String {
        let alias = format!("t{node_id}");
        self.by_node.insert(node_id.to_string(), alias.clone());
        alias
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.by_node.contains_key(node_id)
    }

    /// The alias qualifying `field`, if the select has aliases and the field
    /// names one of its tables.
    pub fn resolve(&self, field: &Field) -> Option<&str> {
        let node_id = field.node_id.as_deref()?;
        self.by_node.get(node_id).map(String::as_str)
    }
}
