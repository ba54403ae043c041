use super::FieldType;

use serde::{Deserialize, Serialize};

/// A typed reference to a column of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Column name
    pub name: String,

    /// Id of the node that owns the column. Required whenever the field is
    /// used where more than one input table is in scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    /// Declared logical type
    #[serde(rename = "type")]
    pub ty: FieldType,

    /// When set, the column value comes from connector metadata instead of
    /// the record payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaField>,
}

/// Built-in columns backed by connector metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetaField {
    /// Processing time of the engine
    ProcessTime,
    /// Name of the database containing the row
    DatabaseName,
    /// Name of the table containing the row
    TableName,
    /// Time the change was made in the database
    OpTs,
    /// Type of the change, such as INSERT or DELETE
    OpType,
    /// Raw change payload
    Data,
    /// Whether the change is a DDL statement
    IsDdl,
    /// Time the row was received by the pipeline
    Ts,
    /// Column name to SQL type id map
    SqlType,
    /// Column name to MySQL type map
    MysqlType,
    /// Primary key column names
    PkNames,
    /// Binlog batch id
    BatchId,
    /// Row images before an update
    UpdateBefore,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Field {
        Field {
            name: name.into(),
            node_id: None,
            ty,
            meta: None,
        }
    }

    /// Creates a metadata-backed field.
    pub fn meta(name: impl Into<String>, ty: FieldType, meta: MetaField) -> Field {
        Field {
            meta: Some(meta),
            ..Field::new(name, ty)
        }
    }

    /// Sets the id of the node owning this field.
    pub fn of(mut self, node_id: impl Into<String>) -> Field {
        self.node_id = Some(node_id.into());
        self
    }
}

/// Wraps a trimmed identifier in backquotes. One surrounding backquote on
/// either side is taken as existing quoting; any other backquote is doubled.
pub fn quote_ident(name: &str) -> String {
    let name = name.trim();
    let name = name.strip_prefix('`').unwrap_or(name);
    let name = name.strip_suffix('`').unwrap_or(name);
    format!("`{}`", name.replace('`', "``"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting() {
        assert_eq!(quote_ident("id"), "`id`");
        assert_eq!(quote_ident(" id "), "`id`");
        assert_eq!(quote_ident("`id`"), "`id`");
        assert_eq!(quote_ident("`id"), "`id`");
        assert_eq!(quote_ident("a`b"), "`a``b`");
        assert_eq!(quote_ident("`a`b`"), "`a``b`");
    }
}
