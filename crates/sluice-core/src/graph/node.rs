mod extract;
pub use extract::{
    ExtractConnector, ExtractNode, Format, KafkaExtract, MySqlExtract, StartupMode, TimeUnit,
    Watermark,
};

mod load;
pub use load::{HiveLoad, KafkaLoad, LoadConnector, LoadNode};

mod transform;
pub use transform::{DistinctNode, OrderDirection, TransformNode};

use super::{Expr, Field, FieldType, Filter};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One stage of a stream: where data is extracted from, how it is
/// transformed, or where it is loaded to.
///
/// Nodes are built once from the graph definition and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Identifies the node within its stream
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Declared output columns, in order
    pub fields: Vec<Field>,

    /// Extra connector options. Connector-specific keys take precedence.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,

    #[serde(flatten)]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Extract(ExtractNode),
    Transform(TransformNode),
    /// A transform keeping one row per distinct key
    Distinct(DistinctNode),
    Load(LoadNode),
}

/// Which compile category a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Extract,
    Transform,
    Load,
}

/// Maps one input expression onto one declared output field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRelation {
    pub input: Expr,
    pub output: Field,
}

impl Node {
    pub fn new(id: impl Into<String>, fields: Vec<Field>, kind: impl Into<NodeKind>) -> Node {
        Node {
            id: id.into(),
            name: None,
            fields,
            properties: BTreeMap::new(),
            kind: kind.into(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Node {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn role(&self) -> NodeRole {
        match &self.kind {
            NodeKind::Extract(_) => NodeRole::Extract,
            NodeKind::Transform(_) | NodeKind::Distinct(_) => NodeRole::Transform,
            NodeKind::Load(_) => NodeRole::Load,
        }
    }

    /// The table or view identifier the node is registered under.
    pub fn table_name(&self) -> String {
        match &self.kind {
            NodeKind::Extract(_) => format!("table_{}", self.id),
            NodeKind::Transform(_) | NodeKind::Distinct(_) => format!("transform_{}", self.id),
            NodeKind::Load(load) => load.table_name(&self.id),
        }
    }

    /// Connector options for the `WITH` clause, sorted by key.
    pub fn table_options(&self) -> BTreeMap<String, String> {
        let mut options = self.properties.clone();

        match &self.kind {
            NodeKind::Extract(extract) => extract.connector.options(&mut options),
            NodeKind::Transform(_) | NodeKind::Distinct(_) => {}
            NodeKind::Load(load) => load.options(&self.properties, &mut options),
        }

        options
    }

    /// Comma-separated primary key column names, if any.
    pub fn primary_key(&self) -> Option<&str> {
        let pk = match &self.kind {
            NodeKind::Extract(extract) => extract.primary_key.as_deref(),
            NodeKind::Load(load) => load.primary_key.as_deref(),
            NodeKind::Transform(_) | NodeKind::Distinct(_) => None,
        };
        pk.filter(|pk| !pk.trim().is_empty())
    }

    pub fn partition_fields(&self) -> &[Field] {
        match &self.kind {
            NodeKind::Load(LoadNode {
                connector: LoadConnector::Hive(hive),
                ..
            }) => &hive.partition_fields,
            _ => &[],
        }
    }

    pub fn watermark(&self) -> Option<&Watermark> {
        match &self.kind {
            NodeKind::Extract(extract) => extract.watermark.as_ref(),
            _ => None,
        }
    }

    /// Field relationships feeding the node. Always empty for extract nodes.
    pub fn field_relations(&self) -> &[FieldRelation] {
        match &self.kind {
            NodeKind::Extract(_) => &[],
            NodeKind::Transform(transform) => &transform.field_relations,
            NodeKind::Distinct(distinct) => &distinct.transform.field_relations,
            NodeKind::Load(load) => &load.field_relations,
        }
    }

    pub fn filters(&self) -> &[Filter] {
        match &self.kind {
            NodeKind::Extract(_) => &[],
            NodeKind::Transform(transform) => &transform.filters,
            NodeKind::Distinct(distinct) => &distinct.transform.filters,
            NodeKind::Load(load) => &load.filters,
        }
    }

    pub fn distinct(&self) -> Option<&DistinctNode> {
        match &self.kind {
            NodeKind::Distinct(distinct) => Some(distinct),
            _ => None,
        }
    }

    /// The type a declared field is materialized with by this node's connector.
    pub fn column_type(&self, field: &Field) -> FieldType {
        match &self.kind {
            // The Hive connector only accepts nanosecond timestamps.
            NodeKind::Load(LoadNode {
                connector: LoadConnector::Hive(_),
                ..
            }) => field.ty.with_timestamp_precision(9),
            _ => field.ty.clone(),
        }
    }

    /// Short label of the node variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Extract(extract) => match extract.connector {
                ExtractConnector::MySql(_) => "mysql extract",
                ExtractConnector::Kafka(_) => "kafka extract",
            },
            NodeKind::Transform(_) => "transform",
            NodeKind::Distinct(_) => "distinct",
            NodeKind::Load(load) => match load.connector {
                LoadConnector::Kafka(_) => "kafka load",
                LoadConnector::Hive(_) => "hive load",
            },
        }
    }
}

impl FieldRelation {
    pub fn new(input: impl Into<Expr>, output: Field) -> FieldRelation {
        FieldRelation {
            input: input.into(),
            output,
        }
    }

    /// Maps a field onto an output field of the same name and type.
    pub fn identity(field: &Field) -> FieldRelation {
        FieldRelation::new(field.clone(), Field::new(&field.name, field.ty.clone()))
    }
}

impl From<ExtractNode> for NodeKind {
    fn from(value: ExtractNode) -> Self {
        NodeKind::Extract(value)
    }
}

impl From<TransformNode> for NodeKind {
    fn from(value: TransformNode) -> Self {
        NodeKind::Transform(value)
    }
}

impl From<DistinctNode> for NodeKind {
    fn from(value: DistinctNode) -> Self {
        NodeKind::Distinct(value)
    }
}

impl From<LoadNode> for NodeKind {
    fn from(value: LoadNode) -> Self {
        NodeKind::Load(value)
    }
}
