use serde::ser::{Serialize, SerializeStruct, Serializer};
use sluice_core::graph::NodeRole;
use std::collections::BTreeMap;

/// The statements compiled from one stream or group.
///
/// DDL is kept per category and keyed by node id, so it iterates in a stable
/// order regardless of how the graph was walked. Inserts keep visit order,
/// which always follows the DDL of the tables they read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compilation {
    extract_tables: BTreeMap<String, String>,
    transform_views: BTreeMap<String, String>,
    load_tables: BTreeMap<String, String>,
    inserts: Vec<String>,
}

impl Compilation {
    /// `CREATE TABLE` statements of extract nodes, by node id.
    pub fn extract_tables(&self) -> &BTreeMap<String, String> {
        &self.extract_tables
    }

    /// `CREATE VIEW` statements of transform nodes, by node id.
    pub fn transform_views(&self) -> &BTreeMap<String, String> {
        &self.transform_views
    }

    /// `CREATE TABLE` statements of load nodes, by node id.
    pub fn load_tables(&self) -> &BTreeMap<String, String> {
        &self.load_tables
    }

    pub fn inserts(&self) -> &[String] {
        &self.inserts
    }

    /// Extract tables, then transform views, then load tables.
    pub fn create_statements(&self) -> impl Iterator<Item = &str> + '_ {
        self.extract_tables
            .values()
            .chain(self.transform_views.values())
            .chain(self.load_tables.values())
            .map(String::as_str)
    }

    /// The full batch, in the order it must be submitted: all DDL, then all
    /// inserts.
    pub fn statements(&self) -> impl Iterator<Item = &str> + '_ {
        self.create_statements()
            .chain(self.inserts.iter().map(String::as_str))
    }

    /// Total number of statements in the batch.
    pub fn len(&self) -> usize {
        self.extract_tables.len()
            + self.transform_views.len()
            + self.load_tables.len()
            + self.inserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn create(&mut self, role: NodeRole, node_id: &str, sql: String) {
        let statements = match role {
            NodeRole::Extract => &mut self.extract_tables,
            NodeRole::Transform => &mut self.transform_views,
            NodeRole::Load => &mut self.load_tables,
        };
        statements.insert(node_id.to_string(), sql);
    }

    pub(crate) fn insert(&mut self, sql: String) {
        self.inserts.push(sql);
    }
}

impl Serialize for Compilation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let creates = self.create_statements().collect::<Vec<_>>();

        let mut state = serializer.serialize_struct("Compilation", 2)?;
        state.serialize_field("creates", &creates)?;
        state.serialize_field("inserts", &self.inserts)?;
        state.end()
    }
}
