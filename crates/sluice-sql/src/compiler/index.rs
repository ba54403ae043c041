use indexmap::{map::Entry, IndexMap};
use sluice_core::{
    ensure_valid,
    graph::{Node, NodeRelation, Stream},
    Error, Result,
};

/// Lookup tables over one stream, built once before it is walked.
pub(super) struct StreamIndex<'a> {
    /// Nodes by id, in declaration order
    nodes: IndexMap<&'a str, &'a Node>,

    /// The relation each node is the output of
    owners: IndexMap<&'a str, &'a NodeRelation>,
}

impl<'a> StreamIndex<'a> {
    pub(super) fn new(stream: &'a Stream) -> Result<StreamIndex<'a>> {
        ensure_valid!(!stream.stream_id.trim().is_empty(), "stream id is empty");
        ensure_valid!(
            !stream.nodes.is_empty(),
            "stream {} has no nodes",
            stream.stream_id
        );
        ensure_valid!(
            !stream.relations.is_empty(),
            "stream {} has no relations",
            stream.stream_id
        );

        let mut nodes = IndexMap::with_capacity(stream.nodes.len());

        for node in &stream.nodes {
            if nodes.insert(node.id.as_str(), node).is_some() {
                return Err(Error::validation(format!("duplicate node id {}", node.id)));
            }
        }

        let mut owners = IndexMap::new();

        for relation in &stream.relations {
            ensure_valid!(!relation.inputs.is_empty(), "relation has no input nodes");
            ensure_valid!(!relation.outputs.is_empty(), "relation has no output nodes");

            for id in &relation.inputs {
                ensure_valid!(
                    nodes.contains_key(id.as_str()),
                    "can not find any node by node id {id}"
                );
            }

            for id in &relation.outputs {
                ensure_valid!(
                    nodes.contains_key(id.as_str()),
                    "can not find any node by node id {id}"
                );

                match owners.entry(id.as_str()) {
                    Entry::Vacant(entry) => {
                        entry.insert(relation);
                    }
                    Entry::Occupied(_) => {
                        return Err(Error::validation(format!(
                            "node {id} is the output of more than one relation"
                        )));
                    }
                }
            }
        }

        Ok(StreamIndex { nodes, owners })
    }

    pub(super) fn node(&self, id: &str) -> Result<&'a Node> {
        self.nodes
            .get(id)
            .copied()
            .ok_or_else(|| Error::validation(format!("can not find any node by node id {id}")))
    }

    /// The relation producing `id`. Every non-extract node must have one.
    pub(super) fn owner(&self, id: &str) -> Result<&'a NodeRelation> {
        self.owners.get(id).copied().ok_or_else(|| {
            Error::validation(format!("node {id} is not the output of any relation"))
        })
    }
}
