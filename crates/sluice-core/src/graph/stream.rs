use super::{Node, NodeRelation};
use crate::Result;

use serde::{Deserialize, Serialize};

/// A named graph of nodes and relations; the unit of compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub stream_id: String,
    pub nodes: Vec<Node>,
    pub relations: Vec<NodeRelation>,
}

/// Streams deployed together as one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_id: String,
    pub streams: Vec<Stream>,
}

impl Stream {
    pub fn new(
        stream_id: impl Into<String>,
        nodes: Vec<Node>,
        relations: Vec<NodeRelation>,
    ) -> Stream {
        Stream {
            stream_id: stream_id.into(),
            nodes,
            relations,
        }
    }

    pub fn from_json(src: &str) -> Result<Stream> {
        Ok(serde_json::from_str(src)?)
    }
}

impl Group {
    pub fn new(group_id: impl Into<String>, streams: Vec<Stream>) -> Group {
        Group {
            group_id: group_id.into(),
            streams,
        }
    }

    pub fn from_json(src: &str) -> Result<Group> {
        Ok(serde_json::from_str(src)?)
    }

    /// Parses either a group document or a bare stream document. A bare
    /// stream is wrapped in a group sharing its id.
    pub fn from_json_document(src: &str) -> Result<Group> {
        let value: serde_json::Value = serde_json::from_str(src)?;

        if value.get("streams").is_some() {
            Ok(serde_json::from_value(value)?)
        } else {
            let stream: Stream = serde_json::from_value(value)?;
            Ok(Group::new(stream.stream_id.clone(), vec![stream]))
        }
    }
}
