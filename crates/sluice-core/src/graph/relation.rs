use super::Filter;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A directed edge set: the ordered `inputs` feed every node in `outputs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRelation {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,

    #[serde(flatten)]
    pub kind: RelationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RelationKind {
    /// One input feeds the output directly
    Simple,
    Join(JoinRelation),
    Union,
}

/// Joins the first input with each following one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRelation {
    pub join_type: JoinType,

    /// Join conditions for every input but the first, keyed by node id
    #[serde(default)]
    pub conditions: BTreeMap<String, Vec<Filter>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

impl NodeRelation {
    pub fn new(
        inputs: impl IntoIterator<Item = impl Into<String>>,
        outputs: impl IntoIterator<Item = impl Into<String>>,
        kind: RelationKind,
    ) -> NodeRelation {
        NodeRelation {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
            kind,
        }
    }

    pub fn simple(input: impl Into<String>, output: impl Into<String>) -> NodeRelation {
        NodeRelation {
            inputs: vec![input.into()],
            outputs: vec![output.into()],
            kind: RelationKind::Simple,
        }
    }

    pub fn join(
        inputs: impl IntoIterator<Item = impl Into<String>>,
        output: impl Into<String>,
        join_type: JoinType,
        conditions: impl IntoIterator<Item = (impl Into<String>, Vec<Filter>)>,
    ) -> NodeRelation {
        NodeRelation {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: vec![output.into()],
            kind: RelationKind::Join(JoinRelation {
                join_type,
                conditions: conditions
                    .into_iter()
                    .map(|(id, filters)| (id.into(), filters))
                    .collect(),
            }),
        }
    }

    pub fn union(
        inputs: impl IntoIterator<Item = impl Into<String>>,
        output: impl Into<String>,
    ) -> NodeRelation {
        NodeRelation {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: vec![output.into()],
            kind: RelationKind::Union,
        }
    }

    /// The keyword placing inputs side by side, if the relation has one.
    pub fn keyword(&self) -> Option<&'static str> {
        match &self.kind {
            RelationKind::Simple => None,
            RelationKind::Join(join) => Some(join.join_type.keyword()),
            RelationKind::Union => Some("UNION ALL"),
        }
    }
}

impl JoinType {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::LeftOuter => "LEFT OUTER JOIN",
            JoinType::RightOuter => "RIGHT OUTER JOIN",
            JoinType::FullOuter => "FULL OUTER JOIN",
        }
    }
}
