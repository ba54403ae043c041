use super::FieldRelation;
use crate::graph::{Field, Filter};

use serde::{Deserialize, Serialize};

/// Projects, filters, or joins its inputs into a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformNode {
    #[serde(default)]
    pub field_relations: Vec<FieldRelation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

/// A transform that keeps the first row per distinct key, ranked by an order
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinctNode {
    #[serde(flatten)]
    pub transform: TransformNode,

    pub distinct_fields: Vec<Field>,

    pub order_field: Field,

    #[serde(default)]
    pub order_direction: OrderDirection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl TransformNode {
    pub fn new(field_relations: Vec<FieldRelation>) -> TransformNode {
        TransformNode {
            field_relations,
            filters: vec![],
        }
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> TransformNode {
        self.filters = filters;
        self
    }
}

impl DistinctNode {
    pub fn new(
        transform: TransformNode,
        distinct_fields: Vec<Field>,
        order_field: Field,
        order_direction: OrderDirection,
    ) -> DistinctNode {
        DistinctNode {
            transform,
            distinct_fields,
            order_field,
            order_direction,
        }
    }
}

impl OrderDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}
