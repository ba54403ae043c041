use super::{verify, StreamIndex};

use crate::stmt::{Join, Query, Select, SelectItem, Source, TableAliases, TableRef, WindowRank};

use sluice_core::{
    graph::{
        node::DistinctNode, Field, FieldRelation, JoinRelation, Node, NodeRelation, RelationKind,
    },
    Error, Result,
};
use std::collections::HashMap;

/// The query a transform node's view is defined by.
pub(super) fn view_query(
    index: &StreamIndex<'_>,
    node: &Node,
    relation: &NodeRelation,
) -> Result<Query> {
    let select = match &relation.kind {
        RelationKind::Simple => simple(index, node, relation)?,
        RelationKind::Join(join) => joined(index, node, relation, join)?,
        RelationKind::Union => return Err(verify::union_unsupported(node)),
    };

    Ok(match node.distinct() {
        Some(distinct) => deduplicate(node, distinct, select),
        None => Query::Select(select),
    })
}

/// The query a load node is populated from.
pub(super) fn load_query(
    index: &StreamIndex<'_>,
    node: &Node,
    relation: &NodeRelation,
) -> Result<Query> {
    simple(index, node, relation).map(Query::Select)
}

fn simple(index: &StreamIndex<'_>, node: &Node, relation: &NodeRelation) -> Result<Select> {
    let [input] = relation.inputs.as_slice() else {
        return Err(Error::validation(format!(
            "relation of node {} must have exactly one input node, found {}",
            node.id,
            relation.inputs.len()
        )));
    };

    let source = Source::table(index.node(input)?.table_name());

    let mut select = Select::new(projection(node), source);
    select.filter = node.filters().to_vec();
    Ok(select)
}

fn joined(
    index: &StreamIndex<'_>,
    node: &Node,
    relation: &NodeRelation,
    join: &JoinRelation,
) -> Result<Select> {
    let Some((primary, rest)) = relation.inputs.split_first() else {
        return Err(Error::validation(format!(
            "join relation of node {} has no input nodes",
            node.id
        )));
    };

    let mut aliases = TableAliases::default();

    let mut source = Source {
        table: TableRef {
            name: index.node(primary)?.table_name(),
            alias: Some(aliases.assign(primary)),
        },
        joins: Vec::with_capacity(rest.len()),
    };

    for id in rest {
        let on = match join.conditions.get(id) {
            Some(on) if !on.is_empty() => on,
            _ => {
                return Err(Error::validation(format!(
                    "join condition is empty for node id {id}"
                )))
            }
        };

        source.joins.push(Join {
            keyword: join.join_type.keyword(),
            table: TableRef {
                name: index.node(id)?.table_name(),
                alias: Some(aliases.assign(id)),
            },
            on: on.clone(),
        });
    }

    resolve_fields(node, &source, &aliases)?;

    let mut select = Select::new(projection(node), source);
    select.filter = node.filters().to_vec();
    select.aliases = aliases;
    Ok(select)
}

/// Every field read by a join must name one of the joined tables.
fn resolve_fields(node: &Node, source: &Source, aliases: &TableAliases) -> Result<()> {
    let mut unresolved = None;
    let mut check = |field: &Field| {
        let resolved = match &field.node_id {
            Some(node_id) => aliases.contains(node_id),
            None => false,
        };

        if !resolved && unresolved.is_none() {
            unresolved = Some(field.clone());
        }
    };

    for field_relation in node.field_relations() {
        field_relation.input.for_each_field(&mut check);
    }

    for filter in node.filters() {
        filter.for_each_field(&mut check);
    }

    for join in &source.joins {
        for filter in &join.on {
            filter.for_each_field(&mut check);
        }
    }

    if let Some(distinct) = node.distinct() {
        distinct.distinct_fields.iter().for_each(&mut check);
        check(&distinct.order_field);
    }

    match unresolved {
        None => Ok(()),
        Some(field) => Err(Error::validation(match field.node_id {
            Some(node_id) => format!(
                "field `{}` of node {} refers to node {node_id}, which is not an input of the join",
                field.name, node.id
            ),
            None => format!(
                "field `{}` of node {} has no node id but the node joins more than one input",
                field.name, node.id
            ),
        })),
    }
}

/// One item per declared field. Fields no relation maps onto are filled with
/// a typed `NULL`.
fn projection(node: &Node) -> Vec<SelectItem> {
    let sources: HashMap<&str, &FieldRelation> = node
        .field_relations()
        .iter()
        .map(|field_relation| (field_relation.output.name.as_str(), field_relation))
        .collect();

    node.fields
        .iter()
        .map(|field| match sources.get(field.name.as_str()) {
            Some(field_relation) => SelectItem::Expr {
                expr: field_relation.input.clone(),
                alias: field.name.clone(),
            },
            None => SelectItem::Null {
                ty: node.column_type(field),
                alias: field.name.clone(),
            },
        })
        .collect()
}

fn deduplicate(node: &Node, distinct: &DistinctNode, mut inner: Select) -> Query {
    inner.items.push(SelectItem::RowNumber(WindowRank {
        partition_by: distinct.distinct_fields.clone(),
        order_by: distinct.order_field.clone(),
        direction: distinct.order_direction,
    }));

    Query::Deduplicate {
        columns: node.fields.iter().map(|field| field.name.clone()).collect(),
        inner,
    }
}
