use sluice_core::{
    ensure_valid,
    graph::{
        node::{ExtractConnector, NodeKind},
        Node, NodeRelation, NodeRole, RelationKind,
    },
    Error, Result,
};

/// Checks the connector settings of an extract node.
pub(super) fn extract(node: &Node) -> Result<()> {
    if let NodeKind::Extract(extract) = &node.kind {
        if let ExtractConnector::MySql(mysql) = &extract.connector {
            ensure_valid!(
                !mysql.tables.is_empty(),
                "mysql extract node {} must capture at least one table",
                node.id
            );
            ensure_valid!(
                mysql.tables.iter().all(|table| !table.trim().is_empty()),
                "mysql extract node {} has a blank table name",
                node.id
            );
        }
    }

    Ok(())
}

/// Checks that `relation` can produce `node`.
pub(super) fn relation(node: &Node, relation: &NodeRelation) -> Result<()> {
    if let RelationKind::Union = relation.kind {
        return Err(union_unsupported(node));
    }

    ensure_valid!(
        relation.outputs.len() == 1,
        "relation of node {} must have exactly one output node, found {}",
        node.id,
        relation.outputs.len()
    );

    if node.role() == NodeRole::Load {
        ensure_valid!(
            relation.inputs.len() == 1,
            "load node {} only supports one input node, found {}",
            node.id,
            relation.inputs.len()
        );
    }

    match relation.kind {
        RelationKind::Join(_) => ensure_valid!(
            relation.inputs.len() > 1,
            "join relation of node {} must have more than one input node",
            node.id
        ),
        RelationKind::Simple => ensure_valid!(
            relation.inputs.len() == 1,
            "relation of node {} must have exactly one input node, found {}",
            node.id,
            relation.inputs.len()
        ),
        RelationKind::Union => {}
    }

    field_relations(node)
}

fn field_relations(node: &Node) -> Result<()> {
    let field_relations = node.field_relations();

    ensure_valid!(
        !field_relations.is_empty(),
        "field relations of node {} are empty",
        node.id
    );

    for field_relation in field_relations {
        let name = &field_relation.output.name;
        ensure_valid!(
            node.fields.iter().any(|field| field.name == *name),
            "field relation output `{name}` is not a field of node {}",
            node.id
        );
    }

    if let Some(distinct) = node.distinct() {
        ensure_valid!(
            !distinct.distinct_fields.is_empty(),
            "distinct fields of node {} are empty",
            node.id
        );
    }

    Ok(())
}

pub(super) fn union_unsupported(node: &Node) -> Error {
    Error::unsupported_operation(format!(
        "union relation of node {} is not currently supported",
        node.id
    ))
}
