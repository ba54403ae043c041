use pretty_assertions::assert_eq;
use sluice_core::graph::{
    node::{ExtractConnector, LoadConnector, OrderDirection, TimeUnit},
    CompareOp, Condition, Expr, Field, FieldType, Group, JoinType, MetaField, NodeKind, NodeRole,
    RelationKind, Stream,
};

const STREAM: &str = r#"{
    "streamId": "s1",
    "nodes": [
        {
            "id": "1",
            "fields": [
                {"name": "id", "type": "INT"},
                {"name": "db", "type": "STRING", "meta": "DATABASE_NAME"},
                {"name": "ts", "type": "TIMESTAMP(3)"}
            ],
            "type": "extract",
            "connector": "mysql-cdc",
            "hostname": "localhost",
            "port": 3306,
            "username": "inlong",
            "password": "inlong",
            "database": "test",
            "tables": ["user", "order"],
            "primaryKey": "id",
            "watermark": {"field": {"name": "ts", "type": "TIMESTAMP(3)"}, "interval": 1, "unit": "MINUTE"}
        },
        {
            "id": "2",
            "fields": [{"name": "id", "type": "INT"}],
            "type": "kafka-placeholder"
        }
    ],
    "relations": []
}"#;

#[test]
fn extract_node_from_json() {
    let src = STREAM.replace(
        r#"{
            "id": "2",
            "fields": [{"name": "id", "type": "INT"}],
            "type": "kafka-placeholder"
        }"#,
        r#"{
            "id": "2",
            "fields": [{"name": "id", "type": "INT"}],
            "type": "load",
            "connector": "kafka",
            "topic": "out",
            "bootstrapServers": "localhost:9092",
            "format": "canal-json",
            "fieldRelations": [
                {"input": {"kind": "field", "name": "id", "nodeId": "1", "type": "INT"},
                 "output": {"name": "id", "type": "INT"}}
            ]
        }"#,
    );

    let stream = Stream::from_json(&src).unwrap();
    assert_eq!(stream.stream_id, "s1");
    assert_eq!(stream.nodes.len(), 2);

    let extract = &stream.nodes[0];
    assert_eq!(extract.role(), NodeRole::Extract);
    assert_eq!(extract.table_name(), "table_1");
    assert_eq!(extract.primary_key(), Some("id"));
    assert_eq!(
        extract.fields[1],
        Field::meta("db", FieldType::String, MetaField::DatabaseName)
    );

    let NodeKind::Extract(node) = &extract.kind else {
        panic!("expected an extract node");
    };
    let ExtractConnector::MySql(mysql) = &node.connector else {
        panic!("expected a mysql connector");
    };
    assert_eq!(mysql.port, Some(3306));
    assert_eq!(extract.table_options()["table-name"], "(user|order)");

    let watermark = extract.watermark().unwrap();
    assert_eq!(watermark.interval, Some(1));
    assert_eq!(watermark.unit, TimeUnit::Minute);

    let load = &stream.nodes[1];
    assert_eq!(load.role(), NodeRole::Load);
    assert_eq!(load.table_name(), "node_2_out");
    assert_eq!(load.table_options()["format"], "canal-json");
    let NodeKind::Load(node) = &load.kind else {
        panic!("expected a load node");
    };
    assert!(matches!(node.connector, LoadConnector::Kafka(_)));
    assert_eq!(
        load.field_relations()[0].input,
        Expr::field(Field::new("id", FieldType::Int).of("1"))
    );
}

#[test]
fn unknown_node_type_is_rejected() {
    assert!(Stream::from_json(STREAM).is_err());
}

#[test]
fn invalid_field_type_is_rejected() {
    let src = r#"{
        "streamId": "s1",
        "nodes": [{"id": "1", "fields": [{"name": "id", "type": "NUMBER"}],
                   "type": "transform", "fieldRelations": []}],
        "relations": []
    }"#;

    let err = Stream::from_json(src).unwrap_err();
    assert!(err.to_string().contains("NUMBER"), "{err}");
}

#[test]
fn join_relation_from_json() {
    let src = r#"{
        "streamId": "s1",
        "nodes": [],
        "relations": [{
            "inputs": ["1", "2"],
            "outputs": ["3"],
            "type": "join",
            "joinType": "leftOuter",
            "conditions": {
                "2": [{
                    "condition": {
                        "kind": "compare",
                        "lhs": {"kind": "field", "name": "id", "nodeId": "1", "type": "INT"},
                        "op": "=",
                        "rhs": {"kind": "field", "name": "id", "nodeId": "2", "type": "INT"}
                    }
                }]
            }
        }]
    }"#;

    let stream = Stream::from_json(src).unwrap();
    let relation = &stream.relations[0];
    assert_eq!(relation.keyword(), Some("LEFT OUTER JOIN"));

    let RelationKind::Join(join) = &relation.kind else {
        panic!("expected a join relation");
    };
    assert_eq!(join.join_type, JoinType::LeftOuter);

    let filter = &join.conditions["2"][0];
    assert_eq!(filter.logic, None);
    assert!(matches!(
        filter.condition,
        Condition::Compare {
            op: CompareOp::Eq,
            ..
        }
    ));
}

#[test]
fn distinct_node_from_json() {
    let src = r#"{
        "streamId": "s1",
        "nodes": [{
            "id": "2",
            "fields": [{"name": "id", "type": "INT"}],
            "type": "distinct",
            "fieldRelations": [
                {"input": {"kind": "field", "name": "id", "type": "INT"},
                 "output": {"name": "id", "type": "INT"}}
            ],
            "distinctFields": [{"name": "id", "type": "INT"}],
            "orderField": {"name": "ts", "type": "TIMESTAMP(3)"},
            "orderDirection": "DESC"
        }],
        "relations": [{"inputs": ["1"], "outputs": ["2"], "type": "simple"}]
    }"#;

    let stream = Stream::from_json(src).unwrap();
    let node = &stream.nodes[0];

    assert_eq!(node.role(), NodeRole::Transform);
    assert_eq!(node.table_name(), "transform_2");

    let distinct = node.distinct().unwrap();
    assert_eq!(distinct.order_direction, OrderDirection::Desc);
    assert_eq!(node.field_relations().len(), 1);
    assert!(matches!(stream.relations[0].kind, RelationKind::Simple));
}

#[test]
fn document_is_group_or_stream() {
    let stream = r#"{"streamId": "s1", "nodes": [], "relations": []}"#;
    let group = Group::from_json_document(stream).unwrap();
    assert_eq!(group.group_id, "s1");
    assert_eq!(group.streams.len(), 1);

    let src = r#"{"groupId": "g1", "streams": [
        {"streamId": "s1", "nodes": [], "relations": []},
        {"streamId": "s2", "nodes": [], "relations": []}
    ]}"#;
    let group = Group::from_json_document(src).unwrap();
    assert_eq!(group.group_id, "g1");
    assert_eq!(
        group
            .streams
            .iter()
            .map(|stream| stream.stream_id.as_str())
            .collect::<Vec<_>>(),
        ["s1", "s2"]
    );
}
