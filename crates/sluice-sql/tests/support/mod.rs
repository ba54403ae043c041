#![allow(dead_code)]

use sluice_core::graph::{
    node::{
        DistinctNode, ExtractNode, Format, HiveLoad, KafkaExtract, KafkaLoad, LoadNode,
        MySqlExtract, OrderDirection, StartupMode, TransformNode,
    },
    Field, FieldRelation, FieldType, Node,
};

pub fn int(name: &str) -> Field {
    Field::new(name, FieldType::Int)
}

pub fn string(name: &str) -> Field {
    Field::new(name, FieldType::String)
}

pub fn mysql_extract(id: &str, fields: Vec<Field>) -> Node {
    Node::new(
        id,
        fields,
        ExtractNode::new(MySqlExtract {
            hostname: "localhost".to_string(),
            port: Some(3306),
            username: "inlong".to_string(),
            password: "inlong".to_string(),
            database: "test".to_string(),
            tables: vec!["user".to_string()],
            server_id: None,
            incremental_snapshot: None,
        }),
    )
}

pub fn kafka_extract(id: &str, topic: &str, fields: Vec<Field>) -> Node {
    Node::new(
        id,
        fields,
        ExtractNode::new(KafkaExtract {
            topic: topic.to_string(),
            bootstrap_servers: "localhost:9092".to_string(),
            format: Format::Json,
            startup_mode: StartupMode::EarliestOffset,
            group_id: None,
        }),
    )
}

/// Maps every field onto the same-named field of `input`.
pub fn identity(input: &str, fields: &[Field]) -> Vec<FieldRelation> {
    fields
        .iter()
        .map(|field| FieldRelation::identity(&field.clone().of(input)))
        .collect()
}

pub fn transform(id: &str, fields: Vec<Field>, relations: Vec<FieldRelation>) -> Node {
    Node::new(id, fields, TransformNode::new(relations))
}

pub fn distinct(
    id: &str,
    fields: Vec<Field>,
    relations: Vec<FieldRelation>,
    distinct_fields: Vec<Field>,
    order_field: Field,
) -> Node {
    Node::new(
        id,
        fields,
        DistinctNode::new(
            TransformNode::new(relations),
            distinct_fields,
            order_field,
            OrderDirection::Asc,
        ),
    )
}

pub fn kafka_load(id: &str, topic: &str, fields: Vec<Field>, relations: Vec<FieldRelation>) -> Node {
    Node::new(
        id,
        fields,
        LoadNode::new(
            relations,
            KafkaLoad {
                topic: topic.to_string(),
                bootstrap_servers: "localhost:9092".to_string(),
                format: Format::Json,
            },
        ),
    )
}

pub fn hive_load(
    id: &str,
    fields: Vec<Field>,
    relations: Vec<FieldRelation>,
    partition_fields: Vec<Field>,
) -> Node {
    Node::new(
        id,
        fields,
        LoadNode::new(
            relations,
            HiveLoad {
                catalog_name: "hive".to_string(),
                database: "dw".to_string(),
                table_name: "dwd_user".to_string(),
                hive_conf_dir: "/etc/hive".to_string(),
                hive_version: "3.1.2".to_string(),
                hadoop_conf_dir: None,
                partition_fields,
            },
        ),
    )
}
