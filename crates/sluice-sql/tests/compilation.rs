mod support;
use support::*;

use pretty_assertions::assert_eq;
use sluice_core::graph::{Group, NodeRelation, Stream};
use sluice_sql::{Compilation, Compiler};

/// Extract 1 feeds transform 2, which feeds loads 3 and 4. Relations are
/// declared downstream first so the walk has to pull inputs in.
fn fan_out() -> Stream {
    let fields = vec![int("id"), string("name")];

    Stream::new(
        "s1",
        vec![
            kafka_load("4", "b", fields.clone(), identity("2", &fields)),
            kafka_load("3", "a", fields.clone(), identity("2", &fields)),
            transform("2", fields.clone(), identity("1", &fields)),
            mysql_extract("1", fields.clone()),
        ],
        vec![
            NodeRelation::simple("2", "4"),
            NodeRelation::simple("2", "3"),
            NodeRelation::simple("1", "2"),
        ],
    )
}

#[test]
fn every_node_is_compiled_once() {
    let compilation = Compiler::compile_stream(&fan_out()).unwrap();

    assert_eq!(
        compilation.extract_tables().keys().collect::<Vec<_>>(),
        ["1"]
    );
    assert_eq!(
        compilation.transform_views().keys().collect::<Vec<_>>(),
        ["2"]
    );
    assert_eq!(
        compilation.load_tables().keys().collect::<Vec<_>>(),
        ["3", "4"]
    );
    assert_eq!(compilation.inserts().len(), 2);
}

#[test]
fn inserts_keep_visit_order() {
    let compilation = Compiler::compile_stream(&fan_out()).unwrap();

    assert_eq!(
        compilation.inserts(),
        [
            "INSERT INTO `node_4_b` SELECT `id` AS `id`, `name` AS `name` FROM `transform_2`",
            "INSERT INTO `node_3_a` SELECT `id` AS `id`, `name` AS `name` FROM `transform_2`",
        ]
    );
}

#[test]
fn tables_are_created_before_they_are_read() {
    let compilation = Compiler::compile_stream(&fan_out()).unwrap();
    let statements = compilation.statements().collect::<Vec<_>>();

    let position = |prefix: &str| {
        statements
            .iter()
            .position(|sql| sql.starts_with(prefix))
            .unwrap()
    };

    let extract = position("CREATE TABLE `table_1`");
    let view = position("CREATE VIEW `transform_2`");
    let load_a = position("CREATE TABLE `node_3_a`");
    let load_b = position("CREATE TABLE `node_4_b`");
    let first_insert = position("INSERT INTO");

    assert!(extract < view);
    assert!(view < load_a && load_a < load_b);
    assert!(load_b < first_insert);
    assert!(statements[view].ends_with("FROM `table_1`"));
    assert_eq!(statements.len(), compilation.len());
}

#[test]
fn group_compiles_streams_into_one_batch() {
    let first = vec![int("id")];
    let second = vec![string("name")];

    let group = Group::new(
        "g1",
        vec![
            Stream::new(
                "s1",
                vec![
                    mysql_extract("1", first.clone()),
                    kafka_load("2", "a", first.clone(), identity("1", &first)),
                ],
                vec![NodeRelation::simple("1", "2")],
            ),
            Stream::new(
                "s2",
                vec![
                    mysql_extract("3", second.clone()),
                    kafka_load("4", "b", second.clone(), identity("3", &second)),
                ],
                vec![NodeRelation::simple("3", "4")],
            ),
        ],
    );

    let compilation = Compiler::compile_group(&group).unwrap();

    assert_eq!(compilation.extract_tables().len(), 2);
    assert_eq!(compilation.load_tables().len(), 2);
    assert_eq!(
        compilation.inserts(),
        [
            "INSERT INTO `node_2_a` SELECT `id` AS `id` FROM `table_1`",
            "INSERT INTO `node_4_b` SELECT `name` AS `name` FROM `table_3`",
        ]
    );
}

#[test]
fn group_error_names_the_failing_stream() {
    let group = Group::new(
        "g1",
        vec![
            Stream::new(
                "s1",
                vec![mysql_extract("1", vec![int("id")])],
                vec![NodeRelation::simple("1", "1")],
            ),
            Stream::new("s2", vec![], vec![]),
        ],
    );

    let err = Compiler::compile_group(&group).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "compile stream s2: invalid graph: stream s2 has no nodes"
    );
}

#[test]
fn serializes_as_creates_and_inserts() {
    let fields = vec![int("id")];
    let stream = Stream::new(
        "s1",
        vec![
            mysql_extract("1", fields.clone()),
            kafka_load("2", "a", fields.clone(), identity("1", &fields)),
        ],
        vec![NodeRelation::simple("1", "2")],
    );

    let compilation = Compiler::compile_stream(&stream).unwrap();
    let json = serde_json::to_value(&compilation).unwrap();

    let creates = json["creates"].as_array().unwrap();
    assert_eq!(creates.len(), 2);
    assert!(creates[0].as_str().unwrap().starts_with("CREATE TABLE `table_1`"));
    assert!(creates[1].as_str().unwrap().starts_with("CREATE TABLE `node_2_a`"));
    assert_eq!(
        json["inserts"],
        serde_json::json!(["INSERT INTO `node_2_a` SELECT `id` AS `id` FROM `table_1`"])
    );
}

#[test]
fn empty_compilation() {
    let compilation = Compilation::default();

    assert!(compilation.is_empty());
    assert_eq!(compilation.statements().count(), 0);
}
