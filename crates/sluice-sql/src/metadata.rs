//! Maps metadata fields onto connector column syntax.
//!
//! Every clause here is matched literally by the execution engine's connectors,
//! so keys, case and punctuation must not drift.

use crate::stmt::ColumnType;

use sluice_core::{
    graph::{
        node::{ExtractConnector, ExtractNode, LoadConnector, LoadNode},
        Field, MetaField, Node, NodeKind,
    },
    Error, Result,
};

/// The column type a field is declared with in its node's `CREATE TABLE`.
///
/// Plain fields keep their declared type. Metadata fields map onto the
/// connector's metadata clause, falling back to the declared type when the
/// connector has no clause for that kind. A connector family with no
/// metadata support at all is an error.
pub fn column_type(node: &Node, field: &Field) -> Result<ColumnType> {
    let Some(meta) = field.meta else {
        return Ok(ColumnType::Type(node.column_type(field)));
    };

    if meta == MetaField::ProcessTime {
        return Ok(ColumnType::ProcTime);
    }

    let clause = match &node.kind {
        NodeKind::Extract(ExtractNode {
            connector: ExtractConnector::MySql(_),
            ..
        }) => mysql_extract(meta),
        NodeKind::Extract(ExtractNode {
            connector: ExtractConnector::Kafka(_),
            ..
        }) => kafka_extract(meta),
        NodeKind::Load(LoadNode {
            connector: LoadConnector::Kafka(_),
            ..
        }) => kafka_load(meta),
        _ => {
            return Err(Error::unsupported_operation(format!(
                "{} node {} does not currently support metadata fields",
                node.kind_name(),
                node.id
            )))
        }
    };

    Ok(match clause {
        Some(clause) => ColumnType::Metadata(clause),
        None => ColumnType::Type(node.column_type(field)),
    })
}

fn mysql_extract(meta: MetaField) -> Option<&'static str> {
    Some(match meta {
        MetaField::TableName => "STRING METADATA FROM 'meta.table_name' VIRTUAL",
        MetaField::DatabaseName => "STRING METADATA FROM 'meta.database_name' VIRTUAL",
        MetaField::OpTs => "TIMESTAMP(3) METADATA FROM 'meta.op_ts' VIRTUAL",
        MetaField::OpType => "STRING METADATA FROM 'meta.op_type' VIRTUAL",
        MetaField::Data => "STRING METADATA FROM 'meta.data' VIRTUAL",
        MetaField::IsDdl => "BOOLEAN METADATA FROM 'meta.is_ddl' VIRTUAL",
        MetaField::Ts => "TIMESTAMP_LTZ(3) METADATA FROM 'meta.ts' VIRTUAL",
        MetaField::SqlType => "MAP<STRING, INT> METADATA FROM 'meta.sql_type' VIRTUAL",
        MetaField::MysqlType => "MAP<STRING, STRING> METADATA FROM 'meta.mysql_type' VIRTUAL",
        MetaField::PkNames => "ARRAY<STRING> METADATA FROM 'meta.pk_names' VIRTUAL",
        MetaField::BatchId => "BIGINT METADATA FROM 'meta.batch_id' VIRTUAL",
        MetaField::UpdateBefore => {
            "ARRAY<MAP<STRING, STRING>> METADATA FROM 'meta.update_before' VIRTUAL"
        }
        MetaField::ProcessTime => return None,
    })
}

fn kafka_extract(meta: MetaField) -> Option<&'static str> {
    Some(match meta {
        MetaField::TableName => "STRING METADATA FROM 'value.table'",
        MetaField::DatabaseName => "STRING METADATA FROM 'value.database'",
        MetaField::SqlType => "MAP<STRING, INT> METADATA FROM 'value.sql-type'",
        MetaField::PkNames => "ARRAY<STRING> METADATA FROM 'value.pk-names'",
        MetaField::Ts => "TIMESTAMP_LTZ(3) METADATA FROM 'value.ingestion-timestamp'",
        MetaField::OpTs => "TIMESTAMP_LTZ(3) METADATA FROM 'value.event-timestamp'",
        MetaField::OpType => "STRING METADATA FROM 'value.op-type'",
        MetaField::IsDdl => "BOOLEAN METADATA FROM 'value.is-ddl'",
        MetaField::MysqlType => "MAP<STRING, STRING> METADATA FROM 'value.mysql-type'",
        MetaField::BatchId => "BIGINT METADATA FROM 'value.batch-id'",
        MetaField::UpdateBefore => "ARRAY<MAP<STRING, STRING>> METADATA FROM 'value.update-before'",
        MetaField::Data | MetaField::ProcessTime => return None,
    })
}

fn kafka_load(meta: MetaField) -> Option<&'static str> {
    Some(match meta {
        MetaField::TableName => "STRING METADATA FROM 'value.table'",
        MetaField::DatabaseName => "STRING METADATA FROM 'value.database'",
        MetaField::OpTs => "TIMESTAMP(3) METADATA FROM 'value.op_ts'",
        MetaField::OpType => "STRING METADATA FROM 'value.op_type'",
        MetaField::Data => "STRING METADATA FROM 'value.data'",
        MetaField::IsDdl => "BOOLEAN METADATA FROM 'value.is_ddl'",
        MetaField::Ts => "TIMESTAMP_LTZ(3) METADATA FROM 'value.ts'",
        MetaField::SqlType => "MAP<STRING, INT> METADATA FROM 'value.sql_type'",
        MetaField::MysqlType => "MAP<STRING, STRING> METADATA FROM 'value.mysql_type'",
        MetaField::PkNames => "ARRAY<STRING> METADATA FROM 'value.pk_names'",
        MetaField::BatchId => "BIGINT METADATA FROM 'value.batch_id'",
        MetaField::UpdateBefore => "ARRAY<MAP<STRING, STRING>> METADATA FROM 'value.update_before'",
        MetaField::ProcessTime => return None,
    })
}
