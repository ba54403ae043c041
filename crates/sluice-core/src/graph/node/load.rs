use super::{extract::set, FieldRelation, Format};
use crate::graph::{Field, Filter};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadNode {
    #[serde(default)]
    pub field_relations: Vec<FieldRelation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink_parallelism: Option<u32>,

    /// Comma-separated primary key column names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,

    #[serde(flatten)]
    pub connector: LoadConnector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "connector", rename_all = "kebab-case")]
pub enum LoadConnector {
    Kafka(KafkaLoad),
    Hive(HiveLoad),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KafkaLoad {
    pub topic: String,
    pub bootstrap_servers: String,
    pub format: Format,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveLoad {
    pub catalog_name: String,
    pub database: String,
    pub table_name: String,
    pub hive_conf_dir: String,
    pub hive_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hadoop_conf_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partition_fields: Vec<Field>,
}

const PARTITION_COMMIT_DEFAULTS: &[(&str, &str)] = &[
    ("sink.partition-commit.trigger", "process-time"),
    ("partition.time-extractor.timestamp-pattern", "yyyy-MM-dd"),
    ("sink.partition-commit.delay", "10s"),
    ("sink.partition-commit.policy.kind", "metastore,success-file"),
];

impl LoadNode {
    pub fn new(
        field_relations: Vec<FieldRelation>,
        connector: impl Into<LoadConnector>,
    ) -> LoadNode {
        LoadNode {
            field_relations,
            filters: vec![],
            sink_parallelism: None,
            primary_key: None,
            connector: connector.into(),
        }
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> LoadNode {
        self.filters = filters;
        self
    }

    pub fn with_sink_parallelism(mut self, parallelism: u32) -> LoadNode {
        self.sink_parallelism = Some(parallelism);
        self
    }

    pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> LoadNode {
        self.primary_key = Some(primary_key.into());
        self
    }

    pub(super) fn table_name(&self, id: &str) -> String {
        match &self.connector {
            LoadConnector::Kafka(kafka) => format!("node_{id}_{}", kafka.topic),
            LoadConnector::Hive(hive) => hive.table_name.clone(),
        }
    }

    pub(super) fn options(
        &self,
        properties: &BTreeMap<String, String>,
        options: &mut BTreeMap<String, String>,
    ) {
        match &self.connector {
            LoadConnector::Kafka(kafka) => {
                set(options, "connector", "kafka");
                set(options, "topic", &kafka.topic);
                set(options, "properties.bootstrap.servers", &kafka.bootstrap_servers);
                set(options, "format", kafka.format.as_str());

                if let Some(parallelism) = self.sink_parallelism {
                    set(options, "sink.parallelism", parallelism.to_string());
                }
            }
            LoadConnector::Hive(hive) => {
                set(options, "connector", "hive");
                set(options, "default-database", &hive.database);
                set(options, "hive-conf-dir", &hive.hive_conf_dir);
                set(options, "hive-version", &hive.hive_version);

                if let Some(dir) = &hive.hadoop_conf_dir {
                    set(options, "hadoop-conf-dir", dir);
                }

                if !hive.partition_fields.is_empty() {
                    for (key, value) in PARTITION_COMMIT_DEFAULTS {
                        if !properties.contains_key(*key) {
                            set(options, key, *value);
                        }
                    }
                }
            }
        }
    }
}

impl From<KafkaLoad> for LoadConnector {
    fn from(value: KafkaLoad) -> Self {
        LoadConnector::Kafka(value)
    }
}

impl From<HiveLoad> for LoadConnector {
    fn from(value: HiveLoad) -> Self {
        LoadConnector::Hive(value)
    }
}
