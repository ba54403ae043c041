use super::super::Field;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractNode {
    /// Comma-separated primary key column names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<Watermark>,

    #[serde(flatten)]
    pub connector: ExtractConnector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "connector", rename_all = "kebab-case")]
pub enum ExtractConnector {
    #[serde(rename = "mysql-cdc")]
    MySql(MySqlExtract),
    Kafka(KafkaExtract),
}

/// Reads the binlog of one or more MySQL tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MySqlExtract {
    pub hostname: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    pub username: String,
    pub password: String,
    pub database: String,

    /// Table names or patterns to capture
    pub tables: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental_snapshot: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KafkaExtract {
    pub topic: String,
    pub bootstrap_servers: String,
    pub format: Format,

    #[serde(default)]
    pub startup_mode: StartupMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Record encoding on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Json,
    Csv,
    Avro,
    CanalJson,
    DebeziumJson,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartupMode {
    #[default]
    EarliestOffset,
    LatestOffset,
    GroupOffsets,
}

/// Event-time attribute of an extract node, `WATERMARK FOR f AS f - INTERVAL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watermark {
    pub field: Field,

    /// Allowed lateness; the watermark trails the field by this many units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,

    #[serde(default)]
    pub unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Millisecond,
    #[default]
    Second,
    Minute,
    Hour,
    Day,
}

impl ExtractNode {
    pub fn new(connector: impl Into<ExtractConnector>) -> ExtractNode {
        ExtractNode {
            primary_key: None,
            watermark: None,
            connector: connector.into(),
        }
    }

    pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> ExtractNode {
        self.primary_key = Some(primary_key.into());
        self
    }

    pub fn with_watermark(mut self, watermark: Watermark) -> ExtractNode {
        self.watermark = Some(watermark);
        self
    }
}

impl ExtractConnector {
    pub(super) fn options(&self, options: &mut BTreeMap<String, String>) {
        match self {
            ExtractConnector::MySql(mysql) => mysql.options(options),
            ExtractConnector::Kafka(kafka) => kafka.options(options),
        }
    }
}

impl MySqlExtract {
    fn options(&self, options: &mut BTreeMap<String, String>) {
        set(options, "connector", "mysql-cdc-inlong");
        set(options, "hostname", &self.hostname);
        set(options, "username", &self.username);
        set(options, "password", &self.password);
        set(options, "database-name", &self.database);
        set(options, "table-name", self.table_pattern());

        if let Some(port) = self.port {
            set(options, "port", port.to_string());
        }
        if let Some(server_id) = self.server_id {
            set(options, "server-id", server_id.to_string());
        }
        if let Some(enabled) = self.incremental_snapshot {
            set(options, "scan.incremental.snapshot.enabled", enabled.to_string());
        }
    }

    /// A single table is used verbatim, several become an alternation.
    fn table_pattern(&self) -> String {
        match &self.tables[..] {
            [table] => table.clone(),
            tables => format!("({})", tables.join("|")),
        }
    }
}

impl KafkaExtract {
    fn options(&self, options: &mut BTreeMap<String, String>) {
        set(options, "connector", "kafka");
        set(options, "topic", &self.topic);
        set(options, "properties.bootstrap.servers", &self.bootstrap_servers);
        set(options, "format", self.format.as_str());
        set(options, "scan.startup.mode", self.startup_mode.as_str());

        if let Some(group_id) = &self.group_id {
            set(options, "properties.group.id", group_id);
        }
    }
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Avro => "avro",
            Format::CanalJson => "canal-json",
            Format::DebeziumJson => "debezium-json",
        }
    }
}

impl StartupMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StartupMode::EarliestOffset => "earliest-offset",
            StartupMode::LatestOffset => "latest-offset",
            StartupMode::GroupOffsets => "group-offsets",
        }
    }
}

impl Watermark {
    pub fn new(field: Field, interval: u64, unit: TimeUnit) -> Watermark {
        Watermark {
            field,
            interval: Some(interval),
            unit,
        }
    }
}

impl TimeUnit {
    pub fn keyword(self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "MILLISECOND",
            TimeUnit::Second => "SECOND",
            TimeUnit::Minute => "MINUTE",
            TimeUnit::Hour => "HOUR",
            TimeUnit::Day => "DAY",
        }
    }
}

impl From<MySqlExtract> for ExtractConnector {
    fn from(value: MySqlExtract) -> Self {
        ExtractConnector::MySql(value)
    }
}

impl From<KafkaExtract> for ExtractConnector {
    fn from(value: KafkaExtract) -> Self {
        ExtractConnector::Kafka(value)
    }
}

pub(super) fn set(options: &mut BTreeMap<String, String>, key: &str, value: impl Into<String>) {
    options.insert(key.to_string(), value.into());
}
