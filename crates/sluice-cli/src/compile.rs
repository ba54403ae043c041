use crate::{Config, OutputConfig, OutputFormat};

use anyhow::{Context, Result};
use clap::Parser;
use sluice_core::Group;
use sluice_sql::{Compilation, Compiler};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
pub struct CompileCommand {
    /// JSON file holding a group or a single stream
    pub file: PathBuf,

    /// Output format, overriding the configuration file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl CompileCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let mut output = config.output.clone();

        if let Some(format) = self.format {
            output.format = format;
        }

        let compilation = compile_file(&self.file)?;
        println!("{}", render(&compilation, &output)?);
        Ok(())
    }
}

/// Reads and compiles a group or stream document.
pub(crate) fn compile_file(path: &Path) -> Result<Compilation> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let group = Group::from_json_document(&src)
        .with_context(|| format!("invalid graph definition in {}", path.display()))?;

    debug!(
        path = %path.display(),
        group_id = %group.group_id,
        streams = group.streams.len(),
        "loaded graph definition"
    );

    Ok(Compiler::compile_group(&group)?)
}

fn render(compilation: &Compilation, output: &OutputConfig) -> Result<String> {
    Ok(match output.format {
        OutputFormat::Sql => compilation
            .statements()
            .map(|sql| format!("{sql}{}", output.terminator))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(compilation)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STREAM: &str = r#"{
        "streamId": "s1",
        "nodes": [
            {
                "id": "1",
                "fields": [{"name": "id", "type": "INT"}],
                "type": "extract",
                "connector": "kafka",
                "topic": "in",
                "bootstrapServers": "localhost:9092",
                "format": "json"
            },
            {
                "id": "2",
                "fields": [{"name": "id", "type": "INT"}],
                "type": "load",
                "connector": "kafka",
                "topic": "out",
                "bootstrapServers": "localhost:9092",
                "format": "json",
                "fieldRelations": [
                    {"input": {"kind": "field", "name": "id", "type": "INT"},
                     "output": {"name": "id", "type": "INT"}}
                ]
            }
        ],
        "relations": [{"inputs": ["1"], "outputs": ["2"], "type": "simple"}]
    }"#;

    fn compilation() -> Compilation {
        let group = Group::from_json_document(STREAM).unwrap();
        Compiler::compile_group(&group).unwrap()
    }

    #[test]
    fn sql_output_terminates_every_statement() {
        let sql = render(&compilation(), &OutputConfig::default()).unwrap();
        let lines = sql.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.ends_with(';')));
        assert_eq!(
            lines[2],
            "INSERT INTO `node_2_out` SELECT `id` AS `id` FROM `table_1`;"
        );
    }

    #[test]
    fn json_output() {
        let output = OutputConfig::new().format(OutputFormat::Json);
        let json = render(&compilation(), &output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["creates"].as_array().unwrap().len(), 2);
        assert_eq!(value["inserts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = compile_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
