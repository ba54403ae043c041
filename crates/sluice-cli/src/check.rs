use crate::compile::compile_file;

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// JSON file holding a group or a single stream
    pub file: PathBuf,
}

impl CheckCommand {
    pub(crate) fn run(self) -> Result<()> {
        let compilation = match compile_file(&self.file) {
            Ok(compilation) => compilation,
            Err(err) => {
                println!();
                println!(
                    "  {} {}",
                    style("✖").red().bold(),
                    style(self.file.display()).bold()
                );
                println!();
                return Err(err);
            }
        };

        println!();
        println!(
            "  {} {}",
            style("✔").green().bold(),
            style(self.file.display()).bold()
        );
        println!();

        let counts = [
            ("extract tables", compilation.extract_tables().len()),
            ("transform views", compilation.transform_views().len()),
            ("load tables", compilation.load_tables().len()),
            ("inserts", compilation.inserts().len()),
        ];

        for (label, count) in counts {
            println!(
                "  {} {:<16} {}",
                style("→").cyan(),
                label,
                style(count).bold()
            );
        }

        println!();
        Ok(())
    }
}
