mod check;
mod compile;
mod config;

pub use check::CheckCommand;
pub use compile::CompileCommand;
pub use config::*;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line front end of the stream compiler
#[derive(Debug, Default)]
pub struct SluiceCli {
    config: Option<Config>,
}

impl SluiceCli {
    /// Create a new SluiceCli. Configuration is read from `--config` when given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new SluiceCli with a fixed configuration, ignoring `--config`
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::parse_from(args);
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        init_tracing(cli.verbose);

        let config = match (&self.config, &cli.config) {
            (Some(config), _) => config.clone(),
            (None, Some(path)) => Config::load(path)?,
            (None, None) => Config::default(),
        };

        match cli.command {
            Command::Compile(cmd) => cmd.run(&config),
            Command::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sluice")]
#[command(about = "Compile stream graphs into SQL statement batches")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log compiler progress to stderr; repeat for more detail
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Compile a group or stream definition and print its statements
    Compile(CompileCommand),

    /// Compile a group or stream definition and summarize the result
    Check(CheckCommand),
}

/// Logs to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed by an embedding binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compile_arguments() {
        let cli = Cli::try_parse_from([
            "sluice",
            "compile",
            "group.json",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Command::Compile(cmd) = cli.command else {
            panic!("expected compile command");
        };
        assert_eq!(cmd.file, PathBuf::from("group.json"));
        assert_eq!(cmd.format, Some(OutputFormat::Json));
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["sluice", "check", "stream.json", "--config", "sluice.toml"])
                .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("sluice.toml")));
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn file_is_required() {
        assert!(Cli::try_parse_from(["sluice", "compile"]).is_err());
    }
}
