//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// sqlbulk - bulk-load table name resolver
#[derive(Parser, Debug)]
#[command(name = "sqlbulk")]
#[command(about = "Resolve bulk-load table names and inspect bulk configuration", long_about = None)]
#[command(version)]
pub struct Args {
    /// Raw table names such as `Orders` or `[Sales].[Orders]` (read from stdin, one
    /// per line, if neither names nor --entity are given)
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Logical entity to resolve through --mappings (can be repeated)
    #[arg(short, long = "entity", value_name = "ENTITY", requires = "mappings")]
    pub entities: Vec<String>,

    /// JSON file mapping entity names to raw table names
    #[arg(short, long, value_name = "FILE")]
    pub mappings: Option<PathBuf>,

    /// JSON bulk configuration file installed as the process default
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective bulk configuration instead of resolving names
    #[arg(long, conflicts_with_all = ["config_schema", "names", "entities"])]
    pub show_config: bool,

    /// Print the JSON Schema of the bulk configuration file
    #[arg(long)]
    pub config_schema: bool,

    /// Output format
    #[arg(short, long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,

    /// Log verbosity written to stderr
    #[arg(long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON output
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
