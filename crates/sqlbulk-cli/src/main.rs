//! sqlbulk CLI - bulk-load table name resolver

use sqlbulk_cli::cli;
use sqlbulk_cli::input;
use sqlbulk_cli::output;
use sqlbulk_cli::resolve;
use sqlbulk_cli::settings;

use anyhow::{Context, Result};
use clap::Parser;
use sqlbulk_core::{BulkHelpersConfig, TableMappings};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use cli::{Args, OutputFormat};
use output::{format_config_json, format_config_table, format_report_json, format_report_table};

/// At least one name failed to resolve.
const EXIT_FAILURE: u8 = 1;
/// Configuration or input error (e.g. unreadable mappings file).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(args.log_level))
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("sqlbulk: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    if args.config_schema {
        let schema = schemars::schema_for!(BulkHelpersConfig);
        let content = if args.compact {
            serde_json::to_string(&schema)
        } else {
            serde_json::to_string_pretty(&schema)
        }
        .context("Failed to serialize config schema")?;
        write_output(args.output.as_deref(), &content)?;
        return Ok(false);
    }

    if let Some(path) = &args.config {
        let config = settings::load_config(path)?;
        BulkHelpersConfig::replace_defaults(config);
    }

    if args.show_config {
        let config = BulkHelpersConfig::default_config();
        let content = match args.format {
            OutputFormat::Json => format_config_json(&config, args.compact),
            OutputFormat::Table => format_config_table(&config, !args.quiet),
        };
        write_output(args.output.as_deref(), &content)?;
        return Ok(false);
    }

    let mappings = args
        .mappings
        .as_deref()
        .map(settings::load_mappings)
        .transpose()?
        .unwrap_or_else(TableMappings::new);

    let names = if args.names.is_empty() && args.entities.is_empty() {
        input::read_names_from_stdin()?
    } else {
        args.names.clone()
    };

    let report = resolve::resolve_all(&names, &args.entities, &mappings);

    let content = match args.format {
        OutputFormat::Json => format_report_json(&report, args.compact),
        OutputFormat::Table => format_report_table(&report, args.quiet, !args.quiet),
    };
    write_output(args.output.as_deref(), &content)?;

    if !args.quiet && args.format == OutputFormat::Json {
        for failure in report.failures() {
            eprintln!(
                "sqlbulk: warning: {}: {}",
                failure.input,
                failure.error.as_deref().unwrap_or_default()
            );
        }
    }

    Ok(report.has_errors())
}

/// Writes a rendered report or config to `path`, or to stdout with a trailing newline.
fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write report to {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush().context("Failed to write report to stdout")
        }
    }
}
