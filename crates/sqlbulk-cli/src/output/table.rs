//! Human-readable table output formatting.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use sqlbulk_core::BulkHelpersConfig;
use std::fmt::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::resolve::{ResolutionReport, ResolutionSource};

#[derive(Tabled)]
struct ResolutionRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Source")]
    source: &'static str,
    #[tabled(rename = "Schema")]
    schema: String,
    #[tabled(rename = "Table")]
    table: String,
    #[tabled(rename = "Qualified Name")]
    qualified: String,
}

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Setting")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format the resolution report as a table with optional colors.
///
/// Failed inputs are listed below the table unless `quiet` is set.
pub fn format_report_table(report: &ResolutionReport, quiet: bool, use_colors: bool) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    write_header(&mut out, "Table Name Resolution", colored);

    let rows: Vec<ResolutionRow> = report
        .resolutions
        .iter()
        .filter_map(|r| {
            let term = r.term.as_ref()?;
            Some(ResolutionRow {
                input: r.input.clone(),
                source: match r.source {
                    ResolutionSource::Override => "override",
                    ResolutionSource::Entity => "entity",
                },
                schema: term.schema_name().to_string(),
                table: term.table_name().to_string(),
                qualified: term.qualified_name().to_string(),
            })
        })
        .collect();

    if !rows.is_empty() {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        writeln!(out, "{table}").unwrap();
    }

    let summary = format!(
        "Summary: {} resolved | {} failed",
        report.resolved_count, report.failed_count
    );
    if colored {
        if report.has_errors() {
            writeln!(out, "{}", summary.red()).unwrap();
        } else {
            writeln!(out, "{}", summary.green()).unwrap();
        }
    } else {
        writeln!(out, "{summary}").unwrap();
    }

    if !quiet {
        for failure in report.failures() {
            let message = failure.error.as_deref().unwrap_or_default();
            if colored {
                writeln!(out, "  {} {}: {message}", "✗".red(), failure.input).unwrap();
            } else {
                writeln!(out, "  ✗ {}: {message}", failure.input).unwrap();
            }
        }
    }

    out
}

/// Format the bulk configuration as a two-column table.
pub fn format_config_table(config: &BulkHelpersConfig, use_colors: bool) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    write_header(&mut out, "Bulk Helpers Configuration", colored);

    let per_batch_timeout = match config.sql_bulk_per_batch_timeout() {
        Some(timeout) => format!("{}s", timeout.as_secs()),
        None => "none".to_string(),
    };

    let rows = vec![
        SettingRow {
            name: "Batch size",
            value: config.sql_bulk_batch_size.to_string(),
        },
        SettingRow {
            name: "Per-batch timeout",
            value: per_batch_timeout,
        },
        SettingRow {
            name: "Table lock",
            value: config.is_sql_bulk_table_lock_enabled().to_string(),
        },
        SettingRow {
            name: "Copy options",
            value: format!(
                "{} ({})",
                config.sql_bulk_copy_options,
                config.sql_bulk_copy_options.bits()
            ),
        },
        SettingRow {
            name: "Materialization timeout",
            value: format!(
                "{}s",
                config.materialize_data_structure_processing_timeout().as_secs()
            ),
        },
        SettingRow {
            name: "Loading schema",
            value: config.materialized_data_loading_schema.clone(),
        },
        SettingRow {
            name: "Discarding schema",
            value: config.materialized_data_discarding_schema.clone(),
        },
        SettingRow {
            name: "Clone identity seed",
            value: config.is_cloning_identity_seed_value_enabled.to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    writeln!(out, "{table}").unwrap();

    out
}

fn write_header(out: &mut String, title: &str, colored: bool) {
    let line = "═".repeat(50);

    if colored {
        writeln!(out, "{}", title.bold()).unwrap();
        writeln!(out, "{}", line.dimmed()).unwrap();
    } else {
        writeln!(out, "{title}").unwrap();
        writeln!(out, "{line}").unwrap();
    }
}
