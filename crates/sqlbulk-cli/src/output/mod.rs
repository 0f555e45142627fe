//! Output formatting modules.

pub mod json;
pub mod table;

pub use json::{format_config_json, format_report_json};
pub use table::{format_config_table, format_report_table};
