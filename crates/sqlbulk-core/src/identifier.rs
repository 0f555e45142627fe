//! Identifier normalization for `[schema.]table` strings.
//!
//! The grammar is deliberately small: terms are separated by `.`, each term may be
//! wrapped in `[...]` and padded with spaces, and only the first two terms are
//! significant. Quoted terms are not inspected for embedded separators, so
//! `[my.schema].[t]` splits into three terms.

use crate::error::{BulkHelpersError, Result};
use crate::table_name::TableNameTerm;
#[cfg(feature = "tracing")]
use tracing::trace;

/// Schema used when the input does not name one.
pub const DEFAULT_SCHEMA_NAME: &str = "dbo";

/// Separator between the schema and table terms.
pub const TERM_SEPARATOR: char = '.';

/// Strips surrounding `[`, `]` and space characters from a single term.
///
/// Returns `None` for empty or whitespace-only input so callers can apply their own
/// fallback. A term consisting only of bracket noise (e.g. `"[]"`) is present but
/// trims to `Some("")`.
///
/// # Examples
/// - `"[ Orders ]"` → `Some("Orders")`
/// - `"  "` → `None`
pub fn trim_identifier_term(term: &str) -> Option<&str> {
    if term.trim().is_empty() {
        return None;
    }
    Some(term.trim_matches(|c| matches!(c, '[' | ']' | ' ')))
}

/// Parses a raw `[schema.]table` string into a validated [`TableNameTerm`].
///
/// - One term: it becomes the table name and the schema is [`DEFAULT_SCHEMA_NAME`].
/// - Two or more terms: the first is the schema (falling back to the default when it
///   trims to nothing) and the second is the table. Anything after the second term
///   is ignored.
///
/// Fails with [`BulkHelpersError::InvalidIdentifier`] when the table term is missing
/// or trims to nothing.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(input = raw))
)]
pub fn parse_qualified_name(raw: &str) -> Result<TableNameTerm> {
    let mut terms = raw.split(TERM_SEPARATOR);
    // split always yields at least one item, even for ""
    let first = terms.next().unwrap_or_default();

    let (schema_name, table_name) = match terms.next() {
        None => (DEFAULT_SCHEMA_NAME, trim_identifier_term(first)),
        Some(second) => {
            let schema_name = match trim_identifier_term(first) {
                Some(schema) if !schema.is_empty() => schema,
                _ => {
                    #[cfg(feature = "tracing")]
                    trace!(default = DEFAULT_SCHEMA_NAME, "schema term empty, using default");
                    DEFAULT_SCHEMA_NAME
                }
            };
            (schema_name, trim_identifier_term(second))
        }
    };

    #[cfg(feature = "tracing")]
    if terms.next().is_some() {
        trace!("ignoring identifier terms beyond the table name");
    }

    let table_name = table_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| BulkHelpersError::invalid_identifier(raw))?;

    TableNameTerm::new(schema_name, table_name)
}
