//! Loading of bulk configuration and entity mapping files.

use anyhow::{Context, Result};
use sqlbulk_core::{BulkHelpersConfig, TableMappings};
use std::path::Path;

/// Load and validate a JSON bulk configuration file.
///
/// Missing keys take their built-in defaults.
pub fn load_config(path: &Path) -> Result<BulkHelpersConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    BulkHelpersConfig::from_json_str(&content)
        .with_context(|| format!("Failed to load config file: {}", path.display()))
}

/// Load a JSON object of entity names to raw table names.
pub fn load_mappings(path: &Path) -> Result<TableMappings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read mappings file: {}", path.display()))?;

    let mappings = TableMappings::from_json_str(&content)
        .with_context(|| format!("Failed to load mappings file: {}", path.display()))?;
    tracing::debug!(count = mappings.len(), path = %path.display(), "loaded table mappings");
    Ok(mappings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_partial() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"sqlBulkBatchSize": 4000}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.sql_bulk_batch_size, 4000);
        assert!(config.is_sql_bulk_table_lock_enabled());
    }

    #[test]
    fn test_load_config_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"sqlBulkBatchSize": 0}}"#).unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("sqlBulkBatchSize"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config(Path::new("/nonexistent/bulk.json")).is_err());
        assert!(load_mappings(Path::new("/nonexistent/mappings.json")).is_err());
    }

    #[test]
    fn test_load_mappings() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"Order": "[Sales].[Orders]"}}"#).unwrap();

        let mappings = load_mappings(file.path()).unwrap();
        assert_eq!(mappings.get("Order"), Some("[Sales].[Orders]"));
    }
}
