//! JSON output formatting.

use serde::Serialize;
use sqlbulk_core::BulkHelpersConfig;

use crate::resolve::ResolutionReport;

fn to_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> String {
    if compact {
        serde_json::to_string(value).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(value).expect("serialization cannot fail")
    }
}

/// Format the resolution report as JSON.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_report_json(report: &ResolutionReport, compact: bool) -> String {
    to_json(report, compact)
}

pub fn format_config_json(config: &BulkHelpersConfig, compact: bool) -> String {
    to_json(config, compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_all;
    use sqlbulk_core::TableMappings;

    #[test]
    fn test_json_pretty() {
        let report = resolve_all(&["Sales.Orders".to_string()], &[], &TableMappings::new());
        let json = format_report_json(&report, false);
        assert!(json.contains('\n'));
        assert!(json.contains("[Sales].[Orders]"));
    }

    #[test]
    fn test_json_compact() {
        let json = format_config_json(&BulkHelpersConfig::default(), true);
        assert!(!json.contains('\n'));
        assert!(json.contains(r#""sqlBulkBatchSize":2000"#));
    }
}
