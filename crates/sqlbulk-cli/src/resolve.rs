//! Batch resolution of raw names and mapped entities into table name terms.

use serde::Serialize;
use sqlbulk_core::{TableMappingResolver, TableNameTerm};

/// Where a resolution request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    /// An explicit raw table name.
    Override,
    /// A logical entity looked up through the mappings.
    Entity,
}

/// Outcome of resolving one input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub input: String,
    pub source: ResolutionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<TableNameTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub resolutions: Vec<Resolution>,
    pub resolved_count: usize,
    pub failed_count: usize,
}

impl ResolutionReport {
    pub fn has_errors(&self) -> bool {
        self.failed_count > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &Resolution> {
        self.resolutions.iter().filter(|r| r.error.is_some())
    }

    fn push<E: std::fmt::Display>(
        &mut self,
        input: &str,
        source: ResolutionSource,
        result: Result<TableNameTerm, E>,
    ) {
        let (term, error) = match result {
            Ok(term) => {
                self.resolved_count += 1;
                (Some(term), None)
            }
            Err(e) => {
                self.failed_count += 1;
                (None, Some(e.to_string()))
            }
        };
        self.resolutions.push(Resolution {
            input: input.to_string(),
            source,
            term,
            error,
        });
    }
}

/// Resolve every raw name as an override, then every entity through `resolver`.
///
/// Failures are recorded per input; one bad name never stops the batch.
pub fn resolve_all<R>(names: &[String], entities: &[String], resolver: &R) -> ResolutionReport
where
    R: TableMappingResolver + ?Sized,
    R::Error: std::fmt::Display,
{
    let mut report = ResolutionReport::default();

    for name in names {
        report.push(
            name,
            ResolutionSource::Override,
            TableNameTerm::resolve(Some(name.as_str()), "", resolver),
        );
    }

    for entity in entities {
        report.push(
            entity,
            ResolutionSource::Entity,
            TableNameTerm::resolve(None, entity, resolver),
        );
    }

    tracing::info!(
        resolved = report.resolved_count,
        failed = report.failed_count,
        "table name resolution finished"
    );
    report
}
