//! The resolved table identity used to build bulk-load SQL.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sqlparser::ast::{Ident, ObjectName, ObjectNamePart};
#[cfg(feature = "tracing")]
use tracing::trace;

use crate::error::{BulkHelpersError, Result};
use crate::extensions::assert_not_blank;
use crate::identifier::parse_qualified_name;

/// A validated `(schema, table)` pair with its bracket-quoted qualified name.
///
/// Values are immutable once built. The qualified name is computed once at
/// construction and always equals `[schema_name].[table_name]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableNameTerm {
    schema_name: String,
    table_name: String,
    qualified_name: String,
}

impl TableNameTerm {
    /// Builds a term from already separated schema and table names.
    ///
    /// Both names are stored as given. Returns [`BulkHelpersError::InvalidArgument`]
    /// when either is empty or whitespace, independent of the parser.
    pub fn new(schema_name: impl Into<String>, table_name: impl Into<String>) -> Result<Self> {
        let schema_name = schema_name.into();
        let table_name = table_name.into();
        assert_not_blank(Some(schema_name.as_str()), "schema_name")?;
        assert_not_blank(Some(table_name.as_str()), "table_name")?;

        let qualified_name = format!("[{schema_name}].[{table_name}]");
        Ok(Self {
            schema_name,
            table_name,
            qualified_name,
        })
    }

    /// Parses an explicit table name override such as `"[Sales].[Orders]"`.
    pub fn from_override(table_name_override: &str) -> Result<Self> {
        parse_qualified_name(table_name_override)
    }

    /// Resolves the table for `entity`.
    ///
    /// An explicit override always wins. Otherwise the resolver is asked for the
    /// entity's mapped table name, which is then parsed. Resolver failures are
    /// returned unchanged.
    pub fn resolve<R>(
        table_name_override: Option<&str>,
        entity: &str,
        resolver: &R,
    ) -> std::result::Result<Self, R::Error>
    where
        R: TableMappingResolver + ?Sized,
    {
        if let Some(raw) = table_name_override {
            return Ok(parse_qualified_name(raw)?);
        }

        let mapped = resolver.mapped_table_name(entity)?;
        #[cfg(feature = "tracing")]
        trace!(entity, mapped = %mapped, "resolved mapped table name");
        Ok(parse_qualified_name(&mapped)?)
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The `[schema].[table]` form used directly in generated SQL.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Converts to a `sqlparser` object name with bracket-quoted parts.
    ///
    /// Rendering the returned name yields exactly [`Self::qualified_name`].
    pub fn to_object_name(&self) -> ObjectName {
        ObjectName(vec![
            ObjectNamePart::Identifier(Ident::with_quote('[', self.schema_name.as_str())),
            ObjectNamePart::Identifier(Ident::with_quote('[', self.table_name.as_str())),
        ])
    }
}

impl fmt::Display for TableNameTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

impl FromStr for TableNameTerm {
    type Err = BulkHelpersError;

    fn from_str(s: &str) -> Result<Self> {
        parse_qualified_name(s)
    }
}

impl AsRef<str> for TableNameTerm {
    fn as_ref(&self) -> &str {
        &self.qualified_name
    }
}

/// Looks up the raw table name mapped to a logical entity.
///
/// This is the seam to whatever owns entity-to-table mappings (attributes, a model
/// registry, a config file). The error type must absorb [`BulkHelpersError`] so that
/// parse failures of the returned name share the resolver's error type.
pub trait TableMappingResolver {
    /// Error returned when no mapping can be produced.
    type Error: From<BulkHelpersError>;

    /// Returns the raw, unparsed table name mapped to `entity`.
    fn mapped_table_name(&self, entity: &str) -> std::result::Result<String, Self::Error>;
}

/// In-memory entity to table name registry.
///
/// Deserializes from a flat JSON object, e.g. `{"Order": "[Sales].[Orders]"}`.
/// Lookups try an exact match first, then an ASCII case-insensitive one. Keys are
/// kept sorted, so when several registered keys differ only in case the fallback
/// always picks the lexicographically smallest of them (`"ORDER"` before `"Order"`).
/// [`Self::from_json_str`] rejects such keys outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TableMappings {
    mappings: BTreeMap<String, String>,
}

impl TableMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the raw table name for `entity`.
    pub fn register(&mut self, entity: impl Into<String>, table_name: impl Into<String>) {
        self.mappings.insert(entity.into(), table_name.into());
    }

    /// Builder-style variant of [`Self::register`].
    pub fn with(mut self, entity: impl Into<String>, table_name: impl Into<String>) -> Self {
        self.register(entity, table_name);
        self
    }

    pub fn get(&self, entity: &str) -> Option<&str> {
        self.mappings
            .get(entity)
            .or_else(|| {
                self.mappings
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(entity))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Parses a JSON object of entity names to raw table names.
    ///
    /// Entity names that collide ignoring ASCII case are rejected with
    /// [`BulkHelpersError::InvalidConfig`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mappings: Self = serde_json::from_str(json)
            .map_err(|e| BulkHelpersError::invalid_config(format!("invalid table mappings: {e}")))?;

        let mut keys = mappings.mappings.keys();
        if let Some(first) = keys.next() {
            let mut seen = BTreeMap::from([(first.to_ascii_lowercase(), first)]);
            for key in keys {
                if let Some(existing) = seen.insert(key.to_ascii_lowercase(), key) {
                    return Err(BulkHelpersError::invalid_config(format!(
                        "invalid table mappings: entities [{existing}] and [{key}] differ only in case"
                    )));
                }
            }
        }
        Ok(mappings)
    }
}

impl TableMappingResolver for TableMappings {
    type Error = BulkHelpersError;

    fn mapped_table_name(&self, entity: &str) -> Result<String> {
        self.get(entity)
            .map(str::to_string)
            .ok_or_else(|| BulkHelpersError::MappingNotFound {
                entity: entity.to_string(),
            })
    }
}

impl<K, V> FromIterator<(K, V)> for TableMappings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            mappings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
