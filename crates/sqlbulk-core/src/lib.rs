//! Table name resolution and configuration for SQL Server bulk-load helpers.
//!
//! The entry point is [`TableNameTerm`], which turns an explicit override such as
//! `"[Sales].[Orders]"`, or an entity's mapped table name, into a validated
//! schema/table pair with a canonical `[schema].[table]` form for generated SQL.
//!
//! ```
//! use sqlbulk_core::TableNameTerm;
//!
//! let term: TableNameTerm = "Sales.Orders".parse().unwrap();
//! assert_eq!(term.qualified_name(), "[Sales].[Orders]");
//! ```

pub mod config;
pub mod error;
pub mod extensions;
pub mod identifier;
pub mod table_name;

pub use config::{BulkHelpersConfig, SqlBulkCopyOptions};
pub use error::{BulkHelpersError, Result};
pub use identifier::{
    parse_qualified_name, trim_identifier_term, DEFAULT_SCHEMA_NAME, TERM_SEPARATOR,
};
pub use table_name::{TableMappingResolver, TableMappings, TableNameTerm};
