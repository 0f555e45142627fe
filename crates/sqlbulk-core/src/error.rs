//! Error types for table name resolution and bulk configuration.
//!
//! # Error Handling Strategy
//!
//! Every failure in this crate is a deterministic input-validation failure and is
//! surfaced immediately as a [`BulkHelpersError`]:
//!
//! - [`BulkHelpersError::InvalidArgument`]: a required value (schema or table name)
//!   was blank when a [`crate::TableNameTerm`] was constructed, regardless of how
//!   construction was reached.
//!
//! - [`BulkHelpersError::InvalidIdentifier`]: a raw `[schema.]table` string could not
//!   be parsed into a usable table name. Only the schema name ever receives a default;
//!   the table name never does.
//!
//! Errors raised by a [`crate::TableMappingResolver`] are not translated. The resolver's
//! own error type is returned as-is, which is why resolvers must be able to absorb a
//! [`BulkHelpersError`] through `From`.

use thiserror::Error;

/// Error raised while resolving table names or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkHelpersError {
    /// A required string value was empty or whitespace.
    #[error("Argument '{arg_name}' must not be null, empty or whitespace.")]
    InvalidArgument {
        /// Name of the offending argument.
        arg_name: String,
    },

    /// A raw identifier string yielded no usable table name.
    #[error("The table name specified [{raw}] could not be parsed; parsing resulted in a null/empty value.")]
    InvalidIdentifier {
        /// The raw input exactly as supplied.
        raw: String,
    },

    /// The in-memory mapping registry has no entry for the requested entity.
    #[error("No table mapping is registered for entity [{entity}].")]
    MappingNotFound {
        /// The logical entity that was looked up.
        entity: String,
    },

    /// Bulk configuration failed to deserialize or validate.
    #[error("Invalid bulk helpers configuration: {message}")]
    InvalidConfig {
        /// Human-readable reason.
        message: String,
    },
}

impl BulkHelpersError {
    /// Creates an [`BulkHelpersError::InvalidArgument`] for the named argument.
    pub fn invalid_argument(arg_name: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg_name: arg_name.into(),
        }
    }

    /// Creates an [`BulkHelpersError::InvalidIdentifier`] carrying the raw input.
    pub fn invalid_identifier(raw: impl Into<String>) -> Self {
        Self::InvalidIdentifier { raw: raw.into() }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BulkHelpersError>;
