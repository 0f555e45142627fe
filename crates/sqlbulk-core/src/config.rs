//! Tunable settings for the bulk-load pipeline.
//!
//! [`BulkHelpersConfig`] is a plain settings value. Call sites may build their own
//! instance with [`BulkHelpersConfig::create`], or read the process-wide default
//! through [`BulkHelpersConfig::default_config`].
//!
//! # Process-wide default
//!
//! The default lives in a single slot that is only ever replaced wholesale, via
//! [`BulkHelpersConfig::configure_defaults`] or [`BulkHelpersConfig::replace_defaults`].
//! Readers receive an `Arc` snapshot, so a replacement never tears an in-flight read;
//! it only affects callers that read the slot afterwards.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::{BulkHelpersError, Result};

/// Bit flags passed to the bulk copy engine.
///
/// Values match the SqlBulkCopy option flags so the integer form can be handed to
/// the driver unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SqlBulkCopyOptions(u32);

impl SqlBulkCopyOptions {
    pub const DEFAULT: Self = Self(0);
    pub const KEEP_IDENTITY: Self = Self(1);
    pub const CHECK_CONSTRAINTS: Self = Self(2);
    pub const TABLE_LOCK: Self = Self(4);
    pub const KEEP_NULLS: Self = Self(8);
    pub const FIRE_TRIGGERS: Self = Self(16);
    pub const USE_INTERNAL_TRANSACTION: Self = Self(32);
    pub const ALLOW_ENCRYPTED_VALUE_MODIFICATIONS: Self = Self(64);

    const NAMED: [(&'static str, Self); 7] = [
        ("KeepIdentity", Self::KEEP_IDENTITY),
        ("CheckConstraints", Self::CHECK_CONSTRAINTS),
        ("TableLock", Self::TABLE_LOCK),
        ("KeepNulls", Self::KEEP_NULLS),
        ("FireTriggers", Self::FIRE_TRIGGERS),
        ("UseInternalTransaction", Self::USE_INTERNAL_TRANSACTION),
        (
            "AllowEncryptedValueModifications",
            Self::ALLOW_ENCRYPTED_VALUE_MODIFICATIONS,
        ),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Inserts or removes `other` depending on `enabled`.
    pub fn set(&mut self, other: Self, enabled: bool) {
        if enabled {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }

    /// Names of the set flags, in bit order. `["Default"]` when no bit is set.
    pub fn flag_names(self) -> Vec<&'static str> {
        if self.0 == 0 {
            return vec!["Default"];
        }
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl BitOr for SqlBulkCopyOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SqlBulkCopyOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SqlBulkCopyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flag_names().join(" | "))
    }
}

/// Settings consumed by bulk-copy execution and data materialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkHelpersConfig {
    /// Rows per batch sent to the server; 2000-5000 is usually efficient enough.
    pub sql_bulk_batch_size: u32,

    /// Per-batch timeout in seconds; `0` means no timeout.
    pub sql_bulk_per_batch_timeout_seconds: u32,

    /// Options handed to the bulk copy engine. Table locking is on by default since
    /// loads always target a staging table.
    pub sql_bulk_copy_options: SqlBulkCopyOptions,

    /// Timeout in seconds for materialization DDL (clone/switch of tables).
    pub materialize_data_structure_processing_timeout_seconds: u32,

    /// Schema where materialized tables are staged while loading.
    pub materialized_data_loading_schema: String,

    /// Schema where replaced tables are parked before being dropped.
    pub materialized_data_discarding_schema: String,

    /// Whether cloned tables keep the source table's current identity seed.
    pub is_cloning_identity_seed_value_enabled: bool,
}

impl Default for BulkHelpersConfig {
    fn default() -> Self {
        Self {
            sql_bulk_batch_size: 2000,
            sql_bulk_per_batch_timeout_seconds: 0,
            sql_bulk_copy_options: SqlBulkCopyOptions::DEFAULT | SqlBulkCopyOptions::TABLE_LOCK,
            materialize_data_structure_processing_timeout_seconds: 30,
            materialized_data_loading_schema: "dbo_materializing".to_string(),
            materialized_data_discarding_schema: "dbo_materializing_temp".to_string(),
            is_cloning_identity_seed_value_enabled: true,
        }
    }
}

fn default_slot() -> &'static RwLock<Arc<BulkHelpersConfig>> {
    static DEFAULT_CONFIG: OnceLock<RwLock<Arc<BulkHelpersConfig>>> = OnceLock::new();
    DEFAULT_CONFIG.get_or_init(|| RwLock::new(Arc::new(BulkHelpersConfig::default())))
}

impl BulkHelpersConfig {
    /// Builds a new config from the built-in defaults, adjusted by `configure`.
    ///
    /// The process-wide default is neither read nor modified.
    pub fn create(configure: impl FnOnce(&mut BulkHelpersConfig)) -> Self {
        let mut config = Self::default();
        configure(&mut config);
        config
    }

    /// Snapshot of the current process-wide default.
    pub fn default_config() -> Arc<BulkHelpersConfig> {
        default_slot()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the process-wide default with a config built by [`Self::create`].
    pub fn configure_defaults(configure: impl FnOnce(&mut BulkHelpersConfig)) {
        Self::replace_defaults(Self::create(configure));
    }

    /// Replaces the process-wide default with `config`.
    pub fn replace_defaults(config: BulkHelpersConfig) {
        #[cfg(feature = "tracing")]
        debug!(?config, "replacing default bulk helpers config");
        *default_slot()
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
    }

    /// Reads the [`SqlBulkCopyOptions::TABLE_LOCK`] bit.
    pub fn is_sql_bulk_table_lock_enabled(&self) -> bool {
        self.sql_bulk_copy_options
            .contains(SqlBulkCopyOptions::TABLE_LOCK)
    }

    /// Sets or clears the [`SqlBulkCopyOptions::TABLE_LOCK`] bit.
    ///
    /// Passing `false` clears the bit. Older bulk helper configs only ever set it,
    /// so code that relied on `false` being a no-op must stop calling this.
    pub fn set_sql_bulk_table_lock_enabled(&mut self, enabled: bool) {
        self.sql_bulk_copy_options
            .set(SqlBulkCopyOptions::TABLE_LOCK, enabled);
    }

    /// Per-batch timeout, `None` when disabled.
    pub fn sql_bulk_per_batch_timeout(&self) -> Option<Duration> {
        match self.sql_bulk_per_batch_timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        }
    }

    pub fn materialize_data_structure_processing_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(
            self.materialize_data_structure_processing_timeout_seconds,
        ))
    }

    /// Checks values the bulk pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.sql_bulk_batch_size == 0 {
            return Err(BulkHelpersError::invalid_config(
                "sqlBulkBatchSize must be greater than zero",
            ));
        }
        if self.materialized_data_loading_schema.trim().is_empty() {
            return Err(BulkHelpersError::invalid_config(
                "materializedDataLoadingSchema must not be blank",
            ));
        }
        if self.materialized_data_discarding_schema.trim().is_empty() {
            return Err(BulkHelpersError::invalid_config(
                "materializedDataDiscardingSchema must not be blank",
            ));
        }
        Ok(())
    }

    /// Deserializes a JSON config, filling missing fields with defaults, then
    /// validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BulkHelpersError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
