//! The process-wide default config lives in a global slot, so everything touching it
//! stays in this single test binary and a single test.

use sqlbulk_core::{BulkHelpersConfig, SqlBulkCopyOptions};

#[test]
fn default_slot_is_replaced_wholesale() {
    let initial = BulkHelpersConfig::default_config();
    assert_eq!(*initial, BulkHelpersConfig::default());

    BulkHelpersConfig::configure_defaults(|c| {
        c.sql_bulk_batch_size = 5000;
        c.set_sql_bulk_table_lock_enabled(false);
    });

    let current = BulkHelpersConfig::default_config();
    assert_eq!(current.sql_bulk_batch_size, 5000);
    assert!(!current.is_sql_bulk_table_lock_enabled());
    assert_eq!(current.sql_bulk_copy_options, SqlBulkCopyOptions::DEFAULT);

    // Snapshots taken earlier are unaffected.
    assert_eq!(initial.sql_bulk_batch_size, 2000);

    // Override instances never touch the default.
    let local = BulkHelpersConfig::create(|c| c.sql_bulk_batch_size = 10);
    assert_eq!(local.sql_bulk_batch_size, 10);
    assert_eq!(BulkHelpersConfig::default_config().sql_bulk_batch_size, 5000);

    BulkHelpersConfig::replace_defaults(BulkHelpersConfig::default());
    assert_eq!(
        *BulkHelpersConfig::default_config(),
        BulkHelpersConfig::default()
    );
}
