#![no_main]

use libfuzzer_sys::fuzz_target;
use sqlbulk_core::parse_qualified_name;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(term) = parse_qualified_name(raw) {
            assert_eq!(
                term.qualified_name(),
                format!("[{}].[{}]", term.schema_name(), term.table_name())
            );
        }
    }
});
