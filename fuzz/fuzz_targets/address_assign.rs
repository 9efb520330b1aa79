#![no_main]

use libfuzzer_sys::fuzz_target;
use octet_core::OctetSlots;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut slots = OctetSlots::from_raw(["1", "2", "3", "4"]);
    match slots.set_from_address(text) {
        Ok(()) => {
            let canonical = slots.canonical_address();
            assert!(!canonical.is_empty());

            // Canonical form must be a fixed point.
            let mut again = OctetSlots::new();
            assert!(again.set_from_address(&canonical).is_ok());
            assert_eq!(again.canonical_address(), canonical);
        }
        Err(_) => {
            assert!(slots.is_all_empty());
            assert!(!slots.has_errors());
        }
    }
});
