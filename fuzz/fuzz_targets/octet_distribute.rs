#![no_main]

use ipv4_input::{Ipv4Field, SlotIndex};
use libfuzzer_sys::fuzz_target;
use octet_core::{OCTET_MAX_LEN, is_valid_octet};

fuzz_target!(|data: &[u8]| {
    let Some((&start, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }
    let start = SlotIndex::clamped(usize::from(start % 4));

    let mut field = Ipv4Field::default();
    let resp = field.on_paste(start, text);
    assert!(!resp.accepted, "native paste must be suppressed");

    field.on_input(start, text);
    field.on_blur(start);

    for slot in SlotIndex::ALL {
        let octet = field.slot(slot);
        assert!(octet.raw().len() <= OCTET_MAX_LEN);
        assert!(octet.raw().bytes().all(|b| b.is_ascii_digit()));
    }

    // The mirror is either empty or four valid octets.
    let mirror = field.mirror().value();
    assert_eq!(mirror, field.slots().canonical_address());
    if !mirror.is_empty() {
        let parts: Vec<&str> = mirror.split('.').collect();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| is_valid_octet(p)));
    }
});
