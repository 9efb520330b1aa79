use ipv4_input::{
    FieldConfig, FieldEvent, Ipv4Field, Key, Modifiers, OctetSlots, Response, SlotIndex,
    SubmissionKind, validate_slots,
};

fn slot(i: usize) -> SlotIndex {
    SlotIndex::new(i).unwrap()
}

fn field() -> Ipv4Field {
    Ipv4Field::new(FieldConfig::new().with_id("ip").with_name("ip"))
}

#[test]
fn valid_addresses_round_trip_to_canonical_form() {
    let cases = [
        ("0.0.0.0", "0.0.0.0"),
        ("255.255.255.255", "255.255.255.255"),
        ("010.001.000.100", "10.1.0.100"),
        ("00.000.0.7", "0.0.0.7"),
        ("192.168.1.20", "192.168.1.20"),
    ];

    for (input, expected) in cases {
        let mut slots = OctetSlots::new();
        slots.set_from_address(input).unwrap();
        assert_eq!(slots.canonical_address(), expected, "{input}");

        let mut f = field();
        f.set_value(input).unwrap();
        assert_eq!(f.value(), expected, "{input}");
        assert_eq!(f.mirror().value(), expected, "{input}");
    }
}

#[test]
fn malformed_addresses_reset_to_empty() {
    let cases = [
        "",
        "1.2.3",
        "1.2.3.4.5",
        "1.2.3.256",
        "a.b.c.d",
        "1.2..4",
        "1.2.3.-4",
        "1,2,3,4",
        "...",
    ];

    for input in cases {
        let mut slots = OctetSlots::from_raw(["9", "9", "9", "9"]);
        assert!(slots.set_from_address(input).is_err(), "{input:?}");
        assert!(slots.is_all_empty(), "{input:?}");
        assert_eq!(slots.canonical_address(), "");

        // Applying the same bad value twice leaves the same state.
        let snapshot = slots.clone();
        assert!(slots.set_from_address(input).is_err());
        assert_eq!(slots, snapshot);
    }
}

#[test]
fn typing_256_is_flagged_not_truncated() {
    let mut f = field();
    let resp = f.type_text(SlotIndex::FIRST, "256");
    assert_eq!(f.slot(SlotIndex::FIRST).raw(), "256");
    assert!(f.slot(SlotIndex::FIRST).has_error());
    assert_eq!(resp.focus, Some(SlotIndex::FIRST));
    assert_eq!(f.value(), "");
}

#[test]
fn paste_with_out_of_range_segment() {
    let mut f = field();
    f.on_input(slot(3), "5");
    let resp = f.on_paste(SlotIndex::FIRST, "10.20.300.40");

    assert!(!resp.accepted);
    assert_eq!(resp.focus, Some(SlotIndex::LAST));
    assert_eq!(f.slots().raw_values(), ["10", "20", "", "5"]);
    assert!(!f.slot(slot(0)).has_error());
    assert!(!f.slot(slot(1)).has_error());
    assert!(f.slot(slot(2)).has_error());
    assert_eq!(f.focused(), Some(SlotIndex::LAST));
}

#[test]
fn blur_canonicalizes_leading_zeros() {
    for (typed, expected) in [("007", "7"), ("00", "0"), ("000", "0"), ("0", "0"), ("100", "100")] {
        let mut f = field();
        f.on_input(slot(1), typed);
        f.on_blur(slot(1));
        assert_eq!(f.slot(slot(1)).raw(), expected, "{typed}");
    }
}

#[test]
fn zero_then_digit_is_not_collapsed_while_typing() {
    let mut f = field();
    f.type_text(SlotIndex::FIRST, "0");
    f.on_input(SlotIndex::FIRST, "05");
    assert_eq!(f.slot(SlotIndex::FIRST).raw(), "05");
}

#[test]
fn submission_reports_first_missing_slot() {
    let slots = OctetSlots::from_raw(["192", "168", "", ""]);
    let check = validate_slots(&slots, false);
    assert!(!check.ok());
    assert_eq!(check.kind, SubmissionKind::Incomplete);
    assert_eq!(check.first_error_slot, Some(slot(2)));
}

#[test]
fn submission_of_empty_field_is_ok() {
    let mut f = field();
    let check = f.validate_for_submission();
    assert!(check.ok());
    assert_eq!(check.kind, SubmissionKind::AllEmpty);
    assert_eq!(check.value, "");
    assert_eq!(f.value(), "");
}

#[test]
fn required_empty_field_blocks_submission() {
    let mut f = Ipv4Field::new(FieldConfig::new().with_required(true));
    let check = f.validate_for_submission();
    assert_eq!(check.kind, SubmissionKind::Incomplete);
    assert_eq!(check.first_error_slot, Some(SlotIndex::FIRST));
    assert_eq!(f.focused(), Some(SlotIndex::FIRST));
}

#[test]
fn separator_advances_without_touching_slots() {
    let mut f = field();
    f.on_input(SlotIndex::FIRST, "25");
    let before = f.slots().clone();

    let resp = f.on_keystroke(SlotIndex::FIRST, Key::Char('.'), Modifiers::NONE);
    assert_eq!(resp, Response::SUPPRESS.with_focus(Some(slot(1))));
    assert_eq!(f.slots(), &before);

    let resp = f.on_separator_or_backspace(SlotIndex::FIRST, Key::Char('.'));
    assert_eq!(resp.focus, Some(slot(1)));
    assert_eq!(f.slots(), &before);
}

#[test]
fn separator_on_last_slot_stays() {
    let mut f = field();
    f.on_input(SlotIndex::LAST, "1");
    let resp = f.on_separator_or_backspace(SlotIndex::LAST, Key::Char('.'));
    assert_eq!(resp, Response::SUPPRESS);
}

#[test]
fn backspace_on_empty_slot_moves_back_without_deleting() {
    let mut f = field();
    f.on_input(SlotIndex::FIRST, "12");
    let resp = f.on_separator_or_backspace(slot(1), Key::Backspace);
    assert_eq!(resp.focus, Some(SlotIndex::FIRST));
    assert_eq!(f.slot(SlotIndex::FIRST).raw(), "12");
}

#[test]
fn letters_are_suppressed_but_shortcuts_pass() {
    let mut f = field();
    let resp = f.on_keystroke(SlotIndex::FIRST, Key::Char('x'), Modifiers::NONE);
    assert!(!resp.accepted);

    let cmd = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };
    let resp = f.on_keystroke(SlotIndex::FIRST, Key::Char('c'), cmd);
    assert!(resp.accepted);
    assert!(f.slots().is_all_empty());
}

#[test]
fn events_dispatch_to_operations() {
    let mut f = field();
    let events = [
        FieldEvent::Paste {
            slot: SlotIndex::FIRST,
            text: "172.16",
        },
        FieldEvent::Input {
            slot: slot(2),
            text: "005",
        },
        FieldEvent::Blur { slot: slot(2) },
        FieldEvent::Input {
            slot: slot(3),
            text: "9",
        },
    ];
    for event in events {
        f.handle(event);
    }
    assert_eq!(f.value(), "172.16.5.9");

    f.handle(FieldEvent::SetValue("not an address"));
    assert_eq!(f.value(), "");
    assert!(f.slots().is_all_empty());

    let resp = f.handle(FieldEvent::Keystroke {
        slot: SlotIndex::FIRST,
        key: Key::Char('!'),
        modifiers: Modifiers::NONE,
    });
    assert!(!resp.accepted);
}

#[test]
fn mirror_carries_config_identity() {
    let f = Ipv4Field::new(
        FieldConfig::new()
            .with_id("gw")
            .with_name("gateway")
            .with_initial_value("10.0.0.1"),
    );
    assert_eq!(f.mirror().id(), Some("gw-hidden"));
    assert_eq!(f.mirror().name(), Some("gateway"));
    assert_eq!(f.mirror().value(), "10.0.0.1");
}

#[test]
fn short_paste_leaves_complete_address_alone() {
    for clip in ["", "abc", " ", "42"] {
        let mut f = field();
        f.set_value("10.0.5.1").unwrap();
        f.focus(slot(2));
        let revision = f.mirror().revision();

        let resp = f.on_paste(slot(2), clip);
        assert_eq!(resp, Response::SUPPRESS, "{clip:?}");
        assert_eq!(f.slots().raw_values(), ["10", "0", "5", "1"], "{clip:?}");
        assert!(!f.slots().has_errors(), "{clip:?}");
        assert_eq!(f.mirror().value(), "10.0.5.1", "{clip:?}");
        assert_eq!(f.mirror().revision(), revision, "{clip:?}");
        assert_eq!(f.focused(), Some(slot(2)), "{clip:?}");
    }
}

#[test]
fn overlong_paste_without_separator_still_distributes() {
    let mut f = field();
    let resp = f.on_paste(SlotIndex::FIRST, "1234");
    assert!(!resp.accepted);
    assert!(f.slot(SlotIndex::FIRST).has_error());
    assert_eq!(resp.focus, Some(slot(1)));
}

#[test]
fn invalid_middle_segment_keeps_later_slots() {
    let mut f = field();
    f.on_input(slot(2), "8");
    f.on_input(slot(3), "9");
    let resp = f.on_paste(SlotIndex::FIRST, "1.300.3.4");
    assert_eq!(f.slots().raw_values(), ["1", "", "8", "9"]);
    assert!(f.slot(slot(1)).has_error());
    assert_eq!(resp.focus, Some(slot(2)));
}

#[test]
fn new_submission_check_drops_stale_messages() {
    let mut f = field();
    f.on_paste(SlotIndex::FIRST, "1.2.3");
    let first = f.validate_for_submission();
    assert_eq!(first.first_error_slot, Some(slot(3)));
    assert!(f.custom_validity(slot(3)).is_some());

    f.on_input(SlotIndex::FIRST, "999");
    let second = f.validate_for_submission();
    assert_eq!(second.first_error_slot, Some(SlotIndex::FIRST));
    assert_eq!(f.custom_validity(SlotIndex::FIRST), Some("Invalid octet."));
    assert_eq!(f.custom_validity(slot(3)), None);
}
