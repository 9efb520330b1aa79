//! Maps raw interactions onto the four slots.
//!
//! Everything here is a pure function of `OctetSlots` plus one interaction.
//! The field layer owns focus state and the mirror; this module only reports
//! where focus should go.

use crate::event::{Key, Modifiers, Response, SEPARATOR};
use octet_core::{OCTET_MAX_LEN, OctetSlot, OctetSlots, SlotIndex, parse_octet, sanitize_payload};

const LOG_TARGET: &str = "ipv4_input.distributor";

/// Result of spreading a multi-segment payload across slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distribution {
    /// Number of slots written, including a rejected one.
    pub consumed: usize,
    /// Slot whose segment was rejected, if distribution stopped early.
    pub rejected: Option<SlotIndex>,
    /// Slot that should receive focus afterwards.
    pub focus: SlotIndex,
}

/// Returns `true` if slot text must be treated as a multi-segment payload.
///
/// That is the case when it carries a separator or more characters than one
/// slot can hold.
pub fn needs_distribution(text: &str) -> bool {
    text.contains(SEPARATOR) || text.chars().count() > OCTET_MAX_LEN
}

/// Spread `payload` over consecutive slots starting at `start`.
///
/// Characters other than digits and `.` are dropped, then the payload is split
/// on `.`. Each segment is written to the next slot:
/// - an empty segment clears the slot;
/// - a valid octet is written without leading zeros and clears the flag;
/// - an invalid segment clears the slot, flags it, and ends distribution so
///   the slots after it keep their state.
///
/// Partial success is kept, but only up to the first bad segment: valid
/// segments after it are discarded along with it, so `"1.300.3.4"` from slot 0
/// leaves slots 2 and 3 as they were. Writing on past the bad segment would
/// overwrite the last slot when pasting `"10.20.300.40"`, which must stay
/// untouched.
///
/// Segments beyond the last slot are discarded. Focus goes to
/// `min(start + consumed, 3)`.
pub fn distribute(slots: &mut OctetSlots, start: SlotIndex, payload: &str) -> Distribution {
    let cleaned = sanitize_payload(payload);
    let mut consumed = 0usize;
    let mut rejected = None;

    for (slot, segment) in SlotIndex::ALL[start.get()..]
        .iter()
        .copied()
        .zip(cleaned.split(SEPARATOR))
    {
        consumed += 1;
        let target = &mut slots[slot];

        if segment.is_empty() {
            target.clear();
            continue;
        }

        match parse_octet(segment) {
            Ok(value) => {
                target.set_raw(&value.to_string());
                target.set_error(false);
            }
            Err(err) => {
                log::trace!(
                    target: LOG_TARGET,
                    "segment {segment:?} rejected at slot {slot}: {err}"
                );
                target.clear();
                target.set_error(true);
                rejected = Some(slot);
                break;
            }
        }
    }

    let focus = start.saturating_add(consumed);
    log::trace!(
        target: LOG_TARGET,
        "distributed {payload:?} from slot {start}: consumed={consumed} rejected={rejected:?} focus={focus}"
    );

    Distribution {
        consumed,
        rejected,
        focus,
    }
}

/// Apply text typed into one slot.
///
/// The text is reduced to digits and capped at three characters. A value above
/// 255 is kept and flagged. Returns the slot to focus next when the slot is
/// full and in range.
pub fn apply_typed_text(slots: &mut OctetSlots, slot: SlotIndex, text: &str) -> Option<SlotIndex> {
    let target = &mut slots[slot];
    target.set_raw(text);
    target.refresh_error();

    if target.raw().len() == OCTET_MAX_LEN && target.is_in_range() {
        return slot.next();
    }
    None
}

/// Navigation for the separator and Backspace keys.
///
/// The separator moves to the next slot when the current one holds an in-range
/// value. Backspace in an empty slot moves to the previous one. No slot text
/// is modified either way.
pub fn navigate(current: &OctetSlot, slot: SlotIndex, key: Key) -> Option<SlotIndex> {
    match key {
        k if k.is_separator() && current.is_in_range() => slot.next(),
        Key::Backspace if current.is_empty() => slot.prev(),
        _ => None,
    }
}

/// Decide whether a key press may reach the slot, and where focus goes.
///
/// Runs before the host inserts anything:
/// - printable non-digits are suppressed unless ctrl, meta or alt is held;
/// - the separator is always suppressed and may advance focus;
/// - Backspace in an empty slot moves focus back;
/// - digits and named keys pass through.
pub fn classify_keystroke(
    current: &OctetSlot,
    slot: SlotIndex,
    key: Key,
    modifiers: Modifiers,
) -> Response {
    if key.is_separator() {
        return Response::SUPPRESS.with_focus(navigate(current, slot, key));
    }

    match key {
        Key::Char(c) if !c.is_ascii_digit() && !modifiers.is_shortcut() => Response::SUPPRESS,
        Key::Backspace => Response::ACCEPT.with_focus(navigate(current, slot, key)),
        _ => Response::ACCEPT,
    }
}
