//! The four-slot address value.
//!
//! `OctetSlots` owns the per-slot state and derives the canonical dotted
//! address from it. It performs no focus handling and emits no diagnostics;
//! integration layers own both.

use crate::error::{AddressError, MalformedReason};
use crate::octet::{OCTET_MAX_LEN, canonicalize_octet, parse_octet};
use crate::slot::{OctetSlot, SLOT_COUNT, SlotIndex};

/// Ordered four-slot value of an IPv4 field.
///
/// # Example
///
/// ```
/// use octet_core::{OctetSlots, SlotIndex};
///
/// let mut slots = OctetSlots::new();
/// slots.set_from_address("192.168.001.010").unwrap();
///
/// assert_eq!(slots[SlotIndex::FIRST].raw(), "192");
/// assert_eq!(slots.canonical_address(), "192.168.1.10");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OctetSlots {
    slots: [OctetSlot; SLOT_COUNT],
}

impl OctetSlots {
    /// Create four empty slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build slots from raw per-slot texts, sanitizing each one.
    ///
    /// Error flags start cleared.
    pub fn from_raw(raw: [&str; SLOT_COUNT]) -> Self {
        Self {
            slots: raw.map(OctetSlot::new),
        }
    }

    #[inline]
    pub fn get(&self, slot: SlotIndex) -> &OctetSlot {
        &self.slots[slot.get()]
    }

    #[inline]
    pub fn get_mut(&mut self, slot: SlotIndex) -> &mut OctetSlot {
        &mut self.slots[slot.get()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &OctetSlot> {
        self.slots.iter()
    }

    /// Raw text of every slot, left to right.
    pub fn raw_values(&self) -> [&str; SLOT_COUNT] {
        [
            self.slots[0].raw(),
            self.slots[1].raw(),
            self.slots[2].raw(),
            self.slots[3].raw(),
        ]
    }

    /// Returns `true` if no slot holds text.
    pub fn is_all_empty(&self) -> bool {
        self.slots.iter().all(OctetSlot::is_empty)
    }

    /// Returns `true` if any slot is flagged invalid.
    pub fn has_errors(&self) -> bool {
        self.slots.iter().any(OctetSlot::has_error)
    }

    /// Empty every slot and clear every error flag.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Clear every error flag, leaving text untouched.
    pub fn clear_errors(&mut self) {
        for slot in &mut self.slots {
            slot.set_error(false);
        }
    }

    /// The canonical dotted-decimal address, or `""`.
    ///
    /// Defined only when all four slots hold a valid octet; each octet is
    /// rendered without redundant leading zeros.
    pub fn canonical_address(&self) -> String {
        let mut out = String::with_capacity(15);
        for (i, slot) in self.slots.iter().enumerate() {
            let canonical = canonicalize_octet(slot.raw().trim());
            if parse_octet(&canonical).is_err() {
                return String::new();
            }
            if i > 0 {
                out.push('.');
            }
            out.push_str(&canonical);
        }
        out
    }

    /// Overwrite all slots from a dotted address, all or nothing.
    ///
    /// The value must split on `.` into exactly four parts that are each a
    /// valid octet. On success the trimmed parts are stored as written (a part
    /// longer than three digits is stored canonicalized) and error flags are
    /// cleared. On failure every slot is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::MalformedBulkAssignment`] when the value does not
    /// decompose into four valid octets.
    pub fn set_from_address(&mut self, value: &str) -> Result<(), AddressError> {
        let parts = match split_address(value) {
            Ok(parts) => parts,
            Err(reason) => {
                self.clear();
                return Err(AddressError::MalformedBulkAssignment {
                    value: value.to_string(),
                    reason,
                });
            }
        };

        for (slot, part) in self.slots.iter_mut().zip(parts) {
            let part = part.trim();
            if part.len() > OCTET_MAX_LEN {
                slot.set_raw(&canonicalize_octet(part));
            } else {
                slot.set_raw(part);
            }
            slot.set_error(false);
        }
        Ok(())
    }
}

impl std::ops::Index<SlotIndex> for OctetSlots {
    type Output = OctetSlot;

    fn index(&self, slot: SlotIndex) -> &Self::Output {
        self.get(slot)
    }
}

impl std::ops::IndexMut<SlotIndex> for OctetSlots {
    fn index_mut(&mut self, slot: SlotIndex) -> &mut Self::Output {
        self.get_mut(slot)
    }
}

fn split_address(value: &str) -> Result<[&str; SLOT_COUNT], MalformedReason> {
    let count = value.split('.').count();
    if count != SLOT_COUNT {
        return Err(MalformedReason::PartCount(count));
    }

    let mut parts = [""; SLOT_COUNT];
    for (part, (out, text)) in parts.iter_mut().zip(value.split('.')).enumerate() {
        parse_octet(text).map_err(|error| MalformedReason::Octet { part, error })?;
        *out = text;
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OctetError;

    #[test]
    fn canonical_address_requires_all_four() {
        let slots = OctetSlots::from_raw(["192", "168", "", "1"]);
        assert_eq!(slots.canonical_address(), "");
    }

    #[test]
    fn canonical_address_rejects_out_of_range_slot() {
        let slots = OctetSlots::from_raw(["10", "0", "256", "1"]);
        assert_eq!(slots.canonical_address(), "");
    }

    #[test]
    fn canonical_address_strips_leading_zeros() {
        let slots = OctetSlots::from_raw(["010", "000", "00", "7"]);
        assert_eq!(slots.canonical_address(), "10.0.0.7");
    }

    #[test]
    fn set_from_address_keeps_written_form() {
        let mut slots = OctetSlots::new();
        slots.set_from_address("01. 2 .3.004").unwrap();
        assert_eq!(slots.raw_values(), ["01", "2", "3", "004"]);
        assert_eq!(slots.canonical_address(), "1.2.3.4");
    }

    #[test]
    fn set_from_address_canonicalizes_overlong_parts() {
        let mut slots = OctetSlots::new();
        slots.set_from_address("0000010.0.0.1").unwrap();
        assert_eq!(slots.raw_values(), ["10", "0", "0", "1"]);
    }

    #[test]
    fn set_from_address_is_all_or_nothing() {
        let mut slots = OctetSlots::from_raw(["1", "2", "3", "4"]);
        let err = slots.set_from_address("1.2.3.999").unwrap_err();
        assert_eq!(
            err,
            AddressError::MalformedBulkAssignment {
                value: "1.2.3.999".to_string(),
                reason: MalformedReason::Octet {
                    part: 3,
                    error: OctetError::OutOfRange
                },
            }
        );
        assert!(slots.is_all_empty());
        assert_eq!(slots.canonical_address(), "");
    }

    #[test]
    fn set_from_address_counts_parts() {
        let mut slots = OctetSlots::new();
        for (value, count) in [("1.2.3", 3), ("1.2.3.4.5", 5), ("", 1), ("1..2.3.4", 5)] {
            let err = slots.set_from_address(value).unwrap_err();
            assert!(
                matches!(
                    err,
                    AddressError::MalformedBulkAssignment {
                        reason: MalformedReason::PartCount(n),
                        ..
                    } if n == count
                ),
                "{value:?}: {err:?}"
            );
        }
    }

    #[test]
    fn set_from_address_clears_error_flags() {
        let mut slots = OctetSlots::new();
        slots[SlotIndex::FIRST].set_error(true);
        slots.set_from_address("8.8.8.8").unwrap();
        assert!(!slots.has_errors());
    }
}
