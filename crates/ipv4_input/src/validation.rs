//! Submission-time validation.
//!
//! Typing only flags individual slots. Whether the field as a whole may be
//! submitted is decided here, when the host form is about to submit.

use octet_core::{AddressError, OctetError, OctetSlots, SlotIndex, canonicalize_octet, parse_octet};

/// Classification of a field at submission time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionKind {
    /// Nothing entered; submits as an empty value.
    AllEmpty,
    /// Four valid octets.
    CompleteValid,
    /// Some slots filled, at least one empty (or a required field left empty).
    Incomplete,
    /// A filled slot is not a valid octet.
    InvalidOctet,
}

/// Outcome of [`validate_slots`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionCheck {
    pub kind: SubmissionKind,
    /// First offending slot, left to right.
    pub first_error_slot: Option<SlotIndex>,
    /// Canonical value that would be submitted; `""` unless complete.
    pub value: String,
    error: Option<AddressError>,
}

impl SubmissionCheck {
    /// Returns `true` if the field does not block submission.
    pub fn ok(&self) -> bool {
        matches!(
            self.kind,
            SubmissionKind::AllEmpty | SubmissionKind::CompleteValid
        )
    }

    /// The address-level error behind a failed check.
    pub fn error(&self) -> Option<&AddressError> {
        self.error.as_ref()
    }

    fn failed(error: AddressError) -> Self {
        let kind = match &error {
            AddressError::IncompleteAddress { .. } => SubmissionKind::Incomplete,
            _ => SubmissionKind::InvalidOctet,
        };
        Self {
            kind,
            first_error_slot: error.slot(),
            value: String::new(),
            error: Some(error),
        }
    }
}

/// Classify a snapshot of slots for submission.
///
/// Slots are canonicalized before inspection. A `required` field that is
/// entirely empty fails as incomplete at the first slot.
pub fn validate_slots(slots: &OctetSlots, required: bool) -> SubmissionCheck {
    let octets = slots.raw_values().map(|raw| canonicalize_octet(raw.trim()));
    let all_empty = octets.iter().all(|o| o.is_empty());

    if all_empty {
        if required {
            return SubmissionCheck::failed(AddressError::IncompleteAddress {
                slot: SlotIndex::FIRST,
            });
        }
        return SubmissionCheck {
            kind: SubmissionKind::AllEmpty,
            first_error_slot: None,
            value: String::new(),
            error: None,
        };
    }

    let partial = octets.iter().any(|o| o.is_empty());
    for (slot, octet) in SlotIndex::ALL.into_iter().zip(&octets) {
        if octet.is_empty() {
            if partial {
                return SubmissionCheck::failed(AddressError::IncompleteAddress { slot });
            }
            continue;
        }
        match parse_octet(octet) {
            Ok(_) => {}
            Err(OctetError::NonNumeric) => {
                return SubmissionCheck::failed(AddressError::NonNumericOctet { slot });
            }
            Err(_) => {
                return SubmissionCheck::failed(AddressError::OutOfRangeOctet { slot });
            }
        }
    }

    SubmissionCheck {
        kind: SubmissionKind::CompleteValid,
        first_error_slot: None,
        value: slots.canonical_address(),
        error: None,
    }
}
