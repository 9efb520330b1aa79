//! Error taxonomy for octets and whole addresses.

use crate::slot::SlotIndex;

/// Why a single octet failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OctetError {
    /// Nothing left after trimming.
    Empty,
    /// Contains something other than ASCII digits.
    NonNumeric,
    /// Numeric, but larger than 255.
    OutOfRange,
}

impl std::fmt::Display for OctetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OctetError::Empty => f.write_str("octet is empty"),
            OctetError::NonNumeric => f.write_str("octet is not a decimal number"),
            OctetError::OutOfRange => f.write_str("octet is outside 0..=255"),
        }
    }
}

impl std::error::Error for OctetError {}

/// Why a bulk assignment could not be decomposed into four octets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedReason {
    /// The value did not split into exactly four dot-separated parts.
    PartCount(usize),
    /// Part `part` (0-based) is not a valid octet.
    Octet { part: usize, error: OctetError },
}

/// Address-level failures.
///
/// Per-slot variants are produced by submission validation;
/// [`AddressError::MalformedBulkAssignment`] by [`OctetSlots::set_from_address`](crate::OctetSlots::set_from_address).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressError {
    OutOfRangeOctet {
        slot: SlotIndex,
    },
    NonNumericOctet {
        slot: SlotIndex,
    },
    IncompleteAddress {
        slot: SlotIndex,
    },
    MalformedBulkAssignment {
        value: String,
        reason: MalformedReason,
    },
}

impl AddressError {
    /// The slot a per-slot error points at, if any.
    pub fn slot(&self) -> Option<SlotIndex> {
        match self {
            AddressError::OutOfRangeOctet { slot }
            | AddressError::NonNumericOctet { slot }
            | AddressError::IncompleteAddress { slot } => Some(*slot),
            AddressError::MalformedBulkAssignment { .. } => None,
        }
    }
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressError::OutOfRangeOctet { slot } => {
                write!(f, "octet {} is outside 0..=255", slot.ordinal())
            }
            AddressError::NonNumericOctet { slot } => {
                write!(f, "octet {} is not a decimal number", slot.ordinal())
            }
            AddressError::IncompleteAddress { slot } => {
                write!(f, "address is incomplete: octet {} is empty", slot.ordinal())
            }
            AddressError::MalformedBulkAssignment { value, reason } => match reason {
                MalformedReason::PartCount(count) => write!(
                    f,
                    "'{value}' is not a valid IPv4 address: expected 4 parts, found {count}"
                ),
                MalformedReason::Octet { part, error } => write!(
                    f,
                    "'{value}' is not a valid IPv4 address: part {}: {error}",
                    part + 1
                ),
            },
        }
    }
}

impl std::error::Error for AddressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AddressError::MalformedBulkAssignment {
                reason: MalformedReason::Octet { error, .. },
                ..
            } => Some(error),
            _ => None,
        }
    }
}
