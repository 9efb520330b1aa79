//! Slot positions and per-slot state.

use crate::octet::{OCTET_MAX, OCTET_MAX_LEN, canonicalize_octet, sanitize_digits};

/// Number of octet slots in an IPv4 address.
pub const SLOT_COUNT: usize = 4;

/// Position of an octet slot, always within `0..=3`.
///
/// This doubles as the focus cursor: any focus decision is expressed as a
/// `SlotIndex`, so it can never point outside the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub const FIRST: SlotIndex = SlotIndex(0);
    pub const LAST: SlotIndex = SlotIndex(SLOT_COUNT as u8 - 1);

    /// All four positions, left to right.
    pub const ALL: [SlotIndex; SLOT_COUNT] = [SlotIndex(0), SlotIndex(1), SlotIndex(2), SlotIndex(3)];

    /// Create a `SlotIndex`, or `None` if `index` is not a slot position.
    #[inline]
    pub const fn new(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create a `SlotIndex`, saturating to the last slot.
    #[inline]
    pub const fn clamped(index: usize) -> Self {
        if index < SLOT_COUNT {
            Self(index as u8)
        } else {
            Self::LAST
        }
    }

    /// Zero-based position.
    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// One-based position, for messages.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self.0 as usize + 1
    }

    /// The slot to the right, if any.
    #[inline]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.get() + 1)
    }

    /// The slot to the left, if any.
    #[inline]
    pub const fn prev(self) -> Option<Self> {
        match self.0 {
            0 => None,
            n => Some(Self(n - 1)),
        }
    }

    /// Advance by `n` slots, stopping at the last one.
    #[inline]
    pub const fn saturating_add(self, n: usize) -> Self {
        Self::clamped(self.get().saturating_add(n))
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(index)
    }
}

impl From<SlotIndex> for usize {
    #[inline]
    fn from(slot: SlotIndex) -> Self {
        slot.get()
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a single octet slot.
///
/// `raw` only ever holds ASCII digits and at most three of them; every mutator
/// enforces that. Values above 255 are kept as typed and only flagged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OctetSlot {
    raw: String,
    has_error: bool,
}

impl OctetSlot {
    /// Create a slot holding `text`, sanitized to the slot invariant.
    pub fn new(text: &str) -> Self {
        let mut slot = Self::default();
        slot.set_raw(text);
        slot
    }

    /// The text currently in the slot.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the slot holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Numeric value of the slot, `None` when empty.
    ///
    /// May exceed 255; see [`OctetSlot::is_in_range`].
    pub fn numeric_value(&self) -> Option<u16> {
        if self.raw.is_empty() {
            return None;
        }
        self.raw.parse().ok()
    }

    /// Returns `true` if the slot is non-empty and within `0..=255`.
    pub fn is_in_range(&self) -> bool {
        self.numeric_value()
            .is_some_and(|v| v <= u16::from(OCTET_MAX))
    }

    /// Returns `true` if the slot is currently flagged invalid.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Replace the text, keeping only digits and at most three of them.
    ///
    /// Returns `true` if the stored text changed. The error flag is untouched.
    pub fn set_raw(&mut self, text: &str) -> bool {
        let digits = sanitize_digits(text);
        let capped = &digits[..digits.len().min(OCTET_MAX_LEN)];
        if self.raw == capped {
            return false;
        }
        self.raw.clear();
        self.raw.push_str(capped);
        true
    }

    /// Set the error flag.
    #[inline]
    pub fn set_error(&mut self, has_error: bool) {
        self.has_error = has_error;
    }

    /// Recompute the error flag from the text: flagged iff non-empty and above 255.
    pub fn refresh_error(&mut self) {
        self.has_error = !self.raw.is_empty() && !self.is_in_range();
    }

    /// Collapse redundant leading zeros in place.
    ///
    /// Returns `true` if the text changed.
    pub fn canonicalize(&mut self) -> bool {
        let canonical = canonicalize_octet(&self.raw);
        if canonical.len() == self.raw.len() {
            return false;
        }
        let canonical = canonical.into_owned();
        self.raw = canonical;
        true
    }

    /// Empty the slot and clear its error flag.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.has_error = false;
    }
}
