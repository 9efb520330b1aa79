//! # octet_core
//!
//! UI-agnostic octet model for segmented IPv4 address fields.
//!
//! This crate provides the leaf layer of an IPv4 field:
//! - [`SlotIndex`]: A position `0..=3`, also used as the focus cursor
//! - [`OctetSlot`]: One slot's raw text and error flag
//! - [`OctetSlots`]: The four slots and the canonical address derived from them
//! - [`parse_octet`], [`is_valid_octet`], [`canonicalize_octet`]: Pure octet rules
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any event model or focus system
//! - Logging backends or message catalogs
//!
//! It depends only on `std`, so the rules can be tested in isolation and
//! reused by any host that renders the four slots.

mod address;
mod error;
mod octet;
mod slot;

pub use address::OctetSlots;
pub use error::{AddressError, MalformedReason, OctetError};
pub use octet::{
    OCTET_MAX, OCTET_MAX_LEN, canonicalize_octet, is_valid_octet, parse_octet, sanitize_digits,
    sanitize_payload,
};
pub use slot::{OctetSlot, SLOT_COUNT, SlotIndex};
