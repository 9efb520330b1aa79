//! # ipv4_input
//!
//! Input distribution and validation for segmented IPv4 address fields.
//!
//! A host UI turns a plain text input into four octet slots and a mirror
//! field, then forwards its events here:
//! - [`Ipv4Field`]: The widget handle; one per upgraded input
//! - [`FieldEvent`]: Typed keystroke, input, paste, blur and assignment payloads
//! - [`Form`]: Submission blocking and the deferred reset follow-up
//! - [`Localizer`]: Seam for the message catalog
//!
//! The slot model itself lives in [`octet_core`]; this crate decides how raw
//! interactions map onto it and where focus goes next.
//!
//! Logging goes through the `log` facade under the `ipv4_input.*` targets.

mod config;
mod distributor;
mod event;
mod field;
mod form;
mod messages;
mod mirror;
mod validation;

pub use config::{CONTAINER_CLASS, FieldConfig, MIRROR_CLASS, OCTET_CLASS};
pub use distributor::{
    Distribution, apply_typed_text, classify_keystroke, distribute, navigate, needs_distribution,
};
pub use event::{FieldEvent, Key, Modifiers, Response, SEPARATOR};
pub use field::Ipv4Field;
pub use form::{DeferredTask, FieldId, Form, SubmitOutcome};
pub use messages::{DefaultMessages, Localizer, MessageKey};
pub use mirror::MirrorField;
pub use validation::{SubmissionCheck, SubmissionKind, validate_slots};

pub use octet_core::{AddressError, OctetSlot, OctetSlots, SlotIndex};
