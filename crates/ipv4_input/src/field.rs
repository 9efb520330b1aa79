//! The IPv4 field widget handle.
//!
//! `Ipv4Field` owns the four slots, the mirror and the focus cursor of one
//! field. Every operation runs to completion on `&mut self`, so two
//! interactions can never interleave, and every slot mutation rewrites the
//! mirror before returning.

use crate::config::FieldConfig;
use crate::distributor::{
    apply_typed_text, classify_keystroke, distribute, navigate, needs_distribution,
};
use crate::event::{FieldEvent, Key, Modifiers, Response};
use crate::messages::{DefaultMessages, Localizer, MessageKey};
use crate::mirror::MirrorField;
use crate::validation::{SubmissionCheck, SubmissionKind, validate_slots};
use octet_core::{AddressError, OCTET_MAX_LEN, OctetSlot, OctetSlots, SLOT_COUNT, SlotIndex};
use std::rc::Rc;

const LOG_TARGET: &str = "ipv4_input.field";

/// A segmented IPv4 address field.
///
/// # Example
///
/// ```
/// use ipv4_input::{FieldConfig, Ipv4Field, SlotIndex};
///
/// let mut field = Ipv4Field::new(FieldConfig::new().with_name("gateway"));
/// field.on_paste(SlotIndex::FIRST, "192.168.1.1");
///
/// assert_eq!(field.value(), "192.168.1.1");
/// assert_eq!(field.mirror().value(), "192.168.1.1");
/// ```
#[derive(Clone)]
pub struct Ipv4Field {
    config: FieldConfig,
    slots: OctetSlots,
    default_raw: [String; SLOT_COUNT],
    mirror: MirrorField,
    focused: Option<SlotIndex>,
    validity: [Option<String>; SLOT_COUNT],
    messages: Rc<dyn Localizer>,
}

impl Ipv4Field {
    /// Build a field from its configuration, using English messages.
    pub fn new(config: FieldConfig) -> Self {
        Self::with_localizer(config, Rc::new(DefaultMessages))
    }

    /// Build a field whose messages come from `messages`.
    ///
    /// An invalid initial value leaves the field empty and is logged.
    pub fn with_localizer(config: FieldConfig, messages: Rc<dyn Localizer>) -> Self {
        let mirror = MirrorField::new(config.name.clone(), config.mirror_id());
        let mut field = Self {
            config,
            slots: OctetSlots::new(),
            default_raw: Default::default(),
            mirror,
            focused: None,
            validity: Default::default(),
            messages,
        };

        let initial = field.config.initial_value.clone();
        if !initial.is_empty()
            && let Err(err) = field.slots.set_from_address(&initial)
        {
            let msg = field
                .messages
                .message(MessageKey::InvalidInitialValue { value: &initial });
            log::warn!(target: LOG_TARGET, "{msg} ({err})");
        }
        field.sync_mirror();

        field.default_raw = field.slots.raw_values().map(str::to_string);
        field.mirror.capture_default();
        field
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn slots(&self) -> &OctetSlots {
        &self.slots
    }

    pub fn slot(&self, slot: SlotIndex) -> &OctetSlot {
        &self.slots[slot]
    }

    pub fn mirror(&self) -> &MirrorField {
        &self.mirror
    }

    /// Slot that currently holds focus, as far as the field knows.
    pub fn focused(&self) -> Option<SlotIndex> {
        self.focused
    }

    /// Message reported for `slot` by the last failed submission check.
    pub fn custom_validity(&self, slot: SlotIndex) -> Option<&str> {
        self.validity[slot.get()].as_deref()
    }

    /// Canonical address, or `""` when incomplete or invalid.
    pub fn value(&self) -> String {
        self.slots.canonical_address()
    }

    /// Assign the whole address.
    ///
    /// `""` clears every slot. Anything else must be four dot-separated valid
    /// octets; otherwise every slot is cleared, the failure is logged, and the
    /// error returned. The field stays usable either way.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::MalformedBulkAssignment`] for a malformed value.
    pub fn set_value(&mut self, value: &str) -> Result<(), AddressError> {
        self.clear_validity();

        let result = if value.is_empty() {
            self.slots.clear();
            Ok(())
        } else {
            self.slots.set_from_address(value)
        };

        if let Err(err) = &result {
            let msg = self.messages.message(MessageKey::InvalidValue { value });
            log::warn!(target: LOG_TARGET, "{msg} ({err})");
        }

        self.sync_mirror();
        result
    }

    /// Record that `slot` gained focus.
    pub fn focus(&mut self, slot: SlotIndex) {
        self.focused = Some(slot);
    }

    /// Classify a key press before the host applies it.
    pub fn on_keystroke(&mut self, slot: SlotIndex, key: Key, modifiers: Modifiers) -> Response {
        let resp = classify_keystroke(&self.slots[slot], slot, key, modifiers);
        if !resp.accepted {
            log::trace!(target: LOG_TARGET, "suppressed {key:?} in slot {slot}");
        }
        self.apply_focus(resp)
    }

    /// Separator and Backspace navigation only; never mutates a slot.
    ///
    /// The separator is always suppressed. Other keys pass through untouched.
    pub fn on_separator_or_backspace(&mut self, slot: SlotIndex, key: Key) -> Response {
        let focus = navigate(&self.slots[slot], slot, key);
        let resp = if key.is_separator() {
            Response::SUPPRESS
        } else {
            Response::ACCEPT
        };
        self.apply_focus(resp.with_focus(focus))
    }

    /// The full text of `slot` after the host applied an edit.
    ///
    /// Text with a separator, or longer than a slot, is distributed across
    /// the following slots; anything else is typed into `slot`.
    pub fn on_input(&mut self, slot: SlotIndex, text: &str) -> Response {
        self.validity[slot.get()] = None;

        let focus = if needs_distribution(text) {
            Some(self.distribute(slot, text))
        } else {
            apply_typed_text(&mut self.slots, slot, text)
        };

        self.sync_mirror();
        self.apply_focus(Response::ACCEPT.with_focus(focus))
    }

    /// Clipboard text pasted into `slot`.
    ///
    /// The native paste is always suppressed. Text with a separator, or longer
    /// than a slot, is distributed instead; anything shorter leaves the field
    /// untouched.
    pub fn on_paste(&mut self, slot: SlotIndex, text: &str) -> Response {
        if !needs_distribution(text) {
            log::trace!(target: LOG_TARGET, "ignored short paste {text:?} in slot {slot}");
            return Response::SUPPRESS;
        }
        let focus = self.distribute(slot, text);
        self.sync_mirror();
        self.apply_focus(Response::SUPPRESS.with_focus(Some(focus)))
    }

    /// `slot` lost focus: collapse its leading zeros.
    pub fn on_blur(&mut self, slot: SlotIndex) -> Response {
        if self.slots[slot].canonicalize() {
            log::trace!(
                target: LOG_TARGET,
                "canonicalized slot {slot} to {:?}",
                self.slots[slot].raw()
            );
        }
        if self.focused == Some(slot) {
            self.focused = None;
        }
        self.sync_mirror();
        Response::ACCEPT
    }

    /// Dispatch a typed event to the matching operation.
    pub fn handle(&mut self, event: FieldEvent<'_>) -> Response {
        match event {
            FieldEvent::Keystroke {
                slot,
                key,
                modifiers,
            } => self.on_keystroke(slot, key, modifiers),
            FieldEvent::Input { slot, text } => self.on_input(slot, text),
            FieldEvent::Paste { slot, text } => self.on_paste(slot, text),
            FieldEvent::Blur { slot } => self.on_blur(slot),
            FieldEvent::SetValue(value) => {
                // Malformed values are already logged; assignment is not a user-facing failure.
                let _ = self.set_value(value);
                Response::ACCEPT
            }
        }
    }

    /// Replay `text` as typed characters, starting in `slot`.
    ///
    /// Each character goes through the keystroke classifier, then, if
    /// accepted and the slot has room, is appended and fed back as an input
    /// event. Focus moves are followed, blurring the slot that was left.
    pub fn type_text(&mut self, slot: SlotIndex, text: &str) -> Response {
        let mut current = slot;
        self.focus(current);

        for c in text.chars() {
            let key = Key::Char(c);
            let mut resp = self.on_keystroke(current, key, Modifiers::NONE);

            if resp.accepted && self.slots[current].raw().len() < OCTET_MAX_LEN {
                let mut edited = self.slots[current].raw().to_string();
                edited.push(c);
                resp = self.on_input(current, &edited);
            }

            if let Some(next) = resp.focus.filter(|next| *next != current) {
                self.on_blur(current);
                current = next;
                self.focus(current);
            }
        }

        Response::ACCEPT.with_focus(Some(current))
    }

    /// Check the field before its form submits.
    ///
    /// A failing check stores the localized message as the offending slot's
    /// custom validity and moves focus there.
    pub fn validate_for_submission(&mut self) -> SubmissionCheck {
        self.clear_validity();
        let check = validate_slots(&self.slots, self.config.required);

        if let Some(slot) = check.first_error_slot {
            let key = match check.kind {
                SubmissionKind::Incomplete => MessageKey::IncompleteAddress,
                _ => MessageKey::InvalidOctet,
            };
            let msg = self.messages.message(key).into_owned();
            log::debug!(
                target: LOG_TARGET,
                "submission blocked at slot {slot}: {msg}"
            );
            self.validity[slot.get()] = Some(msg);
            self.focused = Some(slot);
        }

        check
    }

    /// Localized message for a failed check, if any.
    pub fn message_for(&self, check: &SubmissionCheck) -> Option<String> {
        let key = match check.kind {
            SubmissionKind::AllEmpty | SubmissionKind::CompleteValid => return None,
            SubmissionKind::Incomplete => MessageKey::IncompleteAddress,
            SubmissionKind::InvalidOctet => MessageKey::InvalidOctet,
        };
        Some(self.messages.message(key).into_owned())
    }

    /// What a native form reset does to this field.
    ///
    /// Slot text and the mirror return to their construction-time defaults.
    /// Error flags are left alone; [`Ipv4Field::on_form_reset`] clears them
    /// once the reset has settled.
    pub fn apply_native_reset(&mut self) {
        for (slot, default) in SlotIndex::ALL.into_iter().zip(&self.default_raw) {
            self.slots[slot].set_raw(default);
        }
        self.mirror.restore_default();
    }

    /// Follow-up to a form reset, run after the native reset has applied.
    ///
    /// Clears every error flag and custom validity message, then re-applies
    /// the mirror value to the slots.
    pub fn on_form_reset(&mut self) {
        self.slots.clear_errors();
        self.clear_validity();

        let value = self.mirror.value().to_string();
        if let Err(err) = self.set_value(&value) {
            log::warn!(target: LOG_TARGET, "mirror value rejected after reset: {err}");
        }
        log::debug!(
            target: LOG_TARGET,
            "reset settled with value {:?}",
            self.mirror.value()
        );
    }

    fn distribute(&mut self, start: SlotIndex, payload: &str) -> SlotIndex {
        let d = distribute(&mut self.slots, start, payload);
        for slot in &SlotIndex::ALL[start.get()..start.get() + d.consumed] {
            self.validity[slot.get()] = None;
        }
        d.focus
    }

    fn apply_focus(&mut self, resp: Response) -> Response {
        if let Some(slot) = resp.focus {
            log::debug!(target: LOG_TARGET, "focus -> slot {slot}");
            self.focused = Some(slot);
        }
        resp
    }

    fn clear_validity(&mut self) {
        self.validity = Default::default();
    }

    fn sync_mirror(&mut self) {
        let value = self.slots.canonical_address();
        if self.mirror.write(value) {
            log::trace!(target: LOG_TARGET, "mirror = {:?}", self.mirror.value());
        }
    }
}

impl Default for Ipv4Field {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl std::fmt::Debug for Ipv4Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ipv4Field")
            .field("config", &self.config)
            .field("slots", &self.slots)
            .field("mirror", &self.mirror)
            .field("focused", &self.focused)
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}
