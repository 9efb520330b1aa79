//! Host form owning IPv4 fields.
//!
//! Models what a document form does around the fields: blocking submission
//! on the first invalid field, and the two-phase reset where the native
//! reset must settle before the fields re-synchronize.

use crate::config::FieldConfig;
use crate::field::Ipv4Field;
use crate::messages::{DefaultMessages, Localizer};
use crate::validation::SubmissionKind;
use octet_core::SlotIndex;
use std::collections::VecDeque;
use std::rc::Rc;

const LOG_TARGET: &str = "ipv4_input.form";

/// Index of a field within its [`Form`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Work queued to run after the current event settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// Clear error state and re-apply mirror values after a native reset.
    ResyncAfterReset,
}

/// Result of [`Form::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; `(name, value)` pairs for named fields.
    Submitted { entries: Vec<(String, String)> },
    /// Submission blocked by the first failing field.
    Blocked {
        field: FieldId,
        slot: SlotIndex,
        kind: SubmissionKind,
        message: String,
    },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }
}

/// A form holding IPv4 fields in document order.
pub struct Form {
    fields: Vec<Ipv4Field>,
    messages: Rc<dyn Localizer>,
    deferred: VecDeque<DeferredTask>,
}

impl Form {
    pub fn new() -> Self {
        Self::with_localizer(Rc::new(DefaultMessages))
    }

    /// A form whose fields share `messages`.
    pub fn with_localizer(messages: Rc<dyn Localizer>) -> Self {
        Self {
            fields: Vec::new(),
            messages,
            deferred: VecDeque::new(),
        }
    }

    /// Upgrade an element into a field of this form.
    pub fn add_field(&mut self, config: FieldConfig) -> FieldId {
        let id = FieldId(self.fields.len());
        self.fields
            .push(Ipv4Field::with_localizer(config, Rc::clone(&self.messages)));
        id
    }

    pub fn field(&self, id: FieldId) -> Option<&Ipv4Field> {
        self.fields.get(id.0)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Ipv4Field> {
        self.fields.get_mut(id.0)
    }

    /// Find a field by its configured name.
    pub fn field_by_name(&self, name: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|f| f.config().name.as_deref() == Some(name))
            .map(FieldId)
    }

    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &Ipv4Field)> {
        self.fields.iter().enumerate().map(|(i, f)| (FieldId(i), f))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate every field in order; stop at the first one that fails.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut entries = Vec::new();

        for (i, field) in self.fields.iter_mut().enumerate() {
            let check = field.validate_for_submission();
            if let Some(slot) = check.first_error_slot {
                let message = field.message_for(&check).unwrap_or_default();
                log::debug!(
                    target: LOG_TARGET,
                    "submit blocked by field {i} slot {slot}: {message}"
                );
                return SubmitOutcome::Blocked {
                    field: FieldId(i),
                    slot,
                    kind: check.kind,
                    message,
                };
            }
            if let Some(name) = field.mirror().name() {
                entries.push((name.to_string(), field.mirror().value().to_string()));
            }
        }

        log::debug!(target: LOG_TARGET, "submitted {} entries", entries.len());
        SubmitOutcome::Submitted { entries }
    }

    /// Native form reset.
    ///
    /// Restores default slot text and mirror values immediately and queues
    /// the follow-up that clears error state. The follow-up runs on the next
    /// [`Form::run_deferred`], so it always observes the reset values.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.apply_native_reset();
        }
        self.deferred.push_back(DeferredTask::ResyncAfterReset);
        log::debug!(target: LOG_TARGET, "native reset applied; resync queued");
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Run queued tasks in FIFO order; returns how many ran.
    pub fn run_deferred(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.deferred.pop_front() {
            match task {
                DeferredTask::ResyncAfterReset => {
                    for field in &mut self.fields {
                        field.on_form_reset();
                    }
                }
            }
            ran += 1;
        }
        ran
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields)
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_collects_named_values() {
        let mut form = Form::new();
        form.add_field(FieldConfig::new().with_name("a").with_initial_value("1.2.3.4"));
        form.add_field(FieldConfig::new());
        form.add_field(FieldConfig::new().with_name("c"));

        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Submitted {
                entries: vec![
                    ("a".to_string(), "1.2.3.4".to_string()),
                    ("c".to_string(), String::new()),
                ]
            }
        );
    }

    #[test]
    fn submit_stops_at_first_failing_field() {
        let mut form = Form::new();
        let first = form.add_field(FieldConfig::new());
        let second = form.add_field(FieldConfig::new());
        let third = form.add_field(FieldConfig::new());

        form.field_mut(second)
            .unwrap()
            .on_input(SlotIndex::FIRST, "999");
        form.field_mut(third).unwrap().on_input(SlotIndex::FIRST, "1");

        let SubmitOutcome::Blocked {
            field,
            slot,
            kind,
            message,
        } = form.submit()
        else {
            panic!("expected blocked submission");
        };
        assert_eq!(field, second);
        assert_eq!(slot, SlotIndex::FIRST);
        assert_eq!(kind, SubmissionKind::InvalidOctet);
        assert_eq!(message, "Invalid octet.");

        // Fields after the blocking one are not inspected.
        let untouched = form.field(third).unwrap();
        assert_eq!(untouched.custom_validity(SlotIndex::new(1).unwrap()), None);
        assert!(form.field(first).unwrap().focused().is_none());
    }

    #[test]
    fn reset_follow_up_waits_for_tick() {
        let mut form = Form::new();
        let id = form.add_field(FieldConfig::new().with_initial_value("10.0.0.1"));
        form.field_mut(id).unwrap().on_input(SlotIndex::FIRST, "300");

        form.reset();
        assert!(form.has_pending_tasks());
        let field = form.field(id).unwrap();
        assert_eq!(field.mirror().value(), "10.0.0.1");
        assert!(field.slots().has_errors());

        assert_eq!(form.run_deferred(), 1);
        let field = form.field(id).unwrap();
        assert!(!field.slots().has_errors());
        assert_eq!(field.slots().raw_values(), ["10", "0", "0", "1"]);
        assert!(!form.has_pending_tasks());
    }

    #[test]
    fn field_by_name_finds_first_match() {
        let mut form = Form::new();
        form.add_field(FieldConfig::new().with_name("x"));
        let y = form.add_field(FieldConfig::new().with_name("y"));
        assert_eq!(form.field_by_name("y"), Some(y));
        assert_eq!(form.field_by_name("z"), None);
    }
}
