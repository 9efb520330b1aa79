//! The submittable mirror of an IPv4 field.

/// Hidden field holding the canonical address (or `""`).
///
/// Every write bumps `revision`, even when the text is unchanged, so hosts can
/// observe that a recomputation happened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MirrorField {
    name: Option<String>,
    id: Option<String>,
    value: String,
    default_value: String,
    revision: u64,
}

impl MirrorField {
    pub fn new(name: Option<String>, id: Option<String>) -> Self {
        Self {
            name,
            id,
            ..Self::default()
        }
    }

    /// Form field name the value is submitted under.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value restored by a form reset.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Monotonic write counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Store `value`; returns `true` if the text changed.
    pub fn write(&mut self, value: String) -> bool {
        self.revision = self.revision.wrapping_add(1);
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Freeze the current value as the reset default.
    pub(crate) fn capture_default(&mut self) {
        self.default_value.clone_from(&self.value);
    }

    /// Put the default value back, as a form reset does.
    pub(crate) fn restore_default(&mut self) {
        let default = self.default_value.clone();
        self.write(default);
    }
}
