//! Per-field configuration, taken from the element being upgraded.

/// Class carried by every IPv4 field container.
pub const CONTAINER_CLASS: &str = "ipv4-container";
/// Class carried by each octet slot.
pub const OCTET_CLASS: &str = "ipv4-input";
/// Class carried by the mirror field.
pub const MIRROR_CLASS: &str = "ipv4-hidden-input";

/// Attributes of the original input that shape the field.
///
/// ```
/// use ipv4_input::FieldConfig;
///
/// let config = FieldConfig::new()
///     .with_id("gateway")
///     .with_name("gw")
///     .with_initial_value("10.0.0.1");
///
/// assert_eq!(config.mirror_id().as_deref(), Some("gateway-hidden"));
/// assert_eq!(config.first_octet_id().as_deref(), Some("gateway_octet_1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub required: bool,
    pub initial_value: String,
    pub classes: Vec<String>,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into()).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into()).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Add classes from a whitespace-separated `class` attribute.
    pub fn with_classes(mut self, class_attr: &str) -> Self {
        self.classes
            .extend(class_attr.split_ascii_whitespace().map(str::to_string));
        self
    }

    /// Id of the mirror field: `"{id}-hidden"`.
    pub fn mirror_id(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("{id}-hidden"))
    }

    /// Id given to the first octet slot: `"{id}_octet_1"`.
    pub fn first_octet_id(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("{id}_octet_1"))
    }

    /// Where a `<label for=...>` should point once the field is upgraded.
    ///
    /// Labels that targeted the original input move to the first octet; other
    /// labels are not ours and yield `None`.
    pub fn label_target(&self, label_for: &str) -> Option<String> {
        match &self.id {
            Some(id) if id == label_for => self.first_octet_id(),
            _ => None,
        }
    }

    /// Classes of the container: the fixed container class, then the extras.
    pub fn container_classes(&self) -> Vec<&str> {
        std::iter::once(CONTAINER_CLASS)
            .chain(self.classes.iter().map(String::as_str))
            .collect()
    }
}
