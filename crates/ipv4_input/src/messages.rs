//! User-facing and diagnostic message lookup.
//!
//! The field never hardcodes message text. It asks a [`Localizer`] for a
//! [`MessageKey`]; hosts plug in their own catalog, and [`DefaultMessages`]
//! covers English.

use std::borrow::Cow;

/// Messages the field may need, keyed by a stable tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKey<'a> {
    /// A slot holds a value outside `0..=255`.
    InvalidOctet,
    /// Some slots are filled and others are not.
    IncompleteAddress,
    /// The configured initial value is not an IPv4 address.
    InvalidInitialValue { value: &'a str },
    /// A programmatic assignment is not an IPv4 address.
    InvalidValue { value: &'a str },
}

impl MessageKey<'_> {
    /// Stable tag used by catalogs to look the message up.
    pub fn tag(&self) -> &'static str {
        match self {
            MessageKey::InvalidOctet => "invalid-octet",
            MessageKey::IncompleteAddress => "incomplete-address",
            MessageKey::InvalidInitialValue { .. } => "invalid-initial-value",
            MessageKey::InvalidValue { .. } => "invalid-value",
        }
    }
}

/// Resolves message keys to display text.
pub trait Localizer {
    fn message(&self, key: MessageKey<'_>) -> Cow<'static, str>;
}

/// English messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultMessages;

impl Localizer for DefaultMessages {
    fn message(&self, key: MessageKey<'_>) -> Cow<'static, str> {
        match key {
            MessageKey::InvalidOctet => Cow::Borrowed("Invalid octet."),
            MessageKey::IncompleteAddress => Cow::Borrowed("Please fill out this field."),
            MessageKey::InvalidInitialValue { value } | MessageKey::InvalidValue { value } => {
                Cow::Owned(format!(
                    "The specified value '{value}' is not a valid IPv4 address."
                ))
            }
        }
    }
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn message(&self, key: MessageKey<'_>) -> Cow<'static, str> {
        (**self).message(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messages_interpolate_value() {
        let msg = DefaultMessages.message(MessageKey::InvalidValue { value: "1.2.3" });
        assert_eq!(msg, "The specified value '1.2.3' is not a valid IPv4 address.");
    }

    #[test]
    fn tags_are_stable() {
        assert_eq!(MessageKey::InvalidOctet.tag(), "invalid-octet");
        assert_eq!(
            MessageKey::InvalidInitialValue { value: "" }.tag(),
            "invalid-initial-value"
        );
    }
}
