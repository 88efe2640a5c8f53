use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `local@domain.tld` without whitespace. The byte order mark counts as
/// whitespace here, as it does in browsers.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

/// Minimum number of characters of a trimmed message.
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// The raw values of the contact form, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// The error tag used for problems with this field. The subject is never
    /// validated and therefore has none.
    pub fn error_field(self) -> Option<ErrorField> {
        match self {
            Self::Name => Some(ErrorField::Name),
            Self::Email => Some(ErrorField::Email),
            Self::Subject => None,
            Self::Message => Some(ErrorField::Message),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorField {
    Name,
    Email,
    Message,
    /// Problems not attributable to a single input.
    General,
}

impl ErrorField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error shown next to a form field (or above the form for
/// [`ErrorField::General`]). The [`Display`](fmt::Display) output is the
/// user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
    #[error("Something went wrong. Please try again.")]
    DeliveryFailed,
}

impl ValidationError {
    pub fn field(self) -> ErrorField {
        match self {
            Self::NameRequired => ErrorField::Name,
            Self::EmailRequired | Self::EmailInvalid => ErrorField::Email,
            Self::MessageRequired | Self::MessageTooShort => ErrorField::Message,
            Self::DeliveryFailed => ErrorField::General,
        }
    }

    pub fn message(self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// The form is editable. Outstanding errors, if any, are displayed.
    #[default]
    Idle,
    /// A delivery is in flight.
    Submitting,
    /// The last delivery succeeded.
    Success,
}

/// The visible state of a contact form.
///
/// Errors can only be held while the form is idle, so `is_submitting` and
/// `is_success` are never both true and neither coexists with errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    phase: FormPhase,
    errors: Vec<ValidationError>,
}

impl FormState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self {
            phase: FormPhase::Idle,
            errors,
        }
    }

    pub fn submitting() -> Self {
        Self {
            phase: FormPhase::Submitting,
            errors: Vec::new(),
        }
    }

    pub fn success() -> Self {
        Self {
            phase: FormPhase::Success,
            errors: Vec::new(),
        }
    }

    pub fn failed() -> Self {
        Self::invalid(vec![ValidationError::DeliveryFailed])
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == FormPhase::Success
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the message of the first error tagged with `field`.
    pub fn error_for(&self, field: ErrorField) -> Option<String> {
        self.errors
            .iter()
            .find(|err| err.field() == field)
            .map(|err| err.message())
    }

    /// Drops every error tagged with `field` and reports whether anything was
    /// removed.
    pub fn clear_errors(&mut self, field: ErrorField) -> bool {
        let before = self.errors.len();
        self.errors.retain(|err| err.field() != field);
        self.errors.len() != before
    }
}
