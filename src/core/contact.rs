//! Contact form validation and the simulated submission feedback
//!
//! Nothing is sent anywhere: a valid submission only swaps the submit
//! button's label for [`SUCCESS_LABEL`] during [`SUCCESS_DISPLAY_MS`] and
//! then clears the form.

use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

use crate::core::selectors::tokens;

/// How long the confirmation stays on the submit button
pub const SUCCESS_DISPLAY_MS: u32 = 3000;

/// Submit button label while the confirmation is shown
pub const SUCCESS_LABEL: &str = "Message Sent!";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("subject")]
    Subject,
    #[display("message")]
    Message,
}

impl ContactField {
    /// Every field that must be filled in
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Value of the `name` attribute of the matching input
    pub fn input_name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

/// Reason a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Raw values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_value(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Empty every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Any previous error on the field is cleared
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    pub fn error(&self) -> Option<FieldError> {
        match self {
            FieldStatus::Valid => None,
            FieldStatus::Invalid(error) => Some(*error),
        }
    }
}

/// Per-field outcome of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    statuses: Vec<(ContactField, FieldStatus)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.statuses
            .iter()
            .all(|(_, status)| *status == FieldStatus::Valid)
    }

    pub fn status(&self, field: ContactField) -> FieldStatus {
        self.statuses
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, status)| *status)
            .unwrap_or(FieldStatus::Valid)
    }

    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        self.status(field).error()
    }

    /// Fields that failed, in form order
    pub fn invalid_fields(&self) -> Vec<ContactField> {
        self.statuses
            .iter()
            .filter(|(_, status)| *status != FieldStatus::Valid)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldStatus)> + '_ {
        self.statuses.iter().copied()
    }
}

/// Email shape check: one `@`, a dot in the domain, no whitespace
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validate a submission.
///
/// Required fields must be non-blank once trimmed. A non-empty email value
/// must also match the email shape, checked against the raw value; that
/// error takes precedence over the required-field one.
pub fn validate_contact_form(form: &ContactForm) -> ValidationReport {
    let mut statuses: Vec<(ContactField, FieldStatus)> = ContactField::REQUIRED
        .iter()
        .map(|field| {
            let status = if form.value(*field).trim().is_empty() {
                FieldStatus::Invalid(FieldError::Required)
            } else {
                FieldStatus::Valid
            };
            (*field, status)
        })
        .collect();

    if !form.email.is_empty() && !is_valid_email(&form.email) {
        if let Some((_, status)) = statuses
            .iter_mut()
            .find(|(field, _)| *field == ContactField::Email)
        {
            *status = FieldStatus::Invalid(FieldError::InvalidEmail);
        }
    }

    ValidationReport { statuses }
}

/// What the submit button shows at a point in time after a valid submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFace {
    /// Confirmation label on the success color
    Confirmed,
    /// Original label and color, with the form cleared
    Original,
}

impl SubmitFace {
    /// Face of the submit button `elapsed_ms` after a successful submission
    pub fn after(elapsed_ms: u64) -> Self {
        if elapsed_ms < u64::from(SUCCESS_DISPLAY_MS) {
            SubmitFace::Confirmed
        } else {
            SubmitFace::Original
        }
    }

    /// Button label, given the label the button normally shows
    pub fn label<'a>(&self, original: &'a str) -> &'a str {
        match self {
            SubmitFace::Confirmed => SUCCESS_LABEL,
            SubmitFace::Original => original,
        }
    }

    /// Inline background override, if any
    pub fn background(&self) -> Option<&'static str> {
        match self {
            SubmitFace::Confirmed => Some(tokens::SUCCESS_COLOR),
            SubmitFace::Original => None,
        }
    }
}

/// Confirmations started by successful submissions
///
/// Every submission schedules a reset; only the reset of the latest one may
/// run, so a second submission restarts the full confirmation window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitConfirmations {
    latest: u64,
}

impl SubmitConfirmations {
    /// Start a confirmation and return the ticket of its reset
    pub fn confirm(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether the reset holding `ticket` belongs to the latest confirmation
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
