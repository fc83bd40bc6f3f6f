//! Contact form model with a simulated, offline submit
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Time the fake submit spends "sending".
pub const SUBMIT_DELAY_MS: u32 = 1_500;
/// How long the success confetti stays up.
pub const CONFETTI_MS: u32 = 1_500;

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

pub const CONTACT_FIELDS: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Subject,
    ContactField::Message,
];

impl ContactField {
    /// DOM id of the input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::Email => "Email Address *",
            Self::Subject => "Subject *",
            Self::Message => "Message *",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Email => "Enter your email address",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project...",
        }
    }

    const fn required_message(self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Email => "Email is required",
            Self::Subject => "Subject is required",
            Self::Message => "Message is required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{}", .0.required_message())]
    Required(ContactField),
    #[error("Enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    #[must_use]
    pub const fn field(&self) -> ContactField {
        match self {
            Self::Required(field) => *field,
            Self::InvalidEmail => ContactField::Email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Check every field, reporting at most one error per field in field order.
    ///
    /// # Errors
    ///
    /// Returns the field errors when any field is blank or the email is malformed.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for field in CONTACT_FIELDS {
            let value = self.value(field).trim();
            if value.is_empty() {
                errors.push(FieldError::Required(field));
            } else if field == ContactField::Email && !looks_like_email(value) {
                errors.push(FieldError::InvalidEmail);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Progress of the simulated submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
}

/// Form plus submit bookkeeping, driven by the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: Vec<FieldError>,
    pub status: SubmitStatus,
    pub confetti: bool,
}

impl ContactState {
    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Start a submit. Returns `true` when the caller should schedule
    /// [`ContactState::finish_submit`] after [`SUBMIT_DELAY_MS`].
    pub fn begin_submit(&mut self) -> bool {
        if self.status == SubmitStatus::Submitting {
            return false;
        }
        match self.form.validate() {
            Ok(()) => {
                self.errors.clear();
                self.status = SubmitStatus::Submitting;
                true
            }
            Err(errors) => {
                self.errors = errors;
                self.status = SubmitStatus::Idle;
                false
            }
        }
    }

    /// Complete the fake send: reset the form and raise the confetti.
    pub fn finish_submit(&mut self) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        log::info!("contact form accepted (not sent; no backend)");
        self.form = ContactForm::default();
        self.status = SubmitStatus::Sent;
        self.confetti = true;
    }

    pub fn clear_confetti(&mut self) {
        self.confetti = false;
    }
}
