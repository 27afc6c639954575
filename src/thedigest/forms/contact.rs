use crate::error::Result;
use crate::model::Severity;
use crate::notify::Notify;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    Name(String),
    Email(String),
    Subject(String),
    Message(String),
}

impl ContactForm {
    pub fn apply(self, event: ContactEvent) -> Self {
        match event {
            ContactEvent::Name(name) => Self { name, ..self },
            ContactEvent::Email(email) => Self { email, ..self },
            ContactEvent::Subject(subject) => Self { subject, ..self },
            ContactEvent::Message(message) => Self { message, ..self },
        }
    }

    /// Presence of every field is checked where input enters, so this always accepts.
    pub fn submit(&mut self, notifier: &dyn Notify) -> Result<ContactForm> {
        notifier.notify(
            "Message sent!",
            "Thank you for reaching out. We'll get back to you within 24 hours.",
            Severity::Normal,
        );
        let submitted = std::mem::take(self);
        info!(subject = %submitted.subject, "contact message accepted");
        Ok(submitted)
    }
}
