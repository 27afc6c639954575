//! The single-field signup on the home page.

use crate::error::{Result, ValidationError};
use crate::forms::reject;
use crate::model::Severity;
use crate::notify::Notify;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickSubscribeForm {
    pub email: String,
}

impl QuickSubscribeForm {
    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn submit(&mut self, notifier: &dyn Notify) -> Result<String> {
        if self.email.is_empty() {
            return Err(reject(
                notifier,
                ValidationError::MissingRequiredField { field: "email" },
                "Email required",
                "Please enter your email address to subscribe.",
            ));
        }

        notifier.notify(
            "Success!",
            "Thank you for subscribing! We'll be in touch soon.",
            Severity::Normal,
        );
        info!("quick subscription accepted");
        Ok(std::mem::take(&mut self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DigestError;
    use crate::forms::testing::RecordingNotifier;

    #[test]
    fn empty_email_is_rejected() {
        let notifier = RecordingNotifier::default();
        let mut form = QuickSubscribeForm::default();

        let err = form.submit(&notifier).unwrap_err();

        assert!(matches!(
            err,
            DigestError::Validation(ValidationError::MissingRequiredField { field: "email" })
        ));
        assert_eq!(notifier.severities(), vec![Severity::Destructive]);
    }

    #[test]
    fn accepted_email_is_returned_and_cleared() {
        let notifier = RecordingNotifier::default();
        let mut form = QuickSubscribeForm::default().with_email("reader@example.com");

        assert_eq!(form.submit(&notifier).unwrap(), "reader@example.com");
        assert!(form.email.is_empty());
        assert_eq!(notifier.titles(), vec!["Success!"]);
    }
}
