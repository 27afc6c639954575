use crate::error::{Result, ValidationError};
use crate::forms::reject;
use crate::model::Severity;
use crate::notify::Notify;
use tracing::info;

/// Topics a subscriber can pick, in form order.
pub const INTERESTS: &[&str] = &[
    "Technology & Innovation",
    "Business Strategy",
    "Leadership & Management",
    "Marketing & Growth",
    "Data & Analytics",
    "Remote Work & Productivity",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeForm {
    pub email: String,
    pub first_name: String,
    /// Checked topics, in the order they were checked.
    pub interests: Vec<String>,
    pub terms_agreed: bool,
    pub allow_marketing: bool,
}

impl Default for SubscribeForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            interests: Vec::new(),
            terms_agreed: false,
            allow_marketing: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeEvent {
    Email(String),
    FirstName(String),
    Interest { name: String, checked: bool },
    TermsAgreed(bool),
    AllowMarketing(bool),
}

impl SubscribeForm {
    pub fn apply(self, event: SubscribeEvent) -> Self {
        match event {
            SubscribeEvent::Email(email) => Self { email, ..self },
            SubscribeEvent::FirstName(first_name) => Self { first_name, ..self },
            SubscribeEvent::Interest { name, checked } => {
                let mut interests = self.interests;
                if checked {
                    if !interests.contains(&name) {
                        interests.push(name);
                    }
                } else {
                    interests.retain(|i| *i != name);
                }
                Self { interests, ..self }
            }
            SubscribeEvent::TermsAgreed(terms_agreed) => Self {
                terms_agreed,
                ..self
            },
            SubscribeEvent::AllowMarketing(allow_marketing) => Self {
                allow_marketing,
                ..self
            },
        }
    }

    /// Accepts the signup when terms are agreed, returning the submitted values.
    pub fn submit(&mut self, notifier: &dyn Notify) -> Result<SubscribeForm> {
        if !self.terms_agreed {
            return Err(reject(
                notifier,
                ValidationError::TermsNotAccepted,
                "Please agree to terms",
                "You must agree to our terms and privacy policy to subscribe.",
            ));
        }

        notifier.notify(
            "Welcome to The Digest!",
            "Thank you for subscribing. Check your email for confirmation.",
            Severity::Normal,
        );
        let submitted = std::mem::take(self);
        info!(interests = submitted.interests.len(), "subscription accepted");
        Ok(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DigestError;
    use crate::forms::testing::RecordingNotifier;

    fn filled() -> SubscribeForm {
        SubscribeForm::default()
            .apply(SubscribeEvent::Email("alex@company.com".into()))
            .apply(SubscribeEvent::FirstName("Alex".into()))
            .apply(SubscribeEvent::Interest {
                name: INTERESTS[1].into(),
                checked: true,
            })
    }

    #[test]
    fn defaults_allow_marketing_without_terms() {
        let form = SubscribeForm::default();
        assert!(form.allow_marketing);
        assert!(!form.terms_agreed);
        assert!(form.email.is_empty());
    }

    #[test]
    fn field_events_leave_siblings_untouched() {
        let form = filled().apply(SubscribeEvent::AllowMarketing(false));
        assert_eq!(form.email, "alex@company.com");
        assert_eq!(form.first_name, "Alex");
        assert_eq!(form.interests, vec![INTERESTS[1].to_string()]);
        assert!(!form.allow_marketing);
    }

    #[test]
    fn interests_toggle_without_duplicates() {
        let name = INTERESTS[0].to_string();
        let form = SubscribeForm::default()
            .apply(SubscribeEvent::Interest {
                name: name.clone(),
                checked: true,
            })
            .apply(SubscribeEvent::Interest {
                name: name.clone(),
                checked: true,
            });
        assert_eq!(form.interests, vec![name.clone()]);

        let form = form.apply(SubscribeEvent::Interest {
            name,
            checked: false,
        });
        assert!(form.interests.is_empty());
    }

    #[test]
    fn submit_without_terms_is_rejected_and_keeps_fields() {
        let notifier = RecordingNotifier::default();
        let mut form = filled();
        let before = form.clone();

        let err = form.submit(&notifier).unwrap_err();

        assert!(matches!(
            err,
            DigestError::Validation(ValidationError::TermsNotAccepted)
        ));
        assert_eq!(form, before);
        assert_eq!(notifier.titles(), vec!["Please agree to terms"]);
        assert_eq!(notifier.severities(), vec![Severity::Destructive]);
    }

    #[test]
    fn submit_with_terms_notifies_and_resets() {
        let notifier = RecordingNotifier::default();
        let mut form = filled().apply(SubscribeEvent::TermsAgreed(true));

        let submitted = form.submit(&notifier).unwrap();

        assert_eq!(submitted.email, "alex@company.com");
        assert!(submitted.terms_agreed);
        assert_eq!(form, SubscribeForm::default());
        assert_eq!(notifier.titles(), vec!["Welcome to The Digest!"]);
        assert_eq!(notifier.severities(), vec![Severity::Normal]);
    }
}
