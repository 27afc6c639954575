//! Sign-in, with a passwordless magic-link alternative.
//!
//! A password sign-in is accepted immediately but completes later: the controller
//! spawns a task that waits out the configured delay, then announces success. The
//! caller gets a [`SignInHandle`] for that task. Magic-link requests complete at once
//! and hand back an already-finished handle, so both paths look the same to callers.

use crate::error::{DigestError, Result, ValidationError};
use crate::forms::reject;
use crate::model::Severity;
use crate::notify::Notify;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignInMode {
    #[default]
    Password,
    MagicLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInEvent {
    Email(String),
    Password(String),
    RememberMe(bool),
    ToggleMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    SignedIn { email: String, remember_me: bool },
    MagicLinkSent { email: String },
}

#[derive(Debug, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    mode: SignInMode,
    loading: Arc<AtomicBool>,
}

impl SignInForm {
    pub fn mode(&self) -> SignInMode {
        self.mode
    }

    /// True from an accepted password sign-in until its delay has elapsed.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn apply(self, event: SignInEvent) -> Self {
        match event {
            SignInEvent::Email(email) => Self { email, ..self },
            SignInEvent::Password(password) => Self { password, ..self },
            SignInEvent::RememberMe(remember_me) => Self {
                remember_me,
                ..self
            },
            SignInEvent::ToggleMode => {
                let mode = match self.mode {
                    SignInMode::Password => SignInMode::MagicLink,
                    SignInMode::MagicLink => SignInMode::Password,
                };
                Self { mode, ..self }
            }
        }
    }

    /// Password mode needs a running tokio runtime to schedule the delayed completion.
    pub fn submit(&mut self, notifier: Arc<dyn Notify>, delay: Duration) -> Result<SignInHandle> {
        match self.mode {
            SignInMode::Password => self.submit_password(notifier, delay),
            SignInMode::MagicLink => self.submit_magic_link(notifier.as_ref()),
        }
    }

    fn submit_password(
        &mut self,
        notifier: Arc<dyn Notify>,
        delay: Duration,
    ) -> Result<SignInHandle> {
        if self.email.is_empty() {
            return Err(reject(
                notifier.as_ref(),
                ValidationError::MissingRequiredField { field: "email" },
                "Email required",
                "Please enter your email address.",
            ));
        }
        if self.password.is_empty() {
            return Err(reject(
                notifier.as_ref(),
                ValidationError::MissingRequiredField { field: "password" },
                "Password required",
                "Please enter your password.",
            ));
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| DigestError::Api(format!("Cannot schedule sign-in: {}", e)))?;

        let outcome = SignInOutcome::SignedIn {
            email: std::mem::take(&mut self.email),
            remember_me: self.remember_me,
        };
        self.password.clear();
        self.remember_me = false;
        self.loading.store(true, Ordering::SeqCst);

        let loading = Arc::clone(&self.loading);
        debug!(delay_ms = delay.as_millis() as u64, "sign-in scheduled");
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            loading.store(false, Ordering::SeqCst);
            notifier.notify(
                "Sign in successful!",
                "Welcome back! Redirecting to your archive...",
                Severity::Normal,
            );
            info!("sign-in completed");
            outcome
        });

        Ok(SignInHandle {
            inner: HandleInner::Spawned(task),
        })
    }

    fn submit_magic_link(&mut self, notifier: &dyn Notify) -> Result<SignInHandle> {
        if self.email.is_empty() {
            return Err(reject(
                notifier,
                ValidationError::MissingRequiredField { field: "email" },
                "Email required",
                "Please enter your email address to receive a magic link.",
            ));
        }

        notifier.notify(
            "Magic link sent!",
            "Check your email for a secure sign-in link.",
            Severity::Normal,
        );
        let outcome = SignInOutcome::MagicLinkSent {
            email: std::mem::take(&mut self.email),
        };
        self.password.clear();
        self.remember_me = false;
        info!("magic link requested");

        Ok(SignInHandle {
            inner: HandleInner::Ready(outcome),
        })
    }

    /// Sends a reset link to the entered email. Leaves every field as it is.
    pub fn forgot_password(&self, notifier: &dyn Notify) -> Result<()> {
        if self.email.is_empty() {
            return Err(reject(
                notifier,
                ValidationError::MissingRequiredField { field: "email" },
                "Email required",
                "Please enter your email address first.",
            ));
        }

        notifier.notify(
            "Reset link sent!",
            "Check your email for password reset instructions.",
            Severity::Normal,
        );
        info!("password reset requested");
        Ok(())
    }
}

/// An accepted sign-in that may still be in flight.
///
/// Dropping the handle detaches the task; it still completes and notifies.
#[derive(Debug)]
pub struct SignInHandle {
    inner: HandleInner,
}

#[derive(Debug)]
enum HandleInner {
    Spawned(JoinHandle<SignInOutcome>),
    Ready(SignInOutcome),
}

impl SignInHandle {
    pub fn is_finished(&self) -> bool {
        match &self.inner {
            HandleInner::Spawned(task) => task.is_finished(),
            HandleInner::Ready(_) => true,
        }
    }

    pub async fn wait(self) -> Result<SignInOutcome> {
        match self.inner {
            HandleInner::Spawned(task) => task
                .await
                .map_err(|e| DigestError::Api(format!("Sign-in task failed: {}", e))),
            HandleInner::Ready(outcome) => Ok(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::testing::RecordingNotifier;

    const DELAY: Duration = Duration::from_millis(1000);

    fn filled() -> SignInForm {
        SignInForm::default()
            .apply(SignInEvent::Email("alex@company.com".into()))
            .apply(SignInEvent::Password("hunter2".into()))
            .apply(SignInEvent::RememberMe(true))
    }

    #[test]
    fn toggling_mode_keeps_fields() {
        let form = filled().apply(SignInEvent::ToggleMode);
        assert_eq!(form.mode(), SignInMode::MagicLink);
        assert_eq!(form.email, "alex@company.com");
        assert_eq!(form.password, "hunter2");
        assert!(form.remember_me);

        let form = form.apply(SignInEvent::ToggleMode);
        assert_eq!(form.mode(), SignInMode::Password);
    }

    #[test]
    fn missing_password_is_rejected_before_anything_changes() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut form = SignInForm::default().apply(SignInEvent::Email("alex@company.com".into()));

        let err = form.submit(notifier.clone(), DELAY).unwrap_err();

        assert!(matches!(
            err,
            DigestError::Validation(ValidationError::MissingRequiredField { field: "password" })
        ));
        assert_eq!(form.email, "alex@company.com");
        assert!(!form.is_loading());
        assert_eq!(notifier.titles(), vec!["Password required"]);
        assert_eq!(notifier.severities(), vec![Severity::Destructive]);
    }

    #[test]
    fn missing_email_wins_over_missing_password() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut form = SignInForm::default();

        let err = form.submit(notifier.clone(), DELAY).unwrap_err();

        assert!(matches!(
            err,
            DigestError::Validation(ValidationError::MissingRequiredField { field: "email" })
        ));
        assert_eq!(notifier.titles(), vec!["Email required"]);
    }

    #[tokio::test(start_paused = true)]
    async fn password_sign_in_completes_after_delay() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut form = filled();

        let handle = form.submit(notifier.clone(), DELAY).unwrap();

        assert!(form.is_loading());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(!form.remember_me);
        assert!(notifier.titles().is_empty());

        let outcome = handle.wait().await.unwrap();

        assert_eq!(
            outcome,
            SignInOutcome::SignedIn {
                email: "alex@company.com".into(),
                remember_me: true,
            }
        );
        assert!(!form.is_loading());
        assert_eq!(notifier.titles(), vec!["Sign in successful!"]);
        assert_eq!(notifier.severities(), vec![Severity::Normal]);
    }

    #[tokio::test(start_paused = true)]
    async fn success_is_not_announced_before_the_delay() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut form = filled();
        let handle = form.submit(notifier.clone(), DELAY).unwrap();

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(notifier.titles().is_empty());
        assert!(form.is_loading());

        tokio::time::sleep(Duration::from_millis(2)).await;
        handle.wait().await.unwrap();
        assert_eq!(notifier.titles().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_still_notifies() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut form = filled();
        drop(form.submit(notifier.clone(), DELAY).unwrap());

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(notifier.titles(), vec!["Sign in successful!"]);
        assert!(!form.is_loading());
    }

    #[test]
    fn password_sign_in_without_runtime_is_an_error() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut form = filled();

        assert!(matches!(
            form.submit(notifier.clone(), DELAY),
            Err(DigestError::Api(_))
        ));
        assert_eq!(form.email, "alex@company.com");
        assert!(notifier.titles().is_empty());
    }

    #[tokio::test]
    async fn magic_link_is_immediate() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut form = filled().apply(SignInEvent::ToggleMode);

        let handle = form.submit(notifier.clone(), DELAY).unwrap();

        assert!(handle.is_finished());
        assert_eq!(notifier.titles(), vec!["Magic link sent!"]);
        assert!(form.email.is_empty());
        assert_eq!(form.mode(), SignInMode::MagicLink);
        assert_eq!(
            handle.wait().await.unwrap(),
            SignInOutcome::MagicLinkSent {
                email: "alex@company.com".into()
            }
        );
    }

    #[test]
    fn magic_link_requires_only_email() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut form = SignInForm::default().apply(SignInEvent::ToggleMode);

        assert!(form.submit(notifier.clone(), DELAY).is_err());
        assert_eq!(notifier.titles(), vec!["Email required"]);

        let mut form = form.apply(SignInEvent::Email("a@b.co".into()));
        assert!(form.submit(notifier.clone(), DELAY).is_ok());
    }

    #[test]
    fn forgot_password_keeps_fields() {
        let notifier = RecordingNotifier::default();
        let form = filled();

        form.forgot_password(&notifier).unwrap();

        assert_eq!(form.email, "alex@company.com");
        assert_eq!(form.password, "hunter2");
        assert_eq!(notifier.titles(), vec!["Reset link sent!"]);

        let empty = SignInForm::default();
        assert!(empty.forgot_password(&notifier).is_err());
        assert_eq!(
            notifier.severities(),
            vec![Severity::Normal, Severity::Destructive]
        );
    }
}
