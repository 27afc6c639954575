//! # Form Controllers
//!
//! Every interactive piece of the site owns its transient state here, independent of
//! any rendering layer.
//!
//! ## Reducer Transitions
//!
//! Field edits are events applied to the old state, producing the new state:
//!
//! ```text
//! state.apply(Event::Email("a@b.c"))  ->  state with only `email` changed
//! ```
//!
//! One event changes one field. Siblings are carried over untouched, so an edit can
//! never drop another field's value.
//!
//! ## Submission
//!
//! `submit` checks preconditions first. A rejection is reported through the
//! [`Notify`](crate::notify::Notify) collaborator as a destructive notification and
//! returned as [`ValidationError`]; the form is left exactly as it was. An accepted
//! submission notifies success, resets the form, and returns the submitted values.
//! Nothing is sent anywhere.

use crate::error::{DigestError, ValidationError};
use crate::model::Severity;
use crate::notify::Notify;
use tracing::info;

pub mod contact;
pub mod faq;
pub mod nav;
pub mod quick_subscribe;
pub mod signin;
pub mod subscribe;

/// Reports a rejected submission and hands back the error for the caller to return.
pub(crate) fn reject(
    notifier: &dyn Notify,
    error: ValidationError,
    title: &str,
    description: &str,
) -> DigestError {
    info!(%error, "form submission rejected");
    notifier.notify(title, description, Severity::Destructive);
    DigestError::Validation(error)
}
