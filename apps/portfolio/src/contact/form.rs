use tracing::{info, warn};

use crate::contact::sender::ContactSender;
use crate::contact::validation::{validate, ContactField, ContactFields, FieldErrors};
use crate::errors::ContactError;
use crate::view::toast::Toast;

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";
pub const SENT_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon!";
pub const SEND_FAILED_MESSAGE: &str =
    "Sorry, your message could not be sent. Please try again in a moment.";

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Validation failed; the errors are also stored on the form.
    Invalid(FieldErrors),
    /// A submission is already pending.
    AlreadySubmitting,
}

impl SubmitRejection {
    /// Notification for the rejection, if any. A duplicate click is silent.
    pub fn toast(&self) -> Option<Toast> {
        match self {
            SubmitRejection::Invalid(_) => Some(Toast::error(INVALID_FORM_MESSAGE)),
            SubmitRejection::AlreadySubmitting => None,
        }
    }
}

/// Contact form state: field values, per-field errors and the busy flag.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Updates a field and clears its error; the user is correcting it.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.remove(&field);
    }

    /// Validates and, if valid, marks the form busy and returns the snapshot
    /// to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactFields, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::AlreadySubmitting);
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            info!(
                "Contact submission blocked: {} invalid field(s)",
                self.errors.len()
            );
            return Err(SubmitRejection::Invalid(self.errors.clone()));
        }

        self.submitting = true;
        Ok(self.fields.clone())
    }

    /// Applies the delivery result and returns the notification to show.
    /// Success clears every field and error; failure keeps the input for a retry.
    pub fn finish_submit(&mut self, result: Result<(), ContactError>) -> Toast {
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Contact submission accepted");
                self.fields = ContactFields::default();
                self.errors.clear();
                Toast::success(SENT_MESSAGE)
            }
            Err(e) => {
                warn!("Contact submission failed: {e}");
                Toast::error(SEND_FAILED_MESSAGE)
            }
        }
    }

    /// Full submission: validate, deliver, map the outcome to a notification.
    /// Returns `None` only for a duplicate submit while one is pending.
    pub async fn submit(&mut self, sender: &dyn ContactSender) -> Option<Toast> {
        let fields = match self.begin_submit() {
            Ok(fields) => fields,
            Err(rejection) => return rejection.toast(),
        };

        let result = sender.submit(&fields).await;
        Some(self.finish_submit(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::sender::SimulatedContactSender;
    use crate::view::toast::ToastKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FailingSender {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ContactSender for FailingSender {
        async fn submit(&self, _fields: &ContactFields) -> Result<(), ContactError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ContactError::Rejected {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jo");
        form.set_field(ContactField::Email, "jo@example.com");
        form.set_field(ContactField::Message, "Would love to chat about a role.");
        form
    }

    #[test]
    fn test_invalid_form_reports_every_error() {
        let mut form = ContactForm::new();
        let rejection = form.begin_submit().unwrap_err();

        match &rejection {
            SubmitRejection::Invalid(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected rejection: {other:?}"),
        }
        assert_eq!(form.errors().len(), 3);
        assert!(!form.is_submitting());
        assert_eq!(
            rejection.toast().map(|t| t.message),
            Some(INVALID_FORM_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_typing_clears_only_that_error() {
        let mut form = ContactForm::new();
        let _ = form.begin_submit();

        form.set_field(ContactField::Name, "J");
        assert!(form.error_for(ContactField::Name).is_none());
        assert_eq!(form.error_for(ContactField::Email), Some("Email is required"));
    }

    #[test]
    fn test_duplicate_submit_rejected_while_pending() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());

        let rejection = form.begin_submit().unwrap_err();
        assert_eq!(rejection, SubmitRejection::AlreadySubmitting);
        assert!(rejection.toast().is_none());
    }

    #[test]
    fn test_success_clears_fields_and_errors() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let toast = form.finish_submit(Ok(()));
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, SENT_MESSAGE);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_with_simulated_sender() {
        let mut form = filled_form();
        let sender = SimulatedContactSender::new(Duration::from_millis(1500));

        let toast = form.submit(&sender).await.unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(form.fields().name.is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_fields_and_does_not_retry() {
        let mut form = filled_form();
        let sender = FailingSender {
            calls: AtomicUsize::new(0),
        };

        let toast = form.submit(&sender).await.unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(sender.calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.fields().name, "Jo");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_submit_never_calls_sender() {
        let mut form = ContactForm::new();
        let sender = FailingSender {
            calls: AtomicUsize::new(0),
        };

        let toast = form.submit(&sender).await.unwrap();
        assert_eq!(toast.message, INVALID_FORM_MESSAGE);
        assert_eq!(sender.calls.load(Ordering::SeqCst), 0);
    }
}
