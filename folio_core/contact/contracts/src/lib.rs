use std::future::Future;

use folio_extern_contracts::deliver::DeliverError;
use folio_models::contact::{ContactFormData, ErrorField, FormField, FormState, ValidationError};
use thiserror::Error;

/// A single contact form: its field values and its visible state.
///
/// All methods take `&self`, so the form can be shared between the code that
/// edits it and a task awaiting a submission.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Returns a snapshot of the current field values.
    fn data(&self) -> ContactFormData;

    /// Returns a snapshot of the current form state.
    fn state(&self) -> FormState;

    /// Returns the message of the error currently shown for `field`.
    fn field_error(&self, field: ErrorField) -> Option<String>;

    /// Sets the value of `field` and hides any error shown for it. A general
    /// error stays visible until the next submission.
    fn edit(&self, field: FormField, value: String);

    /// Validates the form and, if it is valid, delivers the message.
    ///
    /// On success the form is cleared. If delivery fails the values are kept
    /// and a general error is shown.
    fn submit(&self) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;

    /// Returns to an empty, editable form after a successful submission.
    /// Does nothing (and returns `false`) in any other state.
    fn start_new_message(&self) -> bool;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The form contains invalid values.")]
    Invalid(Vec<ValidationError>),
    #[error("A submission is already in progress.")]
    InFlight,
    #[error("The message has already been sent.")]
    AlreadySent,
    #[error("Failed to deliver the message.")]
    Deliver(#[source] DeliverError),
}

#[cfg(feature = "mock")]
impl MockContactFormService {
    pub fn with_edit(mut self, field: FormField, value: String) -> Self {
        self.expect_edit()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(value),
            )
            .return_const(());
        self
    }

    pub fn with_submit(mut self, result: Result<(), ContactSubmitError>) -> Self {
        self.expect_submit()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_state(mut self, state: FormState) -> Self {
        self.expect_state().once().return_const(state);
        self
    }
}
