use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use folio_core_contact_contracts::{ContactFormService, ContactSubmitError};
use folio_extern_contracts::deliver::DeliveryService;
use folio_models::contact::{ContactFormData, ErrorField, FormField, FormPhase, FormState};
use folio_utils::trace_instrument;
use tracing::{debug, error, warn};

pub use validation::validate;

mod validation;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactFormServiceImpl<Deliver> {
    deliver: Deliver,
    form: Arc<Mutex<Form>>,
}

#[derive(Debug, Default)]
struct Form {
    data: ContactFormData,
    state: FormState,
}

impl<Deliver> ContactFormServiceImpl<Deliver> {
    pub fn new(deliver: Deliver) -> Self {
        Self::prefilled(deliver, ContactFormData::default())
    }

    pub fn prefilled(deliver: Deliver, data: ContactFormData) -> Self {
        Self {
            deliver,
            form: Arc::new(Mutex::new(Form {
                data,
                state: FormState::idle(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Form> {
        lock(&self.form)
    }
}

// Never held across an await point.
fn lock(form: &Mutex<Form>) -> MutexGuard<'_, Form> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Fails a submission whose future is dropped while the delivery is pending,
/// so the form does not stay in `Submitting` forever.
struct InFlightGuard<'a> {
    form: &'a Mutex<Form>,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(form: &'a Mutex<Form>) -> Self {
        Self { form, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut form = lock(self.form);
        if form.state.is_submitting() {
            warn!("contact submission was cancelled during delivery");
            form.state = FormState::failed();
        }
    }
}

impl<Deliver> ContactFormService for ContactFormServiceImpl<Deliver>
where
    Deliver: DeliveryService,
{
    fn data(&self) -> ContactFormData {
        self.lock().data.clone()
    }

    fn state(&self) -> FormState {
        self.lock().state.clone()
    }

    fn field_error(&self, field: ErrorField) -> Option<String> {
        self.lock().state.error_for(field)
    }

    #[trace_instrument(skip(self, value))]
    fn edit(&self, field: FormField, value: String) {
        let mut form = self.lock();
        form.data.set(field, value);

        if let Some(error_field) = field.error_field() {
            if form.state.clear_errors(error_field) {
                debug!(%field, "cleared field errors");
            }
        }
    }

    #[trace_instrument(skip(self))]
    async fn submit(&self) -> Result<(), ContactSubmitError> {
        let data = {
            let mut form = self.lock();

            match form.state.phase() {
                FormPhase::Submitting => return Err(ContactSubmitError::InFlight),
                FormPhase::Success => return Err(ContactSubmitError::AlreadySent),
                FormPhase::Idle => {}
            }

            let errors = validate(&form.data);
            if !errors.is_empty() {
                debug!(?errors, "contact form is invalid");
                form.state = FormState::invalid(errors.clone());
                return Err(ContactSubmitError::Invalid(errors));
            }

            form.state = FormState::submitting();
            form.data.clone()
        };

        debug!("delivering contact message");
        let guard = InFlightGuard::new(&self.form);
        let result = self.deliver.deliver(data).await;
        guard.disarm();

        let mut form = self.lock();
        match result {
            Ok(()) => {
                debug!("contact message delivered");
                form.state = FormState::success();
                form.data = ContactFormData::default();
                Ok(())
            }
            Err(err) => {
                error!("Failed to deliver contact message: {err}");
                form.state = FormState::failed();
                Err(ContactSubmitError::Deliver(err))
            }
        }
    }

    #[trace_instrument(skip(self))]
    fn start_new_message(&self) -> bool {
        let mut form = self.lock();
        if !form.state.is_success() {
            return false;
        }

        form.state = FormState::idle();
        true
    }
}
