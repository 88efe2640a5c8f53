use std::future::Future;

use folio_models::contact::ContactFormData;
use thiserror::Error;

/// Transmits a validated contact message to wherever messages end up.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DeliveryService: Send + Sync + 'static {
    fn deliver(
        &self,
        form: ContactFormData,
    ) -> impl Future<Output = Result<(), DeliverError>> + Send;
}

#[derive(Debug, Error)]
pub enum DeliverError {
    #[error("The message was rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockDeliveryService {
    pub fn with_deliver(mut self, form: ContactFormData, result: Result<(), DeliverError>) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    /// Expects a delivery that completes only once `outcome` resolves.
    pub fn with_deliver_when(
        mut self,
        form: ContactFormData,
        outcome: impl Future<Output = Result<(), DeliverError>> + Send + 'static,
    ) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| Box::pin(outcome));
        self
    }
}
