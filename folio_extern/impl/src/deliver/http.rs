use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Context};
use folio_extern_contracts::deliver::{DeliverError, DeliveryService};
use folio_models::contact::ContactFormData;
use folio_utils::trace_instrument;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct HttpDeliveryConfig {
    pub endpoint: Arc<Url>,
    pub timeout: Option<Duration>,
}

/// Posts the contact form as JSON to a backend endpoint.
///
/// A `4xx` answer means the backend refused the message and is reported as
/// [`DeliverError::Rejected`]; transport errors and every other non-`2xx`
/// answer are [`DeliverError::Other`].
#[derive(Debug, Clone)]
pub struct HttpDeliveryServiceImpl {
    config: HttpDeliveryConfig,
    client: HttpClient,
}

impl HttpDeliveryServiceImpl {
    pub fn new(config: HttpDeliveryConfig) -> anyhow::Result<Self> {
        let client = HttpClient::new(config.timeout)?;
        Ok(Self { config, client })
    }
}

impl DeliveryService for HttpDeliveryServiceImpl {
    #[trace_instrument(skip(self))]
    async fn deliver(&self, form: ContactFormData) -> Result<(), DeliverError> {
        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(&form)
            .send()
            .await
            .context("Failed to send contact message")?;

        let status = response.status();
        debug!(%status, "contact endpoint responded");

        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliverError::Rejected(
                format!("{status} {}", body.trim()).trim_end().into(),
            ));
        }

        if !status.is_success() {
            return Err(anyhow!("Contact endpoint responded with {status}").into());
        }

        Ok(())
    }
}
