use std::time::Duration;

use folio_extern_contracts::deliver::{DeliverError, DeliveryService};
use folio_models::contact::ContactFormData;
use folio_utils::trace_instrument;
use tracing::info;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy)]
pub struct SimulatedDeliveryConfig {
    pub delay: Duration,
}

impl Default for SimulatedDeliveryConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}

/// Pretends to send the message: waits for the configured delay, logs the
/// message and reports success.
#[derive(Debug, Clone)]
pub struct SimulatedDeliveryServiceImpl {
    config: SimulatedDeliveryConfig,
}

impl SimulatedDeliveryServiceImpl {
    pub fn new(config: SimulatedDeliveryConfig) -> Self {
        Self { config }
    }
}

impl DeliveryService for SimulatedDeliveryServiceImpl {
    #[trace_instrument(skip(self))]
    async fn deliver(&self, form: ContactFormData) -> Result<(), DeliverError> {
        tokio::time::sleep(self.config.delay).await;

        info!(
            name = %form.name,
            email = %form.email,
            subject = %form.subject,
            "contact message submitted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_demo::contact::ADA;
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_for_delay() {
        // Arrange
        let sut = SimulatedDeliveryServiceImpl::new(SimulatedDeliveryConfig {
            delay: Duration::from_millis(1500),
        });
        let start = Instant::now();

        // Act
        let result = sut.deliver(ADA.clone()).await;

        // Assert
        result.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn default_delay() {
        assert_eq!(SimulatedDeliveryConfig::default().delay, Duration::from_secs(2));
    }
}
