use folio_extern_contracts::deliver::{DeliverError, DeliveryService};
use folio_models::contact::ContactFormData;

pub use self::{
    http::{HttpDeliveryConfig, HttpDeliveryServiceImpl},
    simulated::{SimulatedDeliveryConfig, SimulatedDeliveryServiceImpl},
};

mod http;
mod simulated;

#[derive(Debug, Clone)]
pub enum DeliveryServiceConfig {
    Simulated(SimulatedDeliveryConfig),
    Http(HttpDeliveryConfig),
}

/// The delivery backend selected by configuration.
#[derive(Debug, Clone)]
pub enum DeliveryServiceImpl {
    Simulated(SimulatedDeliveryServiceImpl),
    Http(HttpDeliveryServiceImpl),
}

impl DeliveryServiceImpl {
    pub fn new(config: DeliveryServiceConfig) -> anyhow::Result<Self> {
        Ok(match config {
            DeliveryServiceConfig::Simulated(config) => {
                Self::Simulated(SimulatedDeliveryServiceImpl::new(config))
            }
            DeliveryServiceConfig::Http(config) => Self::Http(HttpDeliveryServiceImpl::new(config)?),
        })
    }
}

impl DeliveryService for DeliveryServiceImpl {
    async fn deliver(&self, form: ContactFormData) -> Result<(), DeliverError> {
        match self {
            Self::Simulated(service) => service.deliver(form).await,
            Self::Http(service) => service.deliver(form).await,
        }
    }
}
