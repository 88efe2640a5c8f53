use std::sync::Arc;

use anyhow::Context;
use folio_config::{Config, ContactConfig, DeliverBackend};
use folio_core_contact_impl::ContactFormServiceImpl;
use folio_core_portfolio_impl::{PortfolioFeatureConfig, PortfolioFeatureServiceImpl};
use folio_extern_impl::deliver::{
    DeliveryServiceConfig, DeliveryServiceImpl, HttpDeliveryConfig, SimulatedDeliveryConfig,
};
use folio_shared_impl::time::TimeServiceImpl;

pub type ContactForm = ContactFormServiceImpl<DeliveryServiceImpl>;
pub type Portfolio = PortfolioFeatureServiceImpl<TimeServiceImpl>;

pub fn delivery_service_config(config: &ContactConfig) -> anyhow::Result<DeliveryServiceConfig> {
    Ok(match config.deliver {
        DeliverBackend::Simulated => DeliveryServiceConfig::Simulated(SimulatedDeliveryConfig {
            delay: config.simulated.delay.into(),
        }),
        DeliverBackend::Http => {
            let http = config
                .http
                .as_ref()
                .context("contact.http must be configured when contact.deliver = \"http\"")?;
            DeliveryServiceConfig::Http(HttpDeliveryConfig {
                endpoint: Arc::new(http.endpoint.clone()),
                timeout: http.timeout.map(Into::into),
            })
        }
    })
}

/// Creates an empty contact form using the configured delivery backend.
pub fn contact_form(config: &Config) -> anyhow::Result<ContactForm> {
    let deliver = DeliveryServiceImpl::new(delivery_service_config(&config.contact)?)?;
    Ok(ContactFormServiceImpl::new(deliver))
}

pub fn portfolio(config: &Config) -> anyhow::Result<Portfolio> {
    let content = folio_config::load_content(config.portfolio.content_path())?;
    Ok(PortfolioFeatureServiceImpl::new(
        TimeServiceImpl,
        PortfolioFeatureConfig {
            content: content.into(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use std::{path::Path, time::Duration};

    use folio_config::DEFAULT_CONFIG_PATH;
    use folio_core_portfolio_contracts::PortfolioFeatureService;

    use super::*;

    fn load_default_config() -> Config {
        folio_config::load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap()
    }

    #[test]
    fn simulated_delivery() {
        let config = load_default_config();

        let deliver = delivery_service_config(&config.contact).unwrap();

        match deliver {
            DeliveryServiceConfig::Simulated(simulated) => {
                assert_eq!(simulated.delay, Duration::from_secs(2))
            }
            other => panic!("unexpected delivery config {other:?}"),
        }
    }

    #[test]
    fn http_delivery() {
        let mut config = load_default_config();
        config.contact.deliver = DeliverBackend::Http;

        let deliver = delivery_service_config(&config.contact).unwrap();

        match deliver {
            DeliveryServiceConfig::Http(http) => {
                assert_eq!(http.endpoint.as_str(), "http://127.0.0.1:8003/contact");
                assert_eq!(http.timeout, Some(Duration::from_secs(10)));
            }
            other => panic!("unexpected delivery config {other:?}"),
        }
    }

    #[test]
    fn http_delivery_not_configured() {
        let mut config = load_default_config();
        config.contact.deliver = DeliverBackend::Http;
        config.contact.http = None;

        assert!(delivery_service_config(&config.contact).is_err());
    }

    #[test]
    fn provide_services() {
        let config = load_default_config();

        contact_form(&config).unwrap();
        let portfolio = portfolio(&config).unwrap();
        assert!(!portfolio.content().projects.is_empty());
    }
}
