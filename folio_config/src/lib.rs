use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::portfolio::Portfolio;
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");
pub const DEFAULT_CONTENT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../portfolio.toml");

/// Environment variable holding a colon separated list of config files that
/// are layered on top of the default config.
pub const CONFIG_PATHS_ENV: &str = "FOLIO_CONFIG";

/// Loads the default config followed by the files listed in
/// [`CONFIG_PATHS_ENV`].
pub fn load() -> anyhow::Result<Config> {
    let extra = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = std::iter::once(DEFAULT_CONFIG_PATH)
        .chain(extra.split(':').filter(|path| !path.is_empty()))
        .collect::<Vec<_>>();
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_toml(paths).context("Failed to load config")
}

/// Loads the portfolio content file.
pub fn load_content(path: impl AsRef<Path>) -> anyhow::Result<Portfolio> {
    load_toml(&[path]).context("Failed to load portfolio content")
}

fn load_toml<T: DeserializeOwned>(paths: &[impl AsRef<Path>]) -> anyhow::Result<T> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .map_err(Into::into)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub deliver: DeliverBackend,
    pub simulated: SimulatedDeliverConfig,
    pub http: Option<HttpDeliverConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliverBackend {
    Simulated,
    Http,
}

#[derive(Debug, Deserialize)]
pub struct SimulatedDeliverConfig {
    pub delay: Duration,
}

#[derive(Debug, Deserialize)]
pub struct HttpDeliverConfig {
    pub endpoint: Url,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PortfolioConfig {
    pub content: Option<PathBuf>,
}

impl PortfolioConfig {
    pub fn content_path(&self) -> &Path {
        self.content
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CONTENT_PATH))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(config.contact.deliver, DeliverBackend::Simulated);
        assert_eq!(*config.contact.simulated.delay, std::time::Duration::from_secs(2));
        assert!(config.contact.http.is_some());
    }

    #[test]
    fn override_config() {
        let path = std::env::temp_dir().join(format!("folio-config-{}.toml", std::process::id()));
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"[contact]\ndeliver = \"http\"\n[contact.http]\nendpoint = \"http://localhost:9999/send\"\n")
            .unwrap();

        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH), path.as_path()]);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.contact.deliver, DeliverBackend::Http);
        assert_eq!(
            config.contact.http.unwrap().endpoint.as_str(),
            "http://localhost:9999/send"
        );
    }

    #[test]
    fn missing_config_file() {
        let err = load_paths(&[Path::new("/nonexistent/folio.toml")]).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/folio.toml"));
    }

    #[test]
    fn load_default_content() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        let content = load_content(config.portfolio.content_path()).unwrap();
        assert!(!content.skills.is_empty());
        assert!(!content.experiences.is_empty());
        assert!(!content.projects.is_empty());
    }
}
