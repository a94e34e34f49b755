use config::{ConfigError, Environment, File};
use serde::Deserialize;

fn default_site_url() -> String {
    "https://brawlhalla.com".into()
}

fn default_api_url() -> String {
    "https://api.brawlhalla.com".into()
}

fn default_output_dir() -> String {
    "legends".into()
}

fn default_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Brawlhalla API key. Required; there is no anonymous endpoint.
    pub api_key: String,

    #[serde(default = "default_site_url")]
    pub site_url: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_level")]
    pub level: String,
}

impl Config {
    /// Layer optional yaml files under the process environment, so
    /// `API_KEY=... brawlhalla-assets` works with no config file at all.
    pub fn load() -> Result<Self, ConfigError> {
        let s = config::Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::default())
            .build()?;

        s.try_deserialize()
    }
}
