use catalog_api::endpoints::Category;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    /// Category shown on startup, case-insensitive
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: Category,
    /// Used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_catalog_url() -> String {
    catalog_api::DEFAULT_BASE_URL.to_string()
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("TOURFILTER_CONFIG").unwrap_or_else(|_| "tourfilter.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("TOURFILTER").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.catalog_url.is_empty() {
            return Err("catalog_url is required".to_string());
        }
        if !self.catalog_url.starts_with("http") {
            return Err("catalog_url must be a valid HTTP(S) URL".to_string());
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            category: Category::default(),
            log_filter: default_log_filter(),
        }
    }
}
