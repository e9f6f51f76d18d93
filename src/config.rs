use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub pricing: PricingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Catalog source settings
///
/// When `path` is unset the built-in dataset embedded in the binary is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

/// Consulting pricing tiers served by the pricing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    #[serde(default = "default_tiers")]
    pub tiers: Vec<PricingTier>,
    #[serde(default = "default_contact")]
    pub contact: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            contact: default_contact(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    #[serde(rename = "priceUsd")]
    pub price_usd: f64,
    pub billing: String,
    pub description: String,
}

fn default_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            name: "Basic Grant Search".to_string(),
            price_usd: 29.99,
            billing: "per search session".to_string(),
            description: "A single guided search session.".to_string(),
        },
        PricingTier {
            name: "Monthly Subscription".to_string(),
            price_usd: 99.99,
            billing: "per month".to_string(),
            description: "Unlimited searches and personalized consulting.".to_string(),
        },
        PricingTier {
            name: "Annual Package".to_string(),
            price_usd: 999.99,
            billing: "per year".to_string(),
            description: "Full-service grant consulting, including application support."
                .to_string(),
        },
    ]
}

fn default_contact() -> String {
    "Contact us for custom packages and enterprise solutions!".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GURU__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GURU__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("GURU")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("GURU")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
