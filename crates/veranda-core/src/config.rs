//! Configuration management for the Veranda lead toolkit

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration (lead-storage API)
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote API configuration (dashboard client side)
    #[serde(default)]
    pub remote: RemoteConfig,

    /// File storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Admin dashboard configuration
    #[serde(default)]
    pub admin: AdminConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins ("*" for any)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

/// Remote lead-storage API configuration, used by the dashboard client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the lead-storage API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory for data files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Lead collections file (relative to `data_dir`)
    #[serde(default = "default_leads_file")]
    pub leads_file: String,

    /// Lead metadata overlay file (relative to `data_dir`)
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
}

impl StorageConfig {
    /// Full path of the lead collections file
    #[must_use]
    pub fn leads_path(&self) -> PathBuf {
        self.data_dir.join(&self.leads_file)
    }

    /// Full path of the metadata overlay file
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.data_dir.join(&self.metadata_file)
    }
}

/// Admin dashboard configuration
///
/// The password is an internal-tool gate, compared in plaintext; there is
/// no session or lockout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Shared dashboard password
    #[serde(default = "default_password")]
    pub password: String,

    /// Site slug used in export filenames
    #[serde(default = "default_site_slug")]
    pub site_slug: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_leads_file() -> String {
    "leads.json".to_string()
}

fn default_metadata_file() -> String {
    "lead-metadata.json".to_string()
}

fn default_password() -> String {
    "veranda2024".to_string()
}

fn default_site_slug() -> String {
    "veranda".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            leads_file: default_leads_file(),
            metadata_file: default_metadata_file(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: default_password(),
            site_slug: default_site_slug(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            remote: RemoteConfig::default(),
            storage: StorageConfig::default(),
            admin: AdminConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// Layers an optional `config` file with `VERANDA_`-prefixed
    /// environment variables over the serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("VERANDA").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}
