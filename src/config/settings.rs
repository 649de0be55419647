use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the clusters-management API
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Bearer token attached to outbound requests
    pub token: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.openshift.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("api.url", default_api_url())?
            .set_default("api.timeout_secs", 30)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // API_URL, API_TOKEN, API_TIMEOUT_SECS
            .add_source(Environment::default().separator("_").try_parsing(true));

        builder.build()?.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
