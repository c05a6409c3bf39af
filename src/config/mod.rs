mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

// Credentials come from the environment when present. They are only
// validated on first use, never at startup.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        config.llm.api_key = key;
    }
    if let Ok(key) = env::var("NEWS_API_KEY") {
        config.news.api_key = key;
    }
    if let Ok(key) = env::var("ALPHA_VANTAGE_API_KEY") {
        config.market.api_key = key;
    }
}
