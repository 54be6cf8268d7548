use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path, time::Duration};

const CONFIG_PATH_ENV: &str = "EMAIL_GENERATOR_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gemini_api_url: String,
    pub gemini_api_key: String,
    pub port: u16,
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    pub request_timeout: Duration,
    #[serde(default)]
    pub strict_extraction: bool, // fail the request instead of answering with the extraction sentinel
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn read_yaml(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let gemini_api_url = env::var("GEMINI_API_URL")
        .map_err(|_| "GEMINI_API_URL environment variable is required")?;
    let gemini_api_key = env::var("GEMINI_API_KEY")
        .map_err(|_| "GEMINI_API_KEY environment variable is required")?;
    let port = env::var("PORT")
        .map_err(|_| "PORT environment variable is required")?
        .parse::<u16>()
        .map_err(|e| format!("Failed to parse PORT: {e}"))?;

    Ok(Config {
        gemini_api_url,
        gemini_api_key,
        port,
        request_timeout: default_request_timeout(),
        strict_extraction: false,
    })
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.yaml".to_string());

    if Path::new(&config_path).exists() {
        return read_yaml(&config_path);
    }

    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return read_yaml("config.yaml");
    }

    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'. \
             Replace its placeholder values with real ones before deploying",
            config_path
        );
        return read_yaml("config.example.yaml");
    }

    tracing::info!("No config file found, reading configuration from environment variables");
    load_from_env().map_err(|e| {
        format!(
            "Config file not found and environment variables are incomplete. \
             Tried: '{config_path}', 'config.yaml', 'config.example.yaml', \
             and environment variables. Error: {e}"
        )
        .into()
    })
}
