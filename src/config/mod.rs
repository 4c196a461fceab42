/// Application configuration module
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.nasa.gov/mars-photos/api/v1";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub mars_api_url: String,
    pub nasa_api_key: String,
    pub http_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mars_api_url: DEFAULT_API_URL.to_string(),
            nasa_api_key: DEFAULT_API_KEY.to_string(),
            http_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mars_api_url =
            env::var("MARS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let nasa_api_key =
            env::var("NASA_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());

        if mars_api_url.trim().is_empty() {
            anyhow::bail!("MARS_API_URL must not be empty");
        }

        Ok(Self {
            mars_api_url,
            nasa_api_key,
            http_timeout_seconds: env_u64("HTTP_TIMEOUT_SECONDS", 30),
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
