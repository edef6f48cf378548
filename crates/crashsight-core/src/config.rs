//! Configuration module
//!
//! Env-driven configuration constructed once at startup and passed
//! explicitly into the handlers through application state. Nothing here is
//! ambient global state.

use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const MAX_FILE_SIZE_MB: usize = 10;
const VISION_TIMEOUT_SECS: u64 = 120;

/// Gateway configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// OpenAI API key, the one required credential.
    pub openai_api_key: String,
    /// Chat-completions model name.
    pub openai_model: String,
    /// API base URL; overridable so tests can point at a stub server.
    pub openai_base_url: String,
    /// Transient-storage directory for spooled uploads.
    pub upload_dir: String,
    pub max_file_size_bytes: usize,
    pub allowed_content_types: Vec<String>,
    /// Bounded wait for the upstream model call.
    pub vision_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY must be set"))?;

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_FILE_SIZE_MB);

        Ok(Self {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            openai_api_key,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            allowed_content_types: default_allowed_content_types(),
            vision_timeout_secs: env::var("VISION_TIMEOUT_SECS")
                .unwrap_or_else(|_| VISION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(VISION_TIMEOUT_SECS),
        })
    }
}

fn default_allowed_content_types() -> Vec<String> {
    // The intake accepts photographs only: jpeg, jpg, png.
    vec![
        "image/jpeg".to_string(),
        "image/jpg".to_string(),
        "image/png".to_string(),
    ]
}
