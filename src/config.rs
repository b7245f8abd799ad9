// src/config.rs

use crate::error::{JournalError, Result};
use reqwest::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const API_URL_VAR: &str = "DEVREPLAY_API_URL";

/// Client configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: Url,
    pub log_filter: String,
}

impl Config {
    /// Loads configuration from the command line override, then the
    /// environment (including a `.env` file), then built-in defaults.
    pub fn load(api_url_override: Option<String>) -> Result<Self> {
        dotenvy::dotenv().ok(); // .env 不存在时忽略

        let api_url = api_url_override
            .or_else(|| std::env::var(API_URL_VAR).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::with_api_url(&api_url)?;
        if let Ok(filter) = std::env::var("RUST_LOG") {
            config.log_filter = filter;
        }
        Ok(config)
    }

    pub fn with_api_url(api_url: &str) -> Result<Self> {
        Ok(Config {
            api_url: parse_api_url(api_url)?,
            log_filter: "warn".to_string(),
        })
    }
}

/// 解析并规范化 API 地址：仅限 http(s)，必须有主机名，去掉路径末尾的斜杠
fn parse_api_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(JournalError::InvalidInput("API URL is empty".to_string()));
    }
    let mut url = Url::parse(raw)
        .map_err(|e| JournalError::InvalidInput(format!("Invalid API URL {}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(JournalError::InvalidInput(format!(
            "API URL must start with http:// or https://: {}",
            raw
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(JournalError::InvalidInput(format!(
            "API URL has no host: {}",
            raw
        )));
    }

    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
