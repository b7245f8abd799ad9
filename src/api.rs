// src/api.rs

use crate::config::Config;
use crate::error::{JournalError, Result};
use crate::models::{Entry, EntryId, NewEntry};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use tracing::{debug, warn};

const FETCH_ENTRIES_FAILED: &str = "Failed to fetch entries";
const FETCH_ENTRY_FAILED: &str = "Failed to fetch entry";
const CREATE_ENTRY_FAILED: &str = "Failed to create entry";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Thin client for the remote entries resource. Every call is a single round
/// trip: no retries, no timeout, no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    /// `{base}/entries/` or `{base}/entries/{id}`, with the id percent-encoded
    /// as a single path segment.
    fn entries_url(&self, id: Option<&EntryId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("entries")
                .push(id.map_or("", EntryId::as_str));
        }
        url
    }

    /// `GET /entries/`
    pub async fn list_entries(&self) -> Result<Vec<Entry>> {
        let url = self.entries_url(None);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("list entries: transport error: {}", e);
            JournalError::Fetch(FETCH_ENTRIES_FAILED.to_string())
        })?;
        read_json(response, FETCH_ENTRIES_FAILED).await
    }

    /// `GET /entries/{id}`
    pub async fn get_entry(&self, id: &EntryId) -> Result<Entry> {
        let url = self.entries_url(Some(id));
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("get entry {}: transport error: {}", id, e);
            JournalError::Fetch(FETCH_ENTRY_FAILED.to_string())
        })?;
        read_json(response, FETCH_ENTRY_FAILED).await
    }

    /// `POST /entries/`. A non-success response carries the server's `detail`
    /// message when it sends one.
    pub async fn create_entry(&self, entry: &NewEntry) -> Result<Entry> {
        let url = self.entries_url(None);
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(entry)
            .send()
            .await
            .map_err(|e| {
                warn!("create entry: transport error: {}", e);
                JournalError::Creation(CREATE_ENTRY_FAILED.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.detail)
                .and_then(|d| d.as_str().map(str::to_string))
                .filter(|d| !d.is_empty());
            warn!("create entry: server returned {}", status);
            return Err(JournalError::Creation(
                detail.unwrap_or_else(|| CREATE_ENTRY_FAILED.to_string()),
            ));
        }

        response.json::<Entry>().await.map_err(|e| {
            warn!("create entry: unreadable response: {}", e);
            JournalError::Creation(CREATE_ENTRY_FAILED.to_string())
        })
    }
}

/// 读取成功响应的 JSON；非 2xx 或解析失败都视为读取错误
async fn read_json<T: serde::de::DeserializeOwned>(response: Response, message: &str) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        warn!("{}: server returned {}", message, status);
        return Err(JournalError::Fetch(message.to_string()));
    }
    response.json::<T>().await.map_err(|e| {
        warn!("{}: unreadable response: {}", message, e);
        JournalError::Fetch(message.to_string())
    })
}
