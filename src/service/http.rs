//! HTTP backend speaking the JSON envelope protocol.
//!
//! Requests are JSON POSTs. Every response body is expected to be
//! `{"status": "success", "data": ...}`; a non-success status becomes
//! [`Error::Backend`] carrying the payload, and anything else — connection
//! errors, non-JSON bodies, a missing or misshapen `data` field — is
//! [`Error::Transport`].

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;

use super::{MusicBackend, Track};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct ResolveData {
    url: String,
}

pub struct HttpBackend {
    http_client: HttpClient,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    fn resolve_url(&self) -> String {
        format!("{}/resolve", self.base_url)
    }

    async fn post_envelope(&self, url: &str, body: &Value) -> Result<Value> {
        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if envelope.status != "success" {
            return Err(Error::Backend {
                payload: envelope.data,
            });
        }

        Ok(envelope.data)
    }
}

#[async_trait]
impl MusicBackend for HttpBackend {
    async fn search(&self, query: &str) -> Result<Vec<Track>> {
        let data = self
            .post_envelope(&self.search_url(), &serde_json::json!({ "query": query }))
            .await?;

        serde_json::from_value(data).map_err(|e| Error::Transport(e.to_string()))
    }

    async fn resolve(&self, id: &str) -> Result<String> {
        let data = self
            .post_envelope(&self.resolve_url(), &serde_json::json!({ "id": id }))
            .await?;

        let resolved: ResolveData =
            serde_json::from_value(data).map_err(|e| Error::Transport(e.to_string()))?;
        Ok(resolved.url)
    }
}
