// src/api/client.rs
//! Pure HTTP transport for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication and JSON
//! exchange, with no parsing or business logic. Everything above it goes
//! through the [`Transport`] trait.

use crate::constants::{API_BASE_URL, NOTION_VERSION};
use crate::error::Error;
use crate::types::{ApiKey, ValidationError};
use reqwest::{header, Client, Response};
use serde_json::Value;

use super::Transport;

/// A thin wrapper around a reqwest `Client` carrying Notion credentials.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, Error> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, Error> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                ValidationError::InvalidApiKey {
                    reason: format!("not a valid header value: {}", e),
                }
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Reads the body as text and decodes it as JSON. The service returns
    /// its error envelope with non-2xx statuses, so the status code is
    /// deliberately not checked here; envelope detection happens during
    /// normalization.
    async fn decode(response: Response) -> Result<Value, Error> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait::async_trait]
impl Transport for NotionHttpClient {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error> {
        let url = format!("{}/{}", API_BASE_URL, path);
        log::debug!("GET {}", url);
        let response = self.client.get(url).query(query).send().await?;
        Self::decode(response).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, Error> {
        let url = format!("{}/{}", API_BASE_URL, path);
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(&body).send().await?;
        Self::decode(response).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, Error> {
        let url = format!("{}/{}", API_BASE_URL, path);
        log::debug!("PATCH {}", url);
        let response = self.client.patch(url).json(&body).send().await?;
        Self::decode(response).await
    }
}
