//! Async client for the search service
//!
//! Uses reqwest for HTTP. Requests are issued from the API worker thread, so
//! every method is async and cheap to race against a cancellation token.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::page::SectionPage;
use super::types::{SearchHit, SearchRequest, Suggestion};
use crate::error::AppError;

/// Errors that can occur while talking to the search service
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("HTTP client error: {message}")]
    Client { message: String },

    /// Connection, timeout or transport failure
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status
    #[error("Server returned HTTP {code}")]
    Status { code: u16 },

    /// The body did not have the expected shape
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    /// An endpoint URL could not be built from the base URL
    #[error("Invalid endpoint URL: {message}")]
    InvalidUrl { message: String },

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,

    /// The background worker is gone, so the request was never sent
    #[error("API worker is not running")]
    WorkerUnavailable,
}

/// Validates a user supplied base URL (`--server` or `[server] base_url`).
pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim()).map_err(|e| AppError::InvalidServerUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::UnsupportedScheme(other.to_string())),
    }
}

/// Client bound to one search service
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: Url,
}

impl SearchClient {
    /// Create a client; `timeout` bounds every request end to end.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// `GET /autocomplete?q=<query>`
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let mut url = self.endpoint(&["autocomplete"])?;
        url.query_pairs_mut().append_pair("q", query);

        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(network)?;
        decode_json(response).await
    }

    /// `POST /search` with `{"query": ..., "top_k": ...}`
    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchHit>, ApiError> {
        let url = self.endpoint(&["search"])?;
        let body = SearchRequest { query, top_k };

        log::debug!("POST {} query={:?} top_k={}", url, query, top_k);
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(network)?;
        decode_json(response).await
    }

    /// `GET /section/{id}`, returning `None` when the section does not exist
    pub async fn section(&self, id: &str) -> Result<Option<SectionPage>, ApiError> {
        let url = self.endpoint(&["section", id])?;

        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(network)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status {
                code: response.status().as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })?;
        Ok(SectionPage::from_html(&html))
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                message: format!("{} cannot be a base URL", self.base_url),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}

fn network(e: reqwest::Error) -> ApiError {
    ApiError::Network {
        message: e.to_string(),
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            code: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|e| ApiError::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
