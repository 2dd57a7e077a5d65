// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the [`PlaceProvider`] port.

use super::dto::{parse_events, parse_place};
use crate::application::port::{FetchFuture, PlaceProvider};
use crate::config::MAX_PANORAMA_BYTES;
use crate::domain::{EquirectImage, Event, Place, PlaceId};
use crate::error::FetchError;
use crate::panorama::decode_panorama;
use futures_util::{FutureExt, StreamExt};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

/// Client for the tour backend.
///
/// Cloning is cheap: clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client sending `Accept: application/json` with the given
    /// per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("Panotour/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn place_url(&self, id: &PlaceId) -> String {
        format!("{}/lieus/{}", self.base_url, id)
    }

    #[must_use]
    pub fn events_url(&self) -> String {
        format!("{}/evenements", self.base_url)
    }

    /// `GET /lieus/{id}`.
    ///
    /// # Errors
    ///
    /// See [`PlaceProvider`] for the error mapping.
    pub async fn place(&self, id: &PlaceId) -> Result<Place, FetchError> {
        let body = self.get_bytes(&self.place_url(id), None).await?;
        parse_place(&body)
    }

    /// `GET /evenements`.
    ///
    /// # Errors
    ///
    /// See [`PlaceProvider`] for the error mapping.
    pub async fn events(&self) -> Result<Vec<Event>, FetchError> {
        let body = self.get_bytes(&self.events_url(), None).await?;
        parse_events(&body)
    }

    /// Downloads the image at `url` and decodes it on a blocking thread.
    ///
    /// # Errors
    ///
    /// Transport and status failures keep their own variants; oversized or
    /// undecodable bodies are [`FetchError::Image`].
    pub async fn panorama(&self, url: &str) -> Result<EquirectImage, FetchError> {
        let bytes = self.get_bytes(url, Some(MAX_PANORAMA_BYTES)).await?;
        tokio::task::spawn_blocking(move || decode_panorama(&bytes))
            .await
            .map_err(|e| FetchError::Image(e.to_string()))?
    }

    async fn get_bytes(&self, url: &str, limit: Option<u64>) -> Result<Vec<u8>, FetchError> {
        let mut request = self.http.get(url);
        if limit.is_some() {
            request = request.header(ACCEPT, "image/*");
        }
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let Some(limit) = limit else {
            return response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| FetchError::from_reqwest(&e));
        };

        if response.content_length().is_some_and(|len| len > limit) {
            return Err(FetchError::Image(format!("image larger than {limit} bytes")));
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::from_reqwest(&e))?;
            if body.len() as u64 + chunk.len() as u64 > limit {
                return Err(FetchError::Image(format!("image larger than {limit} bytes")));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

impl PlaceProvider for ApiClient {
    fn fetch_place(&self, id: &PlaceId) -> FetchFuture<Place> {
        let client = self.clone();
        let id = id.clone();
        async move { client.place(&id).await }.boxed()
    }

    fn fetch_events(&self) -> FetchFuture<Vec<Event>> {
        let client = self.clone();
        async move { client.events().await }.boxed()
    }

    fn fetch_image(&self, url: &str) -> FetchFuture<EquirectImage> {
        let client = self.clone();
        let url = url.to_string();
        async move { client.panorama(&url).await }.boxed()
    }

    fn api_base(&self) -> &str {
        &self.base_url
    }
}
