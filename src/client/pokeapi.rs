//! PokeAPI client
//!
//! Fetches location-area pages, caching raw response bodies keyed by the
//! full request URL.

use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::error::ClientError;
use crate::models::LocationAreaPage;

/// Number of location areas requested per page
pub const PAGE_SIZE: u32 = 20;

/// Read-through client for the PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Arc<ExpiringCache>,
}

impl PokeApiClient {
    /// Create a client with a default HTTP client.
    pub fn new(base_url: impl Into<String>, cache: Arc<ExpiringCache>) -> Self {
        Self::with_client(Client::new(), base_url, cache)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(http: Client, base_url: impl Into<String>, cache: Arc<ExpiringCache>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
        }
    }

    /// URL of the first location-area page.
    pub fn first_location_area_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, PAGE_SIZE
        )
    }

    pub fn cache(&self) -> &Arc<ExpiringCache> {
        &self.cache
    }

    /// Fetch and decode the location-area page at `url`.
    ///
    /// # Returns
    /// * `Ok(LocationAreaPage)` - From the cache when present, else from the network
    /// * `Err(ClientError)` - If the request fails, the status is not 2xx, or the
    ///   body is not a location-area page
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage, ClientError> {
        let body = self.fetch_cached(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_cached(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, bytes = body.len(), "Cache hit");
            return Ok(body);
        }
        debug!(url, "Cache miss, fetching");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16(), url.to_string()));
        }

        let body = response.bytes().await?.to_vec();
        self.cache.put(url, body.clone());
        Ok(body)
    }
}
