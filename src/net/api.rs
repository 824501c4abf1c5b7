//! HTTP access to the remote catalog listing.
//!
//! The page talks to a [`CatalogSource`] rather than to `reqwest` directly so
//! the fetch lifecycle can be exercised with scripted sources in tests.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and body failures are mapped onto [`CatalogError`].
//! Callers decide what to do with them; the listing page only reports them
//! to its diagnostic sink.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::CatalogItem;

/// Default listing endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products/";

/// Errors produced while fetching the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request could not be sent or the body could not be read.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("catalog response error: status {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of catalog items.
    #[error("catalog response parse failed: {0}")]
    Parse(String),
}

/// Anything that can produce the full catalog list.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Fetch every catalog item.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request, status, or body is unusable.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, CatalogError>;
}

/// Catalog source backed by a single `GET` to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpCatalogSource {
    http: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), url: url.into() }
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        parse_catalog(&text)
    }
}

/// Parse a listing body into catalog items.
///
/// Records are read one at a time so a single unusable entry is skipped
/// (with a warning) instead of failing the whole listing.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the body is not a JSON array.
pub fn parse_catalog(body: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let mut items = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if !record.is_object() {
            log::warn!("catalog: skipping non-object record at index {index}");
            continue;
        }
        match serde_json::from_value::<CatalogItem>(record) {
            Ok(item) => items.push(item),
            Err(e) => log::warn!("catalog: skipping record at index {index}: {e}"),
        }
    }
    Ok(items)
}
