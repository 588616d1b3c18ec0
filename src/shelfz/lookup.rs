//! Metadata enrichment boundary: one best-effort lookup per add/edit
//! session against the Google Books volumes API. Anything the response does
//! not carry is simply absent from the hit; any unexpected response shape is
//! an empty result, never a hard failure of the save path.

use crate::error::{Result, ShelfzError};
use std::time::Duration;

const VOLUMES_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// A single best-effort candidate from the enrichment service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupHit {
    pub author: Option<String>,
    pub cover_url: Option<String>,
    pub total_pages: Option<u32>,
    pub series: Option<String>,
    pub series_order: Option<u32>,
}

/// Source of book metadata. The production implementation talks HTTP; tests
/// use a stub.
pub trait MetadataSource {
    /// Look up a single candidate for the given title (and author, when
    /// known). `Ok(None)` means the service had nothing usable.
    fn lookup(&self, title: &str, author: &str) -> Result<Option<LookupHit>>;
}

pub struct GoogleBooksClient {
    client: reqwest::blocking::Client,
    api_key: String,
    endpoint: String,
}

impl GoogleBooksClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, VOLUMES_ENDPOINT.to_string())
    }

    /// Endpoint override for tests against a local server.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key,
            endpoint,
        }
    }

    fn query(&self, title: &str, author: &str) -> String {
        if author.is_empty() {
            format!("intitle:{}", title)
        } else {
            format!("intitle:{} inauthor:{}", title, author)
        }
    }
}

impl MetadataSource for GoogleBooksClient {
    fn lookup(&self, title: &str, author: &str) -> Result<Option<LookupHit>> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("q", self.query(title, author))]);
        if !self.api_key.is_empty() {
            request = request.query(&[("key", self.api_key.as_str())]);
        }

        let response = request
            .send()
            .map_err(|e| ShelfzError::Lookup(format!("GET {}: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShelfzError::Lookup(format!(
                "metadata service returned {}",
                status
            )));
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| ShelfzError::Lookup(format!("parse response body: {}", e)))?;

        Ok(extract_hit(&body))
    }
}

/// Pull the first volume out of a volumes response. Navigation is loose on
/// purpose: any missing or oddly shaped piece is skipped, and a response
/// without items is no hit at all.
pub fn extract_hit(body: &serde_json::Value) -> Option<LookupHit> {
    let info = body.get("items")?.as_array()?.first()?.get("volumeInfo")?;

    let author = info
        .get("authors")
        .and_then(|v| v.as_array())
        .and_then(|a| a.first())
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let cover_url = info
        .get("imageLinks")
        .and_then(|links| {
            links
                .get("thumbnail")
                .or_else(|| links.get("smallThumbnail"))
        })
        .and_then(|v| v.as_str())
        // Thumbnails still come back over plain http.
        .map(|url| url.replacen("http://", "https://", 1));

    let total_pages = info
        .get("pageCount")
        .and_then(|v| v.as_u64())
        .map(|n| n.min(u64::from(u32::MAX)) as u32);

    let volume_series = info
        .get("seriesInfo")
        .and_then(|v| v.get("volumeSeries"))
        .and_then(|v| v.as_array())
        .and_then(|a| a.first());

    let series = volume_series
        .and_then(|v| v.get("seriesId"))
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let series_order = volume_series
        .and_then(|v| v.get("seriesBookIndex"))
        .and_then(|v| v.as_u64())
        .map(|n| n.min(u64::from(u32::MAX)) as u32);

    Some(LookupHit {
        author,
        cover_url,
        total_pages,
        series,
        series_order,
    })
}
