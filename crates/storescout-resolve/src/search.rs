//! HTTP client for the Google Custom Search JSON API.
//!
//! Wraps `reqwest` with typed response deserialization. The API is treated
//! as untrusted: every response field is `#[serde(default)]`, so a payload
//! without an `items` array parses as zero candidates rather than an error.

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ResolveError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Fixed qualifier appended to every query. The sheets this tool processes
/// are Spanish-market brand lists, and the qualifier steers results toward
/// the brand's own storefront instead of marketplaces and press coverage.
const SEARCH_QUALIFIER: &str = "tienda oficial";

/// Number of results requested per query.
const RESULT_COUNT: u32 = 5;

/// One search hit, as consumed by the AI disambiguator.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCandidate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchCandidate>,
}

/// Client for the Custom Search `customsearch/v1` endpoint.
///
/// Use [`SearchClient::new`] for production or
/// [`SearchClient::with_base_url`] to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    api_key: String,
    cx: String,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, cx: &str) -> Result<Self, ResolveError> {
        Self::with_base_url(api_key, cx, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ResolveError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(api_key: &str, cx: &str, base_url: &str) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .user_agent("storescout/0.1 (platform-detection)")
            .build()?;

        let raw = format!("{}/customsearch/v1", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&raw).map_err(|e| ResolveError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            cx: cx.to_owned(),
            endpoint,
        })
    }

    /// Runs a storefront search for `query` and returns up to
    /// [`RESULT_COUNT`] candidates.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnexpectedStatus`] on any non-2xx HTTP status.
    /// - [`ResolveError::Http`] on network failure.
    /// - [`ResolveError::Deserialize`] if the response body is not the
    ///   expected JSON shape.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>, ResolveError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &format!("{query} {SEARCH_QUALIFIER}"))
            .append_pair("key", &self.api_key)
            .append_pair("cx", &self.cx)
            .append_pair("num", &RESULT_COUNT.to_string());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: "customsearch/v1".to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ResolveError::Deserialize {
                context: format!("search results for \"{query}\""),
                source: e,
            })?;

        Ok(parsed.items)
    }
}
